//! 数学基础类型
//!
//! 基于 nalgebra 提供的三维点类型的别名。

use nalgebra as na;

/// 3D点类型
pub type Point3 = na::Point3<f64>;

/// 数值容差，用于几何比较
pub const EPSILON: f64 = 1e-10;

/// 判断两个浮点数是否近似相等
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
