//! 几何图元定义
//!
//! - 点 (Point)：以米为单位的三维坐标
//! - 旋转 (Rotation)：绕 X/Y/Z 轴的角度，以度为单位

use crate::math::Point3;
use serde::{Deserialize, Serialize};

/// 点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub position: Point3,
}

impl Point {
    pub fn new(x: impl Into<f64>, y: impl Into<f64>, z: impl Into<f64>) -> Self {
        Self {
            position: Point3::new(x.into(), y.into(), z.into()),
        }
    }

    pub fn from_point3(position: Point3) -> Self {
        Self { position }
    }

    pub fn origin() -> Self {
        Self::from_point3(Point3::origin())
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// 到另一点的距离
    pub fn distance_to(&self, other: &Point) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }

    /// 关于原点的对称点（反向平移）
    pub fn negated(&self) -> Self {
        Self::from_point3(Point3::from(-self.position.coords))
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

/// 旋转（度）
///
/// NEC2 的 GM 卡片依次绕 X、Y、Z 轴旋转，之后再平移。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
}

impl Rotation {
    pub fn new(rx: impl Into<f64>, ry: impl Into<f64>, rz: impl Into<f64>) -> Self {
        Self {
            rx: rx.into(),
            ry: ry.into(),
            rz: rz.into(),
        }
    }

    /// 不旋转
    pub fn none() -> Self {
        Self::default()
    }

    /// 各轴取反
    ///
    /// 仅当按 Z、Y、X 的顺序逐轴应用时才是真正的逆旋转。
    pub fn inverse(&self) -> Self {
        Self::new(-self.rx, -self.ry, -self.rz)
    }
}
