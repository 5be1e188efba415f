//! 单位换算
//!
//! NEC2 引擎要求长度以米、角度以度为单位。函数以换算前的单位命名，
//! 在建模代码中显式写出每个数值的单位，例如 `inch(9.5)`、`m(1.2)`、`deg(45)`。

/// 英寸到米的换算因子
pub const METERS_PER_INCH: f64 = 2.54 / 100.0;

/// 米到米（仅用于标明单位）
#[inline]
pub fn m(meters: impl Into<f64>) -> f64 {
    meters.into()
}

/// 英寸到米
#[inline]
pub fn inch(inches: impl Into<f64>) -> f64 {
    inches.into() * METERS_PER_INCH
}

/// 度到度（仅用于标明单位）
#[inline]
pub fn deg(degrees: impl Into<f64>) -> f64 {
    degrees.into()
}

/// 米到英寸，用于注释行中的可读输出
#[inline]
pub fn m_to_in(meters: f64) -> f64 {
    meters / METERS_PER_INCH
}

/// 格式化为注释用的英寸文本，例如 `"(9.500 in)"`
pub fn inches_comment(meters: f64) -> String {
    format!("({:.3} in)", m_to_in(meters))
}
