//! 卡片字段格式化
//!
//! NEC2 卡片的每个字段都以一个空格开头，后面跟最短的数值文本：
//! - 浮点字段（坐标、半径、角度）：保留 6 位有效数字
//! - 整数字段（标签、分段数、标志）：向零截断
//!
//! 浮点字段的文本与常见的 NEC2 卡片生成脚本保持一致：
//! 整数值保留 `.0` 后缀，指数在 `[-4, 16)` 之外时使用 `1e-05` 形式。

/// 有效数字位数
pub const SIGNIFICANT_DIGITS: usize = 6;

/// 格式化浮点字段
pub fn sci(value: f64) -> String {
    format!(" {}", general(round_significant(value)))
}

/// 格式化整数字段（向零截断）
pub fn dec(value: f64) -> String {
    format!(" {}", value.trunc() as i64)
}

/// 四舍五入到 6 位有效数字
fn round_significant(value: f64) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let text = format!("{:.prec$e}", value, prec = SIGNIFICANT_DIGITS - 1);
    text.parse().unwrap_or(value)
}

/// 通用格式：中等数量级用十进制，其他用科学计数法
fn general(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value).to_lowercase();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        // Rust 输出 "1e-5"，这里补成 "1e-05"
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => text,
        };
    }

    // Debug 格式在该区间内给出最短的往返表示，且保留 ".0"
    format!("{:?}", value)
}
