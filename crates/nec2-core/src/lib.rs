//! NEC2 卡片生成核心
//!
//! 以编程方式描述线天线的几何结构（直导线、圆弧、坐标变换、激励、负载），
//! 并序列化为 NEC2 仿真引擎读取的卡片格式。
//!
//! # 架构设计
//!
//! - `format`: 字段格式化（浮点字段、整数字段）
//! - `units`: 单位换算（英寸、米、度）
//! - `geometry`: 点和旋转
//! - `card`: 各类卡片记录
//! - `model`: 累积记录并渲染完整卡片序列
//!
//! # 示例
//!
//! ```rust
//! use nec2_core::prelude::*;
//!
//! // 半波偶极子，中心馈电
//! let mut model = Model::free_space(m(0.001));
//! model
//!     .add_wire(21, Point::new(0, 0, -0.5), Point::new(0, 0, 0.5))
//!     .feed_at_middle(deg(0));
//!
//! let deck = model.get_text(144.0, 1.0, 5, true);
//! assert!(deck.starts_with("GW 1 21"));
//! assert!(deck.ends_with("EN\n"));
//! ```

pub mod card;
pub mod format;
pub mod geometry;
pub mod math;
pub mod model;
pub mod units;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::card::{Card, FrequencySweep, GroundPlane};
    pub use crate::geometry::{Point, Rotation};
    pub use crate::model::{Excitation, Load, Model};
    pub use crate::units::{deg, inch, m, m_to_in};
}
