//! 示例天线
//!
//! 每个构建函数返回模型和一行描述主要尺寸的注释。

use clap::ValueEnum;
use nec2_core::prelude::*;
use nec2_core::units::inches_comment;

/// 可生成的示例天线
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Antenna {
    /// 中心馈电半波偶极子
    Dipole,
    /// 水平圆环
    Loop,
    /// 三单元八木天线
    Yagi,
}

impl Antenna {
    pub fn build(&self, wire_radius: f64, ground: GroundPlane) -> (Model, String) {
        match self {
            Antenna::Dipole => dipole(wire_radius, ground),
            Antenna::Loop => circular_loop(wire_radius, ground),
            Antenna::Yagi => yagi(wire_radius, ground),
        }
    }
}

/// 2 米波段半波偶极子，垂直放置
fn dipole(wire_radius: f64, ground: GroundPlane) -> (Model, String) {
    let half = inch(19.25);
    let height = m(2.0);

    let mut model = Model::new(wire_radius, ground);
    model
        .add_wire(21, Point::new(0.0, 0.0, height - half), Point::new(0.0, 0.0, height + half))
        .feed_at_middle(deg(0));

    let comment = format!("CM half-wave dipole, total length {}", inches_comment(2.0 * half));
    (model, comment)
}

/// 水平圆环，由一整圈 GA 圆弧旋转到 X-Y 平面
fn circular_loop(wire_radius: f64, ground: GroundPlane) -> (Model, String) {
    let radius = inch(8.0);

    let mut model = Model::new(wire_radius, ground);
    model
        .add_arc(
            36,
            radius,
            deg(0),
            deg(360),
            Rotation::new(deg(90), deg(0), deg(0)),
            Point::new(0.0, 0.0, m(1.5)),
        )
        .feed_at_middle(deg(0));

    let comment = format!("CM horizontal loop, radius {}", inches_comment(radius));
    (model, comment)
}

/// 三单元八木：反射器、有源振子、引向器，沿 X 轴排列
fn yagi(wire_radius: f64, ground: GroundPlane) -> (Model, String) {
    let reflector = inch(40.5);
    let driven = inch(38.0);
    let director = inch(35.75);
    let spacing = inch(16.0);
    let segment = inch(1.5);

    let element = |x: f64, length: f64| {
        (
            Point::new(x, -length / 2.0, 0.0),
            Point::new(x, length / 2.0, 0.0),
        )
    };

    let mut model = Model::new(wire_radius, ground);

    let (a, b) = element(-spacing, reflector);
    model.add_wire_autoseg(segment, a, b);

    let (a, b) = element(0.0, driven);
    // 馈电点串联一个小电感做匹配
    model
        .add_wire_autoseg(segment, a, b)
        .feed_at_middle(deg(0))
        .load_at_middle(0.0, 2.5e-8);

    let (a, b) = element(spacing, director);
    model.add_wire_autoseg(segment, a, b);

    let comment = format!(
        "CM 3-element yagi, boom {}",
        inches_comment(2.0 * spacing)
    );
    (model, comment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dipole_is_fed_in_the_middle() {
        let (model, comment) = Antenna::Dipole.build(0.001, GroundPlane::Absent);
        assert_eq!(model.tag(), 1);
        assert_eq!(model.excitations()[0].segment, 11);
        assert!(comment.starts_with("CM half-wave dipole"));
    }

    #[test]
    fn test_loop_keeps_restore_cards_pending() {
        let (model, _) = Antenna::Loop.build(0.001, GroundPlane::Absent);
        assert_eq!(model.transforms().len(), 1);
        assert_eq!(model.pending_transforms().len(), 4);
    }

    #[test]
    fn test_yagi_elements() {
        let (model, _) = Antenna::Yagi.build(0.001, GroundPlane::WithCurrentExpansion);
        assert_eq!(model.tag(), 3);
        assert_eq!(model.excitations()[0].tag, 2);
        assert_eq!(model.loads()[0].tag, 2);

        let deck = model.get_text(144.0, 1.0, 5, true);
        assert_eq!(deck.matches("GW").count(), 3);
        assert!(deck.contains("GN 2"));
    }
}
