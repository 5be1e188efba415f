//! 天线模型构建器
//!
//! `Model` 按添加顺序累积导线、圆弧、坐标变换、激励和负载记录，
//! 最后由 [`Model::render`] 一次性生成完整的卡片序列。渲染不修改模型，
//! 可以重复调用，也可以在渲染后继续添加元件。
//!
//! # 圆弧与 GM 卡片
//!
//! GA 卡片只能在 X-Z 平面、以原点为圆心生成圆弧。要把圆弧放到任意位置，
//! 需要一张 GM 卡片对该圆弧的标签做旋转和平移。GM 会作用于标签不小于
//! `first_tag` 的所有元件，所以之后的元件还需要四张 GM 卡片把坐标系恢复：
//! 先撤销平移，再依次撤销 Z、Y、X 轴旋转。
//!
//! 恢复卡片引用的是下一个元件的标签 `tag + 1`。如果圆弧是最后一个元件，
//! 这个标签不存在，NEC2 会解析失败。因此恢复卡片先放入待提交队列，
//! 只有在下一个元件真正加入时才提交。

use crate::card::{
    Card, FrequencySweep, GroundPlane, DEFAULT_GROUND_TYPE, FULL_PATTERN, MINIMAL_PATTERN,
};
use crate::geometry::{Point, Rotation};
use tracing::debug;

/// 激励记录
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Excitation {
    pub tag: u32,
    pub segment: u32,
    /// 相位（度）
    pub phase: f64,
}

impl Excitation {
    pub fn to_card(&self) -> Card {
        Card::Excitation {
            tag: self.tag,
            segment: self.segment,
            phase: self.phase,
        }
    }
}

/// 负载记录
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Load {
    pub tag: u32,
    pub segment: u32,
    /// 电阻（欧姆）
    pub resistance: f64,
    /// 电感（亨利）
    pub inductance: f64,
}

impl Load {
    pub fn to_card(&self) -> Card {
        Card::Load {
            tag: self.tag,
            segment: self.segment,
            resistance: self.resistance,
            inductance: self.inductance,
        }
    }
}

/// 天线模型
#[derive(Debug, Clone)]
pub struct Model {
    /// 导线半径（米），用于之后添加的导线和圆弧
    wire_radius: f64,

    /// 地平面
    ground: GroundPlane,

    /// 最近分配的标签，0 表示尚无元件
    tag: u32,

    /// 最近添加元件的中间分段
    middle: u32,

    /// GW/GA 卡片
    geometry: Vec<Card>,

    /// 已提交的 GM 卡片
    transforms: Vec<Card>,

    /// 待提交的 GM 卡片（恢复坐标系）
    pending_transforms: Vec<Card>,

    /// 激励
    excitations: Vec<Excitation>,

    /// 负载
    loads: Vec<Load>,
}

impl Model {
    /// 创建新模型
    pub fn new(wire_radius: f64, ground: GroundPlane) -> Self {
        Self {
            wire_radius,
            ground,
            tag: 0,
            middle: 0,
            geometry: Vec::new(),
            transforms: Vec::new(),
            pending_transforms: Vec::new(),
            excitations: Vec::new(),
            loads: Vec::new(),
        }
    }

    /// 创建自由空间中的模型
    pub fn free_space(wire_radius: f64) -> Self {
        Self::new(wire_radius, GroundPlane::Absent)
    }

    // -----------------------------------------------------------------------
    // 几何
    // -----------------------------------------------------------------------

    /// 添加一段直导线
    pub fn add_wire(&mut self, segments: u32, start: Point, end: Point) -> &mut Self {
        self.flush_transforms();
        let tag = self.next_tag();
        self.geometry.push(Card::Wire {
            tag,
            segments,
            start,
            end,
            radius: self.wire_radius,
        });
        self.middle = middle_segment(segments);
        debug!(tag, segments, "added GW wire");
        self
    }

    /// 添加直导线，分段数按分段长度计算（向上取整）
    pub fn add_wire_autoseg(&mut self, segment_length: f64, start: Point, end: Point) -> &mut Self {
        let segments = (start.distance_to(&end) / segment_length).ceil() as u32;
        self.add_wire(segments, start, end)
    }

    /// 添加圆弧
    ///
    /// 圆弧先在 X-Z 平面原点处生成，然后按 `rotate`、`translate` 移动到位。
    pub fn add_arc(
        &mut self,
        segments: u32,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        rotate: Rotation,
        translate: Point,
    ) -> &mut Self {
        self.flush_transforms();
        let tag = self.next_tag();
        self.geometry.push(Card::Arc {
            tag,
            segments,
            arc_radius: radius,
            start_angle,
            end_angle,
            wire_radius: self.wire_radius,
        });
        self.middle = middle_segment(segments);

        self.transforms.push(Card::Move {
            rotation: rotate,
            translation: translate,
            first_tag: tag,
        });

        // 逐轴撤销，顺序与 GM 的应用顺序相反
        let undo = rotate.inverse();
        let next = tag + 1;
        self.pending_transforms.extend([
            Card::Move {
                rotation: Rotation::none(),
                translation: translate.negated(),
                first_tag: next,
            },
            Card::Move {
                rotation: Rotation::new(0.0, 0.0, undo.rz),
                translation: Point::origin(),
                first_tag: next,
            },
            Card::Move {
                rotation: Rotation::new(0.0, undo.ry, 0.0),
                translation: Point::origin(),
                first_tag: next,
            },
            Card::Move {
                rotation: Rotation::new(undo.rx, 0.0, 0.0),
                translation: Point::origin(),
                first_tag: next,
            },
        ]);
        debug!(tag, segments, "added GA arc, staged restore transforms");
        self
    }

    /// 提交待提交的 GM 卡片
    pub fn flush_transforms(&mut self) {
        if self.pending_transforms.is_empty() {
            return;
        }
        debug!(count = self.pending_transforms.len(), "flushing staged GM cards");
        self.transforms.append(&mut self.pending_transforms);
    }

    fn next_tag(&mut self) -> u32 {
        self.tag += 1;
        self.tag
    }

    // -----------------------------------------------------------------------
    // 激励与负载（作用于最近添加的元件）
    // -----------------------------------------------------------------------

    /// 在最近添加元件的中间分段加电压源
    pub fn feed_at_middle(&mut self, phase: f64) -> &mut Self {
        self.excitations.push(Excitation {
            tag: self.tag,
            segment: self.middle,
            phase,
        });
        self
    }

    /// 在最近添加元件的中间分段加串联 RL 负载
    pub fn load_at_middle(&mut self, resistance: f64, inductance: f64) -> &mut Self {
        self.loads.push(Load {
            tag: self.tag,
            segment: self.middle,
            resistance,
            inductance,
        });
        self
    }

    /// 设置之后添加元件的导线半径
    pub fn set_radius(&mut self, radius: f64) -> &mut Self {
        self.wire_radius = radius;
        self
    }

    /// 设置地平面
    pub fn set_ground(&mut self, ground: GroundPlane) -> &mut Self {
        self.ground = ground;
        self
    }

    // -----------------------------------------------------------------------
    // 渲染
    // -----------------------------------------------------------------------

    /// 完整卡片序列
    ///
    /// 顺序：GW/GA、GM、GE、GN（有地平面时）、EX、LD、FR、RP、EN。
    /// 待提交的 GM 卡片不输出。
    pub fn cards(&self, sweep: &FrequencySweep, radiation_pattern: bool) -> Vec<Card> {
        let (theta_count, phi_count) = if radiation_pattern {
            FULL_PATTERN
        } else {
            MINIMAL_PATTERN
        };

        let mut cards = Vec::with_capacity(
            self.geometry.len() + self.transforms.len() + self.excitations.len() + self.loads.len() + 5,
        );
        cards.extend(self.geometry.iter().cloned());
        cards.extend(self.transforms.iter().cloned());
        cards.push(Card::GeometryEnd {
            ground: self.ground,
        });
        if self.ground.is_present() {
            cards.push(Card::Ground {
                ground_type: DEFAULT_GROUND_TYPE,
            });
        }
        cards.extend(self.excitations.iter().map(Excitation::to_card));
        cards.extend(self.loads.iter().map(Load::to_card));
        cards.push(Card::Frequency(*sweep));
        cards.push(Card::RadiationPattern {
            theta_count,
            phi_count,
        });
        cards.push(Card::End);
        cards
    }

    /// 渲染为卡片文本
    pub fn render(&self, sweep: &FrequencySweep, radiation_pattern: bool) -> String {
        self.cards(sweep, radiation_pattern)
            .iter()
            .map(Card::to_line)
            .collect()
    }

    /// 渲染为卡片文本（起始频率、步长、步数）
    pub fn get_text(&self, start_mhz: f64, step_mhz: f64, steps: u32, radiation_pattern: bool) -> String {
        self.render(&FrequencySweep::new(start_mhz, step_mhz, steps), radiation_pattern)
    }

    // -----------------------------------------------------------------------
    // 查询
    // -----------------------------------------------------------------------

    /// 最近分配的标签
    pub fn tag(&self) -> u32 {
        self.tag
    }

    /// 最近添加元件的中间分段
    pub fn middle(&self) -> u32 {
        self.middle
    }

    pub fn wire_radius(&self) -> f64 {
        self.wire_radius
    }

    pub fn ground(&self) -> GroundPlane {
        self.ground
    }

    pub fn geometry(&self) -> &[Card] {
        &self.geometry
    }

    pub fn transforms(&self) -> &[Card] {
        &self.transforms
    }

    pub fn pending_transforms(&self) -> &[Card] {
        &self.pending_transforms
    }

    pub fn excitations(&self) -> &[Excitation] {
        &self.excitations
    }

    pub fn loads(&self) -> &[Load] {
        &self.loads
    }
}

/// 中间分段编号（从 1 开始）
fn middle_segment(segments: u32) -> u32 {
    segments / 2 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dipole() -> Model {
        let mut model = Model::free_space(0.001);
        model.add_wire(7, Point::new(0, 0, -0.5), Point::new(0, 0, 0.5));
        model
    }

    #[test]
    fn test_tags_increment_per_element() {
        let mut model = Model::free_space(0.001);
        assert_eq!(model.tag(), 0);
        model
            .add_wire(3, Point::origin(), Point::new(1, 0, 0))
            .add_arc(8, 0.5, 0.0, 90.0, Rotation::none(), Point::origin())
            .add_wire(5, Point::origin(), Point::new(0, 1, 0));
        assert_eq!(model.tag(), 3);
        assert_eq!(model.geometry().len(), 3);
    }

    #[test]
    fn test_middle_segment() {
        let mut model = dipole();
        assert_eq!(model.middle(), 4);
        model.add_wire(10, Point::origin(), Point::new(1, 0, 0));
        assert_eq!(model.middle(), 6);
        model.add_wire(1, Point::origin(), Point::new(1, 0, 0));
        assert_eq!(model.middle(), 1);
    }

    #[test]
    fn test_feed_targets_last_element() {
        let mut model = dipole();
        model.feed_at_middle(0.0);
        model
            .add_wire(9, Point::new(1, 0, 0), Point::new(2, 0, 0))
            .feed_at_middle(90.0);

        assert_eq!(
            model.excitations(),
            &[
                Excitation { tag: 1, segment: 4, phase: 0.0 },
                Excitation { tag: 2, segment: 5, phase: 90.0 },
            ]
        );
    }

    #[test]
    fn test_load_targets_last_element() {
        let mut model = dipole();
        model.load_at_middle(50.0, 2e-6);
        assert_eq!(
            model.loads(),
            &[Load { tag: 1, segment: 4, resistance: 50.0, inductance: 2e-6 }]
        );
    }

    #[test]
    fn test_autoseg_rounds_up() {
        let mut model = Model::free_space(0.001);
        model.add_wire_autoseg(0.3, Point::origin(), Point::new(1, 0, 0));
        match &model.geometry()[0] {
            Card::Wire { segments, .. } => assert_eq!(*segments, 4),
            other => panic!("unexpected card {:?}", other),
        }
        assert_eq!(model.middle(), 3);
    }

    #[test]
    fn test_set_radius_affects_later_elements_only() {
        let mut model = dipole();
        model
            .set_radius(0.002)
            .add_wire(3, Point::origin(), Point::new(1, 0, 0));

        let radii: Vec<f64> = model
            .geometry()
            .iter()
            .map(|card| match card {
                Card::Wire { radius, .. } => *radius,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(radii, vec![0.001, 0.002]);
    }

    #[test]
    fn test_arc_stages_restore_transforms() {
        let mut model = Model::free_space(0.001);
        let rotate = Rotation::new(90, 30, 45);
        let translate = Point::new(1, 2, 3);
        model.add_arc(12, 0.5, 0.0, 180.0, rotate, translate);

        assert_eq!(
            model.transforms(),
            &[Card::Move { rotation: rotate, translation: translate, first_tag: 1 }]
        );
        assert_eq!(
            model.pending_transforms(),
            &[
                Card::Move {
                    rotation: Rotation::none(),
                    translation: Point::new(-1, -2, -3),
                    first_tag: 2,
                },
                Card::Move {
                    rotation: Rotation::new(0, 0, -45),
                    translation: Point::origin(),
                    first_tag: 2,
                },
                Card::Move {
                    rotation: Rotation::new(0, -30, 0),
                    translation: Point::origin(),
                    first_tag: 2,
                },
                Card::Move {
                    rotation: Rotation::new(-90, 0, 0),
                    translation: Point::origin(),
                    first_tag: 2,
                },
            ]
        );
    }

    #[test]
    fn test_trailing_arc_restore_cards_not_rendered() {
        let mut model = Model::free_space(0.001);
        model.add_arc(12, 0.5, 0.0, 180.0, Rotation::new(90, 0, 0), Point::new(0, 0, 1));
        let text = model.get_text(146.0, 1.0, 1, false);
        assert_eq!(text.matches("GM").count(), 1);
        assert!(!text.contains(" 2.0\n"));
    }

    #[test]
    fn test_next_element_flushes_restore_cards() {
        let mut model = Model::free_space(0.001);
        model.add_arc(12, 0.5, 0.0, 180.0, Rotation::new(90, 0, 0), Point::new(0, 0, 1));
        model.add_wire(5, Point::origin(), Point::new(1, 0, 0));

        assert!(model.pending_transforms().is_empty());
        assert_eq!(model.transforms().len(), 5);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut model = dipole();
        model.feed_at_middle(0.0);
        let sweep = FrequencySweep::new(144.0, 1.0, 5);
        assert_eq!(model.render(&sweep, true), model.render(&sweep, true));
    }

    #[test]
    fn test_render_after_more_building() {
        let mut model = dipole();
        let first = model.get_text(100.0, 1.0, 1, true);
        model.add_wire(3, Point::new(1, 0, 0), Point::new(2, 0, 0));
        let second = model.get_text(100.0, 1.0, 1, true);
        assert_ne!(first, second);
        assert!(second.starts_with(&first[..first.find("GE").unwrap()]));
    }

    #[test]
    fn test_ground_card_only_with_ground() {
        let model = dipole();
        let text = model.get_text(100.0, 1.0, 1, true);
        assert!(!text.contains("GN"));

        let mut grounded = Model::new(0.001, GroundPlane::WithCurrentExpansion);
        grounded.add_wire(7, Point::new(0, 0, 0.1), Point::new(0, 0, 1.1));
        let text = grounded.get_text(100.0, 1.0, 1, true);
        assert_eq!(text.matches("GN").count(), 1);
        assert!(text.contains("GE 1\nGN 2 0 0 0 13.0 0.005\n"));
    }

    #[test]
    fn test_minimal_pattern() {
        let text = dipole().get_text(100.0, 1.0, 1, false);
        assert!(text.contains("RP 0 3 3 1000"));
    }

    #[test]
    fn test_feed_without_elements() {
        let mut model = Model::free_space(0.001);
        model.feed_at_middle(0.0);
        assert_eq!(model.excitations()[0], Excitation { tag: 0, segment: 0, phase: 0.0 });
    }
}
