//! NEC2 卡片定义
//!
//! 每种卡片对应 NEC2 输入格式中的一行记录，字段顺序与数量固定。
//! 参考 <http://www.nec2.org/part_3/cards/>。
//!
//! 标签和分段数无单位，尺寸以米为单位，角度以度为单位。

use crate::format::{dec, sci};
use crate::geometry::{Point, Rotation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// GA 卡片中未使用的字段
const NOT_USED: f64 = 0.0;

/// GN 卡片的地面相对介电常数
pub const GROUND_RELATIVE_PERMITTIVITY: f64 = 13.0;

/// GN 卡片的地面电导率（S/m）
pub const GROUND_CONDUCTIVITY: f64 = 0.005;

/// GN 卡片的默认地面类型（Sommerfeld/Norton 有限地面）
pub const DEFAULT_GROUND_TYPE: i32 = 2;

/// RP 卡片的完整方向图网格
pub const FULL_PATTERN: (u32, u32) = (37, 73);

/// RP 卡片的最小方向图网格
pub const MINIMAL_PATTERN: (u32, u32) = (3, 3);

/// RP 卡片的输出控制选项（使用默认打印设置）
const PATTERN_OUTPUT_OPTIONS: f64 = 1000.0;

/// 方向图起始角与步长（度）
const THETA_START: f64 = -90.0;
const PHI_START: f64 = 0.0;
const THETA_STEP: f64 = 5.0;
const PHI_STEP: f64 = 5.0;

/// 地平面标志（GE 卡片的 I1 字段）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GroundPlane {
    /// 无地平面（自由空间）
    #[default]
    Absent,
    /// 有地平面，电流展开考虑镜像
    WithCurrentExpansion,
    /// 有地平面，电流展开不考虑镜像
    WithoutCurrentExpansion,
}

impl GroundPlane {
    /// GE 卡片中的数值
    pub fn flag(&self) -> i32 {
        match self {
            GroundPlane::Absent => 0,
            GroundPlane::WithCurrentExpansion => 1,
            GroundPlane::WithoutCurrentExpansion => -1,
        }
    }

    /// 是否存在地平面（决定是否输出 GN 卡片）
    pub fn is_present(&self) -> bool {
        !matches!(self, GroundPlane::Absent)
    }
}

/// 线性频率扫描（MHz）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencySweep {
    pub start_mhz: f64,
    pub step_mhz: f64,
    pub steps: u32,
}

impl FrequencySweep {
    pub fn new(start_mhz: f64, step_mhz: f64, steps: u32) -> Self {
        Self {
            start_mhz,
            step_mhz,
            steps,
        }
    }

    /// 最后一个频点
    pub fn end_mhz(&self) -> f64 {
        self.start_mhz + self.step_mhz * self.steps.saturating_sub(1) as f64
    }
}

impl Default for FrequencySweep {
    fn default() -> Self {
        Self::new(144.0, 1.0, 5)
    }
}

/// NEC2 卡片
#[derive(Debug, Clone, PartialEq)]
pub enum Card {
    /// GW：直导线
    Wire {
        tag: u32,
        segments: u32,
        start: Point,
        end: Point,
        radius: f64,
    },
    /// GA：圆弧，位于 X-Z 平面，圆心在原点
    Arc {
        tag: u32,
        segments: u32,
        arc_radius: f64,
        start_angle: f64,
        end_angle: f64,
        wire_radius: f64,
    },
    /// GM：对标签不小于 `first_tag` 的所有元件先旋转再平移
    Move {
        rotation: Rotation,
        translation: Point,
        first_tag: u32,
    },
    /// GE：几何数据结束
    GeometryEnd { ground: GroundPlane },
    /// GN：地面参数
    Ground { ground_type: i32 },
    /// FR：线性频率扫描
    Frequency(FrequencySweep),
    /// EX：单位幅度电压源，相位以度为单位
    Excitation { tag: u32, segment: u32, phase: f64 },
    /// LD：串联 RL 负载（电容项为 0）
    Load {
        tag: u32,
        segment: u32,
        resistance: f64,
        inductance: f64,
    },
    /// RP：方向图计算请求
    RadiationPattern { theta_count: u32, phi_count: u32 },
    /// EN：输入结束
    End,
}

impl Card {
    /// 卡片助记符
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Card::Wire { .. } => "GW",
            Card::Arc { .. } => "GA",
            Card::Move { .. } => "GM",
            Card::GeometryEnd { .. } => "GE",
            Card::Ground { .. } => "GN",
            Card::Frequency(_) => "FR",
            Card::Excitation { .. } => "EX",
            Card::Load { .. } => "LD",
            Card::RadiationPattern { .. } => "RP",
            Card::End => "EN",
        }
    }

    /// 带换行的完整记录
    pub fn to_line(&self) -> String {
        format!("{}\n", self)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())?;
        match self {
            Card::Wire {
                tag,
                segments,
                start,
                end,
                radius,
            } => write!(
                f,
                "{}{}{}{}{}{}{}{}{}",
                dec(*tag as f64),
                dec(*segments as f64),
                sci(start.x()),
                sci(start.y()),
                sci(start.z()),
                sci(end.x()),
                sci(end.y()),
                sci(end.z()),
                sci(*radius)
            ),
            Card::Arc {
                tag,
                segments,
                arc_radius,
                start_angle,
                end_angle,
                wire_radius,
            } => write!(
                f,
                "{}{}{}{}{}{}{}{}{}",
                dec(*tag as f64),
                dec(*segments as f64),
                sci(*arc_radius),
                sci(*start_angle),
                sci(*end_angle),
                sci(*wire_radius),
                sci(NOT_USED),
                sci(NOT_USED),
                sci(NOT_USED)
            ),
            Card::Move {
                rotation,
                translation,
                first_tag,
            } => {
                // 标签增量和新结构数恒为 0：只移动，不复制
                write!(f, "{}{}", dec(0.0), dec(0.0))?;
                write!(
                    f,
                    "{}{}{}{}{}{}{}",
                    sci(rotation.rx),
                    sci(rotation.ry),
                    sci(rotation.rz),
                    sci(translation.x()),
                    sci(translation.y()),
                    sci(translation.z()),
                    sci(*first_tag as f64)
                )
            }
            Card::GeometryEnd { ground } => write!(f, "{}", dec(ground.flag() as f64)),
            Card::Ground { ground_type } => write!(
                f,
                "{}{}{}{}{}{}",
                dec(*ground_type as f64),
                dec(0.0),
                dec(0.0),
                dec(0.0),
                sci(GROUND_RELATIVE_PERMITTIVITY),
                sci(GROUND_CONDUCTIVITY)
            ),
            Card::Frequency(sweep) => {
                // 步进方式 0：线性（加法）
                write!(
                    f,
                    "{}{}{}{}{}{}",
                    dec(0.0),
                    dec(sweep.steps as f64),
                    dec(0.0),
                    dec(0.0),
                    sci(sweep.start_mhz),
                    sci(sweep.step_mhz)
                )
            }
            Card::Excitation {
                tag,
                segment,
                phase,
            } => {
                let phase = phase.to_radians();
                // 激励类型 0：电压源
                write!(
                    f,
                    "{}{}{}{}{}{}",
                    dec(0.0),
                    dec(*tag as f64),
                    dec(*segment as f64),
                    dec(0.0),
                    sci(phase.cos()),
                    sci(phase.sin())
                )
            }
            Card::Load {
                tag,
                segment,
                resistance,
                inductance,
            } => write!(
                f,
                "{}{}{}{}{}{}",
                dec(0.0),
                dec(*tag as f64),
                dec(*segment as f64),
                dec(*segment as f64),
                sci(*resistance),
                sci(*inductance)
            ),
            Card::RadiationPattern {
                theta_count,
                phi_count,
            } => write!(
                f,
                "{}{}{}{}{}{}{}{}",
                dec(0.0),
                dec(*theta_count as f64),
                dec(*phi_count as f64),
                dec(PATTERN_OUTPUT_OPTIONS),
                sci(THETA_START),
                sci(PHI_START),
                sci(THETA_STEP),
                sci(PHI_STEP)
            ),
            Card::End => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// 单行卡片生成函数
// ---------------------------------------------------------------------------

/// GW 直导线
pub fn gw(tag: u32, segments: u32, start: &Point, end: &Point, radius: f64) -> String {
    Card::Wire {
        tag,
        segments,
        start: *start,
        end: *end,
        radius,
    }
    .to_line()
}

/// GA 圆弧
pub fn ga(
    tag: u32,
    segments: u32,
    arc_radius: f64,
    start_angle: f64,
    end_angle: f64,
    wire_radius: f64,
) -> String {
    Card::Arc {
        tag,
        segments,
        arc_radius,
        start_angle,
        end_angle,
        wire_radius,
    }
    .to_line()
}

/// GM 旋转并平移
pub fn gm(rotation: &Rotation, translation: &Point, first_tag: u32) -> String {
    Card::Move {
        rotation: *rotation,
        translation: *translation,
        first_tag,
    }
    .to_line()
}

/// GE 几何结束
pub fn ge(ground: GroundPlane) -> String {
    Card::GeometryEnd { ground }.to_line()
}

/// GN 地面参数
pub fn gn(ground_type: i32) -> String {
    Card::Ground { ground_type }.to_line()
}

/// FR 频率扫描
pub fn fr(start_mhz: f64, step_mhz: f64, steps: u32) -> String {
    Card::Frequency(FrequencySweep::new(start_mhz, step_mhz, steps)).to_line()
}

/// EX 电压源
pub fn ex(tag: u32, segment: u32, phase: f64) -> String {
    Card::Excitation {
        tag,
        segment,
        phase,
    }
    .to_line()
}

/// LD 串联 RL 负载
pub fn ld(tag: u32, segment: u32, resistance: f64, inductance: f64) -> String {
    Card::Load {
        tag,
        segment,
        resistance,
        inductance,
    }
    .to_line()
}

/// RP 方向图请求
pub fn rp(theta_count: u32, phi_count: u32) -> String {
    Card::RadiationPattern {
        theta_count,
        phi_count,
    }
    .to_line()
}

/// EN 输入结束
pub fn en() -> String {
    Card::End.to_line()
}
