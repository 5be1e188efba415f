//! 卡片生成配置
//!
//! JSON 格式，所有字段都可省略：
//!
//! ```json
//! {
//!     "comment": "CM 2m dipole\nCE",
//!     "output": "dipole.nec",
//!     "wire_radius": 0.001,
//!     "ground": "with_current_expansion",
//!     "sweep": { "start_mhz": 144.0, "step_mhz": 1.0, "steps": 5 },
//!     "radiation_pattern": true,
//!     "echo": false
//! }
//! ```

use crate::error::FileError;
use nec2_core::card::{FrequencySweep, GroundPlane};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// 卡片生成配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// 注释行（写在文件第一行）
    pub comment: String,

    /// 输出文件路径
    pub output: PathBuf,

    /// 导线半径（米）
    pub wire_radius: f64,

    /// 地平面
    pub ground: GroundPlane,

    /// 频率扫描
    pub sweep: FrequencySweep,

    /// 是否请求完整方向图
    pub radiation_pattern: bool,

    /// 写入后是否输出到控制台
    pub echo: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            comment: "CM generated by nec2gen\nCE".to_string(),
            output: PathBuf::from("output.nec"),
            wire_radius: 0.001,
            ground: GroundPlane::Absent,
            sweep: FrequencySweep::default(),
            radiation_pattern: true,
            echo: false,
        }
    }
}

impl DeckConfig {
    /// 从 JSON 文件加载
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FileError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// 从 JSON 文本解析并校验
    pub fn from_json(text: &str) -> Result<Self, FileError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// 保存为 JSON 文件
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FileError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), FileError> {
        if self.sweep.steps == 0 {
            return Err(FileError::InvalidConfig(
                "sweep.steps must be at least 1".to_string(),
            ));
        }
        if !(self.wire_radius > 0.0) {
            return Err(FileError::InvalidConfig(format!(
                "wire_radius must be positive, got {}",
                self.wire_radius
            )));
        }
        Ok(())
    }
}
