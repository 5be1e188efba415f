//! NEC2 卡片文件处理
//!
//! 支持：
//! - 卡片文件写入（注释行 + 卡片序列）
//! - 卡片文件读取与控制台回显
//! - JSON 生成配置

pub mod config;
pub mod deck;
pub mod error;

pub use config::DeckConfig;
pub use deck::{copy_card_file_to_console, read_card_file, write_cards_to_file};
pub use error::FileError;
