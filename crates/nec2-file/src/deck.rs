//! 卡片文件读写
//!
//! 文件格式：第一行是注释，其后是卡片序列，以单个换行结尾。
//! 写入是一次性整体写入，不经过临时文件。

use crate::error::FileError;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// 组装文件内容：注释行 + 卡片序列，各自去掉首尾空白
pub fn deck_contents(comments: &str, card_stack: &str) -> String {
    format!("{}\n{}\n", comments.trim(), card_stack.trim())
}

/// 写入任意输出流，返回写入的字节数
pub fn write_card_stack<W: Write>(
    mut writer: W,
    comments: &str,
    card_stack: &str,
) -> Result<usize, FileError> {
    let contents = deck_contents(comments, card_stack);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;
    Ok(contents.len())
}

/// 写入卡片文件（覆盖已有文件）
pub fn write_cards_to_file(
    path: impl AsRef<Path>,
    comments: &str,
    card_stack: &str,
) -> Result<(), FileError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let written = write_card_stack(file, comments, card_stack)?;
    info!("Wrote {} bytes to {}", written, path.display());
    Ok(())
}

/// 读取卡片文件
pub fn read_card_file(path: impl AsRef<Path>) -> Result<String, FileError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    info!("Read {} bytes from {}", contents.len(), path.display());
    Ok(contents)
}

/// 把卡片文件内容输出到控制台，便于快速检查
pub fn copy_card_file_to_console(path: impl AsRef<Path>) -> Result<(), FileError> {
    let contents = read_card_file(path)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(contents.as_bytes())?;
    handle.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nec2_core::prelude::*;

    fn sample_stack() -> String {
        let mut model = Model::free_space(0.001);
        model
            .add_wire(7, Point::new(0, 0, -0.5), Point::new(0, 0, 0.5))
            .feed_at_middle(0.0);
        model.get_text(146.0, 1.0, 1, false)
    }

    #[test]
    fn test_deck_contents_trims() {
        let contents = deck_contents("CM dipole   \n", "\n\nGE 0\nEN\n\n");
        assert_eq!(contents, "CM dipole\nGE 0\nEN\n");
    }

    #[test]
    fn test_write_card_stack_to_buffer() {
        let mut buffer = Vec::new();
        let written = write_card_stack(&mut buffer, "CM test", "EN\n").expect("write to buffer");
        assert_eq!(written, 11);
        assert_eq!(String::from_utf8(buffer).unwrap(), "CM test\nEN\n");
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dipole.nec");
        let stack = sample_stack();

        write_cards_to_file(&path, "CM half-wave dipole\nCE", &stack).expect("write deck");
        let contents = read_card_file(&path).expect("read deck");

        assert!(contents.starts_with("CM half-wave dipole\nCE\nGW 1 7"));
        assert!(contents.ends_with("EN\n"));
        assert!(!contents.ends_with("\n\n"));
    }

    #[test]
    fn test_file_matches_stream_output() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("stream.nec");
        let stack = sample_stack();

        let mut buffer = Vec::new();
        write_card_stack(&mut buffer, "CM stream\nCE", &stack).expect("write to buffer");
        write_cards_to_file(&path, "CM stream\nCE", &stack).expect("write deck");

        assert_eq!(std::fs::read(&path).unwrap(), buffer);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("deck.nec");
        std::fs::write(&path, "old contents that are much longer than the new deck\n").unwrap();

        write_cards_to_file(&path, "CM new", "EN").expect("write deck");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "CM new\nEN\n");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("deck.nec");
        let err = write_cards_to_file(&path, "CM", "EN").unwrap_err();
        assert!(matches!(err, FileError::Io(_)));
    }

    #[test]
    fn test_console_copy_missing_file_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = copy_card_file_to_console(dir.path().join("nope.nec")).unwrap_err();
        assert!(matches!(err, FileError::Io(_)));
    }

    #[test]
    fn test_console_copy_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("deck.nec");
        write_cards_to_file(&path, "CM echo", &sample_stack()).expect("write deck");
        copy_card_file_to_console(&path).expect("echo deck");
    }
}
