use crate::error::{EngineError, Result};
use crate::message::CommitMessage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one message per line to `path`, replacing whatever was there.
///
/// # Errors
/// Returns [`EngineError::OutputWrite`] if the file cannot be created or written.
pub fn write_messages(path: &Path, messages: &[CommitMessage]) -> Result<()> {
    let wrap = |source| EngineError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    for msg in messages {
        writeln!(writer, "{msg}").map_err(wrap)?;
    }
    writer.flush().map_err(wrap)?;
    log::debug!("wrote {} messages to {}", messages.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let messages = vec![
            CommitMessage::new("Git", "添加", "笔记"),
            CommitMessage::new("其他", "添加", "周记"),
        ];
        write_messages(&path, &messages).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "docs(Git): 添加笔记\ndocs(其他): 添加周记\n"
        );
    }

    #[test]
    fn second_write_replaces_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_messages(
            &path,
            &[
                CommitMessage::new("A", "v", "1"),
                CommitMessage::new("A", "v", "2"),
            ],
        )
        .unwrap();
        write_messages(&path, &[CommitMessage::new("B", "v", "3")]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "docs(B): v3\n");
    }

    #[test]
    fn unwritable_target_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.txt");
        let err = write_messages(&path, &[]).unwrap_err();
        assert!(matches!(err, EngineError::OutputWrite { .. }));
        assert!(err.to_string().contains("out.txt"));
    }
}
