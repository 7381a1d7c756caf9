//! Interactive commit-message session.
//!
//! One pass: list documents, read a selection, read a verb, print and save
//! one message per selected document.

use crate::classify::TopicMap;
use crate::config::SessionConfig;
use crate::error::Result;
use crate::filesystem::{MarkdownFile, scan_markdown};
use crate::message::{CommitMessage, VerbList};
use crate::output::write_messages;
use crate::selection::{parse_selection, parse_verb_choice};
use std::io::{BufRead, Write};
use std::path::PathBuf;

const RULE: &str = "============================================";

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NoFiles,
    NothingSelected,
    Written {
        path: PathBuf,
        messages: Vec<CommitMessage>,
    },
}

pub struct Session<'a, R, W> {
    config: &'a SessionConfig,
    topics: &'a TopicMap,
    verbs: &'a VerbList,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        config: &'a SessionConfig,
        topics: &'a TopicMap,
        verbs: &'a VerbList,
        input: R,
        out: W,
    ) -> Self {
        Self {
            config,
            topics,
            verbs,
            input,
            out,
        }
    }

    /// Drive the prompts to completion.
    ///
    /// # Errors
    /// Fails on an invalid verb choice, on console I/O errors, or when the
    /// output file cannot be written. An unreadable scan root is not an
    /// error; it ends the session with [`Outcome::NoFiles`].
    pub fn run(&mut self) -> Result<Outcome> {
        writeln!(self.out, "\n========== Markdown 文档 Commit Message 生成器 ==========\n")?;

        let files = match scan_markdown(&self.config.scan) {
            Ok(files) => files,
            Err(e) => {
                log::warn!("{e}");
                Vec::new()
            }
        };
        if files.is_empty() {
            writeln!(self.out, "⚠️  未找到 Markdown 文档文件")?;
            return Ok(Outcome::NoFiles);
        }

        writeln!(self.out, "【检测到的 Markdown 文档】")?;
        for (i, file) in files.iter().enumerate() {
            writeln!(self.out, "  [{}] {}", i + 1, file.relative)?;
        }

        let answer = self.prompt("\n请选择要生成 commit message 的文件 (多个文件用逗号分隔，如: 1,3,5,6): ")?;
        let selected: Vec<&MarkdownFile> = parse_selection(&answer, files.len())
            .into_iter()
            .map(|i| &files[i])
            .collect();
        if selected.is_empty() {
            writeln!(self.out, "⚠️  未选择有效文件")?;
            return Ok(Outcome::NothingSelected);
        }

        writeln!(self.out, "\n【选择动词】")?;
        for (i, verb) in self.verbs.as_slice().iter().enumerate() {
            writeln!(self.out, "  [{}] {verb}", i + 1)?;
        }
        let question = format!("\n请选择动词 (1-{}, 默认 1): ", self.verbs.len());
        let answer = self.prompt(&question)?;
        let verb = parse_verb_choice(&answer, self.verbs)?;

        writeln!(self.out, "\n========== 生成的 Commit Message ==========\n")?;
        let mut messages = Vec::with_capacity(selected.len());
        for file in selected {
            let scope = self.topics.classify(&file.relative);
            let msg = CommitMessage::new(scope, verb, &file.title);
            writeln!(self.out, "{msg}")?;
            messages.push(msg);
        }
        writeln!(self.out, "\n{RULE}\n")?;

        let path = self.config.output_path.clone();
        write_messages(&path, &messages)?;
        writeln!(self.out, "✅  Commit messages 已保存到: {}", path.display())?;
        writeln!(self.out, "✅  共生成 {} 条 commit message", messages.len())?;

        Ok(Outcome::Written { path, messages })
    }

    /// Print `question` and read one line. End of input reads as blank.
    fn prompt(&mut self, question: &str) -> Result<String> {
        write!(self.out, "{question}")?;
        self.out.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
