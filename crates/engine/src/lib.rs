// crates/engine/src/lib.rs
//! Markdown scanning, scope classification and per-directory census.

pub mod census;
pub mod classify;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod message;
pub mod output;
pub mod selection;
pub mod session;
pub mod watch;

pub use crate::census::{CensusReport, DirCount, census};
pub use crate::classify::{Topic, TopicMap};
pub use crate::error::{EngineError, Result};
pub use crate::filesystem::{MarkdownFile, scan_markdown};
pub use crate::message::{CommitMessage, VerbList, build_message};
pub use crate::session::{Outcome, Session};
