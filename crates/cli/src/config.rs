// crates/cli/src/config.rs
use crate::args::{CommitArgs, CountArgs};
use crate::error::{AppError, Result};
use crate::options::OutputFormat;
pub use mdscope_engine::config::{
    CensusOptions, CensusOptionsBuilder, ProfileFile, ScanOptions, ScanOptionsBuilder,
    SessionConfig, SessionConfigBuilder,
};
use mdscope_engine::config::{DEFAULT_OUTPUT_FILE, DEFAULT_RESERVED};
use mdscope_engine::{TopicMap, VerbList};
use std::path::PathBuf;
use std::time::Duration;

/// Everything the `commit` subcommand needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct CommitSetup {
    pub session: SessionConfig,
    pub topics: TopicMap,
    pub verbs: VerbList,
}

/// Settings for the `count` subcommand.
#[derive(Debug, Clone)]
pub struct CountSetup {
    pub census: CensusOptions,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub watch: bool,
}

impl TryFrom<CommitArgs> for CommitSetup {
    type Error = AppError;

    fn try_from(args: CommitArgs) -> Result<Self> {
        let (topics, verbs) = match &args.config {
            Some(path) => ProfileFile::load(path)?.resolve()?,
            None => ProfileFile::default().resolve()?,
        };

        let reserved = if args.reserved.is_empty() {
            vec![DEFAULT_RESERVED.to_string()]
        } else {
            args.reserved
        };

        let scan = ScanOptionsBuilder::default()
            .root(args.root)
            .reserved(reserved)
            .follow_links(args.follow)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        let session = SessionConfigBuilder::default()
            .scan(scan)
            .output_path(
                args.output
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
            )
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            session,
            topics,
            verbs,
        })
    }
}

impl TryFrom<CountArgs> for CountSetup {
    type Error = AppError;

    fn try_from(args: CountArgs) -> Result<Self> {
        let census = CensusOptionsBuilder::default()
            .root(args.root)
            .threads(args.threads.unwrap_or_else(num_cpus::get))
            .follow_links(args.follow)
            .watch_interval(Duration::from_secs(args.watch_interval.unwrap_or(1)))
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            census,
            format: args.format,
            output: args.output,
            watch: args.watch,
        })
    }
}
