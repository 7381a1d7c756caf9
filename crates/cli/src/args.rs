// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueHint};

use crate::options::OutputFormat;
use crate::parsers::{parse_positive_u64, parse_thread_count};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "mdscope",
    version = crate::VERSION,
    about = "Markdown 文档统计与 commit message 生成工具"
)]
pub struct Args {
    /// 日志更详细（可重复: -v, -vv）
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "日志")]
    pub verbose: u8,

    /// 只输出错误日志
    #[arg(short, long, global = true, conflicts_with = "verbose", help_heading = "日志")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 交互式选择 Markdown 文档并生成 commit message
    Commit(CommitArgs),
    /// 按目录统计 Markdown 文件数量
    Count(CountArgs),
}

#[derive(ClapArgs, Debug)]
pub struct CommitArgs {
    /// 扫描的根目录
    #[arg(long, default_value = ".", value_hint = ValueHint::DirPath, help_heading = "扫描")]
    pub root: PathBuf,

    /// 排除的保留文件（相对路径片段，可重复）
    #[arg(long = "reserved", help_heading = "扫描")]
    pub reserved: Vec<String>,

    /// 跟随符号链接
    #[arg(long, help_heading = "扫描")]
    pub follow: bool,

    /// 结果输出文件（每次运行覆盖）
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "输出")]
    pub output: Option<PathBuf>,

    /// 主题与动词配置文件（YAML，或 .json）
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "配置")]
    pub config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct CountArgs {
    /// 统计的根目录
    #[arg(default_value = ".", value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// 输出格式
    #[arg(long, value_enum, default_value = "table", help_heading = "输出")]
    pub format: OutputFormat,

    /// 写入文件而不是标准输出
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "输出")]
    pub output: Option<PathBuf>,

    /// 遍历线程数（默认: CPU 核数）
    #[arg(long, short = 'j', value_parser = parse_thread_count, help_heading = "扫描")]
    pub threads: Option<usize>,

    /// 跟随符号链接
    #[arg(long, help_heading = "扫描")]
    pub follow: bool,

    /// 文件变化时重新统计
    #[arg(long, help_heading = "监控")]
    pub watch: bool,

    /// 监控去抖间隔（秒，默认 1）
    #[arg(long, value_parser = parse_positive_u64, requires = "watch", help_heading = "监控")]
    pub watch_interval: Option<u64>,
}
