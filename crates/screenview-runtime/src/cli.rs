//! CLI definition using clap derive.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "screenview", about = "Screen-view tracking with transient overrides")]
pub struct Cli {
    /// Screen tables TOML (default: built-in tables)
    #[arg(long, short = 't', global = true, env = "SCREENVIEW_TABLES")]
    pub tables: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay JSONL tracker commands and write the resulting screen events as JSONL
    Replay(ReplayOpts),
    /// Print the effective screen tables as TOML
    Tables,
}

#[derive(clap::Args)]
pub struct ReplayOpts {
    /// Command stream to read (default: stdin)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// File to write screen events to (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}
