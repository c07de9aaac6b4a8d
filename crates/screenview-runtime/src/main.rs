//! screenview: replays navigation sessions through a screen tracker.
//! Composition root owning the single tracker, its resolver and its sink.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};

use anyhow::Context;
use clap::Parser;

mod cli;
mod replay;
mod tables;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let filter = std::env::var("SCREENVIEW_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(io::stderr)
        .init();

    let resolver = tables::load_resolver(args.tables.as_deref())?;

    match args.command {
        cli::Command::Replay(opts) => {
            tracing::info!(
                input = ?opts.input,
                output = ?opts.output,
                "screenview replay starting"
            );
            let input: Box<dyn io::BufRead> = match &opts.input {
                Some(path) => Box::new(BufReader::new(
                    File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
                )),
                None => Box::new(io::stdin().lock()),
            };
            let output: Box<dyn io::Write> = match &opts.output {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path)
                        .with_context(|| format!("failed to create {}", path.display()))?,
                )),
                None => Box::new(io::stdout().lock()),
            };
            replay::run_replay(resolver, input, output)?;
        }
        cli::Command::Tables => {
            print!("{}", tables::render_tables(&resolver)?);
        }
    }

    Ok(())
}
