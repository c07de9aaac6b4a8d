//! JSONL replay: feed recorded tracker commands through one tracker and write
//! each screen event as a JSON line.

use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use screenview_core::{
    AnalyticsSink, ScreenEvent, ScreenNameResolver, ScreenTracker, TrackOutcome, TrackerCommand,
};

/// A single recorded event line in the JSONL output.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordedEvent {
    /// Wall-clock timestamp when the event was recorded.
    pub ts: String,
    #[serde(flatten)]
    pub event: ScreenEvent,
}

/// Analytics sink writing one [`RecordedEvent`] per line.
///
/// `record` cannot fail, so the first write error is kept and surfaced via
/// [`JsonlSink::take_error`].
pub struct JsonlSink<W: Write> {
    writer: W,
    written: usize,
    error: Option<io::Error>,
}

impl<W: Write> JsonlSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: 0,
            error: None,
        }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, event: ScreenEvent) -> io::Result<()> {
        let record = RecordedEvent {
            ts: Utc::now().to_rfc3339(),
            event,
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

impl<W: Write> AnalyticsSink for JsonlSink<W> {
    fn record(&mut self, event: ScreenEvent) {
        if self.error.is_some() {
            return;
        }
        match self.write_line(event) {
            Ok(()) => self.written += 1,
            Err(e) => {
                tracing::error!("screen event write failed: {e}");
                self.error = Some(e);
            }
        }
    }
}

/// Counts of what a replay did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub commands: usize,
    pub emitted: usize,
    pub suppressed: usize,
    pub ignored: usize,
}

/// Apply every command line from `input`, writing screen events to `output`.
///
/// Blank lines are skipped. A line that does not parse, or a `logged_in`
/// page change without a page, aborts the replay.
pub fn run_replay<R: BufRead, W: Write>(
    resolver: ScreenNameResolver,
    input: R,
    output: W,
) -> anyhow::Result<ReplaySummary> {
    let mut tracker = ScreenTracker::new(resolver, JsonlSink::new(output));
    let mut summary = ReplaySummary::default();

    for (idx, line) in input.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.with_context(|| format!("failed to read line {line_num}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let command: TrackerCommand = serde_json::from_str(trimmed)
            .with_context(|| format!("invalid tracker command on line {line_num}"))?;
        if let Err(e) = command.validate() {
            bail!("invalid tracker command on line {line_num}: {e}");
        }

        match command.apply(&mut tracker) {
            TrackOutcome::Emitted => summary.emitted += 1,
            TrackOutcome::Suppressed => summary.suppressed += 1,
            TrackOutcome::Ignored => summary.ignored += 1,
        }
        summary.commands += 1;

        if let Some(e) = tracker.sink_mut().take_error() {
            bail!("failed to write screen event for line {line_num}: {e}");
        }
    }

    tracing::info!(
        commands = summary.commands,
        emitted = summary.emitted,
        suppressed = summary.suppressed,
        ignored = summary.ignored,
        written = tracker.sink().written(),
        "replay finished"
    );
    Ok(summary)
}
