//! Serializable tracker calls, used to replay recorded navigation sessions.
//!
//! One command per JSON object, tagged by `op`:
//!
//! ```json
//! {"op":"page_change","mode":"logged_in","page":"room_view","duration_ms":1200}
//! {"op":"override","screen_name":"Feedback"}
//! {"op":"clear_override","screen_name":"Feedback"}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::sink::AnalyticsSink;
use crate::tracker::{ScreenTracker, TrackOutcome};
use crate::types::{ApplicationMode, PageType, ScreenName};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TrackerCommand {
    PageChange {
        mode: ApplicationMode,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        page: Option<PageType>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration_ms: Option<u64>,
    },
    Override {
        #[serde(default)]
        screen_name: Option<ScreenName>,
    },
    ClearOverride {
        #[serde(default)]
        screen_name: Option<ScreenName>,
    },
}

impl TrackerCommand {
    /// Check the caller precondition of [`ScreenTracker::track_page_change`]:
    /// a `LoggedIn` page change must carry a page.
    ///
    /// A command that fails here would panic the tracker when applied, or on
    /// a later release if an override is active at the time.
    pub fn validate(&self) -> Result<(), ResolveError> {
        match self {
            Self::PageChange {
                mode, page: None, ..
            } if mode.is_logged_in() => Err(ResolveError::MissingPage(*mode)),
            _ => Ok(()),
        }
    }

    /// Apply the command to a tracker. An absent screen name behaves like an
    /// empty one.
    pub fn apply<S: AnalyticsSink>(&self, tracker: &mut ScreenTracker<S>) -> TrackOutcome {
        match self {
            Self::PageChange {
                mode,
                page,
                duration_ms,
            } => tracker.track_page_change(*mode, *page, *duration_ms),
            Self::Override { screen_name } => tracker.track_override(name_or_empty(screen_name)),
            Self::ClearOverride { screen_name } => {
                tracker.clear_override(name_or_empty(screen_name))
            }
        }
    }
}

fn name_or_empty(name: &Option<ScreenName>) -> &str {
    name.as_ref().map_or("", ScreenName::as_str)
}
