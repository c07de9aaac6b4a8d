//! Scoped override claims for view elements.
//!
//! A view framework maps its lifecycle onto the three calls:
//!
//! | lifecycle | call |
//! |-----------|------|
//! | mount     | [`ScreenOverride::begin`] |
//! | update    | [`ScreenOverride::update`] |
//! | unmount   | [`ScreenOverride::end`] |
//!
//! ```
//! use screenview_core::{RecordingSink, ScreenOverride, ScreenTracker};
//!
//! let mut tracker = ScreenTracker::with_default_tables(RecordingSink::new());
//! let mut dialog = ScreenOverride::begin(&mut tracker, "InviteDialog");
//! dialog.update(&mut tracker, "InviteDialogConfirm");
//! dialog.end(&mut tracker);
//!
//! let names: Vec<_> = tracker
//!     .sink()
//!     .events()
//!     .iter()
//!     .map(|e| e.screen_name.as_str())
//!     .collect();
//! assert_eq!(names, ["InviteDialog", "InviteDialogConfirm", "WebLoading"]);
//! ```

use crate::sink::AnalyticsSink;
use crate::tracker::{ScreenTracker, TrackOutcome};
use crate::types::ScreenName;

/// One element's claim on the override slot.
///
/// Dropping a scope without calling [`end`](Self::end) leaves the override
/// active; only an explicit release ends it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an override stays active until `end` is called"]
pub struct ScreenOverride {
    claimed: Option<ScreenName>,
}

impl ScreenOverride {
    /// Claim the override slot for `screen_name` (mount).
    pub fn begin<S: AnalyticsSink>(tracker: &mut ScreenTracker<S>, screen_name: &str) -> Self {
        let mut scope = Self { claimed: None };
        scope.claim(tracker, screen_name);
        scope
    }

    /// Re-claim with the element's current identity (update).
    ///
    /// The previous claim is not released first, so the base screen is never
    /// reported as an intermediate transition.
    pub fn update<S: AnalyticsSink>(
        &mut self,
        tracker: &mut ScreenTracker<S>,
        screen_name: &str,
    ) -> TrackOutcome {
        self.claim(tracker, screen_name)
    }

    /// Release the claim (unmount).
    ///
    /// Ignored by the tracker when another element has claimed the slot since.
    pub fn end<S: AnalyticsSink>(self, tracker: &mut ScreenTracker<S>) -> TrackOutcome {
        match &self.claimed {
            Some(name) => tracker.clear_override(name.as_str()),
            None => TrackOutcome::Ignored,
        }
    }

    /// The last non-empty name this scope claimed.
    pub fn claimed(&self) -> Option<&ScreenName> {
        self.claimed.as_ref()
    }

    fn claim<S: AnalyticsSink>(
        &mut self,
        tracker: &mut ScreenTracker<S>,
        screen_name: &str,
    ) -> TrackOutcome {
        let outcome = tracker.track_override(screen_name);
        if outcome == TrackOutcome::Emitted {
            self.claimed = Some(ScreenName::from(screen_name));
        }
        outcome
    }
}
