//! Screen tracker: base navigation tracking with a single override slot.
//!
//! The tracker is in one of two derived modes:
//!
//! - **Base** (no override): every navigation change emits a screen event
//!   carrying the caller's dwell duration.
//! - **Overridden**: navigation changes are recorded but emit nothing. The
//!   override's own screen was emitted when it was claimed.
//!
//! A release only clears the slot when it names the override currently held.
//! A stale release from an element whose claim was already replaced is
//! ignored, so it cannot end a newer, unrelated override.
//!
//! Overrides do not stack: a second claim replaces the first, and releasing
//! it returns to the base screen rather than to the earlier override.

use crate::resolver::ScreenNameResolver;
use crate::sink::AnalyticsSink;
use crate::types::{ApplicationMode, NavigationState, PageType, ScreenEvent, ScreenName};

/// What a tracker call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    /// An event was recorded to the sink.
    Emitted,
    /// State was updated but an active override held back the event.
    Suppressed,
    /// Nothing changed (empty override name or non-matching release).
    Ignored,
}

/// Resolves the visible screen and reports changes to an [`AnalyticsSink`].
///
/// One tracker is meant to exist per process, owned by whatever wires the
/// navigation layer and the view lifecycle together.
#[derive(Debug)]
pub struct ScreenTracker<S> {
    resolver: ScreenNameResolver,
    sink: S,
    navigation: NavigationState,
    active_override: Option<ScreenName>,
}

impl<S: AnalyticsSink> ScreenTracker<S> {
    pub fn new(resolver: ScreenNameResolver, sink: S) -> Self {
        Self {
            resolver,
            sink,
            navigation: NavigationState::default(),
            active_override: None,
        }
    }

    /// Tracker backed by the built-in screen tables.
    pub fn with_default_tables(sink: S) -> Self {
        Self::new(ScreenNameResolver::default(), sink)
    }

    /// Record a navigation change.
    ///
    /// The navigation state is always overwritten, even while an override is
    /// active, so that releasing the override resolves the latest screen.
    ///
    /// # Panics
    ///
    /// With no active override, panics if `mode` is `LoggedIn` and `page` is
    /// `None`. Callers must always pass the page selection in that mode.
    pub fn track_page_change(
        &mut self,
        mode: ApplicationMode,
        page: Option<PageType>,
        duration_ms: Option<u64>,
    ) -> TrackOutcome {
        self.navigation = NavigationState::new(mode, page);
        if let Some(active) = &self.active_override {
            tracing::debug!(
                %mode,
                override_screen = %active,
                "navigation change suppressed by override"
            );
            return TrackOutcome::Suppressed;
        }
        self.track_base(duration_ms);
        TrackOutcome::Emitted
    }

    /// Claim the visible screen for an override.
    ///
    /// The newest claim always wins and is re-emitted, even when it repeats
    /// the active name. An empty name is ignored.
    pub fn track_override(&mut self, screen_name: &str) -> TrackOutcome {
        if screen_name.is_empty() {
            return TrackOutcome::Ignored;
        }
        let screen_name = ScreenName::from(screen_name);
        if let Some(previous) = self.active_override.as_ref().filter(|p| **p != screen_name) {
            tracing::debug!(%previous, next = %screen_name, "override replaced");
        }
        self.active_override = Some(screen_name.clone());
        self.emit(ScreenEvent::new(screen_name, None));
        TrackOutcome::Emitted
    }

    /// Release an override previously claimed under `screen_name`.
    ///
    /// Ignored unless `screen_name` is the active override. On success the
    /// base screen is emitted without a duration.
    ///
    /// # Panics
    ///
    /// Panics if the last recorded navigation is `LoggedIn` without a page.
    pub fn clear_override(&mut self, screen_name: &str) -> TrackOutcome {
        match &self.active_override {
            Some(active) if active == screen_name => {}
            active => {
                tracing::debug!(
                    release = screen_name,
                    active = ?active.as_ref().map(ScreenName::as_str),
                    "stale override release ignored"
                );
                return TrackOutcome::Ignored;
            }
        }
        self.active_override = None;
        self.track_base(None);
        TrackOutcome::Emitted
    }

    fn track_base(&mut self, duration_ms: Option<u64>) {
        let screen_name = match self.resolver.resolve(&self.navigation) {
            Ok(name) => name.clone(),
            Err(e) => {
                tracing::error!(navigation = ?self.navigation, "screen resolution failed: {e}");
                panic!("screen resolution failed for {:?}: {e}", self.navigation);
            }
        };
        self.emit(ScreenEvent::new(screen_name, duration_ms));
    }

    fn emit(&mut self, event: ScreenEvent) {
        tracing::trace!(
            screen = %event.screen_name,
            duration_ms = ?event.duration_ms,
            "screen event"
        );
        self.sink.record(event);
    }
}

impl<S> ScreenTracker<S> {
    /// Last navigation reported through `track_page_change`.
    pub fn navigation(&self) -> NavigationState {
        self.navigation
    }

    pub fn active_override(&self) -> Option<&ScreenName> {
        self.active_override.as_ref()
    }

    pub fn is_overridden(&self) -> bool {
        self.active_override.is_some()
    }

    pub fn resolver(&self) -> &ScreenNameResolver {
        &self.resolver
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;

    fn tracker() -> ScreenTracker<RecordingSink> {
        ScreenTracker::with_default_tables(RecordingSink::new())
    }

    fn screens(t: &ScreenTracker<RecordingSink>) -> Vec<(&str, Option<u64>)> {
        t.sink()
            .events()
            .iter()
            .map(|e| (e.screen_name.as_str(), e.duration_ms))
            .collect()
    }

    #[test]
    fn starts_in_base_mode_on_loading() {
        let t = tracker();
        assert!(!t.is_overridden());
        assert_eq!(t.navigation(), NavigationState::default());
        assert!(t.sink().events().is_empty());
    }

    #[test]
    fn base_tracking_emits_with_duration() {
        let mut t = tracker();
        assert_eq!(
            t.track_page_change(ApplicationMode::Loading, None, None),
            TrackOutcome::Emitted
        );
        t.track_page_change(ApplicationMode::Login, None, Some(500));
        assert_eq!(screens(&t), vec![("WebLoading", None), ("Login", Some(500))]);
    }

    #[test]
    fn logged_in_resolves_through_page() {
        let mut t = tracker();
        t.track_page_change(ApplicationMode::LoggedIn, Some(PageType::RoomView), Some(42));
        t.track_page_change(ApplicationMode::LoggedIn, Some(PageType::HomePage), Some(7));
        assert_eq!(screens(&t), vec![("Room", Some(42)), ("Home", Some(7))]);
    }

    #[test]
    fn override_suppresses_navigation_and_release_returns_to_latest() {
        let mut t = tracker();
        t.track_page_change(ApplicationMode::Login, None, Some(500));
        assert_eq!(t.track_override("Feedback"), TrackOutcome::Emitted);
        assert_eq!(
            t.track_page_change(ApplicationMode::Register, None, Some(300)),
            TrackOutcome::Suppressed
        );
        assert_eq!(t.navigation().mode, ApplicationMode::Register);
        assert_eq!(t.clear_override("Feedback"), TrackOutcome::Emitted);
        assert_eq!(
            screens(&t),
            vec![("Login", Some(500)), ("Feedback", None), ("Register", None)]
        );
        assert!(!t.is_overridden());
    }

    #[test]
    fn newer_override_replaces_and_stale_release_is_ignored() {
        let mut t = tracker();
        t.track_override("A");
        t.track_override("B");
        assert_eq!(t.active_override().map(ScreenName::as_str), Some("B"));
        assert_eq!(t.clear_override("A"), TrackOutcome::Ignored);
        assert_eq!(t.active_override().map(ScreenName::as_str), Some("B"));
        assert_eq!(t.clear_override("B"), TrackOutcome::Emitted);
        assert_eq!(
            screens(&t),
            vec![("A", None), ("B", None), ("WebLoading", None)]
        );
    }

    #[test]
    fn repeating_the_active_override_re_emits() {
        let mut t = tracker();
        t.track_override("Dialog");
        t.track_override("Dialog");
        assert_eq!(screens(&t), vec![("Dialog", None), ("Dialog", None)]);
    }

    #[test]
    fn empty_override_is_ignored() {
        let mut t = tracker();
        assert_eq!(t.track_override(""), TrackOutcome::Ignored);
        assert!(!t.is_overridden());
        assert!(t.sink().events().is_empty());
    }

    #[test]
    fn release_without_override_is_ignored() {
        let mut t = tracker();
        assert_eq!(t.clear_override("Feedback"), TrackOutcome::Ignored);
        assert_eq!(t.clear_override(""), TrackOutcome::Ignored);
        assert!(t.sink().events().is_empty());
    }

    #[test]
    fn release_after_logged_in_navigation_resolves_page() {
        let mut t = tracker();
        t.track_override("ShareDialog");
        t.track_page_change(ApplicationMode::LoggedIn, Some(PageType::UserView), Some(10));
        t.clear_override("ShareDialog");
        let last = t.sink().events().last().unwrap();
        assert_eq!(last.screen_name, "User");
        assert_eq!(last.duration_ms, None);
    }

    #[test]
    fn logged_in_without_page_is_stored_while_overridden() {
        let mut t = tracker();
        t.track_override("Modal");
        assert_eq!(
            t.track_page_change(ApplicationMode::LoggedIn, None, None),
            TrackOutcome::Suppressed
        );
        assert_eq!(t.navigation().page, None);
    }

    #[test]
    #[should_panic(expected = "screen resolution failed")]
    fn logged_in_without_page_panics_in_base_mode() {
        let mut t = tracker();
        t.track_page_change(ApplicationMode::LoggedIn, None, Some(1));
    }

    #[test]
    fn into_sink_returns_recorded_events() {
        let mut t = tracker();
        t.track_page_change(ApplicationMode::Welcome, None, Some(3));
        let sink = t.into_sink();
        assert_eq!(sink.events()[0].screen_name, "Welcome");
    }
}
