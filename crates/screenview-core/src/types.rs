use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::ResolveError;

// ─── Application mode & page ─────────────────────────────────────

/// Top-level application mode (the outer navigation view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationMode {
    Loading,
    Welcome,
    Login,
    Register,
    ForgotPassword,
    CompleteSecurity,
    E2eSetup,
    SoftLogout,
    LoggedIn,
}

impl ApplicationMode {
    pub const ALL: [Self; 9] = [
        Self::Loading,
        Self::Welcome,
        Self::Login,
        Self::Register,
        Self::ForgotPassword,
        Self::CompleteSecurity,
        Self::E2eSetup,
        Self::SoftLogout,
        Self::LoggedIn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Welcome => "welcome",
            Self::Login => "login",
            Self::Register => "register",
            Self::ForgotPassword => "forgot_password",
            Self::CompleteSecurity => "complete_security",
            Self::E2eSetup => "e2e_setup",
            Self::SoftLogout => "soft_logout",
            Self::LoggedIn => "logged_in",
        }
    }

    /// The single mode in which the page selection drives resolution.
    pub fn is_logged_in(self) -> bool {
        self == Self::LoggedIn
    }

    /// Modes resolved through the mode table (everything but `LoggedIn`).
    pub fn not_logged_in() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|m| !m.is_logged_in())
    }
}

impl fmt::Display for ApplicationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationMode {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == lower)
            .ok_or_else(|| ResolveError::UnknownMode(s.to_owned()))
    }
}

/// Page selection inside the logged-in mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    HomePage,
    RoomView,
    UserView,
    GroupView,
    MyGroups,
}

impl PageType {
    pub const ALL: [Self; 5] = [
        Self::HomePage,
        Self::RoomView,
        Self::UserView,
        Self::GroupView,
        Self::MyGroups,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::HomePage => "home_page",
            Self::RoomView => "room_view",
            Self::UserView => "user_view",
            Self::GroupView => "group_view",
            Self::MyGroups => "my_groups",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageType {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| ResolveError::UnknownPage(s.to_owned()))
    }
}

// ─── Navigation state ────────────────────────────────────────────

/// Last navigation reported by the application.
///
/// `page` only matters when `mode` is [`ApplicationMode::LoggedIn`]; it is
/// ignored by resolution for every other mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigationState {
    pub mode: ApplicationMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageType>,
}

impl NavigationState {
    pub fn new(mode: ApplicationMode, page: Option<PageType>) -> Self {
        Self { mode, page }
    }

    pub fn logged_in(page: PageType) -> Self {
        Self::new(ApplicationMode::LoggedIn, Some(page))
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(ApplicationMode::Loading, None)
    }
}

// ─── Screen identity ─────────────────────────────────────────────

/// Analytics-facing screen identifier, e.g. `"Room"` or `"Login"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenName(String);

impl ScreenName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ScreenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ScreenName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ScreenName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ScreenName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ScreenName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ScreenName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ─── Screen event ────────────────────────────────────────────────

/// Analytics event name. Only screen views exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventName {
    #[default]
    #[serde(rename = "$screen")]
    Screen,
}

impl EventName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Screen => "$screen",
        }
    }
}

/// A screen-view event handed to the analytics sink.
///
/// `duration_ms` is present for navigation-driven transitions and absent for
/// override entry and the return to the base screen after an override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenEvent {
    #[serde(default)]
    pub event_name: EventName,
    pub screen_name: ScreenName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ScreenEvent {
    pub fn new(screen_name: ScreenName, duration_ms: Option<u64>) -> Self {
        Self {
            event_name: EventName::Screen,
            screen_name,
            duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_str() {
        for mode in ApplicationMode::ALL {
            assert_eq!(mode.as_str().parse::<ApplicationMode>().unwrap(), mode);
        }
        assert!("LOGGED_IN".parse::<ApplicationMode>().unwrap().is_logged_in());
        assert!("lobby".parse::<ApplicationMode>().is_err());
    }

    #[test]
    fn page_from_str_rejects_unknown() {
        assert_eq!("room_view".parse::<PageType>().unwrap(), PageType::RoomView);
        let err = "settings".parse::<PageType>().unwrap_err();
        assert!(err.to_string().contains("settings"));
    }

    #[test]
    fn not_logged_in_excludes_logged_in() {
        let modes: Vec<_> = ApplicationMode::not_logged_in().collect();
        assert_eq!(modes.len(), ApplicationMode::ALL.len() - 1);
        assert!(!modes.contains(&ApplicationMode::LoggedIn));
    }

    #[test]
    fn navigation_defaults_to_loading() {
        let nav = NavigationState::default();
        assert_eq!(nav.mode, ApplicationMode::Loading);
        assert_eq!(nav.page, None);
    }

    #[test]
    fn screen_event_wire_shape_with_duration() {
        let ev = ScreenEvent::new("Login".into(), Some(500));
        let json = serde_json::to_string(&ev).unwrap();
        assert_eq!(
            json,
            r#"{"eventName":"$screen","screenName":"Login","durationMs":500}"#
        );
    }

    #[test]
    fn screen_event_omits_absent_duration() {
        let ev = ScreenEvent::new("Feedback".into(), None);
        let json = serde_json::to_string(&ev).unwrap();
        assert_eq!(json, r#"{"eventName":"$screen","screenName":"Feedback"}"#);
    }

    #[test]
    fn screen_event_parses_without_event_name() {
        let ev: ScreenEvent = serde_json::from_str(r#"{"screenName":"Room"}"#).unwrap();
        assert_eq!(ev.event_name, EventName::Screen);
        assert_eq!(ev.screen_name, "Room");
        assert_eq!(ev.duration_ms, None);
    }
}
