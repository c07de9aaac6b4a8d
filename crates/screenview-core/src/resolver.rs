//! Screen-name resolver: maps navigation state to a screen identifier.
//!
//! Two tables back the resolver:
//!
//! - **mode table**: every application mode except `LoggedIn`.
//! - **page table**: every page selection valid inside `LoggedIn`.
//!
//! Both tables are validated to be total at construction, so the only
//! resolution failure left at runtime is a `LoggedIn` state without a page.
//!
//! Tables can be loaded from TOML:
//!
//! ```toml
//! [modes]
//! loading = "WebLoading"
//! login = "Login"
//! # ...
//!
//! [pages]
//! room_view = "Room"
//! # ...
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, ResolveError};
use crate::types::{ApplicationMode, NavigationState, PageType, ScreenName};

const DEFAULT_MODE_SCREENS: &[(ApplicationMode, &str)] = &[
    (ApplicationMode::Loading, "WebLoading"),
    (ApplicationMode::Welcome, "Welcome"),
    (ApplicationMode::Login, "Login"),
    (ApplicationMode::Register, "Register"),
    (ApplicationMode::ForgotPassword, "ForgotPassword"),
    (ApplicationMode::CompleteSecurity, "WebCompleteSecurity"),
    (ApplicationMode::E2eSetup, "WebE2ESetup"),
    (ApplicationMode::SoftLogout, "WebSoftLogout"),
];

const DEFAULT_PAGE_SCREENS: &[(PageType, &str)] = &[
    (PageType::HomePage, "Home"),
    (PageType::RoomView, "Room"),
    (PageType::UserView, "User"),
    (PageType::GroupView, "Group"),
    (PageType::MyGroups, "MyGroups"),
];

/// Serialized form of the resolver tables, keyed by snake_case names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenTables {
    #[serde(default)]
    pub modes: BTreeMap<String, ScreenName>,
    #[serde(default)]
    pub pages: BTreeMap<String, ScreenName>,
}

impl ScreenTables {
    /// Parse a TOML string into raw (unvalidated) tables.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

/// Total lookup from [`NavigationState`] to [`ScreenName`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenNameResolver {
    modes: BTreeMap<ApplicationMode, ScreenName>,
    pages: BTreeMap<PageType, ScreenName>,
}

impl ScreenNameResolver {
    /// Build a resolver from raw tables, rejecting unknown keys and any gap
    /// in either table.
    pub fn new(tables: ScreenTables) -> Result<Self, ConfigError> {
        let modes = tables
            .modes
            .into_iter()
            .map(|(key, name)| Ok((key.parse::<ApplicationMode>()?, name)))
            .collect::<Result<BTreeMap<_, _>, ConfigError>>()?;
        let pages = tables
            .pages
            .into_iter()
            .map(|(key, name)| Ok((key.parse::<PageType>()?, name)))
            .collect::<Result<BTreeMap<_, _>, ConfigError>>()?;
        Self::from_maps(modes, pages)
    }

    /// Build a resolver from typed tables, validating totality.
    pub fn from_maps(
        modes: BTreeMap<ApplicationMode, ScreenName>,
        pages: BTreeMap<PageType, ScreenName>,
    ) -> Result<Self, ConfigError> {
        if modes.contains_key(&ApplicationMode::LoggedIn) {
            return Err(ConfigError::LoggedInModeMapped(ApplicationMode::LoggedIn));
        }
        for mode in ApplicationMode::not_logged_in() {
            match modes.get(&mode) {
                None => return Err(ConfigError::MissingMode(mode)),
                Some(name) if name.is_empty() => {
                    return Err(ConfigError::EmptyScreenName(format!("mode {mode}")));
                }
                Some(_) => {}
            }
        }
        for page in PageType::ALL {
            match pages.get(&page) {
                None => return Err(ConfigError::MissingPage(page)),
                Some(name) if name.is_empty() => {
                    return Err(ConfigError::EmptyScreenName(format!("page {page}")));
                }
                Some(_) => {}
            }
        }
        Ok(Self { modes, pages })
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Self::new(ScreenTables::from_toml(s)?)
    }

    /// Load and validate tables from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let resolver = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded screen tables");
        Ok(resolver)
    }

    /// Export the tables back to their serialized form.
    pub fn tables(&self) -> ScreenTables {
        ScreenTables {
            modes: self
                .modes
                .iter()
                .map(|(mode, name)| (mode.as_str().to_owned(), name.clone()))
                .collect(),
            pages: self
                .pages
                .iter()
                .map(|(page, name)| (page.as_str().to_owned(), name.clone()))
                .collect(),
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(self.tables().to_toml()?)
    }

    /// Resolve the screen for a navigation state.
    ///
    /// `LoggedIn` looks up the page table; every other mode looks up the
    /// mode table and ignores `page`.
    pub fn resolve(&self, nav: &NavigationState) -> Result<&ScreenName, ResolveError> {
        if nav.mode.is_logged_in() {
            let page = nav.page.ok_or(ResolveError::MissingPage(nav.mode))?;
            self.screen_for_page(page)
        } else {
            self.screen_for_mode(nav.mode)
        }
    }

    pub fn screen_for_mode(&self, mode: ApplicationMode) -> Result<&ScreenName, ResolveError> {
        self.modes.get(&mode).ok_or(ResolveError::UnmappedMode(mode))
    }

    pub fn screen_for_page(&self, page: PageType) -> Result<&ScreenName, ResolveError> {
        self.pages.get(&page).ok_or(ResolveError::UnmappedPage(page))
    }
}

impl Default for ScreenNameResolver {
    fn default() -> Self {
        Self {
            modes: DEFAULT_MODE_SCREENS
                .iter()
                .map(|&(mode, name)| (mode, ScreenName::from(name)))
                .collect(),
            pages: DEFAULT_PAGE_SCREENS
                .iter()
                .map(|&(page, name)| (page, ScreenName::from(name)))
                .collect(),
        }
    }
}
