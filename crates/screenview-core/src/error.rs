//! Error types for screen-table configuration and resolution.

use thiserror::Error;

use crate::types::{ApplicationMode, PageType};

/// Screen tables that cannot back a total resolver.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read screen tables: {0}")]
    Io(#[from] std::io::Error),

    #[error("screen tables TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("screen tables TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("no screen mapped for mode {0}")]
    MissingMode(ApplicationMode),

    #[error("no screen mapped for page {0}")]
    MissingPage(PageType),

    #[error("empty screen name for {0}")]
    EmptyScreenName(String),

    #[error("mode {0} resolves through the page table and cannot be mapped directly")]
    LoggedInModeMapped(ApplicationMode),

    #[error(transparent)]
    UnknownKey(#[from] ResolveError),
}

/// Failure to turn a navigation state or table key into a screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("mode {0} requires a page selection")]
    MissingPage(ApplicationMode),

    #[error("no screen mapped for mode {0}")]
    UnmappedMode(ApplicationMode),

    #[error("no screen mapped for page {0}")]
    UnmappedPage(PageType),

    #[error("unknown application mode: {0:?}")]
    UnknownMode(String),

    #[error("unknown page type: {0:?}")]
    UnknownPage(String),
}
