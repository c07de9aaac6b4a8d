//! screenview-core: screen-view tracking with transient screen overrides.
//!
//! Resolves the screen a user is looking at from navigation state (an
//! application mode, plus a page selection when logged in) and reports every
//! change to an analytics sink. View elements such as dialogs can temporarily
//! claim the visible screen, holding back navigation-driven events until they
//! release it.
//!
//! Pure library: no async, no global state. The owner constructs one
//! [`ScreenTracker`] and passes it to the navigation layer and view lifecycle.

pub mod command;
pub mod error;
pub mod resolver;
pub mod scope;
pub mod sink;
pub mod tracker;
pub mod types;

pub use command::TrackerCommand;
pub use error::{ConfigError, ResolveError};
pub use resolver::{ScreenNameResolver, ScreenTables};
pub use scope::ScreenOverride;
pub use sink::{AnalyticsSink, RecordingSink};
pub use tracker::{ScreenTracker, TrackOutcome};
pub use types::{ApplicationMode, EventName, NavigationState, PageType, ScreenEvent, ScreenName};
