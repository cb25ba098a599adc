//! Route-aware tracking pixel gate.
//!
//! Decides, per navigation, whether an analytics pixel should fire: glob
//! route patterns compile to anchored matchers, include/exclude lists and
//! page-level overrides feed a fixed-precedence decision, and a small
//! session state machine turns decisions into initialize/page-view actions.

pub mod config;
pub mod decision;
pub mod pattern;
pub mod tracker;

pub use config::{load_config, PixelConfig};
pub use decision::{is_allowed, PageOverride, RouteAuthorizer};
pub use pattern::CompiledPattern;
pub use tracker::{NavigationTracker, TrackAction};
