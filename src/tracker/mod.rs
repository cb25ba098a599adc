//! Tracking session subsystem.
//!
//! # Data Flow
//! ```text
//! PixelConfig
//!     → NavigationTracker::new (compile route lists, warn if inert)
//!     → on_navigation(path, override) per route change
//!         → decision subsystem (should this route track?)
//!         → session state (initialized yet?)
//!     → Option<TrackAction> for the embedding host
//! ```
//!
//! # Design Decisions
//! - The tracker owns the only mutable state in the crate (the loaded flag);
//!   everything below it is pure
//! - Hosts execute TrackActions; this crate never performs network I/O

pub mod navigation;

pub use navigation::{NavigationTracker, TrackAction};
