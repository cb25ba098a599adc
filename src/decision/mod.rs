//! Tracking decision subsystem.
//!
//! # Data Flow
//! ```text
//! navigation (path, page override)
//!     → authorizer.rs (decision ladder)
//!         1. page override deny  → suppress
//!         2. page override allow → track
//!         3. include list set    → track iff any pattern matches
//!         4. exclude list set    → track iff no pattern matches
//!         5. nothing configured  → track
//!     → boolean should-track decision
//! ```
//!
//! # Design Decisions
//! - Decisions are pure functions of path, override, and rules; safe to
//!   call on every navigation, first load included
//! - Pattern compilation happens at authorizer construction, not per call

pub mod authorizer;
pub mod page;

pub use authorizer::{is_allowed, RouteAuthorizer};
pub use page::PageOverride;
