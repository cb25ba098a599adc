//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, logged as warnings)
//!     → PixelConfig (immutable)
//!     → consumed by the tracker and decision subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; it describes one tracking session
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Semantic findings are warnings, not errors: bad patterns fail closed
//!   at match time instead of rejecting the whole config

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::PixelConfig;
pub use schema::PixelIds;
pub use schema::RouteRules;
pub use validation::{validate_config, ConfigWarning};
