//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Flag route patterns that will never match before they silently drop events
//! - Flag missing or blank pixel IDs
//!
//! # Design Decisions
//! - Returns all warnings, not just first
//! - Validation is pure function: PixelConfig → Vec<ConfigWarning>
//! - Warnings never reject a config; invalid patterns already degrade to
//!   never-matching rules at decision time, validation only surfaces them

use thiserror::Error;

use crate::config::schema::PixelConfig;
use crate::pattern;

/// A non-fatal problem found in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No pixel ID is configured; the tracker will stay inert.
    #[error("no pixel ID configured, tracking is disabled")]
    NoPixelIds,

    /// A listed pixel ID is blank.
    #[error("pixel ID at index {0} is blank")]
    BlankPixelId(usize),

    /// A route pattern failed to compile and will never match anything.
    #[error("{list} pattern {pattern:?} is invalid and will never match")]
    UnmatchablePattern {
        list: &'static str,
        pattern: String,
    },
}

/// Check a configuration for problems worth surfacing.
///
/// Returns every warning found, in field declaration order.
pub fn validate_config(config: &PixelConfig) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.pixel_ids.is_empty() {
        warnings.push(ConfigWarning::NoPixelIds);
    } else {
        for (index, id) in config.pixel_ids.as_slice().iter().enumerate() {
            if id.trim().is_empty() {
                warnings.push(ConfigWarning::BlankPixelId(index));
            }
        }
    }

    for (list, patterns) in [
        ("included_routes", &config.routes.included_routes),
        ("excluded_routes", &config.routes.excluded_routes),
    ] {
        for pattern in patterns {
            if pattern::try_compile(pattern).is_err() {
                warnings.push(ConfigWarning::UnmatchablePattern {
                    list,
                    pattern: pattern.clone(),
                });
            }
        }
    }

    warnings
}
