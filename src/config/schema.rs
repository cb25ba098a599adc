//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the tracker.
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so an empty config is valid.

use serde::{Deserialize, Serialize};

/// Pixel identifiers: a single ID or a list of IDs.
///
/// Accepts both `pixel_ids = "123"` and `pixel_ids = ["123", "456"]`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PixelIds {
    /// A single pixel ID.
    One(String),
    /// Several pixel IDs; every listed pixel receives the same events.
    Many(Vec<String>),
}

impl PixelIds {
    /// All configured IDs, in order.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::One(id) => std::slice::from_ref(id),
            Self::Many(ids) => ids,
        }
    }

    /// True when no pixel is configured. A single empty string counts as
    /// unconfigured (it is the default).
    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(id) => id.is_empty(),
            Self::Many(ids) => ids.is_empty(),
        }
    }
}

impl Default for PixelIds {
    fn default() -> Self {
        Self::One(String::new())
    }
}

impl From<&str> for PixelIds {
    fn from(id: &str) -> Self {
        Self::One(id.to_string())
    }
}

impl From<Vec<String>> for PixelIds {
    fn from(ids: Vec<String>) -> Self {
        Self::Many(ids)
    }
}

/// Route lists controlling where tracking may fire.
///
/// Patterns use glob syntax: `*` matches within one path segment, `**`
/// matches across segments. A trailing `/**` also matches the parent path
/// itself.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouteRules {
    /// Routes to track. If set, ONLY these routes will be tracked.
    pub included_routes: Vec<String>,

    /// Routes to ignore. If set, these routes will NOT be tracked.
    pub excluded_routes: Vec<String>,
}

impl RouteRules {
    /// True when neither list is configured.
    pub fn is_empty(&self) -> bool {
        self.included_routes.is_empty() && self.excluded_routes.is_empty()
    }
}

/// Root configuration for the tracking pixel integration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PixelConfig {
    /// Single pixel ID or array of pixel IDs.
    pub pixel_ids: PixelIds,

    /// Record a PageView on navigations after the first (default: true).
    pub auto_track_page_view: bool,

    /// Enable verbose decision logging (default: false).
    pub debug: bool,

    /// Enable tracking on localhost (default: false). Consumed by the
    /// embedding host; route decisions see paths only.
    pub enable_localhost: bool,

    /// Include/exclude route patterns.
    #[serde(flatten)]
    pub routes: RouteRules,
}

impl Default for PixelConfig {
    fn default() -> Self {
        Self {
            pixel_ids: PixelIds::default(),
            auto_track_page_view: true,
            debug: false,
            enable_localhost: false,
            routes: RouteRules::default(),
        }
    }
}
