//! Navigation lifecycle state machine.
//!
//! # Responsibilities
//! - Remember whether the pixel has been initialized
//! - Map each navigation to the action the host should perform
//!
//! # Design Decisions
//! - First allowed navigation initializes; the pixel snippet records its own
//!   initial PageView, so no separate action is emitted for it
//! - Later allowed navigations emit PageView only when auto_track_page_view
//!   is set
//! - Without a pixel ID the tracker is inert: it warns once at construction
//!   and emits no actions

use tracing::{debug, warn};

use crate::config::PixelConfig;
use crate::decision::{PageOverride, RouteAuthorizer};

/// Action the embedding host should perform for a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackAction {
    /// Load the pixel and register the listed IDs. Initialization records
    /// the first PageView itself.
    Initialize { pixel_ids: Vec<String> },
    /// Record a page view on an already-initialized pixel.
    PageView,
}

/// Drives tracking across the navigations of one session.
///
/// The decision for each navigation is stateless; the tracker only adds the
/// loaded/not-loaded distinction that picks between full initialization and
/// a page-view notification.
#[derive(Debug, Clone)]
pub struct NavigationTracker {
    config: PixelConfig,
    authorizer: RouteAuthorizer,
    loaded: bool,
}

impl NavigationTracker {
    /// Build a tracker for one session, compiling the configured route
    /// lists through the shared pattern cache.
    pub fn new(config: PixelConfig) -> Self {
        if config.pixel_ids.is_empty() {
            warn!("no pixel ID configured, tracker will emit no actions");
        }

        let authorizer = RouteAuthorizer::cached(&config.routes);
        Self {
            config,
            authorizer,
            loaded: false,
        }
    }

    /// Process one navigation and return the action the host should take,
    /// if any.
    pub fn on_navigation(&mut self, path: &str, page: PageOverride) -> Option<TrackAction> {
        if self.config.pixel_ids.is_empty() {
            return None;
        }

        if !self.authorizer.allows(path, page) {
            debug!(%path, "tracking suppressed for route");
            return None;
        }

        if !self.loaded {
            self.loaded = true;
            return Some(TrackAction::Initialize {
                pixel_ids: self.config.pixel_ids.as_slice().to_vec(),
            });
        }

        if self.config.auto_track_page_view {
            Some(TrackAction::PageView)
        } else {
            None
        }
    }

    /// Whether initialization has already happened this session.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PixelIds, RouteRules};

    fn tracker(excluded: &[&str]) -> NavigationTracker {
        NavigationTracker::new(PixelConfig {
            pixel_ids: PixelIds::from("1234567890"),
            routes: RouteRules {
                excluded_routes: excluded.iter().map(|s| s.to_string()).collect(),
                ..RouteRules::default()
            },
            ..PixelConfig::default()
        })
    }

    #[test]
    fn test_first_allowed_navigation_initializes() {
        let mut tracker = tracker(&[]);
        assert!(!tracker.is_loaded());

        let action = tracker.on_navigation("/", PageOverride::Unspecified);
        assert_eq!(
            action,
            Some(TrackAction::Initialize {
                pixel_ids: vec!["1234567890".to_string()],
            })
        );
        assert!(tracker.is_loaded());
    }

    #[test]
    fn test_later_navigations_emit_page_view() {
        let mut tracker = tracker(&[]);
        tracker.on_navigation("/", PageOverride::Unspecified);

        let action = tracker.on_navigation("/shop", PageOverride::Unspecified);
        assert_eq!(action, Some(TrackAction::PageView));
    }

    #[test]
    fn test_initialization_deferred_past_suppressed_routes() {
        let mut tracker = tracker(&["/admin/**"]);

        assert_eq!(
            tracker.on_navigation("/admin/login", PageOverride::Unspecified),
            None
        );
        assert!(!tracker.is_loaded());

        // The first allowed navigation still gets the full initialization.
        assert!(matches!(
            tracker.on_navigation("/shop", PageOverride::Unspecified),
            Some(TrackAction::Initialize { .. })
        ));
    }

    #[test]
    fn test_auto_track_page_view_off_silences_later_navigations() {
        let mut tracker = NavigationTracker::new(PixelConfig {
            pixel_ids: PixelIds::from("1234567890"),
            auto_track_page_view: false,
            ..PixelConfig::default()
        });

        assert!(matches!(
            tracker.on_navigation("/", PageOverride::Unspecified),
            Some(TrackAction::Initialize { .. })
        ));
        assert_eq!(tracker.on_navigation("/next", PageOverride::Unspecified), None);
    }

    #[test]
    fn test_no_pixel_ids_means_no_actions() {
        let mut tracker = NavigationTracker::new(PixelConfig::default());

        assert_eq!(tracker.on_navigation("/", PageOverride::Unspecified), None);
        assert_eq!(tracker.on_navigation("/", PageOverride::Allow), None);
        assert!(!tracker.is_loaded());
    }

    #[test]
    fn test_page_override_steers_the_tracker() {
        let mut tracker = tracker(&["/excluded/**"]);

        // Deny on an otherwise-allowed route.
        assert_eq!(tracker.on_navigation("/shop", PageOverride::Deny), None);
        // Allow on an excluded route wins.
        assert!(matches!(
            tracker.on_navigation("/excluded/page", PageOverride::Allow),
            Some(TrackAction::Initialize { .. })
        ));
    }

    #[test]
    fn test_multiple_pixel_ids_initialize_together() {
        let mut tracker = NavigationTracker::new(PixelConfig {
            pixel_ids: PixelIds::from(vec!["111".to_string(), "222".to_string()]),
            ..PixelConfig::default()
        });

        assert_eq!(
            tracker.on_navigation("/", PageOverride::Unspecified),
            Some(TrackAction::Initialize {
                pixel_ids: vec!["111".to_string(), "222".to_string()],
            })
        );
    }
}
