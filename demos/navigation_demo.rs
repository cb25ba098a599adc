use pixel_gate::config::{PixelConfig, PixelIds, RouteRules};
use pixel_gate::decision::PageOverride;
use pixel_gate::tracker::{NavigationTracker, TrackAction};

fn main() {
    // 1. Configure: one pixel, admin area excluded
    let config = PixelConfig {
        pixel_ids: PixelIds::from("1234567890"),
        routes: RouteRules {
            excluded_routes: vec!["/admin/**".to_string()],
            ..RouteRules::default()
        },
        ..PixelConfig::default()
    };

    let mut tracker = NavigationTracker::new(config);

    // 2. Replay a browsing session
    let session: [(&str, Option<bool>); 5] = [
        ("/", None),
        ("/shop", None),
        ("/admin/orders", None),
        ("/checkout", Some(false)), // page opts itself out
        ("/confirmation", None),
    ];

    for (path, page) in session {
        match tracker.on_navigation(path, PageOverride::from(page)) {
            Some(TrackAction::Initialize { pixel_ids }) => {
                println!("{path}: initialize pixels {}", pixel_ids.join(", "));
            }
            Some(TrackAction::PageView) => println!("{path}: page view"),
            None => println!("{path}: no tracking"),
        }
    }
}
