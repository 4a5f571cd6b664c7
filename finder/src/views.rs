use crate::ranking::{FeedSnapshot, SortOrder};
use common::types::feed_phase::FeedPhase;
use common::types::restaurant_record::{RestaurantDetail, RestaurantRecord};
use std::fmt::Write;

const DETAIL_TAGLINE: &str = "A cozy place with a great atmosphere, perfect for families.";

fn heart(is_favorite: bool) -> &'static str {
    if is_favorite { "❤️" } else { "🤍" }
}

/// The restaurant list: one card per restaurant with rating, live distance and
/// favorite mark.
pub fn render_list(snapshot: &FeedSnapshot, order: SortOrder) -> String {
    let mut out = String::new();
    if snapshot.restaurants.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            match snapshot.phase {
                FeedPhase::Loading => "Loading restaurants...",
                _ => "No restaurants to show. Type 'reload' to try again.",
            }
        );
        return out;
    }

    let _ = writeln!(out, "Nearby restaurants (by {}):", order);
    for entry in snapshot.ranked(order) {
        let r = &entry.record;
        let _ = writeln!(out, "#{} {} {}", r.id, r.name, heart(entry.is_favorite));
        let _ = writeln!(out, "   ⭐ {:.1} ({} reviews)", r.rating, r.reviews);
        let _ = writeln!(out, "   📍 {:.2} km", entry.distance_km);
    }
    out
}

/// The map overlay as a list of markers. Without a position there is no map.
pub fn render_map(snapshot: &FeedSnapshot) -> String {
    let Some(center) = snapshot.position else {
        return "Map unavailable: location permission was not granted.\n".to_string();
    };
    let mut out = String::new();
    let _ = writeln!(out, "Map centered on you at {}", center);
    for r in &snapshot.restaurants {
        let _ = writeln!(
            out,
            "  📌 [{}] {} @ ({:.5}, {:.5})",
            r.id, r.name, r.latitude, r.longitude
        );
    }
    out
}

pub fn render_favorites(records: &[RestaurantRecord]) -> String {
    let mut out = String::from("❤️ Favorite restaurants\n");
    if records.is_empty() {
        out.push_str("No favorite restaurants yet.\n");
        return out;
    }
    for r in records {
        let _ = writeln!(out, "#{} {}", r.id, r.name);
        let _ = writeln!(out, "   {}", r.image);
    }
    out
}

pub fn render_detail(detail: &RestaurantDetail) -> String {
    format!(
        "{}\n{}\n⭐ {:.1} ({} reviews)\n{}\n",
        detail.name, detail.image, detail.rating, detail.reviews, DETAIL_TAGLINE
    )
}

pub fn render_help() -> String {
    [
        "Commands:",
        "  list [catalog|distance|rating]  show restaurants",
        "  map                             show restaurant markers",
        "  fav <id>                        like / unlike a restaurant",
        "  favs                            show liked restaurants",
        "  detail <id>                     show restaurant details",
        "  nav <id>                        driving directions",
        "  reload                          load restaurants again",
        "  quit                            exit",
    ]
    .join("\n")
        + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::tests::record;
    use common::types::position::Position;

    fn snapshot(position: Option<Position>) -> FeedSnapshot {
        FeedSnapshot {
            phase: FeedPhase::Ready,
            position,
            restaurants: vec![record(1, 4.2, 14.0379, 100.6233), record(2, 5.0, 14.04, 100.62)],
            favorites: [2].into_iter().collect(),
        }
    }

    #[test]
    fn test_list_without_position_shows_zero_distances() {
        let out = render_list(&snapshot(None), SortOrder::Catalog);
        assert_eq!(out.matches("📍 0.00 km").count(), 2);
        assert!(out.contains("#1 Restaurant 1 🤍"));
        assert!(out.contains("#2 Restaurant 2 ❤️"));
        assert!(out.contains("⭐ 4.2 (101 reviews)"));
    }

    #[test]
    fn test_list_with_position_shows_distance() {
        let out = render_list(
            &snapshot(Some(Position::new(14.0379, 100.6183))),
            SortOrder::Catalog,
        );
        assert!(out.contains("📍 0.54 km"));
    }

    #[test]
    fn test_list_while_loading() {
        let loading = FeedSnapshot {
            phase: FeedPhase::Loading,
            ..FeedSnapshot::default()
        };
        assert_eq!(render_list(&loading, SortOrder::Catalog), "Loading restaurants...\n");
    }

    #[test]
    fn test_map_requires_position() {
        assert!(render_map(&snapshot(None)).starts_with("Map unavailable"));
        let out = render_map(&snapshot(Some(Position::new(14.0379, 100.6183))));
        assert!(out.contains("[1] Restaurant 1 @ (14.03790, 100.62330)"));
    }

    #[test]
    fn test_favorites_view() {
        assert!(render_favorites(&[]).contains("No favorite restaurants yet."));
        let out = render_favorites(&[record(4, 4.4, 14.0, 100.0)]);
        assert!(out.contains("#4 Restaurant 4"));
        assert!(out.contains("https://img.example/4.jpg"));
    }

    #[test]
    fn test_detail_view() {
        let detail = RestaurantDetail::from(&record(3, 4.0, 14.0, 100.0));
        let out = render_detail(&detail);
        assert!(out.starts_with("Restaurant 3\nhttps://img.example/3.jpg\n⭐ 4.0 (103 reviews)\n"));
        assert!(out.contains(DETAIL_TAGLINE));
    }
}
