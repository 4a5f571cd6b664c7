use common::types::favorite_set::FavoriteSet;
use common::types::feed_phase::FeedPhase;
use common::types::position::Position;
use common::types::restaurant_record::RestaurantRecord;
use common::utils::calculate_distance;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Everything the views need, captured at one instant.
///
/// The controller never edits a published snapshot: it builds a new one and
/// swaps it in, so readers holding an `Arc<FeedSnapshot>` see a consistent state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedSnapshot {
    pub phase: FeedPhase,
    pub position: Option<Position>,
    pub restaurants: Vec<RestaurantRecord>,
    pub favorites: FavoriteSet,
}

/// A restaurant annotated for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub record: RestaurantRecord,
    pub distance_km: f64,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Catalog order, i.e. by id.
    #[default]
    Catalog,
    /// Nearest first.
    Distance,
    /// Best rated first.
    Rating,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "catalog" => Ok(SortOrder::Catalog),
            "distance" | "nearest" => Ok(SortOrder::Distance),
            "rating" => Ok(SortOrder::Rating),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Catalog => write!(f, "catalog"),
            SortOrder::Distance => write!(f, "distance"),
            SortOrder::Rating => write!(f, "rating"),
        }
    }
}

impl FeedSnapshot {
    pub fn position_known(&self) -> bool {
        self.position.is_some()
    }

    /// Distance from the current position, computed on every call.
    /// `0.0` while the position is unknown.
    pub fn distance_to(&self, record: &RestaurantRecord) -> f64 {
        calculate_distance(self.position, record.position())
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(id)
    }

    pub fn find(&self, id: u32) -> Option<&RestaurantRecord> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    pub fn ranked(&self, order: SortOrder) -> Vec<RankedEntry> {
        let mut entries: Vec<RankedEntry> = self
            .restaurants
            .iter()
            .map(|record| RankedEntry {
                record: record.clone(),
                distance_km: self.distance_to(record),
                is_favorite: self.is_favorite(record.id),
            })
            .collect();

        entries.sort_by(|a, b| {
            let primary = match order {
                SortOrder::Catalog => Ordering::Equal,
                SortOrder::Distance => a.distance_km.total_cmp(&b.distance_km),
                SortOrder::Rating => b.record.rating.total_cmp(&a.record.rating),
            };
            primary.then(a.record.id.cmp(&b.record.id))
        });
        entries
    }
}
