use crate::types::position::Position;
use serde::{Deserialize, Serialize};

/// One restaurant as produced by a feed load.
///
/// Rating, reviews and coordinates are synthesized per load and never change
/// afterwards; a reload produces a fresh set of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    /// Ordinal position in the catalog, starting at 1.
    pub id: u32,
    pub name: String,
    /// URI of the remote cover image.
    pub image: String,
    /// In `[4.0, 5.0]`, one decimal place.
    pub rating: f64,
    /// In `[50, 349]`.
    pub reviews: u32,
    pub latitude: f64,
    pub longitude: f64,
}

impl RestaurantRecord {
    pub fn position(&self) -> Position {
        Position::new(self.latitude, self.longitude)
    }
}

/// The fields handed to the detail screen, by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDetail {
    pub name: String,
    pub image: String,
    pub rating: f64,
    pub reviews: u32,
}

impl From<&RestaurantRecord> for RestaurantDetail {
    fn from(record: &RestaurantRecord) -> Self {
        Self {
            name: record.name.clone(),
            image: record.image.clone(),
            rating: record.rating,
            reviews: record.reviews,
        }
    }
}
