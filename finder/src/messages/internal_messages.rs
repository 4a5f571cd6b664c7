use crate::ranking::FeedSnapshot;
use actix::Message;
use common::types::favorite_set::FavoriteSet;
use common::types::position::Position;
use common::types::restaurant_record::RestaurantRecord;
use std::sync::Arc;

/////////////////////////////////////////////////////////////////////
// Locator
/////////////////////////////////////////////////////////////////////

/// Asks for the device position. `None` when permission is denied or
/// acquisition fails.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Option<Position>")]
pub struct AcquirePosition;

/////////////////////////////////////////////////////////////////////
// Feed synthesizer
/////////////////////////////////////////////////////////////////////

/// Builds a fresh restaurant list from the local catalog.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Vec<RestaurantRecord>")]
pub struct SynthesizeFeed;

/////////////////////////////////////////////////////////////////////
// Favorite store
/////////////////////////////////////////////////////////////////////

/// Reads the persisted favorite ids. Missing or corrupt data yields an empty set.
#[derive(Message, Debug, Clone)]
#[rtype(result = "FavoriteSet")]
pub struct LoadFavorites;

/// Flips `id` in `current`, persists the result and returns it.
#[derive(Message, Debug, Clone)]
#[rtype(result = "FavoriteSet")]
pub struct ToggleStoredFavorite {
    pub id: u32,
    pub current: FavoriteSet,
}

/// Persists the full restaurant list so the favorites view can be rebuilt later.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct SaveSnapshot {
    pub restaurants: Vec<RestaurantRecord>,
}

/// Rebuilds the favorite restaurants from the persisted ids and snapshot.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Vec<RestaurantRecord>")]
pub struct ReconstructFavorites;

/////////////////////////////////////////////////////////////////////
// Ranked feed controller
/////////////////////////////////////////////////////////////////////

/// Starts a new load: position, feed and favorites are requested concurrently.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct Activate;

/// Stops caring about in-flight results of the current load.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct Deactivate;

#[derive(Message, Debug, Clone)]
#[rtype(result = "FavoriteSet")]
pub struct ToggleFavorite {
    pub id: u32,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "Arc<FeedSnapshot>")]
pub struct GetFeed;

/// Distance in kilometers from the last known position, `0.0` if unknown.
#[derive(Message, Debug, Clone)]
#[rtype(result = "f64")]
pub struct DistanceTo {
    pub record: RestaurantRecord,
}

/////////////////////////////////////////////////////////////////////
// UI
/////////////////////////////////////////////////////////////////////

/// One line typed by the user. Answers with the rendered screen.
#[derive(Message, Debug, Clone)]
#[rtype(result = "String")]
pub struct UserInput(pub String);
