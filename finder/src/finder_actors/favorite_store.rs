use crate::messages::{LoadFavorites, ReconstructFavorites, SaveSnapshot, ToggleStoredFavorite};
use actix::prelude::*;
use colored::Color;
use common::constants::{FAVORITES_KEY, RESTAURANTS_KEY};
use common::error::FinderError;
use common::logger::Logger;
use common::storage::{KeyValueStore, read_json, write_json};
use common::types::favorite_set::FavoriteSet;
use common::types::restaurant_record::RestaurantRecord;

/// Returns the snapshot records whose id is in `ids`, in snapshot order.
/// Either input missing means there is nothing to show.
pub fn reconstruct_favorites(
    ids: Option<&FavoriteSet>,
    snapshot: Option<&[RestaurantRecord]>,
) -> Vec<RestaurantRecord> {
    match (ids, snapshot) {
        (Some(ids), Some(snapshot)) => snapshot
            .iter()
            .filter(|r| ids.contains(r.id))
            .cloned()
            .collect(),
        _ => Vec::new(),
    }
}

/// The `FavoriteStore` actor owns the durable side of the favorites feature:
/// the favorite id set (key `"favorites"`) and the last restaurant snapshot
/// (key `"restaurants"`).
///
/// Every write happens before the handler returns. Write failures are logged
/// and the caller keeps its in-memory result anyway.
pub struct FavoriteStore {
    store: Box<dyn KeyValueStore>,
    logger: Logger,
}

impl FavoriteStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store,
            logger: Logger::new("Favorite Store", Color::Magenta),
        }
    }

    fn read<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        match read_json(self.store.as_ref(), key) {
            Ok(value) => value,
            Err(e) => {
                self.logger.warn(format!("Ignoring stored '{}': {}", key, e));
                None
            }
        }
    }

    fn persist<T: serde::Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), FinderError> {
        write_json(self.store.as_mut(), key, value)
    }
}

impl Actor for FavoriteStore {
    type Context = Context<Self>;
}

impl Handler<LoadFavorites> for FavoriteStore {
    type Result = MessageResult<LoadFavorites>;

    fn handle(&mut self, _msg: LoadFavorites, _ctx: &mut Self::Context) -> Self::Result {
        let favorites: FavoriteSet = self.read(FAVORITES_KEY).unwrap_or_default();
        self.logger
            .info(format!("Loaded {} favorites.", favorites.len()));
        MessageResult(favorites)
    }
}

impl Handler<ToggleStoredFavorite> for FavoriteStore {
    type Result = MessageResult<ToggleStoredFavorite>;

    fn handle(&mut self, msg: ToggleStoredFavorite, _ctx: &mut Self::Context) -> Self::Result {
        let updated = msg.current.toggled(msg.id);
        match self.persist(FAVORITES_KEY, &updated) {
            Ok(()) => self.logger.info(format!(
                "Restaurant {} {} favorites.",
                msg.id,
                if updated.contains(msg.id) { "added to" } else { "removed from" }
            )),
            Err(e) => self.logger.error(format!("Favorites not saved: {}", e)),
        }
        MessageResult(updated)
    }
}

impl Handler<SaveSnapshot> for FavoriteStore {
    type Result = ();

    fn handle(&mut self, msg: SaveSnapshot, _ctx: &mut Self::Context) -> Self::Result {
        match self.persist(RESTAURANTS_KEY, &msg.restaurants) {
            Ok(()) => self.logger.info(format!(
                "Saved snapshot of {} restaurants.",
                msg.restaurants.len()
            )),
            Err(e) => self.logger.error(format!("Snapshot not saved: {}", e)),
        }
    }
}

impl Handler<ReconstructFavorites> for FavoriteStore {
    type Result = MessageResult<ReconstructFavorites>;

    fn handle(&mut self, _msg: ReconstructFavorites, _ctx: &mut Self::Context) -> Self::Result {
        let ids: Option<FavoriteSet> = self.read(FAVORITES_KEY);
        let snapshot: Option<Vec<RestaurantRecord>> = self.read(RESTAURANTS_KEY);
        MessageResult(reconstruct_favorites(ids.as_ref(), snapshot.as_deref()))
    }
}
