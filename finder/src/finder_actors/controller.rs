use crate::finder_actors::favorite_store::FavoriteStore;
use crate::finder_actors::feed_synthesizer::FeedSynthesizer;
use crate::finder_actors::locator::Locator;
use crate::messages::{
    AcquirePosition, Activate, Deactivate, DistanceTo, GetFeed, LoadFavorites, SaveSnapshot,
    SynthesizeFeed, ToggleFavorite, ToggleStoredFavorite,
};
use crate::ranking::FeedSnapshot;
use actix::AtomicResponse;
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::types::favorite_set::FavoriteSet;
use common::types::feed_phase::FeedPhase;
use std::sync::Arc;

/// The `RankedFeedController` actor orchestrates one screen activation.
///
/// ## Responsibilities:
/// - On `Activate`, request position, feed and favorites concurrently.
/// - Publish an immutable [`FeedSnapshot`] that is swapped on every change.
/// - Reach `Ready` once feed and favorites resolved, with or without a position.
/// - Route favorite toggles through the `FavoriteStore`.
///
/// Results are tagged with the activation they belong to. After a
/// `Deactivate` (or a newer `Activate`) stale results are dropped on arrival.
pub struct RankedFeedController {
    locator: Addr<Locator>,
    synthesizer: Addr<FeedSynthesizer>,
    favorite_store: Addr<FavoriteStore>,
    state: Arc<FeedSnapshot>,
    /// Incremented on every activation and deactivation.
    generation: u64,
    feed_pending: bool,
    favorites_pending: bool,
    logger: Logger,
}

impl RankedFeedController {
    pub fn new(
        locator: Addr<Locator>,
        synthesizer: Addr<FeedSynthesizer>,
        favorite_store: Addr<FavoriteStore>,
    ) -> Self {
        Self {
            locator,
            synthesizer,
            favorite_store,
            state: Arc::new(FeedSnapshot::default()),
            generation: 0,
            feed_pending: false,
            favorites_pending: false,
            logger: Logger::new("Feed Controller", Color::BrightBlue),
        }
    }

    /// Builds the next snapshot from the current one and publishes it.
    fn publish(&mut self, update: impl FnOnce(&mut FeedSnapshot)) {
        let mut next = (*self.state).clone();
        update(&mut next);
        if next.phase == FeedPhase::Loading && !self.feed_pending && !self.favorites_pending {
            next.phase = FeedPhase::Ready;
            self.logger.info(format!(
                "Feed ready: {} restaurants, {} favorites, position {}.",
                next.restaurants.len(),
                next.favorites.len(),
                if next.position_known() { "known" } else { "unknown" }
            ));
        }
        self.state = Arc::new(next);
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    fn request_position(&self, generation: u64, ctx: &mut Context<Self>) {
        self.locator
            .send(AcquirePosition)
            .into_actor(self)
            .map(move |res, act, _ctx| {
                if !act.is_current(generation) {
                    return;
                }
                match res {
                    // Position flips to known at most once per activation.
                    Ok(Some(position)) if !act.state.position_known() => {
                        act.publish(|s| s.position = Some(position));
                    }
                    Ok(Some(_)) => {}
                    Ok(None) => act
                        .logger
                        .warn("No position available, distances stay at 0.00 km."),
                    Err(e) => act.logger.error(format!("Locator unreachable: {}", e)),
                }
            })
            .spawn(ctx);
    }

    fn request_feed(&self, generation: u64, ctx: &mut Context<Self>) {
        self.synthesizer
            .send(SynthesizeFeed)
            .into_actor(self)
            .map(move |res, act, _ctx| {
                if !act.is_current(generation) {
                    return;
                }
                act.feed_pending = false;
                match res {
                    Ok(restaurants) => {
                        act.favorite_store.do_send(SaveSnapshot {
                            restaurants: restaurants.clone(),
                        });
                        act.publish(|s| s.restaurants = restaurants);
                    }
                    Err(e) => {
                        act.logger
                            .error(format!("Feed synthesizer unreachable: {}", e));
                        act.publish(|s| s.restaurants.clear());
                    }
                }
            })
            .spawn(ctx);
    }

    fn request_favorites(&self, generation: u64, ctx: &mut Context<Self>) {
        self.favorite_store
            .send(LoadFavorites)
            .into_actor(self)
            .map(move |res, act, _ctx| {
                // A toggle may already have resolved the favorites for this activation.
                if !act.is_current(generation) || !act.favorites_pending {
                    return;
                }
                act.favorites_pending = false;
                let favorites = res.unwrap_or_else(|e| {
                    act.logger
                        .error(format!("Favorite store unreachable: {}", e));
                    FavoriteSet::new()
                });
                act.publish(|s| s.favorites = favorites);
            })
            .spawn(ctx);
    }
}

impl Actor for RankedFeedController {
    type Context = Context<Self>;
}

impl Handler<Activate> for RankedFeedController {
    type Result = ();

    fn handle(&mut self, _msg: Activate, ctx: &mut Self::Context) -> Self::Result {
        self.generation += 1;
        let generation = self.generation;
        self.logger
            .info(format!("Activation #{}: loading restaurants...", generation));

        self.feed_pending = true;
        self.favorites_pending = true;
        self.publish(|s| {
            *s = FeedSnapshot {
                phase: FeedPhase::Loading,
                ..FeedSnapshot::default()
            }
        });

        self.request_position(generation, ctx);
        self.request_feed(generation, ctx);
        self.request_favorites(generation, ctx);
    }
}

impl Handler<Deactivate> for RankedFeedController {
    type Result = ();

    fn handle(&mut self, _msg: Deactivate, _ctx: &mut Self::Context) -> Self::Result {
        self.generation += 1;
        self.feed_pending = false;
        self.favorites_pending = false;
        self.publish(|s| s.phase = FeedPhase::Idle);
        self.logger.info("Deactivated, pending results will be ignored.");
    }
}

impl Handler<ToggleFavorite> for RankedFeedController {
    type Result = AtomicResponse<Self, FavoriteSet>;

    /// Blocks other messages until the store answers, so back-to-back toggles
    /// always start from the latest set. A toggle that arrives while the
    /// favorites are still loading first loads them from the store.
    fn handle(&mut self, msg: ToggleFavorite, _ctx: &mut Self::Context) -> Self::Result {
        let id = msg.id;
        let current: ResponseActFuture<Self, FavoriteSet> = if self.favorites_pending {
            Box::pin(
                self.favorite_store
                    .send(LoadFavorites)
                    .into_actor(self)
                    .map(|res, act, _ctx| {
                        let loaded = res.unwrap_or_else(|e| {
                            act.logger
                                .error(format!("Favorite store unreachable: {}", e));
                            FavoriteSet::new()
                        });
                        act.favorites_pending = false;
                        act.publish(|s| s.favorites = loaded.clone());
                        loaded
                    }),
            )
        } else {
            Box::pin(actix::fut::ready(self.state.favorites.clone()))
        };

        AtomicResponse::new(Box::pin(current.then(move |current, act, _ctx| {
            act.favorite_store
                .send(ToggleStoredFavorite {
                    id,
                    current: current.clone(),
                })
                .into_actor(&*act)
                .map(move |res, act, _ctx| {
                    let updated = res.unwrap_or_else(|e| {
                        act.logger
                            .error(format!("Favorite store unreachable: {}", e));
                        current.toggled(id)
                    });
                    act.publish(|s| s.favorites = updated.clone());
                    updated
                })
        })))
    }
}

impl Handler<GetFeed> for RankedFeedController {
    type Result = MessageResult<GetFeed>;

    fn handle(&mut self, _msg: GetFeed, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.state.clone())
    }
}

impl Handler<DistanceTo> for RankedFeedController {
    type Result = f64;

    fn handle(&mut self, msg: DistanceTo, _ctx: &mut Self::Context) -> Self::Result {
        self.state.distance_to(&msg.record)
    }
}
