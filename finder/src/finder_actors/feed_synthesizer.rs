use crate::catalog::{CatalogEntry, LOCAL_CATALOG};
use crate::messages::SynthesizeFeed;
use crate::remote_feed::{RemoteFeed, payload_size};
use actix::prelude::*;
use colored::Color;
use common::constants::{BASE_LATITUDE, BASE_LONGITUDE};
use common::logger::Logger;
use common::random::RandomSource;
use common::types::restaurant_record::RestaurantRecord;
use common::utils::{jittered, random_rating, random_reviews};

/// Builds one record per catalog entry. Ids follow catalog order starting at 1;
/// rating, reviews and coordinates are drawn from `rng`, in that order.
pub fn synthesize(catalog: &[CatalogEntry], rng: &mut dyn RandomSource) -> Vec<RestaurantRecord> {
    catalog
        .iter()
        .zip(1u32..)
        .map(|(entry, id)| RestaurantRecord {
            id,
            name: entry.name.to_string(),
            image: entry.image.to_string(),
            rating: random_rating(rng),
            reviews: random_reviews(rng),
            latitude: jittered(BASE_LATITUDE, rng),
            longitude: jittered(BASE_LONGITUDE, rng),
        })
        .collect()
}

/// The `FeedSynthesizer` actor produces the restaurant list.
///
/// ## Responsibilities:
/// - Fire the remote feed request and report its outcome to the log.
/// - Build the list from the local catalog, whatever the remote outcome.
///
/// The synthesizer never touches storage; persisting the result is up to
/// whoever asked for it.
pub struct FeedSynthesizer {
    remote: RemoteFeed,
    rng: Box<dyn RandomSource>,
    catalog: Vec<CatalogEntry>,
    logger: Logger,
}

impl FeedSynthesizer {
    pub fn new(remote: RemoteFeed, rng: Box<dyn RandomSource>) -> Self {
        Self::with_catalog(remote, rng, LOCAL_CATALOG.to_vec())
    }

    pub fn with_catalog(
        remote: RemoteFeed,
        rng: Box<dyn RandomSource>,
        catalog: Vec<CatalogEntry>,
    ) -> Self {
        Self {
            remote,
            rng,
            catalog,
            logger: Logger::new("Feed Synthesizer", Color::Green),
        }
    }

    fn spawn_remote_fetch(&self, ctx: &mut Context<Self>) {
        let remote = self.remote.clone();
        let logger = self.logger.clone();
        async move { remote.fetch().await }
            .into_actor(self)
            .map(move |res, _act, _ctx| match res {
                Ok(payload) => logger.info(format!(
                    "Remote feed answered with {} entries (not merged).",
                    payload_size(&payload)
                )),
                Err(e) => logger.warn(format!("Fetch error: {}", e)),
            })
            .spawn(ctx);
    }
}

impl Actor for FeedSynthesizer {
    type Context = Context<Self>;
}

impl Handler<SynthesizeFeed> for FeedSynthesizer {
    type Result = MessageResult<SynthesizeFeed>;

    fn handle(&mut self, _msg: SynthesizeFeed, ctx: &mut Self::Context) -> Self::Result {
        // The fetch runs on its own and never holds back the local catalog.
        self.spawn_remote_fetch(ctx);
        let restaurants = synthesize(&self.catalog, self.rng.as_mut());
        self.logger.info(format!(
            "Synthesized {} restaurants from the local catalog.",
            restaurants.len()
        ));
        MessageResult(restaurants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote_feed::tests::{closed_url, serve_once};
    use common::constants::COORDINATE_JITTER;
    use common::random::SeededRandom;
    use std::collections::VecDeque;

    struct Scripted(VecDeque<f64>);

    impl RandomSource for Scripted {
        fn next_unit(&mut self) -> f64 {
            self.0.pop_front().unwrap_or(0.5)
        }
    }

    fn assert_valid_feed(records: &[RestaurantRecord]) {
        assert_eq!(records.len(), LOCAL_CATALOG.len());
        let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=LOCAL_CATALOG.len() as u32).collect::<Vec<_>>());
        for record in records {
            assert!((4.0..=5.0).contains(&record.rating));
            assert_eq!(record.rating, (record.rating * 10.0).round() / 10.0);
            assert!((50..=349).contains(&record.reviews));
            assert!((record.latitude - BASE_LATITUDE).abs() <= COORDINATE_JITTER);
            assert!((record.longitude - BASE_LONGITUDE).abs() <= COORDINATE_JITTER);
        }
    }

    #[test]
    fn test_synthesize_uses_catalog_order_and_random_values() {
        let mut rng = Scripted(VecDeque::from(vec![0.25, 0.5, 0.5, 1.0 - 1e-9]));
        let records = synthesize(&LOCAL_CATALOG[..1], &mut rng);
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id, 1);
        assert_eq!(record.name, LOCAL_CATALOG[0].name);
        assert_eq!(record.image, LOCAL_CATALOG[0].image);
        assert_eq!(record.rating, 4.3);
        assert_eq!(record.reviews, 200);
        assert_eq!(record.latitude, BASE_LATITUDE);
        assert!(record.longitude > BASE_LONGITUDE);
        assert!(record.longitude < BASE_LONGITUDE + COORDINATE_JITTER);
    }

    #[test]
    fn test_synthesize_full_catalog_respects_bounds() {
        for seed in 0..20 {
            let mut rng = SeededRandom::new(seed);
            assert_valid_feed(&synthesize(&LOCAL_CATALOG, &mut rng));
        }
    }

    #[test]
    fn test_reload_produces_new_values() {
        let mut rng = SeededRandom::new(3);
        let first = synthesize(&LOCAL_CATALOG, &mut rng);
        let second = synthesize(&LOCAL_CATALOG, &mut rng);
        assert_ne!(first, second);
        let first_ids: Vec<u32> = first.iter().map(|r| r.id).collect();
        let second_ids: Vec<u32> = second.iter().map(|r| r.id).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[actix_rt::test]
    async fn test_fetch_failure_still_yields_full_catalog() {
        let remote = RemoteFeed::new(closed_url().await);
        let synthesizer = FeedSynthesizer::new(remote, Box::new(SeededRandom::new(1))).start();
        let records = synthesizer.send(SynthesizeFeed).await.unwrap();
        assert_valid_feed(&records);
    }

    #[actix_rt::test]
    async fn test_remote_payload_is_not_merged() {
        let url = serve_once("200 OK", r#"[{"id":99,"name":"remote only"}]"#).await;
        let synthesizer =
            FeedSynthesizer::new(RemoteFeed::new(url), Box::new(SeededRandom::new(2))).start();
        let records = synthesizer.send(SynthesizeFeed).await.unwrap();
        assert_valid_feed(&records);
        assert!(records.iter().all(|r| r.name != "remote only"));
    }
}
