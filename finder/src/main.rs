use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::random::{RandomSource, SeededRandom, ThreadRandom};
use common::storage::FileStore;
use finder::config::FinderConfig;
use finder::finder_actors::controller::RankedFeedController;
use finder::finder_actors::favorite_store::FavoriteStore;
use finder::finder_actors::feed_synthesizer::FeedSynthesizer;
use finder::finder_actors::locator::{ConfiguredPosition, Locator};
use finder::finder_actors::ui_handler::{UIHandler, spawn_line_reader};
use finder::messages::{Activate, Deactivate};
use finder::navigation::LoggedHandoff;
use finder::remote_feed::RemoteFeed;
use std::env;
use std::io::{self, BufReader};
use tokio::signal::ctrl_c;
use tokio::sync::oneshot;

#[actix::main]
async fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = FinderConfig::from_env().with_args(&args);
    let logger = Logger::new("Finder", Color::BrightGreen);
    logger.info(format!(
        "Feed: {} | data dir: {} | position: {}",
        config.feed_url,
        config.data_dir.display(),
        config
            .position
            .map(|p| p.to_string())
            .unwrap_or_else(|| "denied".to_string())
    ));

    let rng: Box<dyn RandomSource> = match config.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    let locator = Locator::new(Box::new(ConfiguredPosition::new(config.position))).start();
    let synthesizer = FeedSynthesizer::new(RemoteFeed::new(config.feed_url.clone()), rng).start();
    let favorite_store = FavoriteStore::new(Box::new(FileStore::new(&config.data_dir))).start();
    let controller =
        RankedFeedController::new(locator, synthesizer, favorite_store.clone()).start();
    controller.do_send(Activate);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let lines = spawn_line_reader(BufReader::new(io::stdin()));
    let ui_controller = controller.clone();
    let _ui = UIHandler::create(move |ctx| {
        ctx.add_stream(lines);
        UIHandler::new(ui_controller, favorite_store, Box::new(LoggedHandoff::new()))
            .with_shutdown(shutdown_tx)
    });

    tokio::select! {
        _ = ctrl_c() => {
            logger.info("Ctrl-C received, shutting down...");
        }
        _ = shutdown_rx => {}
    }
    controller.do_send(Deactivate);
    System::current().stop();
    Ok(())
}
