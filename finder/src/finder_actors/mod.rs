pub mod controller;
pub mod favorite_store;
pub mod feed_synthesizer;
pub mod locator;
pub mod ui_handler;
