pub mod catalog;
pub mod config;
pub mod finder_actors;
pub mod messages;
pub mod navigation;
pub mod ranking;
pub mod remote_feed;
pub mod views;
