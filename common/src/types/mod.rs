pub mod favorite_set;
pub mod feed_phase;
pub mod position;
pub mod restaurant_record;
