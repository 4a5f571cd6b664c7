pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Center of the synthesized restaurant cluster (Navanakorn, Pathum Thani).
pub const BASE_LATITUDE: f64 = 14.0379;
pub const BASE_LONGITUDE: f64 = 100.6183;
/// Maximum offset, in degrees, applied on each axis around the base coordinate.
pub const COORDINATE_JITTER: f64 = 0.005;

pub const MIN_RATING: f64 = 4.0;
pub const MIN_REVIEWS: u32 = 50;
pub const REVIEWS_SPAN: u32 = 300;

pub const FEED_URL: &str =
    "https://raw.githubusercontent.com/phun0555/NearbyFoodApp/refs/heads/master/app/restaurants.json";

pub const FAVORITES_KEY: &str = "favorites";
pub const RESTAURANTS_KEY: &str = "restaurants";
pub const DEFAULT_DATA_DIR: &str = ".finder";

pub const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/";
