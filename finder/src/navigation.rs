use colored::Color;
use common::constants::DIRECTIONS_BASE_URL;
use common::logger::Logger;

/// Driving directions to the given destination.
pub fn directions_url(latitude: f64, longitude: f64) -> String {
    format!(
        "{}?api=1&destination={},{}&travelmode=driving",
        DIRECTIONS_BASE_URL, latitude, longitude
    )
}

/// Hands a destination over to an external navigation app. Fire-and-forget.
pub trait NavigationHandoff {
    fn open(&self, latitude: f64, longitude: f64);
}

/// Prints the directions link so the user can open it.
#[derive(Debug, Clone)]
pub struct LoggedHandoff {
    logger: Logger,
}

impl LoggedHandoff {
    pub fn new() -> Self {
        Self {
            logger: Logger::new("Navigation", Color::Blue),
        }
    }
}

impl Default for LoggedHandoff {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationHandoff for LoggedHandoff {
    fn open(&self, latitude: f64, longitude: f64) {
        self.logger.info(format!(
            "Open in your maps app: {}",
            directions_url(latitude, longitude)
        ));
    }
}
