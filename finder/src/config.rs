use common::constants::{DEFAULT_DATA_DIR, FEED_URL};
use common::types::position::Position;
use std::path::PathBuf;

/// Runtime settings. Values can be overridden through environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct FinderConfig {
    pub feed_url: String,
    pub data_dir: PathBuf,
    /// Position handed out by the position source; `None` means permission is denied.
    pub position: Option<Position>,
    /// Seed for reproducible synthesis; `None` draws fresh values each load.
    pub seed: Option<u64>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            feed_url: FEED_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            position: None,
            seed: None,
        }
    }
}

impl FinderConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let feed_url = lookup("FINDER_FEED_URL").unwrap_or(defaults.feed_url);
        let data_dir = lookup("FINDER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let position = parse_position(lookup("FINDER_LAT"), lookup("FINDER_LON"));
        let seed = lookup("FINDER_SEED").and_then(|v| v.parse().ok());

        Self {
            feed_url,
            data_dir,
            position,
            seed,
        }
    }

    /// Applies `<lat> <lon>` command line arguments, which win over the environment.
    pub fn with_args(mut self, args: &[String]) -> Self {
        if let Some(position) = parse_position(args.first().cloned(), args.get(1).cloned()) {
            self.position = Some(position);
        }
        self
    }
}

fn parse_position(latitude: Option<String>, longitude: Option<String>) -> Option<Position> {
    let latitude: f64 = latitude?.trim().parse().ok()?;
    let longitude: f64 = longitude?.trim().parse().ok()?;
    if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
        Some(Position::new(latitude, longitude))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = FinderConfig::from_lookup(|_| None);
        assert_eq!(config, FinderConfig::default());
        assert_eq!(config.feed_url, FEED_URL);
        assert!(config.position.is_none());
    }

    #[test]
    fn test_reads_overrides() {
        let config = FinderConfig::from_lookup(lookup_from(&[
            ("FINDER_FEED_URL", "http://localhost:9000/feed.json"),
            ("FINDER_DATA_DIR", "/tmp/finder"),
            ("FINDER_LAT", "14.0379"),
            ("FINDER_LON", "100.6183"),
            ("FINDER_SEED", "99"),
        ]));
        assert_eq!(config.feed_url, "http://localhost:9000/feed.json");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/finder"));
        assert_eq!(config.position, Some(Position::new(14.0379, 100.6183)));
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_partial_or_invalid_position_is_denied() {
        let only_lat = FinderConfig::from_lookup(lookup_from(&[("FINDER_LAT", "14.0")]));
        assert!(only_lat.position.is_none());
        let garbage =
            FinderConfig::from_lookup(lookup_from(&[("FINDER_LAT", "abc"), ("FINDER_LON", "1")]));
        assert!(garbage.position.is_none());
        let out_of_range =
            FinderConfig::from_lookup(lookup_from(&[("FINDER_LAT", "91"), ("FINDER_LON", "1")]));
        assert!(out_of_range.position.is_none());
    }

    #[test]
    fn test_args_take_precedence() {
        let config = FinderConfig::from_lookup(lookup_from(&[
            ("FINDER_LAT", "1.0"),
            ("FINDER_LON", "2.0"),
        ]))
        .with_args(&["14.5".to_string(), "100.5".to_string()]);
        assert_eq!(config.position, Some(Position::new(14.5, 100.5)));
    }
}
