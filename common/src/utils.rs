use crate::constants::{COORDINATE_JITTER, EARTH_RADIUS_KM, MIN_RATING, MIN_REVIEWS, REVIEWS_SPAN};
use crate::random::RandomSource;
use crate::types::position::Position;

/// Great-circle distance in kilometers between `reference` and `target`,
/// using the haversine formula.
///
/// Without a reference point the distance is reported as `0.0`: callers
/// treat a missing position as "distance unknown".
pub fn calculate_distance(reference: Option<Position>, target: Position) -> f64 {
    let Some(reference) = reference else {
        return 0.0;
    };

    let d_lat = (target.latitude - reference.latitude).to_radians();
    let d_lon = (target.longitude - reference.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + reference.latitude.to_radians().cos()
            * target.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);

    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn random_rating(rng: &mut dyn RandomSource) -> f64 {
    round_to_tenth(MIN_RATING + rng.next_unit())
}

pub fn random_reviews(rng: &mut dyn RandomSource) -> u32 {
    // A source that hands out exactly 1.0 must not produce 350.
    let offset = (rng.next_unit() * REVIEWS_SPAN as f64).floor() as u32;
    MIN_REVIEWS + offset.min(REVIEWS_SPAN - 1)
}

/// `base` shifted by a random offset in `[-COORDINATE_JITTER, COORDINATE_JITTER)`.
pub fn jittered(base: f64, rng: &mut dyn RandomSource) -> f64 {
    base + (rng.next_unit() - 0.5) * 2.0 * COORDINATE_JITTER
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntest::assert_about_eq;
    use std::collections::VecDeque;

    struct Scripted(VecDeque<f64>);

    impl RandomSource for Scripted {
        fn next_unit(&mut self) -> f64 {
            self.0.pop_front().unwrap_or(0.0)
        }
    }

    fn scripted(values: &[f64]) -> Scripted {
        Scripted(values.iter().copied().collect())
    }

    #[test]
    fn test_distance_to_same_point_is_zero() {
        for p in [
            Position::new(14.0379, 100.6183),
            Position::new(-33.45, -70.66),
            Position::new(89.9, 179.9),
        ] {
            assert_about_eq!(calculate_distance(Some(p), p), 0.0);
        }
    }

    #[test]
    fn test_distance_without_reference_is_zero() {
        assert_eq!(calculate_distance(None, Position::new(14.0, 100.0)), 0.0);
    }

    #[test]
    fn test_distance_small_offset_near_base() {
        let user = Position::new(14.0379, 100.6183);
        let shop = Position::new(14.0379, 100.6233);
        assert_about_eq!(calculate_distance(Some(user), shop), 0.54, 0.05);
    }

    #[test]
    fn test_antipodal_distance_is_half_circumference() {
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        let d = calculate_distance(Some(Position::new(0.0, 0.0)), Position::new(0.0, 180.0));
        assert_about_eq!(d, half, 1e-6);
        // Pole to pole, longitude is irrelevant.
        for lon in [0.0, 45.0, 120.0, -170.0] {
            let d = calculate_distance(Some(Position::new(90.0, 0.0)), Position::new(-90.0, lon));
            assert_about_eq!(d, half, 1e-6);
        }
    }

    #[test]
    fn test_distance_grows_with_separation() {
        let user = Position::new(14.0379, 100.6183);
        let mut last = 0.0;
        for step in 1..20 {
            let d = calculate_distance(Some(user), Position::new(14.0379 + step as f64 * 0.5, 100.6183));
            assert!(d > last);
            last = d;
        }
    }

    #[test]
    fn test_random_rating_bounds_and_rounding() {
        let mut rng = scripted(&[0.0, 0.34, 0.96, 0.999_999]);
        assert_eq!(random_rating(&mut rng), 4.0);
        assert_eq!(random_rating(&mut rng), 4.3);
        assert_eq!(random_rating(&mut rng), 5.0);
        assert_eq!(random_rating(&mut rng), 5.0);
    }

    #[test]
    fn test_random_reviews_bounds() {
        let mut rng = scripted(&[0.0, 0.5, 0.999_999_9]);
        assert_eq!(random_reviews(&mut rng), 50);
        assert_eq!(random_reviews(&mut rng), 200);
        assert_eq!(random_reviews(&mut rng), 349);
    }

    #[test]
    fn test_jitter_stays_within_radius() {
        let mut rng = scripted(&[0.0, 0.5, 0.75]);
        assert_about_eq!(jittered(14.0, &mut rng), 14.0 - COORDINATE_JITTER, 1e-12);
        assert_about_eq!(jittered(14.0, &mut rng), 14.0, 1e-12);
        assert_about_eq!(jittered(14.0, &mut rng), 14.0025, 1e-12);
    }
}
