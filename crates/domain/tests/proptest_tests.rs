//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::GeoPoint;
use proptest::prelude::*;

// ============================================================================
// GeoPoint Property Tests
// ============================================================================

mod geo_point_tests {
    use super::*;

    proptest! {
        #[test]
        fn lat_lng_param_round_trips(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let param = GeoPoint::new(lat, lon).to_lat_lng_param();
            let parts: Vec<&str> = param.split(',').collect();
            prop_assert_eq!(parts.len(), 2);

            let parsed_lat: f64 = parts[0].parse().unwrap();
            let parsed_lon: f64 = parts[1].parse().unwrap();
            prop_assert_eq!(parsed_lat.to_bits(), lat.to_bits());
            prop_assert_eq!(parsed_lon.to_bits(), lon.to_bits());
        }

        #[test]
        fn lat_lng_param_has_exactly_one_comma(
            lat in any::<f64>().prop_filter("finite", |v| v.is_finite()),
            lon in any::<f64>().prop_filter("finite", |v| v.is_finite())
        ) {
            let param = GeoPoint::new(lat, lon).to_lat_lng_param();
            prop_assert_eq!(param.matches(',').count(), 1);
        }

        #[test]
        fn valid_ranges_are_within_bounds(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoPoint::new(lat, lon).is_within_bounds());
        }

        #[test]
        fn out_of_range_latitude_is_flagged(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(!GeoPoint::new(lat, lon).is_within_bounds());
        }
    }
}
