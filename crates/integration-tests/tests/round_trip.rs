//! to_milliseconds(from_milliseconds(t, tz)) == t

use std::sync::Arc;

use millis_core::ConversionService;
use millis_infra_chrono::ChronoCivilTime;
use proptest::prelude::*;

/// Comfortably inside chrono's supported years (about ±150,000 years)
const RANGE: i64 = 4_700_000_000_000_000;

const ZONES: [&str; 6] = [
    "UTC",
    "America/New_York",
    "Europe/Berlin",
    "Australia/Lord_Howe",
    "Asia/Kolkata",
    "-03:30",
];

fn service() -> ConversionService {
    ConversionService::with_defaults(Arc::new(ChronoCivilTime))
}

#[test]
fn test_round_trip_fall_back_hour() {
    let service = service();
    // 05:30Z and 06:30Z both read 01:30 in New York on 2024-11-03
    for ts in [1_730_611_800_000, 1_730_615_400_000] {
        let civil = service.from_milliseconds(ts, "America/New_York").unwrap();
        assert_eq!((civil.hour, civil.minute), (1, 30));
        assert_eq!(service.to_milliseconds(&civil).unwrap(), ts);
    }
}

#[test]
fn test_round_trip_known_instants() {
    let service = service();
    for ts in [0, -1, -3_600_000, 1_718_461_845_123, -2_208_988_800_000] {
        for zone in ZONES {
            let civil = service.from_milliseconds(ts, zone).unwrap();
            assert_eq!(service.to_milliseconds(&civil).unwrap(), ts, "{zone} @ {ts}");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_round_trip(ts in -RANGE..RANGE, zone in prop::sample::select(ZONES.to_vec())) {
        let service = service();
        let civil = service.from_milliseconds(ts, zone).unwrap();
        prop_assert_eq!(service.to_milliseconds(&civil).unwrap(), ts);
    }
}
