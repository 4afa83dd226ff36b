use chrono::NaiveDate;
use chrono_tz::{America, Australia};

use super::*;

#[test]
fn default_meeting_is_friday_evening_in_california() {
    let reference = ReferenceInstant::default_meeting().unwrap();
    assert_eq!(
        reference.wall_clock,
        NaiveDate::from_ymd_opt(2025, 4, 4).unwrap().and_hms_opt(18, 0, 0).unwrap()
    );
    assert_eq!(reference.zone, America::Los_Angeles);
}

#[test]
fn default_meeting_instant_is_one_am_utc_next_day() {
    let instant = ReferenceInstant::default_meeting().unwrap().instant().unwrap();
    assert_eq!(instant.to_rfc3339(), "2025-04-05T01:00:00+00:00");
}

#[test]
fn from_overrides_without_values_uses_defaults() {
    assert_eq!(
        ReferenceInstant::from_overrides(None, None),
        ReferenceInstant::default_meeting()
    );
    assert_eq!(
        ReferenceInstant::from_overrides(Some("  "), Some("")),
        ReferenceInstant::default_meeting()
    );
}

#[test]
fn from_overrides_applies_each_value() {
    let reference = ReferenceInstant::from_overrides(Some("2026-04-03T18:00:00"), Some("Australia/Melbourne")).unwrap();
    assert_eq!(
        reference.wall_clock,
        NaiveDate::from_ymd_opt(2026, 4, 3).unwrap().and_hms_opt(18, 0, 0).unwrap()
    );
    assert_eq!(reference.zone, Australia::Melbourne);

    let zone_only = ReferenceInstant::from_overrides(None, Some("America/Chicago")).unwrap();
    assert_eq!(zone_only.zone, America::Chicago);
    assert_eq!(zone_only.wall_clock, ReferenceInstant::default_meeting().unwrap().wall_clock);
}

#[test]
fn from_overrides_rejects_invalid_values() {
    assert_eq!(
        ReferenceInstant::from_overrides(Some("next friday"), None),
        Err(ZoneError::InvalidWallClock("next friday".to_owned()))
    );
    assert_eq!(
        ReferenceInstant::from_overrides(None, Some("Pacific Time")),
        Err(ZoneError::UnknownZone("Pacific Time".to_owned()))
    );
}

#[test]
fn from_build_env_or_default_always_resolves() {
    assert!(ReferenceInstant::from_build_env_or_default().is_ok());
}
