//! Conversion primitives over the embedded IANA database.
//!
//! Every computed time on the page follows the same path: a wall-clock
//! literal is read in a source zone, turned into an absolute instant, then
//! read back in a target zone and formatted with [`DISPLAY_FORMAT`].

use chrono::{DateTime, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::ZoneError;

/// `Friday, Apr 4, 2025 6:00 PM`
pub const DISPLAY_FORMAT: &str = "%A, %b %-d, %Y %-I:%M %p";

/// Zone-less literal form used by the reference instant.
pub const WALL_CLOCK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn parse_zone(iana_id: &str) -> Result<Tz, ZoneError> {
    iana_id
        .parse::<Tz>()
        .map_err(|_| ZoneError::UnknownZone(iana_id.to_owned()))
}

pub fn parse_wall_clock(literal: &str) -> Result<NaiveDateTime, ZoneError> {
    NaiveDateTime::parse_from_str(literal, WALL_CLOCK_FORMAT)
        .map_err(|_| ZoneError::InvalidWallClock(literal.to_owned()))
}

/// Interpret a wall-clock time in `zone` and return the absolute instant.
///
/// Ambiguous times (the repeated hour when clocks fall back) resolve to the
/// earlier instant. Times inside a spring-forward gap are read with the
/// offset in effect after the transition, so 02:30 in New York becomes
/// 06:30 UTC (01:30 standard time).
pub fn zoned_to_utc(wall_clock: NaiveDateTime, zone: Tz) -> Result<DateTime<Utc>, ZoneError> {
    if let Some(local) = zone.from_local_datetime(&wall_clock).earliest() {
        return Ok(local.with_timezone(&Utc));
    }

    let unrepresentable = || ZoneError::Unrepresentable {
        wall_clock: wall_clock.to_string(),
        zone: zone.name().to_owned(),
    };
    // Transitions are never a day apart, so a day either side brackets the gap.
    let before = wall_clock
        .checked_sub_signed(TimeDelta::days(1))
        .ok_or_else(unrepresentable)?;
    let after = wall_clock
        .checked_add_signed(TimeDelta::days(1))
        .ok_or_else(unrepresentable)?;
    let offset_secs = zone
        .offset_from_utc_datetime(&before)
        .fix()
        .local_minus_utc()
        .max(zone.offset_from_utc_datetime(&after).fix().local_minus_utc());
    let utc = wall_clock
        .checked_sub_signed(TimeDelta::seconds(i64::from(offset_secs)))
        .ok_or_else(unrepresentable)?;

    tracing::debug!(%wall_clock, zone = zone.name(), offset_secs, "wall-clock time falls in a DST gap");
    Ok(Utc.from_utc_datetime(&utc))
}

pub fn utc_to_zoned(instant: DateTime<Utc>, zone: Tz) -> DateTime<Tz> {
    instant.with_timezone(&zone)
}

pub fn format_wall_clock(time: &DateTime<Tz>) -> String {
    time.format(DISPLAY_FORMAT).to_string()
}

/// Re-read a wall-clock time from `from` as wall-clock time in `to`.
pub fn convert_wall_clock(wall_clock: NaiveDateTime, from: Tz, to: Tz) -> Result<DateTime<Tz>, ZoneError> {
    let instant = zoned_to_utc(wall_clock, from)?;
    Ok(utc_to_zoned(instant, to))
}

#[cfg(test)]
#[path = "convert_test.rs"]
mod tests;
