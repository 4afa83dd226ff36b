//! Reference meeting instant, with optional build-time overrides.
//!
//! The page ships as a static bundle, so there is no runtime environment to
//! read. Overrides are captured when the crate is compiled:
//! - `MEETING_REFERENCE_TIME`: wall-clock literal `YYYY-MM-DDTHH:MM:SS`
//! - `MEETING_SOURCE_ZONE`: IANA id the literal is read in

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::ZoneError;
use crate::catalog::CALIFORNIA;
use crate::convert::{parse_wall_clock, parse_zone, zoned_to_utc};

pub const DEFAULT_REFERENCE_TIME: &str = "2025-04-04T18:00:00";
pub const DEFAULT_SOURCE_ZONE: &str = CALIFORNIA.iana_id;

/// A wall-clock literal pinned to the zone it was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferenceInstant {
    pub wall_clock: NaiveDateTime,
    pub zone: Tz,
}

impl ReferenceInstant {
    pub fn parse(literal: &str, zone_id: &str) -> Result<Self, ZoneError> {
        Ok(Self {
            wall_clock: parse_wall_clock(literal)?,
            zone: parse_zone(zone_id)?,
        })
    }

    /// The weekly meeting the page was built for.
    pub fn default_meeting() -> Result<Self, ZoneError> {
        Self::parse(DEFAULT_REFERENCE_TIME, DEFAULT_SOURCE_ZONE)
    }

    /// Apply overrides on top of the defaults. Blank values count as absent.
    pub fn from_overrides(reference: Option<&str>, zone: Option<&str>) -> Result<Self, ZoneError> {
        let reference = non_blank(reference).unwrap_or(DEFAULT_REFERENCE_TIME);
        let zone = non_blank(zone).unwrap_or(DEFAULT_SOURCE_ZONE);
        Self::parse(reference, zone)
    }

    pub fn from_build_env() -> Result<Self, ZoneError> {
        Self::from_overrides(option_env!("MEETING_REFERENCE_TIME"), option_env!("MEETING_SOURCE_ZONE"))
    }

    /// Build-time overrides when they parse, otherwise the default meeting.
    pub fn from_build_env_or_default() -> Result<Self, ZoneError> {
        Self::from_build_env().or_else(|e| {
            tracing::warn!(error = %e, "ignoring invalid meeting override");
            Self::default_meeting()
        })
    }

    pub fn instant(&self) -> Result<DateTime<Utc>, ZoneError> {
        zoned_to_utc(self.wall_clock, self.zone)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
