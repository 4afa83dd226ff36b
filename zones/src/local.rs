//! Detection of the viewer's own time zone.

use chrono_tz::Tz;

use crate::convert::parse_zone;

pub const FALLBACK_ZONE_ID: &str = "UTC";

/// The runtime's local zone, kept with the id it was detected under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalZone {
    pub id: String,
    pub tz: Tz,
}

/// Ask the runtime for its zone id (`Intl` in the browser, the OS on a
/// native host). Falls back to UTC when detection fails.
pub fn detect_local_zone() -> LocalZone {
    match iana_time_zone::get_timezone() {
        Ok(id) => resolve_local_zone(Some(&id)),
        Err(e) => {
            tracing::warn!(error = %e, "local time zone detection failed");
            resolve_local_zone(None)
        }
    }
}

pub fn resolve_local_zone(detected: Option<&str>) -> LocalZone {
    if let Some(id) = detected {
        match parse_zone(id) {
            Ok(tz) => return LocalZone { id: id.to_owned(), tz },
            Err(e) => tracing::warn!(error = %e, "detected local zone is not in the database"),
        }
    }
    LocalZone {
        id: FALLBACK_ZONE_ID.to_owned(),
        tz: chrono_tz::UTC,
    }
}

#[cfg(test)]
#[path = "local_test.rs"]
mod tests;
