//! Schedule board computation: one reference instant, many zones.

use crate::ZoneError;
use crate::catalog::{CALIFORNIA, ZoneDescriptor};
use crate::config::ReferenceInstant;
use crate::convert::{format_wall_clock, utc_to_zoned};
use crate::local::LocalZone;

/// A labelled, already formatted time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayRow {
    pub label: String,
    pub formatted_time: String,
}

/// Everything the schedule board shows, computed in one pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleSnapshot {
    pub california: String,
    /// Labelled with the detected zone id.
    pub local: DisplayRow,
    /// One row per zone, in table order.
    pub rows: Vec<DisplayRow>,
}

/// Render `reference` in California, in `local` and in each of `zones`.
///
/// Pure: the same inputs always produce the same snapshot.
pub fn compute_schedule(
    reference: &ReferenceInstant,
    local: &LocalZone,
    zones: &[ZoneDescriptor],
) -> Result<ScheduleSnapshot, ZoneError> {
    let instant = reference.instant()?;

    let california = format_wall_clock(&utc_to_zoned(instant, CALIFORNIA.tz()?));
    let local_row = DisplayRow {
        label: local.id.clone(),
        formatted_time: format_wall_clock(&utc_to_zoned(instant, local.tz)),
    };
    let rows = zones
        .iter()
        .map(|zone| {
            Ok(DisplayRow {
                label: zone.display_name.to_owned(),
                formatted_time: format_wall_clock(&utc_to_zoned(instant, zone.tz()?)),
            })
        })
        .collect::<Result<Vec<_>, ZoneError>>()?;

    tracing::debug!(%instant, local = %local.id, rows = rows.len(), "schedule computed");
    Ok(ScheduleSnapshot {
        california,
        local: local_row,
        rows,
    })
}

#[cfg(test)]
#[path = "schedule_test.rs"]
mod tests;
