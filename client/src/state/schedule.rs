//! Schedule board display state.
//!
//! DESIGN
//! ======
//! The board is filled exactly once after mount. The whole display is
//! replaced from a single `ScheduleSnapshot`, never patched row by row.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use zones::{DisplayRow, LocalZone, ReferenceInstant, SCHEDULE_ZONES, ScheduleSnapshot, ZoneError, compute_schedule};

/// What the schedule board renders. Empty strings until loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleState {
    pub california_time: String,
    pub local_zone_id: String,
    pub local_time: String,
    pub rows: Vec<DisplayRow>,
}

impl From<ScheduleSnapshot> for ScheduleState {
    fn from(snapshot: ScheduleSnapshot) -> Self {
        Self {
            california_time: snapshot.california,
            local_zone_id: snapshot.local.label,
            local_time: snapshot.local.formatted_time,
            rows: snapshot.rows,
        }
    }
}

/// Compute the board for `reference` as seen from `local`.
pub fn load_schedule(reference: &ReferenceInstant, local: &LocalZone) -> Result<ScheduleState, ZoneError> {
    compute_schedule(reference, local, &SCHEDULE_ZONES).map(ScheduleState::from)
}
