//! Static zone and hour tables shown on the page.

use chrono_tz::Tz;

use crate::ZoneError;
use crate::convert::parse_zone;

/// A named IANA zone as it appears in a list or drop-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneDescriptor {
    pub display_name: &'static str,
    pub iana_id: &'static str,
}

impl ZoneDescriptor {
    pub const fn new(display_name: &'static str, iana_id: &'static str) -> Self {
        Self { display_name, iana_id }
    }

    /// Resolve the descriptor against the embedded zone database.
    pub fn tz(&self) -> Result<Tz, ZoneError> {
        parse_zone(self.iana_id)
    }
}

/// Target zone of every conversion on the page.
pub const CALIFORNIA: ZoneDescriptor = ZoneDescriptor::new("California", "America/Los_Angeles");

/// Zones listed on the schedule board, in display order.
pub const SCHEDULE_ZONES: [ZoneDescriptor; 6] = [
    ZoneDescriptor::new("China", "Asia/Shanghai"),
    ZoneDescriptor::new("Adelaide", "Australia/Adelaide"),
    ZoneDescriptor::new("Melbourne", "Australia/Melbourne"),
    ZoneDescriptor::new("New York", "America/New_York"),
    ZoneDescriptor::new("Chicago", "America/Chicago"),
    ZoneDescriptor::new("Los Angeles", "America/Los_Angeles"),
];

/// Source zones offered by the manual converter. The first entry is the
/// initial selection.
pub const CONVERTER_ZONES: [ZoneDescriptor; 5] = [
    ZoneDescriptor::new("China", "Asia/Shanghai"),
    ZoneDescriptor::new("Adelaide", "Australia/Adelaide"),
    ZoneDescriptor::new("Melbourne", "Australia/Melbourne"),
    ZoneDescriptor::new("New York", "America/New_York"),
    ZoneDescriptor::new("Chicago", "America/Chicago"),
];

/// One entry of the hour drop-down: a two-digit form value and a 12-hour label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HourOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn hour(value: &'static str, label: &'static str) -> HourOption {
    HourOption { value, label }
}

pub const HOUR_OPTIONS: [HourOption; 24] = [
    hour("00", "12 AM"),
    hour("01", "1 AM"),
    hour("02", "2 AM"),
    hour("03", "3 AM"),
    hour("04", "4 AM"),
    hour("05", "5 AM"),
    hour("06", "6 AM"),
    hour("07", "7 AM"),
    hour("08", "8 AM"),
    hour("09", "9 AM"),
    hour("10", "10 AM"),
    hour("11", "11 AM"),
    hour("12", "12 PM"),
    hour("13", "1 PM"),
    hour("14", "2 PM"),
    hour("15", "3 PM"),
    hour("16", "4 PM"),
    hour("17", "5 PM"),
    hour("18", "6 PM"),
    hour("19", "7 PM"),
    hour("20", "8 PM"),
    hour("21", "9 PM"),
    hour("22", "10 PM"),
    hour("23", "11 PM"),
];

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
