//! Manual converter: a picked zone, date and hour, read as California time.

use chrono::{NaiveDate, NaiveDateTime};

use crate::ZoneError;
use crate::catalog::{CALIFORNIA, CONVERTER_ZONES, HOUR_OPTIONS};
use crate::convert::{convert_wall_clock, format_wall_clock, parse_zone};

/// Form field values as the date picker and drop-downs report them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserSelection {
    pub zone_id: String,
    /// `YYYY-MM-DD`, empty until picked.
    pub date: String,
    /// `00`..`23`, empty until picked.
    pub hour: String,
}

impl Default for UserSelection {
    fn default() -> Self {
        Self {
            zone_id: CONVERTER_ZONES[0].iana_id.to_owned(),
            date: String::new(),
            hour: String::new(),
        }
    }
}

impl UserSelection {
    pub fn is_complete(&self) -> bool {
        !self.date.is_empty() && !self.hour.is_empty()
    }

    /// The selected wall-clock time, seconds fixed to zero. The hour must be
    /// one of the two-digit [`HOUR_OPTIONS`] values.
    ///
    /// `Ok(None)` while the date or hour is still empty.
    pub fn wall_clock(&self) -> Result<Option<NaiveDateTime>, ZoneError> {
        if !self.is_complete() {
            return Ok(None);
        }
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| ZoneError::InvalidDate(self.date.clone()))?;
        let hour = HOUR_OPTIONS
            .iter()
            .position(|option| option.value == self.hour)
            .and_then(|index| u32::try_from(index).ok())
            .ok_or_else(|| ZoneError::InvalidHour(self.hour.clone()))?;
        Ok(date.and_hms_opt(hour, 0, 0))
    }
}

/// Convert the selection to formatted California time.
///
/// Returns `Ok(None)` for an incomplete selection so callers can treat it as
/// a no-op.
pub fn convert_to_california(selection: &UserSelection) -> Result<Option<String>, ZoneError> {
    let Some(wall_clock) = selection.wall_clock()? else {
        return Ok(None);
    };
    let source = parse_zone(&selection.zone_id)?;
    let converted = convert_wall_clock(wall_clock, source, CALIFORNIA.tz()?)?;

    tracing::debug!(%wall_clock, from = source.name(), "converted selection to California time");
    Ok(Some(format_wall_clock(&converted)))
}

#[cfg(test)]
#[path = "converter_test.rs"]
mod tests;
