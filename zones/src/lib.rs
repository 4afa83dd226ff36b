//! Time zone tables and conversion helpers for the meeting-time page.
//!
//! This crate is UI-framework agnostic so the client crate can consume it
//! directly and the conversion rules can be tested on the host without a
//! browser.
//!
//! Two independent computations live here:
//! - [`schedule::compute_schedule`] renders one fixed reference instant into
//!   California time, the viewer's local zone and every zone of a table.
//! - [`converter::convert_to_california`] turns a user-picked zone, date and
//!   hour into California wall-clock time.

pub mod catalog;
pub mod config;
pub mod convert;
pub mod converter;
pub mod local;
pub mod schedule;

pub use catalog::{CALIFORNIA, CONVERTER_ZONES, HOUR_OPTIONS, HourOption, SCHEDULE_ZONES, ZoneDescriptor};
pub use config::ReferenceInstant;
pub use converter::{UserSelection, convert_to_california};
pub use local::{LocalZone, detect_local_zone};
pub use schedule::{DisplayRow, ScheduleSnapshot, compute_schedule};

/// Error returned by the parsing and conversion helpers.
///
/// The zone tables are compile-time constants, so for them these are
/// unreachable; they exist for build-time overrides and user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZoneError {
    /// The identifier is not in the embedded IANA database.
    #[error("unknown time zone: {0}")]
    UnknownZone(String),
    /// The date field is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    /// The hour field is not an hour of the day.
    #[error("invalid hour '{0}': expected 00-23")]
    InvalidHour(String),
    /// A wall-clock literal is not `YYYY-MM-DDTHH:MM:SS`.
    #[error("invalid wall-clock time '{0}': expected YYYY-MM-DDTHH:MM:SS")]
    InvalidWallClock(String),
    /// The wall-clock time maps outside the supported instant range.
    #[error("wall-clock time {wall_clock} cannot be represented in {zone}")]
    Unrepresentable { wall_clock: String, zone: String },
}
