//! Schedule computation errors.
//!
//! Every variant is fatal for the run: a partially-correct schedule is
//! worse than none, so nothing is emitted after the first failure.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced while computing a schedule.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A weekday token is neither a known day name nor numeric
    #[error("Unrecognized day: '{0}'")]
    UnknownDay(String),

    /// A numeric weekday index is outside 0-6
    #[error("Day index out of range 0-6: '{0}'")]
    InvalidDayIndex(String),

    /// A time is not a valid "HH:MM"
    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    /// The configured zone is not in the IANA database
    #[error("Unknown time zone: '{0}'")]
    UnknownTimeZone(String),

    /// The local time falls in a DST spring-forward gap on the reference
    /// date, so it names no instant
    #[error("Local time {time} does not exist in {zone} on {date}")]
    NonexistentLocalTime {
        /// The requested wall-clock time
        time: String,
        /// The zone being converted from
        zone: String,
        /// The reference conversion date
        date: NaiveDate,
    },
}
