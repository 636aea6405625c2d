//! Time-of-day conversion between a local zone and UTC
//!
//! Conversions are anchored to an explicit reference date supplied by the
//! caller; the engine never reads the system clock. The UTC offset used is
//! the one in effect on that date, so schedules generated near a DST
//! transition should be regenerated after it (the default zone,
//! America/Bogota, has no DST and is date-independent).

use crate::error::ScheduleError;
use chrono::{LocalResult, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

/// Signed difference in calendar days between the UTC date and the local
/// date of one converted instant. Applied to weekday sets, never to times.
pub type DayShift = i8;

/// Minutes per day, for wrap-around arithmetic.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// A wall-clock "HH:MM" with no date component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Build from components, validating ranges.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ScheduleError> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    /// Hour component, 0-23.
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Minute component, 0-59.
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Add `minutes`, wrapping within the day.
    ///
    /// Returns the wrapped time and the number of whole days the addition
    /// crossed, so a caller can tell "23:58 + 5min = 00:03" apart from an
    /// in-day move.
    #[must_use]
    pub fn add_minutes(self, minutes: u32) -> (Self, i32) {
        let total =
            i64::from(self.hour) * 60 + i64::from(self.minute) + i64::from(minutes);
        let carry = total.div_euclid(MINUTES_PER_DAY);
        let wrapped = total.rem_euclid(MINUTES_PER_DAY);
        (
            Self {
                hour: (wrapped / 60) as u8,
                minute: (wrapped % 60) as u8,
            },
            carry as i32,
        )
    }

    fn as_naive(self) -> NaiveTime {
        // Fields are range-checked at construction
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }

    fn from_naive(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidTime(input.to_string());
        let (hh, mm) = input.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u8 = hh.parse().map_err(|_| invalid())?;
        let minute: u8 = mm.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Converts wall-clock times between one IANA zone and UTC, anchored to a
/// fixed reference date.
#[derive(Debug, Clone)]
pub struct TimeConverter {
    zone: Tz,
    reference: NaiveDate,
}

impl TimeConverter {
    /// Build a converter for `zone`, anchored to `reference`.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::UnknownTimeZone`] when the zone is not in the IANA
    /// database.
    pub fn new(zone: &str, reference: NaiveDate) -> Result<Self, ScheduleError> {
        let zone: Tz = zone
            .parse()
            .map_err(|_| ScheduleError::UnknownTimeZone(zone.to_string()))?;
        Ok(Self { zone, reference })
    }

    /// Build a converter anchored to the current date in `zone`.
    pub fn for_current_date(zone: &str) -> Result<Self, ScheduleError> {
        let parsed: Tz = zone
            .parse()
            .map_err(|_| ScheduleError::UnknownTimeZone(zone.to_string()))?;
        let reference = Utc::now().with_timezone(&parsed).date_naive();
        Ok(Self {
            zone: parsed,
            reference,
        })
    }

    /// The IANA name of the configured zone.
    pub fn zone_name(&self) -> &str {
        self.zone.name()
    }

    /// The reference conversion date.
    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Convert a local wall-clock time to UTC.
    ///
    /// The returned [`DayShift`] is the signed difference between the UTC
    /// calendar date and the local calendar date of the converted instant
    /// (a late-evening local time in a western zone lands on the next UTC
    /// day, shift +1).
    ///
    /// An ambiguous local time (DST fall-back) resolves to the earliest
    /// instant; a nonexistent one (spring-forward gap) is an error.
    pub fn local_to_utc(&self, time: TimeOfDay) -> Result<(TimeOfDay, DayShift), ScheduleError> {
        let naive = self.reference.and_time(time.as_naive());
        let local = match self.zone.from_local_datetime(&naive) {
            LocalResult::Single(instant) => instant,
            LocalResult::Ambiguous(earliest, _) => earliest,
            LocalResult::None => {
                return Err(ScheduleError::NonexistentLocalTime {
                    time: time.to_string(),
                    zone: self.zone.name().to_string(),
                    date: self.reference,
                });
            }
        };
        let utc = local.with_timezone(&Utc);
        let shift = (utc.date_naive() - self.reference).num_days() as DayShift;
        Ok((TimeOfDay::from_naive(utc.time()), shift))
    }

    /// Convert a UTC wall-clock time to the local zone, for display only.
    pub fn utc_to_local(&self, time: TimeOfDay) -> TimeOfDay {
        let utc = Utc.from_utc_datetime(&self.reference.and_time(time.as_naive()));
        TimeOfDay::from_naive(utc.with_timezone(&self.zone).time())
    }
}
