//! Weekday normalization
//!
//! Parses human weekday expressions ("lunes-viernes", "viernes,sábado",
//! "1-5", "5-0") into a canonical set of day indices 0-6 (0 = Sunday) and
//! renders the set back to the reconciler's numeric form or to Spanish day
//! names for display. Ranges wrap circularly when the end index precedes
//! the start index.

use crate::error::ScheduleError;
use std::fmt;

/// Accent-free day names in index order, used for parsing.
const DAY_NAMES: [&str; 7] = [
    "domingo",
    "lunes",
    "martes",
    "miercoles",
    "jueves",
    "viernes",
    "sabado",
];

/// Display day names in index order.
const DAY_NAMES_DISPLAY: [&str; 7] = [
    "domingo",
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
];

/// Rendered form of the empty set: every day.
const EVERY_DAY_SENTINEL: &str = "todos";

/// A deduplicated set of weekday indices 0-6 (0 = Sunday).
///
/// First-occurrence order is preserved for display; equality and
/// membership ignore it.
#[derive(Debug, Clone, Default)]
pub struct WeekdaySpec {
    days: Vec<u8>,
}

impl WeekdaySpec {
    /// The full week, 0 through 6.
    pub fn every_day() -> Self {
        Self {
            days: (0..7).collect(),
        }
    }

    /// Parse a weekday expression.
    ///
    /// Accepted inputs:
    /// - empty/blank: every day;
    /// - numeric indices with `,` separators and `-` ranges ("1-5",
    ///   "5,6,0"), whitespace ignored;
    /// - Spanish day names and name ranges, case- and accent-insensitive
    ///   ("Lunes-Viernes", "sábado").
    ///
    /// A range whose end precedes its start wraps through the week end:
    /// "viernes-domingo" and "5-0" both yield {5, 6, 0}.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::UnknownDay`] for an unrecognized token and
    /// [`ScheduleError::InvalidDayIndex`] for a numeric index outside 0-6.
    pub fn parse(input: &str) -> Result<Self, ScheduleError> {
        let raw = input.trim();
        if raw.is_empty() {
            return Ok(Self::every_day());
        }

        let numeric = raw
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-' || c == ',' || c.is_whitespace());
        if numeric {
            Self::parse_numeric(raw)
        } else {
            Self::parse_named(raw)
        }
    }

    fn parse_numeric(raw: &str) -> Result<Self, ScheduleError> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let mut spec = Self::default();
        for chunk in compact.split(',').filter(|c| !c.is_empty()) {
            if let Some((start, end)) = chunk.split_once('-') {
                spec.push_range(parse_day_index(start)?, parse_day_index(end)?);
            } else {
                spec.push(parse_day_index(chunk)?);
            }
        }
        Ok(spec)
    }

    fn parse_named(raw: &str) -> Result<Self, ScheduleError> {
        let normalized: String = strip_accents(&raw.to_lowercase())
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let mut spec = Self::default();
        for part in normalized.split(',').filter(|p| !p.is_empty()) {
            if let Some((start, end)) = part.split_once('-') {
                spec.push_range(day_index_of(start)?, day_index_of(end)?);
            } else {
                spec.push(day_index_of(part)?);
            }
        }
        Ok(spec)
    }

    /// Shift every member by `by` days, modulo 7.
    ///
    /// Aligns a weekday set expressed in local time with the weekday in
    /// effect at the converted UTC clock time; without this a local Friday
    /// departure landing on UTC Saturday would silently never fire.
    #[must_use]
    pub fn shift(&self, by: i8) -> Self {
        let mut shifted = Self::default();
        for &day in &self.days {
            shifted.push((i16::from(day) + i16::from(by)).rem_euclid(7) as u8);
        }
        shifted
    }

    /// Render to the reconciler's form: comma-separated indices in
    /// first-occurrence order.
    pub fn to_kube(&self) -> String {
        let rendered: Vec<String> = self.days.iter().map(u8::to_string).collect();
        rendered.join(",")
    }

    /// Render to Spanish day names for display; the empty set reads as
    /// "todos" (every day).
    pub fn to_human(&self) -> String {
        if self.days.is_empty() {
            return EVERY_DAY_SENTINEL.to_string();
        }
        let rendered: Vec<&str> = self
            .days
            .iter()
            .map(|&d| DAY_NAMES_DISPLAY[usize::from(d)])
            .collect();
        rendered.join(",")
    }

    /// Member indices in first-occurrence order.
    pub fn days(&self) -> &[u8] {
        &self.days
    }

    /// Whether `day` is a member.
    pub fn contains(&self, day: u8) -> bool {
        self.days.contains(&day)
    }

    /// Number of distinct days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    fn push(&mut self, day: u8) {
        if !self.days.contains(&day) {
            self.days.push(day);
        }
    }

    fn push_range(&mut self, start: u8, end: u8) {
        if start <= end {
            for day in start..=end {
                self.push(day);
            }
        } else {
            // Circular range: wrap through the end of the week
            for day in start..7 {
                self.push(day);
            }
            for day in 0..=end {
                self.push(day);
            }
        }
    }

    fn membership_mask(&self) -> u8 {
        self.days.iter().fold(0u8, |mask, &d| mask | (1 << d))
    }
}

impl PartialEq for WeekdaySpec {
    fn eq(&self, other: &Self) -> bool {
        self.membership_mask() == other.membership_mask()
    }
}

impl Eq for WeekdaySpec {}

impl fmt::Display for WeekdaySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_kube())
    }
}

fn parse_day_index(token: &str) -> Result<u8, ScheduleError> {
    let index: u8 = token
        .parse()
        .map_err(|_| ScheduleError::UnknownDay(token.to_string()))?;
    if index > 6 {
        return Err(ScheduleError::InvalidDayIndex(token.to_string()));
    }
    Ok(index)
}

fn day_index_of(name: &str) -> Result<u8, ScheduleError> {
    DAY_NAMES
        .iter()
        .position(|&candidate| candidate == name)
        .map(|i| i as u8)
        .ok_or_else(|| ScheduleError::UnknownDay(name.to_string()))
}

fn strip_accents(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}
