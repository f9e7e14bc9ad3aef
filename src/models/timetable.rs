use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// School days a timetable slot can fall on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::BadRequest(format!("Not a school day: {}", s)))
    }
}

/// A lesson slot number, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Period(u8);

impl Period {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 10;

    pub fn new(value: u8) -> Result<Self, AppError> {
        if (Self::FIRST..=Self::LAST).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AppError::BadRequest(format!(
                "Period must be between {} and {}, got {}",
                Self::FIRST,
                Self::LAST,
                value
            )))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Period {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Period::new(value)
    }
}

impl From<Period> for u8 {
    fn from(period: Period) -> Self {
        period.0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Period {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| AppError::BadRequest(format!("Not a period number: {}", s)))?;
        Period::new(value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub id: String,
    pub class_name: String,
    pub day: Weekday,
    pub period: Period,
    pub subject: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTimetableEntryRequest {
    pub class_name: String,
    pub day: Weekday,
    pub period: Period,
    pub subject: String,
}

/// Groups entries by school day in week order, each day sorted by period.
/// Days without entries are left out.
pub fn group_by_day(entries: &[TimetableEntry]) -> Vec<(Weekday, Vec<&TimetableEntry>)> {
    Weekday::ALL
        .into_iter()
        .filter_map(|day| {
            let mut slots: Vec<&TimetableEntry> =
                entries.iter().filter(|entry| entry.day == day).collect();
            if slots.is_empty() {
                return None;
            }
            slots.sort_by_key(|entry| entry.period);
            Some((day, slots))
        })
        .collect()
}
