use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Offset from the start of a booking day, in seconds.
///
/// Offsets are not wrapped at midnight: a 23:30 start plus a 60 minute
/// service yields `24:30:00`. Serialized as `HH:MM:SS`, parsed from
/// `HH:MM` or `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, sqlx::Type)]
#[sqlx(transparent)]
pub struct TimeOffset(i32);

impl TimeOffset {
    pub fn from_hms(hours: i32, minutes: i32, seconds: i32) -> Option<Self> {
        if hours < 0 || !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
            return None;
        }
        hours
            .checked_mul(3600)
            .and_then(|h| h.checked_add(minutes * 60 + seconds))
            .map(TimeOffset)
    }

    pub fn seconds(self) -> i32 {
        self.0
    }

    /// `None` when the result does not fit the offset range.
    pub fn plus_minutes(self, minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(|secs| self.0.checked_add(secs))
            .map(TimeOffset)
    }
}

impl fmt::Display for TimeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;
        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

impl FromStr for TimeOffset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let numbers = parts
            .iter()
            .map(|p| p.parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| format!("Invalid time format (HH:MM[:SS]): {}", s))?;

        let offset = match numbers.as_slice() {
            [h, m] => TimeOffset::from_hms(*h, *m, 0),
            [h, m, sec] => TimeOffset::from_hms(*h, *m, *sec),
            _ => None,
        };
        offset.ok_or_else(|| format!("Invalid time format (HH:MM[:SS]): {}", s))
    }
}

impl Serialize for TimeOffset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOffset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Day of week, numbered 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum DayOfWeek {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl TryFrom<i32> for DayOfWeek {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DayOfWeek::Sunday),
            1 => Ok(DayOfWeek::Monday),
            2 => Ok(DayOfWeek::Tuesday),
            3 => Ok(DayOfWeek::Wednesday),
            4 => Ok(DayOfWeek::Thursday),
            5 => Ok(DayOfWeek::Friday),
            6 => Ok(DayOfWeek::Saturday),
            other => Err(format!("Invalid day of week: {}", other)),
        }
    }
}

impl From<DayOfWeek> for i32 {
    fn from(day: DayOfWeek) -> Self {
        day as i32
    }
}
