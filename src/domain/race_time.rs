// Race time normalization: "MM:SS" strings as instants on a fixed reference date
use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RaceTimeError {
    #[error("race time {0:?} is missing the ':' separator")]
    MissingSeparator(String),
    #[error("race time {0:?} has a non-numeric component")]
    InvalidComponent(String),
    #[error("race time {0:?} has seconds outside 00-59")]
    SecondsOutOfRange(String),
}

/// A finishing time placed on 1970-01-01 UTC.
///
/// Only the offset from midnight carries meaning. Values are built directly on
/// the UTC clock, so the same string normalizes to the same instant on every
/// host regardless of its local timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct RaceTime(DateTime<Utc>);

impl RaceTime {
    /// Parse `"MM:SS"`. Minutes may exceed 59; seconds may not.
    pub fn parse(input: &str) -> Result<Self, RaceTimeError> {
        let trimmed = input.trim();
        let (minutes, seconds) = trimmed
            .split_once(':')
            .ok_or_else(|| RaceTimeError::MissingSeparator(input.to_string()))?;

        let minutes = parse_component(minutes, input)?;
        let seconds = parse_component(seconds, input)?;
        if seconds >= 60 {
            return Err(RaceTimeError::SecondsOutOfRange(input.to_string()));
        }

        Ok(Self::from_seconds(minutes * 60 + seconds))
    }

    pub fn from_seconds(total_seconds: i64) -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(total_seconds))
    }

    pub fn total_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// ISO-8601 with millisecond precision, e.g. `1970-01-01T00:36:55.000Z`.
    pub fn to_iso_string(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

fn parse_component(part: &str, input: &str) -> Result<i64, RaceTimeError> {
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(RaceTimeError::InvalidComponent(input.to_string()));
    }
    part.parse::<u32>()
        .map(i64::from)
        .map_err(|_| RaceTimeError::InvalidComponent(input.to_string()))
}

impl TryFrom<String> for RaceTime {
    type Error = RaceTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RaceTime::parse(&value)
    }
}

impl fmt::Display for RaceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_seconds();
        write!(f, "{:02}:{:02}", total / 60, total % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_deterministic() {
        let a = RaceTime::parse("36:55").unwrap();
        let b = RaceTime::parse("36:55").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.total_seconds(), 36 * 60 + 55);
    }

    #[test]
    fn test_one_second_apart() {
        let zero = RaceTime::parse("00:00").unwrap();
        let one = RaceTime::parse("00:01").unwrap();
        assert_eq!(one.timestamp_millis() - zero.timestamp_millis(), 1000);
        assert!(zero < one);
    }

    #[test]
    fn test_reference_date_is_utc_epoch() {
        let time = RaceTime::parse("36:55").unwrap();
        assert_eq!(time.to_iso_string(), "1970-01-01T00:36:55.000Z");
        assert_eq!(time.to_string(), "36:55");
    }

    #[test]
    fn test_minutes_past_the_hour() {
        let time = RaceTime::parse("75:02").unwrap();
        assert_eq!(time.to_string(), "75:02");
        assert_eq!(time.total_seconds(), 75 * 60 + 2);
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(
            RaceTime::parse("3655"),
            Err(RaceTimeError::MissingSeparator("3655".to_string()))
        );
        assert!(matches!(RaceTime::parse("ab:cd"), Err(RaceTimeError::InvalidComponent(_))));
        assert!(matches!(RaceTime::parse(":30"), Err(RaceTimeError::InvalidComponent(_))));
        assert!(matches!(RaceTime::parse("+1:30"), Err(RaceTimeError::InvalidComponent(_))));
        assert!(matches!(RaceTime::parse("36:75"), Err(RaceTimeError::SecondsOutOfRange(_))));
    }
}
