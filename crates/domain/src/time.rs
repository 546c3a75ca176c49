use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

const MINUTES_IN_DAY: u32 = 24 * 60;

/// Wall clock time of day with minute precision, written as `HH:mm`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    hours: u32,
    minutes: u32,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid time: `{0}`, expected format HH:mm")]
pub struct InvalidTimeError(pub String);

impl Time {
    pub fn new(hours: u32, minutes: u32) -> Option<Self> {
        if hours < 24 && minutes < 60 {
            Some(Self { hours, minutes })
        } else {
            None
        }
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Minutes since midnight
    pub fn minute_of_day(&self) -> u32 {
        self.hours * 60 + self.minutes
    }

    /// Moves the clock forward. Returns `None` when it would pass midnight.
    pub fn add_minutes(&self, minutes: u32) -> Option<Self> {
        let total = self.minute_of_day() + minutes;
        if total >= MINUTES_IN_DAY {
            return None;
        }
        Self::new(total / 60, total % 60)
    }
}

impl FromStr for Time {
    type Err = InvalidTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidTimeError(s.to_string());
        let (hours, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;
        if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
            return Err(invalid());
        }
        let hours = hours.parse::<u32>().map_err(|_| invalid())?;
        let minutes = minutes.parse::<u32>().map_err(|_| invalid())?;
        Self::new(hours, minutes).ok_or_else(invalid)
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TimeVisitor;

        impl<'de> Visitor<'de> for TimeVisitor {
            type Value = Time;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A time of day formatted as HH:mm")
            }

            fn visit_str<E>(self, value: &str) -> Result<Time, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<Time>()
                    .map_err(|_| E::custom(format!("Malformed time: {}", value)))
            }
        }

        deserializer.deserialize_str(TimeVisitor)
    }
}
