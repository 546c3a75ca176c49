use crate::{
    date::midnight,
    shared::entity::{Entity, ID},
    time::Time,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt::Display, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Statuses for which the appointment is still expected to happen
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid booking status: `{0}`")]
pub struct InvalidStatusError(pub String);

impl FromStr for BookingStatus {
    type Err = InvalidStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(InvalidStatusError(s.to_string())),
        }
    }
}

/// Review score between 1 and 5 stars
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

#[derive(Error, Debug, PartialEq)]
#[error("Rating must be between 1 and 5, got: {0}")]
pub struct InvalidRatingError(pub u8);

impl Rating {
    pub fn new(value: u8) -> Result<Self, InvalidRatingError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidRatingError(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = InvalidRatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// An appointment of a client on a `Service`.
///
/// `provider_id` is copied from the `Service` when the `Booking` is created
/// and is never synced afterwards. Bookings are never deleted, they only
/// move between statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: ID,
    pub client_id: ID,
    pub service_id: ID,
    pub provider_id: ID,
    pub date: NaiveDate,
    pub time: Time,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

impl Booking {
    /// A new confirmed `Booking`. Blank notes are dropped.
    pub fn new(
        client_id: ID,
        service_id: ID,
        provider_id: ID,
        date: NaiveDate,
        time: Time,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: ID::generate("b"),
            client_id,
            service_id,
            provider_id,
            date,
            time,
            status: BookingStatus::Confirmed,
            notes: notes.filter(|n| !n.trim().is_empty()),
            rating: None,
            review: None,
        }
    }

    /// Cancelling is allowed from every status
    pub fn cancel(&mut self) {
        self.status = BookingStatus::Cancelled;
    }

    /// Completes the `Booking` with the client's review. Any previous review
    /// is replaced.
    pub fn attach_review(&mut self, rating: Rating, review: String) {
        self.status = BookingStatus::Completed;
        self.rating = Some(rating);
        self.review = Some(review);
    }

    pub fn set_status(&mut self, status: BookingStatus) {
        self.status = status;
    }

    /// Start of the booked day
    pub fn starts_on(&self) -> NaiveDateTime {
        midnight(&self.date)
    }
}

impl Entity for Booking {
    fn id(&self) -> &ID {
        &self.id
    }
}
