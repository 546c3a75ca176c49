//! Read only projections over the services and bookings collections.
//!
//! Every function keeps the storage order of its input unless it says
//! otherwise.

use crate::{
    booking::{Booking, BookingStatus},
    date::midnight,
    service::Service,
    ID,
};
use chrono::{NaiveDate, NaiveDateTime};
use itertools::Itertools;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Display;

pub fn bookings_by_client(bookings: &[Booking], client_id: &ID) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| b.client_id == *client_id)
        .cloned()
        .collect()
}

pub fn bookings_by_provider(bookings: &[Booking], provider_id: &ID) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| b.provider_id == *provider_id)
        .cloned()
        .collect()
}

pub fn services_by_provider(services: &[Service], provider_id: &ID) -> Vec<Service> {
    services
        .iter()
        .filter(|s| s.provider_id == *provider_id)
        .cloned()
        .collect()
}

/// Exact match on the category
pub fn services_by_category(services: &[Service], category: &str) -> Vec<Service> {
    services
        .iter()
        .filter(|s| s.category == category)
        .cloned()
        .collect()
}

/// Case insensitive substring match on name, description or category
pub fn search_services(services: &[Service], query: &str) -> Vec<Service> {
    let query = query.to_lowercase();
    services
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&query)
                || s.description.to_lowercase().contains(&query)
                || s.category.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Catalogue view for clients: the query is matched against name and
/// description only and is combined with the optional category.
pub fn browse_services(services: &[Service], query: &str, category: Option<&str>) -> Vec<Service> {
    let query = query.to_lowercase();
    services
        .iter()
        .filter(|s| {
            let matches_query = s.name.to_lowercase().contains(&query)
                || s.description.to_lowercase().contains(&query);
            let matches_category = category.map(|c| s.category == c).unwrap_or(true);
            matches_query && matches_category
        })
        .cloned()
        .collect()
}

/// Distinct categories in the order they first appear
pub fn categories(services: &[Service]) -> Vec<String> {
    services
        .iter()
        .map(|s| s.category.clone())
        .unique()
        .collect()
}

/// Confirmed bookings whose day starts after `now`
pub fn upcoming(bookings: &[Booking], now: &NaiveDateTime) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| b.starts_on() > *now && b.status == BookingStatus::Confirmed)
        .cloned()
        .collect()
}

pub fn completed(bookings: &[Booking]) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Completed)
        .cloned()
        .collect()
}

/// Sorts by date then time, ascending. Equal entries keep storage order.
pub fn sort_by_date(bookings: Vec<Booking>) -> Vec<Booking> {
    bookings
        .into_iter()
        .sorted_by_key(|b| (b.date, b.time))
        .collect()
}

/// Next confirmed bookings of a provider dashboard, earliest first
pub fn dashboard_upcoming(bookings: &[Booking], now: &NaiveDateTime, limit: usize) -> Vec<Booking> {
    let candidates = bookings
        .iter()
        .filter(|b| b.starts_on() >= *now && b.status == BookingStatus::Confirmed)
        .cloned()
        .collect();
    sort_by_date(candidates).into_iter().take(limit).collect()
}

/// Tabs of the client bookings page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingFilter {
    All,
    Upcoming,
    Completed,
}

impl Default for BookingFilter {
    fn default() -> Self {
        Self::All
    }
}

pub fn filter_bookings(
    bookings: &[Booking],
    filter: BookingFilter,
    now: &NaiveDateTime,
) -> Vec<Booking> {
    match filter {
        BookingFilter::All => bookings.to_vec(),
        BookingFilter::Upcoming => upcoming(bookings, now),
        BookingFilter::Completed => completed(bookings),
    }
}

/// Average review score, or `N/A` when nothing has been rated yet
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AverageRating {
    NotAvailable,
    Rated(f64),
}

impl Display for AverageRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAvailable => write!(f, "N/A"),
            Self::Rated(avg) => write!(f, "{:.1}", avg),
        }
    }
}

impl Serialize for AverageRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStats {
    pub total_services: usize,
    pub total_bookings: usize,
    /// Bookings on today or later, any status
    pub today_bookings: usize,
    pub confirmed_bookings: usize,
    pub completed_bookings: usize,
    pub average_rating: AverageRating,
}

pub fn provider_stats(
    provider_id: &ID,
    services: &[Service],
    bookings: &[Booking],
    today: &NaiveDate,
) -> ProviderStats {
    let provider_bookings = bookings_by_provider(bookings, provider_id);
    let start_of_today = midnight(today);
    let count_status = |status: BookingStatus| {
        provider_bookings
            .iter()
            .filter(|b| b.status == status)
            .count()
    };

    let ratings = provider_bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Completed)
        .filter_map(|b| b.rating)
        .map(|r| r.value() as f64)
        .collect::<Vec<_>>();
    let average_rating = if ratings.is_empty() {
        AverageRating::NotAvailable
    } else {
        AverageRating::Rated(ratings.iter().sum::<f64>() / ratings.len() as f64)
    };

    ProviderStats {
        total_services: services
            .iter()
            .filter(|s| s.provider_id == *provider_id)
            .count(),
        total_bookings: provider_bookings.len(),
        today_bookings: provider_bookings
            .iter()
            .filter(|b| b.starts_on() >= start_of_today)
            .count(),
        confirmed_bookings: count_status(BookingStatus::Confirmed),
        completed_bookings: count_status(BookingStatus::Completed),
        average_rating,
    }
}
