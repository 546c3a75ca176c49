use chrono::prelude::*;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("Invalid date: `{0}`, expected format YYYY-MM-DD")]
pub struct InvalidDateError(pub String);

/// Parses a calendar date in the `YYYY-MM-DD` format used for bookings.
/// Month and day may be given without zero padding.
pub fn parse_date(datestr: &str) -> Result<NaiveDate, InvalidDateError> {
    let invalid = || InvalidDateError(datestr.to_string());
    let parts = datestr.trim().split('-').collect::<Vec<_>>();
    if parts.len() != 3 {
        return Err(invalid());
    }
    let year = parts[0].parse::<i32>().map_err(|_| invalid())?;
    let month = parts[1].parse::<u32>().map_err(|_| invalid())?;
    let day = parts[2].parse::<u32>().map_err(|_| invalid())?;

    if !(1970..=2100).contains(&year) {
        return Err(invalid());
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Day of the week with Sunday as 0 and Saturday as 6
pub fn day_of_week(date: &NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Start of the given day
pub fn midnight(date: &NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Converts a unix timestamp in millis to a UTC date time
pub fn from_timestamp_millis(ts: i64) -> NaiveDateTime {
    Utc.timestamp_millis_opt(ts)
        .single()
        .map(|dt| dt.naive_utc())
        .unwrap_or(NaiveDateTime::MIN)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_accepts_valid_dates() {
        let valid_dates = vec![
            "2018-1-1",
            "2025-12-31",
            "2020-1-12",
            "2020-2-29",
            "2020-02-2",
            "2020-02-02",
            "2026-01-05",
        ];

        for date in &valid_dates {
            assert!(parse_date(date).is_ok());
        }
    }

    #[test]
    fn it_rejects_invalid_dates() {
        let invalid_dates = vec![
            "2018--1-1",
            "2020-1-32",
            "2021-2-29",
            "2020-0-1",
            "2020-1-0",
            "1900-1-1",
            "",
            "2020/01/01",
        ];

        for date in &invalid_dates {
            assert!(parse_date(date).is_err());
        }
    }

    #[test]
    fn it_computes_day_of_week_from_sunday() {
        // 2026-01-04 is a Sunday
        assert_eq!(day_of_week(&parse_date("2026-01-04").unwrap()), 0);
        assert_eq!(day_of_week(&parse_date("2026-01-05").unwrap()), 1);
        assert_eq!(day_of_week(&parse_date("2026-01-10").unwrap()), 6);
    }
}
