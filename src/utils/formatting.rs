//! Text formatting utilities for the booking widget.
//!
//! This module provides helper functions for presenting draft values in a human-readable way.

use chrono::NaiveDate;
use rbistro::PartySize;

/// The current calendar day in local time.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Formats a date in long US style.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_long_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()), "June 1, 2025");
/// ```
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Formats the guest count line of the reservation summary.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_party_summary(Some(PartySize::Two)), "2 People");
/// ```
pub fn format_party_summary(party_size: Option<PartySize>) -> String {
    match party_size {
        Some(size) => format!("{} People", size.label()),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(format_long_date(date), "June 1, 2025");

        let date = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();
        assert_eq!(format_long_date(date), "December 24, 2025");
    }

    #[test]
    fn test_format_party_summary() {
        assert_eq!(format_party_summary(Some(PartySize::Two)), "2 People");
        assert_eq!(format_party_summary(Some(PartySize::FivePlus)), "5+ People");
        assert_eq!(format_party_summary(None), "-");
    }
}
