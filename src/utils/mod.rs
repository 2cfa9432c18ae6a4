//! Utility modules for the booking widget.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_long_date, format_party_summary, today};
