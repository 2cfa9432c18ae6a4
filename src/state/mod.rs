//! State management modules for the booking widget.
//!
//! This module contains state-only logic (no UI concerns):
//! - Theme state (light palette, projection of the current accent)
//! - Booking state (wizard plus date picker and typed-date buffers)
//! - Admin state (text buffers of the branding editor)

mod theme_state;
mod booking_state;
mod admin_state;

pub use theme_state::ThemeState;
pub use booking_state::BookingState;
pub use admin_state::AdminState;
