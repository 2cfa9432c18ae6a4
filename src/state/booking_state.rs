//! Booking surface state.
//!
//! Wraps the wizard together with the transient widget state the form needs:
//! the month the picker shows, whether it is open, the typed-date buffer and
//! the last input rejection.

use chrono::NaiveDate;
use rbistro::{BookingWizard, MonthCursor};

/// State owned by the booking surface.
///
/// Responsibilities:
/// - Owning the wizard (draft and step)
/// - Tracking date picker navigation
/// - Holding the typed-date fallback input and its error message
#[derive(Debug, Clone, Default)]
pub struct BookingState {
    /// The booking state machine
    pub wizard: BookingWizard,
    /// Month displayed by the picker; `None` until first opened
    visible_month: Option<MonthCursor>,
    /// Whether the picker grid is expanded
    picker_open: bool,
    /// Text buffer for the typed date fallback
    date_text: String,
    /// Message for the last rejected date input
    date_error: Option<String>,
}

impl BookingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the draft and all widget state, as on a fresh mount.
    pub fn remount(&mut self) {
        *self = Self::new();
    }

    // ===== Picker =====

    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    /// Opens or closes the picker, starting on the selected date's month or
    /// on the current month.
    pub fn toggle_picker(&mut self, today: NaiveDate) {
        self.picker_open = !self.picker_open;
        if self.picker_open && self.visible_month.is_none() {
            let anchor = self.wizard.draft().date.unwrap_or(today);
            self.visible_month = Some(MonthCursor::containing(anchor));
        }
    }

    pub fn close_picker(&mut self) {
        self.picker_open = false;
    }

    pub fn visible_month(&self, today: NaiveDate) -> MonthCursor {
        self.visible_month
            .unwrap_or_else(|| MonthCursor::containing(today))
    }

    pub fn show_month(&mut self, month: MonthCursor) {
        self.visible_month = Some(month);
    }

    // ===== Typed Date =====

    pub fn date_text_mut(&mut self) -> &mut String {
        &mut self.date_text
    }

    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    pub fn date_error(&self) -> Option<&str> {
        self.date_error.as_deref()
    }

    pub fn set_date_error(&mut self, message: Option<String>) {
        self.date_error = message;
    }

    /// Mirrors the chosen date into the text buffer.
    pub fn sync_date_text(&mut self) {
        if let Some(date) = self.wizard.draft().date {
            self.date_text = date.format("%Y-%m-%d").to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_picker_opens_on_selected_month() {
        let today = date(2025, 5, 20);
        let mut state = BookingState::new();
        state.wizard.set_date(date(2025, 8, 2), today).unwrap();

        state.toggle_picker(today);
        assert!(state.picker_open());
        assert_eq!(state.visible_month(today).month(), 8);

        state.toggle_picker(today);
        assert!(!state.picker_open());
    }

    #[test]
    fn test_picker_defaults_to_current_month() {
        let today = date(2025, 5, 20);
        let mut state = BookingState::new();
        state.toggle_picker(today);
        assert_eq!(state.visible_month(today), MonthCursor::containing(today));
    }

    #[test]
    fn test_remount_clears_everything() {
        let today = date(2025, 5, 20);
        let mut state = BookingState::new();
        state.wizard.set_date(today, today).unwrap();
        state.sync_date_text();
        state.set_date_error(Some("bad".to_string()));
        assert_eq!(state.date_text(), "2025-05-20");

        state.remount();
        assert!(state.wizard.draft().date.is_none());
        assert!(state.date_text().is_empty());
        assert!(state.date_error().is_none());
    }
}
