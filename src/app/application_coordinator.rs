//! Application-level coordination and workflow management.
//!
//! Handles operations that cross state components: configuration edits
//! (store, theme and editor buffers), view switching, date input and the
//! confirm hand-off.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::app::AppState;
use rbistro::{ConfigUpdate, Reservation, WizardStep};

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Flips between the booking form and the branding editor.
    ///
    /// The booking draft is left untouched so a guest returning from the
    /// editor continues where they left off.
    pub fn toggle_view(state: &mut AppState) {
        state.router.toggle();
        debug!(mode = ?state.router.mode(), "view toggled");
    }

    /// Applies a branding edit, persists it and re-projects the theme.
    pub fn edit_config<S>(state: &mut AppState, storage: Option<&mut S>, changes: ConfigUpdate)
    where
        S: eframe::Storage + ?Sized,
    {
        let config = state.config.update(storage, changes);
        state.theme.refresh(config);
        debug!(name = %config.display_name, accent = %config.accent_color, "configuration updated");
    }

    /// Sets the booking date from the picker.
    pub fn pick_date(state: &mut AppState, date: NaiveDate, today: NaiveDate) {
        match state.booking.wizard.set_date(date, today) {
            Ok(()) => {
                state.booking.set_date_error(None);
                state.booking.sync_date_text();
                state.booking.close_picker();
            }
            Err(err) => state.booking.set_date_error(Some(err.to_string())),
        }
    }

    /// Parses the typed date fallback and sets it.
    pub fn submit_typed_date(state: &mut AppState, today: NaiveDate) {
        let input = state.booking.date_text().to_string();
        match state.booking.wizard.set_date_str(&input, today) {
            Ok(()) => {
                state.booking.set_date_error(None);
                state.booking.sync_date_text();
            }
            Err(err) => {
                debug!(%err, "typed date rejected");
                state.booking.set_date_error(Some(err.to_string()));
            }
        }
    }

    /// Advances the wizard; a no-op while step 1 is incomplete.
    pub fn advance(state: &mut AppState) -> WizardStep {
        state.booking.close_picker();
        state.booking.wizard.advance()
    }

    pub fn back(state: &mut AppState) -> WizardStep {
        state.booking.wizard.back()
    }

    /// Confirms the booking and remounts a fresh form.
    ///
    /// The reservation is returned to the shell and not kept anywhere.
    pub fn confirm(state: &mut AppState) -> Option<Reservation> {
        let reservation = state.booking.wizard.confirm()?;
        info!(
            party = %reservation.party_size,
            date = %reservation.date,
            time = %reservation.time,
            "reservation confirmed"
        );
        state.booking.remount();
        Some(reservation)
    }
}
