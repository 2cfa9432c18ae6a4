//! Centralized application state for the booking widget.
//!
//! Composes focused state components, each owning one concern:
//! - the configuration store (the only process-wide shared value)
//! - the theme projected from it
//! - the view router
//! - the booking surface and the branding editor

use crate::state::{AdminState, BookingState, ThemeState};
use rbistro::{ConfigStore, ViewRouter};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Branding configuration and its persistence
    pub config: ConfigStore,

    /// Accent projection and base palette
    pub theme: ThemeState,

    /// Which surface is mounted
    pub router: ViewRouter,

    /// Booking wizard and date picker state
    pub booking: BookingState,

    /// Branding editor buffers
    pub admin: AdminState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates state with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ConfigStore::default())
    }

    /// Creates state around a configuration loaded from storage.
    pub fn with_config(config: ConfigStore) -> Self {
        Self {
            theme: ThemeState::from_config(config.current()),
            admin: AdminState::from_config(config.current()),
            router: ViewRouter::new(),
            booking: BookingState::new(),
            config,
        }
    }
}
