pub mod error;
pub mod config;
pub mod store;
pub mod theme;
pub mod draft;
pub mod wizard;
pub mod view;
pub mod calendar;

// Export error type
pub use error::{BookingError, Result};

// Export configuration and persistence
pub use config::{Configuration, ConfigUpdate, CONFIG_KEY, BRAND_PRESETS};
pub use store::ConfigStore;

// Export theme support
pub use theme::{
    ThemeProjection, ThemeColors, project, light_palette,
    hex_to_color32, parse_hex_color, color32_to_hex
};

// Export booking state machine
pub use draft::{BookingDraft, PartySize, TimeSlot, Reservation, TIME_SLOTS};
pub use wizard::{BookingWizard, WizardStep};

// Export view routing
pub use view::{ViewMode, ViewRouter};

// Export calendar model for the date picker
pub use calendar::{MonthCursor, month_grid, is_selectable};
