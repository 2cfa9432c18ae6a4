//! The Golden Bistro booking widget
//!
//! A native two-screen booking app built with egui:
//! - A two-step reservation form (party size, date, time, then contact details)
//! - An admin panel for the restaurant name and accent color
//! - Branding persisted between sessions through eframe storage
//! - A live accent theme applied to every surface

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - State components for theme, booking form and admin editor
//! - `ui/` - Surface rendering and interaction reporting
//! - `utils/` - Formatting helpers

use eframe::egui;
use tracing_subscriber::EnvFilter;

mod utils;
mod app;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use rbistro::ConfigStore;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Initializes logging; `RUST_LOG` overrides the default `info` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Main application entry point that initializes and launches the booking widget.
fn main() -> eframe::Result {
    init_logging();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([448.0, 860.0])
            .with_min_inner_size([360.0, 640.0])
            .with_title("Table Booking"),
        ..Default::default()
    };

    eframe::run_native(
        "Golden Bistro Booking",
        options,
        Box::new(|cc| Ok(Box::new(BistroApp::new(cc)))),
    )
}

/// The booking widget application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` applies cross-cutting interactions
/// - `ThemeCoordinator` pushes the accent projection into egui
/// - `PanelManager` renders the mounted surface
struct BistroApp {
    /// Centralized application state
    state: AppState,
}

impl BistroApp {
    /// Creates the app with the branding restored from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let config = ConfigStore::open(cc.storage);
        tracing::info!(
            name = %config.current().display_name,
            accent = %config.current().accent_color,
            "booking widget started"
        );

        Self {
            state: AppState::with_config(config),
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, frame: &mut eframe::Frame) {
        let today = utils::today();
        match interaction {
            PanelInteraction::ToggleViewRequested => {
                ApplicationCoordinator::toggle_view(&mut self.state);
            }
            PanelInteraction::ConfigEdited(changes) => {
                ApplicationCoordinator::edit_config(&mut self.state, frame.storage_mut(), changes);
            }
            PanelInteraction::DatePicked(date) => {
                ApplicationCoordinator::pick_date(&mut self.state, date, today);
            }
            PanelInteraction::TypedDateSubmitted => {
                ApplicationCoordinator::submit_typed_date(&mut self.state, today);
            }
            PanelInteraction::AdvanceRequested => {
                ApplicationCoordinator::advance(&mut self.state);
            }
            PanelInteraction::BackRequested => {
                ApplicationCoordinator::back(&mut self.state);
            }
            PanelInteraction::ConfirmRequested => {
                // No confirmation screen or delivery exists; the record ends here.
                let _ = ApplicationCoordinator::confirm(&mut self.state);
            }
        }
    }
}

impl eframe::App for BistroApp {
    /// Called when the app is being shut down - writes the branding once more.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ConfigStore::save(storage, self.state.config.current());
    }

    /// Main update loop.
    ///
    /// 1. Apply theme
    /// 2. Render the mounted surface via PanelManager
    /// 3. Handle the interaction it reports
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, utils::today()) {
            self.handle_panel_interaction(interaction, frame);
        }
    }
}
