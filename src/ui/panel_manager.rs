//! Panel orchestration and layout management.
//!
//! Mounts the surface selected by the view router (booking form or admin
//! panel) plus the floating view switcher, and funnels their interactions
//! into a single result for the application coordinator.

use chrono::NaiveDate;
use rbistro::{ConfigUpdate, ViewMode};

use crate::app::AppState;
use crate::ui::booking_panel::{self, BookingInteraction};
use crate::ui::{admin_panel, header, view_switcher};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// The floating switcher was clicked
    ToggleViewRequested,
    /// The admin panel edited the configuration
    ConfigEdited(ConfigUpdate),
    /// A day was clicked in the date picker
    DatePicked(NaiveDate),
    /// The typed date was submitted
    TypedDateSubmitted,
    /// "Continue" on step 1
    AdvanceRequested,
    /// "Change reservation details" on step 2
    BackRequested,
    /// "Confirm Reservation" on step 2
    ConfirmRequested,
}

impl From<BookingInteraction> for PanelInteraction {
    fn from(interaction: BookingInteraction) -> Self {
        match interaction {
            BookingInteraction::DatePicked(date) => PanelInteraction::DatePicked(date),
            BookingInteraction::TypedDateSubmitted => PanelInteraction::TypedDateSubmitted,
            BookingInteraction::AdvanceRequested => PanelInteraction::AdvanceRequested,
            BookingInteraction::BackRequested => PanelInteraction::BackRequested,
            BookingInteraction::ConfirmRequested => PanelInteraction::ConfirmRequested,
        }
    }
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders the mounted surface and the view switcher.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        today: NaiveDate,
    ) -> Option<PanelInteraction> {
        let mut interaction = match state.router.mode() {
            ViewMode::Booking => Self::render_booking(ctx, state, today),
            ViewMode::Admin => Self::render_admin(ctx, state),
        };

        let colors = state.theme.palette();
        if view_switcher::render_view_switcher(ctx, state.router.mode(), colors) {
            interaction = Some(PanelInteraction::ToggleViewRequested);
        }

        interaction
    }

    fn page_frame(ctx: &egui::Context) -> egui::Frame {
        egui::Frame::default()
            .inner_margin(egui::Margin::symmetric(24, 0))
            .fill(ctx.style().visuals.panel_fill)
    }

    fn render_booking(
        ctx: &egui::Context,
        state: &mut AppState,
        today: NaiveDate,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("booking_header")
            .frame(Self::page_frame(ctx))
            .show(ctx, |ui| {
                header::render_header(
                    ui,
                    &state.config.current().display_name,
                    state.booking.wizard.step(),
                    state.theme.projection(),
                    state.theme.palette(),
                );
            });

        egui::TopBottomPanel::bottom("booking_footer")
            .frame(Self::page_frame(ctx))
            .show(ctx, |ui| {
                if let Some(footer_interaction) = booking_panel::render_footer(ui, state) {
                    interaction = Some(footer_interaction.into());
                }
            });

        egui::CentralPanel::default()
            .frame(Self::page_frame(ctx))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("booking_scroll_area")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(24.0);
                        if let Some(body_interaction) = booking_panel::render_booking_body(ui, state, today) {
                            interaction = Some(body_interaction.into());
                        }
                        // Keep the last row clear of the floating switcher.
                        ui.add_space(96.0);
                    });
            });

        interaction
    }

    fn render_admin(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        let colors = state.theme.palette().clone();

        egui::TopBottomPanel::top("admin_header")
            .frame(Self::page_frame(ctx))
            .show(ctx, |ui| {
                admin_panel::render_admin_header(ui, &colors);
            });

        egui::TopBottomPanel::bottom("admin_footer")
            .frame(Self::page_frame(ctx))
            .show(ctx, |ui| {
                admin_panel::render_admin_footer(ui, &colors);
            });

        egui::CentralPanel::default()
            .frame(Self::page_frame(ctx).fill(colors.input_background))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("admin_scroll_area")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(24.0);
                        if let Some(update) = admin_panel::render_admin_panel(ui, state) {
                            interaction = Some(PanelInteraction::ConfigEdited(update));
                        }
                        ui.add_space(96.0);
                    });
            });

        interaction
    }
}
