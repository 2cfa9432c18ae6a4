//! Booking header UI rendering
//!
//! Handles the top bar of the booking form: restaurant name, step indicator
//! and progress bar.

use eframe::egui;
use egui::RichText;
use rbistro::{ThemeColors, ThemeProjection, WizardStep};

/// Renders the booking header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `display_name` - Restaurant name from the configuration
/// * `step` - Current wizard step
/// * `projection` - Accent values for the current configuration
/// * `colors` - Base palette
pub fn render_header(
    ui: &mut egui::Ui,
    display_name: &str,
    step: WizardStep,
    projection: &ThemeProjection,
    colors: &ThemeColors,
) {
    let accent = projection.accent_color();

    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(display_name).size(18.0).strong().color(colors.text));
    });
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("STEP {} OF {}", step.number(), WizardStep::COUNT))
                .small()
                .strong()
                .color(accent),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(step.label()).small().color(colors.text_dim));
        });
    });

    ui.add(
        egui::ProgressBar::new(step.progress())
            .fill(accent)
            .desired_height(6.0),
    );
    ui.add_space(12.0);
}
