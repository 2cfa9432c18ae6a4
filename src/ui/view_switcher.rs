//! Floating view switcher
//!
//! A round button pinned above the bottom-right corner that flips between
//! the booking form and the admin panel.

use eframe::egui;
use egui::RichText;
use rbistro::{ThemeColors, ViewMode};

/// Renders the switcher; returns true when it was clicked.
pub fn render_view_switcher(ctx: &egui::Context, mode: ViewMode, colors: &ThemeColors) -> bool {
    let (icon, hint) = match mode {
        ViewMode::Booking => ("⚙", "Open admin panel"),
        ViewMode::Admin => ("🍴", "Back to booking"),
    };

    egui::Area::new(egui::Id::new("view_switcher"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -96.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let button = egui::Button::new(RichText::new(icon).size(22.0).color(colors.text_dim))
                .fill(colors.surface)
                .stroke(egui::Stroke::new(1.0, colors.hover))
                .corner_radius(24.0)
                .min_size(egui::vec2(48.0, 48.0));
            ui.add(button).on_hover_text(hint).clicked()
        })
        .inner
}
