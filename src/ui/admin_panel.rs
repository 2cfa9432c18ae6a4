//! Admin panel UI rendering
//!
//! The branding editor: restaurant name, accent color (picker, hex field and
//! presets) and a live preview. Edits are returned as partial updates; the
//! coordinator applies and persists them.

use eframe::egui;
use egui::{Color32, RichText, Stroke};
use rbistro::{color32_to_hex, hex_to_color32, ConfigUpdate, ThemeColors, BRAND_PRESETS};

use crate::app::AppState;

fn section(colors: &ThemeColors) -> egui::Frame {
    egui::Frame::default()
        .fill(colors.surface)
        .stroke(Stroke::new(1.0, colors.border))
        .corner_radius(16.0)
        .inner_margin(egui::Margin::same(20))
}

/// Renders the admin header
pub fn render_admin_header(ui: &mut egui::Ui, colors: &ThemeColors) {
    ui.add_space(16.0);
    ui.label(RichText::new("Admin Panel").size(24.0).strong().color(colors.text));
    ui.label(RichText::new("Customize your booking app branding").small().color(colors.text_dim));
    ui.add_space(16.0);
}

/// Renders the admin footer
pub fn render_admin_footer(ui: &mut egui::Ui, colors: &ThemeColors) {
    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Changes are saved automatically to local storage.")
                .small()
                .italics()
                .color(colors.text_faint),
        );
    });
    ui.add_space(12.0);
}

/// Renders the editor sections
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<ConfigUpdate>` - The edit made this frame, if any
pub fn render_admin_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<ConfigUpdate> {
    let mut update = None;
    let config = state.config.current().clone();
    let colors = state.theme.palette().clone();
    let accent = state.theme.projection().accent_color();

    // Restaurant name
    section(&colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("🔤 Restaurant Name").strong().color(colors.text));
        ui.add_space(8.0);

        let response = ui.add(
            egui::TextEdit::singleline(state.admin.name_text_mut())
                .hint_text("Enter restaurant name")
                .font(egui::TextStyle::Heading)
                .desired_width(f32::INFINITY)
                .margin(egui::Margin::same(12)),
        );
        if response.changed() {
            update = Some(ConfigUpdate::display_name(state.admin.name_text_mut().clone()));
        } else if !response.has_focus() {
            state.admin.sync_name(&config);
        }
    });

    ui.add_space(16.0);

    // Branding color
    section(&colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("🎨 Branding Color").strong().color(colors.text));
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let current = hex_to_color32(&config.accent_color);
            let mut rgb = [current.r(), current.g(), current.b()];
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                let picked = Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
                update = Some(ConfigUpdate::accent_color(color32_to_hex(picked)));
            }

            let response = ui.add(
                egui::TextEdit::singleline(state.admin.color_text_mut())
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .margin(egui::Margin::same(12)),
            );
            if response.changed() {
                update = Some(ConfigUpdate::accent_color(state.admin.color_text_mut().clone()));
            } else if !response.has_focus() {
                state.admin.sync_color(&config);
            }
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            for preset in BRAND_PRESETS {
                let active = config.accent_color == preset;
                let stroke = if active {
                    Stroke::new(2.0, colors.text)
                } else {
                    Stroke::NONE
                };
                let swatch = egui::Button::new("")
                    .fill(hex_to_color32(preset))
                    .stroke(stroke)
                    .corner_radius(20.0)
                    .min_size(egui::vec2(40.0, 40.0));
                if ui.add(swatch).on_hover_text(preset).clicked() {
                    update = Some(ConfigUpdate::accent_color(preset));
                }
            }
        });
    });

    ui.add_space(16.0);

    // Live preview
    section(&colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("PREVIEW").small().strong().color(colors.text_faint));
        ui.add_space(8.0);
        ui.add(egui::ProgressBar::new(0.6).fill(accent).desired_height(16.0));
        ui.add_space(12.0);
        ui.add(
            egui::Button::new(
                RichText::new("Continue").strong().color(colors.text_on_accent),
            )
            .fill(accent)
            .corner_radius(12.0)
            .min_size(egui::vec2(ui.available_width(), 48.0)),
        );
    });

    update
}
