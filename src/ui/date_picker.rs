//! Date picker UI rendering
//!
//! A month grid drawn inside the booking form. Days before today are shown
//! but disabled; the previous-month arrow disappears on the current month.

use chrono::{Datelike, NaiveDate};
use eframe::egui;
use egui::{RichText, Stroke};
use rbistro::calendar::WEEKDAY_HEADINGS;
use rbistro::{is_selectable, month_grid, MonthCursor, ThemeColors, ThemeProjection};

/// Result of user interaction with the date picker
pub enum DatePickerInteraction {
    /// A selectable day was clicked
    DatePicked(NaiveDate),
    /// The user paged to another month
    MonthChanged(MonthCursor),
}

/// Renders the month grid
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `month` - Month to display
/// * `selected` - Currently chosen date, if any
/// * `today` - First selectable day
///
/// # Returns
/// * `Option<DatePickerInteraction>` - User interaction result
pub fn render_date_picker(
    ui: &mut egui::Ui,
    month: MonthCursor,
    selected: Option<NaiveDate>,
    today: NaiveDate,
    projection: &ThemeProjection,
    colors: &ThemeColors,
) -> Option<DatePickerInteraction> {
    let mut interaction = None;
    let accent = projection.accent_color();

    ui.horizontal(|ui| {
        match month.prev(today) {
            Some(prev) => {
                if ui.button("◀").clicked() {
                    interaction = Some(DatePickerInteraction::MonthChanged(prev));
                }
            }
            None => {
                ui.add_enabled(false, egui::Button::new("◀"));
            }
        }

        ui.label(RichText::new(month.title()).strong().color(colors.text));

        if ui.button("▶").clicked() {
            interaction = Some(DatePickerInteraction::MonthChanged(month.next()));
        }
    });

    ui.add_space(4.0);

    egui::Grid::new(("date_picker_grid", month.year(), month.month()))
        .num_columns(7)
        .spacing([4.0, 4.0])
        .show(ui, |ui| {
            for heading in WEEKDAY_HEADINGS {
                ui.label(RichText::new(heading).small().color(colors.text_faint));
            }
            ui.end_row();

            for week in month_grid(month) {
                for cell in week {
                    let Some(date) = cell else {
                        ui.label("");
                        continue;
                    };

                    let is_selected = selected == Some(date);
                    let text_color = if is_selected {
                        colors.text_on_accent
                    } else {
                        colors.text
                    };

                    let mut button = egui::Button::new(
                        RichText::new(date.day().to_string()).color(text_color),
                    )
                    .min_size(egui::vec2(36.0, 32.0))
                    .corner_radius(8.0);

                    if is_selected {
                        button = button.fill(accent);
                    } else if date == today {
                        button = button.stroke(Stroke::new(1.0, accent));
                    } else {
                        button = button.fill(colors.surface);
                    }

                    if ui.add_enabled(is_selectable(date, today), button).clicked() {
                        interaction = Some(DatePickerInteraction::DatePicked(date));
                    }
                }
                ui.end_row();
            }
        });

    interaction
}
