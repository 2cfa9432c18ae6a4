//! Booking form UI rendering
//!
//! Handles the body of both wizard steps and the footer with the primary
//! action. Field edits are written straight into the wizard; transitions and
//! date input are reported back so the coordinator can apply them.

use chrono::NaiveDate;
use eframe::egui;
use egui::{Color32, RichText, Stroke};
use rbistro::{PartySize, ThemeColors, ThemeProjection, TimeSlot, WizardStep};

use crate::app::AppState;
use crate::ui::date_picker::{self, DatePickerInteraction};
use crate::utils::{format_long_date, format_party_summary};

/// Result of user interaction with the booking form
pub enum BookingInteraction {
    DatePicked(NaiveDate),
    TypedDateSubmitted,
    AdvanceRequested,
    BackRequested,
    ConfirmRequested,
}

fn card(colors: &ThemeColors) -> egui::Frame {
    egui::Frame::default()
        .fill(colors.surface)
        .stroke(Stroke::new(1.0, colors.border))
        .corner_radius(16.0)
        .inner_margin(egui::Margin::same(16))
}

fn section_title(ui: &mut egui::Ui, title: &str, colors: &ThemeColors) {
    ui.label(RichText::new(title).size(17.0).strong().color(colors.text));
    ui.add_space(8.0);
}

/// Renders the body of the current step
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `today` - First bookable day
///
/// # Returns
/// * `Option<BookingInteraction>` - User interaction result
pub fn render_booking_body(
    ui: &mut egui::Ui,
    state: &mut AppState,
    today: NaiveDate,
) -> Option<BookingInteraction> {
    let projection = state.theme.projection().clone();
    let colors = state.theme.palette().clone();

    match state.booking.wizard.step() {
        WizardStep::Details => render_details_step(ui, state, today, &projection, &colors),
        WizardStep::Contact => render_contact_step(ui, state, &colors),
    }
}

fn render_details_step(
    ui: &mut egui::Ui,
    state: &mut AppState,
    today: NaiveDate,
    projection: &ThemeProjection,
    colors: &ThemeColors,
) -> Option<BookingInteraction> {
    let mut interaction = None;
    let accent = projection.accent_color();

    // Guests
    ui.horizontal(|ui| {
        ui.label(RichText::new("Number of Guests").size(17.0).strong().color(colors.text));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new("Required").small().italics().color(colors.text_faint));
        });
    });
    ui.add_space(8.0);

    let chosen_party = state.booking.wizard.draft().party_size;
    ui.horizontal_wrapped(|ui| {
        for size in PartySize::ALL {
            let selected = chosen_party == Some(size);
            let (text_color, stroke) = if selected {
                (accent, Stroke::new(2.0, accent))
            } else {
                (colors.text, Stroke::new(1.0, colors.border))
            };
            let chip = egui::Button::new(
                RichText::new(size.label()).size(16.0).strong().color(text_color),
            )
            .min_size(egui::vec2(56.0, 56.0))
            .corner_radius(12.0)
            .fill(colors.surface)
            .stroke(stroke);

            if ui.add(chip).clicked() {
                state.booking.wizard.set_party_size(size);
            }
        }
    });

    ui.add_space(24.0);

    // Date
    section_title(ui, "Choose Date", colors);
    let chosen_date = state.booking.wizard.draft().date;
    let card_response = card(colors)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let icon_color = if chosen_date.is_some() { accent } else { colors.text_faint };
                ui.label(RichText::new("📅").size(28.0).color(icon_color));
                ui.vertical(|ui| {
                    ui.label(RichText::new("When are you visiting?").color(colors.text_faint));
                    let text = chosen_date
                        .map(format_long_date)
                        .unwrap_or_else(|| "Select a date".to_string());
                    ui.label(RichText::new(text).size(20.0).strong().color(colors.text));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let chevron = if state.booking.picker_open() { "⏷" } else { "⏵" };
                    ui.label(RichText::new(chevron).size(20.0).color(colors.text_faint));
                });
            });
        })
        .response
        .interact(egui::Sense::click());

    if card_response.clicked() {
        state.booking.toggle_picker(today);
    }

    if state.booking.picker_open() {
        ui.add_space(8.0);
        card(colors).show(ui, |ui| {
            let month = state.booking.visible_month(today);
            match date_picker::render_date_picker(ui, month, chosen_date, today, projection, colors) {
                Some(DatePickerInteraction::DatePicked(date)) => {
                    interaction = Some(BookingInteraction::DatePicked(date));
                }
                Some(DatePickerInteraction::MonthChanged(month)) => {
                    state.booking.show_month(month);
                }
                None => {}
            }
        });
    }

    // Typed entry works with the grid open or closed
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Or type a date").color(colors.text_faint));
        let response = egui::TextEdit::singleline(state.booking.date_text_mut())
            .hint_text("YYYY-MM-DD")
            .desired_width(120.0)
            .show(ui)
            .response;
        let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
        let submitted = response.lost_focus() && enter_pressed;
        if ui.button("Set").clicked() || submitted {
            interaction = Some(BookingInteraction::TypedDateSubmitted);
        }
    });

    if let Some(message) = state.booking.date_error() {
        ui.colored_label(colors.error, message);
    }

    ui.add_space(24.0);

    // Time
    section_title(ui, "Choose Time", colors);
    if chosen_date.is_none() {
        egui::Frame::default()
            .fill(colors.input_background)
            .stroke(Stroke::new(1.0, colors.hover))
            .corner_radius(24.0)
            .inner_margin(egui::Margin::symmetric(24, 32))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("🕐").size(32.0).color(colors.border));
                    ui.label(
                        RichText::new("Select a date first to view available time slots for your party.")
                            .small()
                            .color(colors.text_faint),
                    );
                });
            });
    } else {
        let chosen_time = state.booking.wizard.draft().time;
        let slot_width = ((ui.available_width() - 16.0) / 3.0).max(60.0);
        egui::Grid::new("time_slots")
            .num_columns(3)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for (i, slot) in TimeSlot::all().enumerate() {
                    if time_slot_button(ui, slot, chosen_time == Some(slot), slot_width, accent, colors) {
                        state.booking.wizard.set_time(slot);
                    }
                    if i % 3 == 2 {
                        ui.end_row();
                    }
                }
            });
    }

    interaction
}

fn time_slot_button(
    ui: &mut egui::Ui,
    slot: TimeSlot,
    selected: bool,
    width: f32,
    accent: Color32,
    colors: &ThemeColors,
) -> bool {
    let (text_color, fill, stroke) = if selected {
        (colors.text_on_accent, accent, Stroke::NONE)
    } else {
        (colors.text_dim, colors.surface, Stroke::new(1.0, colors.border))
    };
    let button = egui::Button::new(RichText::new(slot.label()).color(text_color))
        .min_size(egui::vec2(width, 44.0))
        .corner_radius(8.0)
        .fill(fill)
        .stroke(stroke);
    ui.add(button).clicked()
}

fn render_contact_step(
    ui: &mut egui::Ui,
    state: &mut AppState,
    colors: &ThemeColors,
) -> Option<BookingInteraction> {
    let mut interaction = None;

    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        egui::Frame::default()
            .fill(colors.success_background)
            .corner_radius(32.0)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.label(RichText::new("✔").size(36.0).color(colors.success));
            });
        ui.add_space(8.0);
        ui.label(RichText::new("Finalize Booking").size(20.0).strong().color(colors.text));
        ui.label(RichText::new("Almost there! Please provide your details.").color(colors.text_dim));
    });

    ui.add_space(24.0);

    let (name, phone) = state.booking.wizard.contact_fields_mut();
    ui.label(RichText::new("Full Name").strong().color(colors.text));
    ui.add(
        egui::TextEdit::singleline(name)
            .hint_text("John Doe")
            .desired_width(f32::INFINITY)
            .margin(egui::Margin::same(12)),
    );
    ui.add_space(12.0);
    ui.label(RichText::new("Phone Number").strong().color(colors.text));
    ui.add(
        egui::TextEdit::singleline(phone)
            .hint_text("+1 (555) 000-0000")
            .desired_width(f32::INFINITY)
            .margin(egui::Margin::same(12)),
    );

    ui.add_space(24.0);

    let draft = state.booking.wizard.draft();
    egui::Frame::default()
        .fill(colors.input_background)
        .corner_radius(16.0)
        .inner_margin(egui::Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Reservation Summary").strong().color(colors.text));
            ui.separator();

            let rows = [
                ("Guests", format_party_summary(draft.party_size)),
                ("Date", draft.date.map(|d| d.to_string()).unwrap_or_default()),
                ("Time", draft.time.map(|t| t.to_string()).unwrap_or_default()),
            ];
            for (label, value) in rows {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(label).color(colors.text_dim));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(value).strong().color(colors.text));
                    });
                });
            }
        });

    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        let link = egui::Button::new(
            RichText::new("Change reservation details").color(colors.text_faint),
        )
        .frame(false);
        if ui.add(link).clicked() {
            interaction = Some(BookingInteraction::BackRequested);
        }
    });

    interaction
}

/// Renders the footer with the price note and the primary button
///
/// The button is disabled while the current step's guard does not hold.
pub fn render_footer(ui: &mut egui::Ui, state: &AppState) -> Option<BookingInteraction> {
    let projection = state.theme.projection();
    let colors = state.theme.palette();
    let wizard = &state.booking.wizard;
    let step = wizard.step();

    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("ⓘ Final price depends on menu selection")
                .small()
                .color(colors.text_faint),
        );
    });
    ui.add_space(8.0);

    let button = egui::Button::new(
        RichText::new(step.primary_action())
            .size(18.0)
            .strong()
            .color(colors.text_on_accent),
    )
    .fill(projection.accent_color())
    .corner_radius(16.0)
    .min_size(egui::vec2(ui.available_width(), 56.0));

    let shadow = egui::Shadow {
        offset: [0, 8],
        blur: 24,
        spread: 0,
        color: projection.accent_shadow_color(),
    };

    let clicked = egui::Frame::default()
        .shadow(if wizard.primary_enabled() { shadow } else { egui::Shadow::NONE })
        .corner_radius(16.0)
        .show(ui, |ui| ui.add_enabled(wizard.primary_enabled(), button).clicked())
        .inner;
    ui.add_space(12.0);

    if !clicked {
        return None;
    }
    match step {
        WizardStep::Details => Some(BookingInteraction::AdvanceRequested),
        WizardStep::Contact => Some(BookingInteraction::ConfirmRequested),
    }
}
