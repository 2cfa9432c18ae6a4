//! Theme projection for the booking widget
//!
//! The branding configuration carries a single accent color. Every surface
//! needs the accent plus translucent variants of it; those are derived here
//! as plain hex strings and then converted to egui colors when painting.
//!
//! # Examples
//!
//! ```
//! use rbistro::{project, Configuration};
//!
//! let projection = project(&Configuration::default());
//! assert_eq!(projection.accent, "#ec4913");
//! assert_eq!(projection.accent_muted, "#ec491333");
//! ```

use egui::Color32;

use crate::config::Configuration;

/// Alpha suffix giving roughly 20% opacity.
pub const MUTED_ALPHA_SUFFIX: &str = "33";

/// Alpha suffix giving roughly 40% opacity, used for button glows.
pub const SHADOW_ALPHA_SUFFIX: &str = "66";

/// Style values derived from the configuration.
///
/// Values are textual so that a malformed accent propagates unchanged; the
/// conversion to [`Color32`] happens at paint time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeProjection {
    pub accent: String,
    pub accent_muted: String,
    pub accent_shadow: String,
}

/// Derives the presentation values for `config`.
pub fn project(config: &Configuration) -> ThemeProjection {
    let accent = config.accent_color.clone();
    ThemeProjection {
        accent_muted: format!("{accent}{MUTED_ALPHA_SUFFIX}"),
        accent_shadow: format!("{accent}{SHADOW_ALPHA_SUFFIX}"),
        accent,
    }
}

impl ThemeProjection {
    pub fn accent_color(&self) -> Color32 {
        hex_to_color32(&self.accent)
    }

    pub fn accent_muted_color(&self) -> Color32 {
        hex_to_color32(&self.accent_muted)
    }

    pub fn accent_shadow_color(&self) -> Color32 {
        hex_to_color32(&self.accent_shadow)
    }

    /// Applies the accent over the light base palette to egui visuals.
    pub fn apply(&self, colors: &ThemeColors, visuals: &mut egui::Visuals) {
        let accent = self.accent_color();
        let muted = self.accent_muted_color();

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.surface;
        visuals.extreme_bg_color = colors.input_background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = muted;
        visuals.selection.stroke.color = accent;
        visuals.hyperlink_color = accent;

        visuals.widgets.noninteractive.bg_fill = colors.surface;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.bg_fill = colors.surface;
        visuals.widgets.inactive.weak_bg_fill = colors.surface;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_stroke.color = colors.border;
        visuals.widgets.active.bg_fill = muted;
        visuals.widgets.active.bg_stroke.color = accent;

        visuals.text_cursor.stroke.color = accent;
        visuals.error_fg_color = colors.error;
    }
}

/// Fixed light palette the accent is layered on.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub panel_background: Color32,
    pub surface: Color32,
    pub input_background: Color32,
    pub hover: Color32,
    pub border: Color32,

    pub text: Color32,
    pub text_dim: Color32,
    pub text_faint: Color32,
    pub text_on_accent: Color32,

    pub success: Color32,
    pub success_background: Color32,
    pub error: Color32,
}

impl Default for ThemeColors {
    fn default() -> Self {
        light_palette()
    }
}

/// Warm white palette matching the guest-facing booking form.
pub fn light_palette() -> ThemeColors {
    ThemeColors {
        panel_background: Color32::WHITE,
        surface: Color32::WHITE,
        // gray-50
        input_background: hex_to_color32("#f9fafb"),
        // gray-100
        hover: hex_to_color32("#f3f4f6"),
        // gray-200
        border: hex_to_color32("#e5e7eb"),

        text: hex_to_color32("#181311"),
        // gray-500
        text_dim: hex_to_color32("#6b7280"),
        // gray-400
        text_faint: hex_to_color32("#9ca3af"),
        text_on_accent: Color32::WHITE,

        success: hex_to_color32("#22c55e"),
        success_background: hex_to_color32("#f0fdf4"),
        error: hex_to_color32("#ef4444"),
    }
}

/// Parses `#rrggbb` or `#rrggbbaa`; anything else yields `None`.
pub fn parse_hex_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        6 => Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)?,
        )),
        _ => None,
    }
}

/// Converts a hex color string (like "#ec4913") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    parse_hex_color(hex).unwrap_or(Color32::BLACK) // Fallback to black
}

/// Formats the opaque part of a color as lowercase `#rrggbb`.
pub fn color32_to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigUpdate;

    #[test]
    fn test_projection_of_defaults() {
        let projection = project(&Configuration::default());
        assert_eq!(projection.accent, "#ec4913");
        assert_eq!(projection.accent_muted, "#ec491333");
        assert_eq!(projection.accent_shadow, "#ec491366");
    }

    #[test]
    fn test_projection_is_deterministic() {
        let config = Configuration::default().merged(ConfigUpdate::accent_color("#3b82f6"));
        assert_eq!(project(&config), project(&config));
    }

    #[test]
    fn test_muted_is_plain_concatenation() {
        for accent in ["#10b981", "red", "", "#abc"] {
            let config = Configuration::default().merged(ConfigUpdate::accent_color(accent));
            let projection = project(&config);
            assert_eq!(projection.accent, accent);
            assert_eq!(projection.accent_muted, format!("{accent}33"));
        }
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ec4913"), Some(Color32::from_rgb(0xec, 0x49, 0x13)));
        assert_eq!(
            parse_hex_color("#ec491333"),
            Some(Color32::from_rgba_unmultiplied(0xec, 0x49, 0x13, 0x33))
        );
        assert_eq!(parse_hex_color("ec4913"), None);
        assert_eq!(parse_hex_color("#ec49"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#éééé"), None);
        assert_eq!(parse_hex_color("#+f+f+f"), None);
        assert_eq!(parse_hex_color("#-1-1-1"), None);
    }

    #[test]
    fn test_malformed_accent_renders_fallback() {
        let config = Configuration::default().merged(ConfigUpdate::accent_color("tomato"));
        let projection = project(&config);
        assert_eq!(projection.accent_color(), Color32::BLACK);
        assert_eq!(projection.accent_muted_color(), Color32::BLACK);
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(color32_to_hex(Color32::from_rgb(0x1f, 0x29, 0x37)), "#1f2937");
        assert_eq!(color32_to_hex(hex_to_color32("#8B5CF6")), "#8b5cf6");
    }

    #[test]
    fn test_apply_uses_accent() {
        let projection = project(&Configuration::default());
        let mut visuals = egui::Visuals::light();
        projection.apply(&light_palette(), &mut visuals);

        assert_eq!(visuals.hyperlink_color, projection.accent_color());
        assert_eq!(visuals.selection.bg_fill, projection.accent_muted_color());
        assert_eq!(visuals.panel_fill, Color32::WHITE);
    }
}
