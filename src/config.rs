//! Restaurant branding configuration.

use serde::{Deserialize, Serialize};

/// Storage key the configuration is persisted under.
pub const CONFIG_KEY: &str = "app-config";

pub const DEFAULT_DISPLAY_NAME: &str = "The Golden Bistro";
pub const DEFAULT_ACCENT_COLOR: &str = "#ec4913";

/// Accent colors offered as one-click swatches in the branding editor.
pub const BRAND_PRESETS: [&str; 6] = [
    "#ec4913",
    "#3b82f6",
    "#10b981",
    "#8b5cf6",
    "#ef4444",
    "#1f2937",
];

/// Branding shown on every surface of the widget.
///
/// Neither field is validated: a malformed color is kept verbatim and simply
/// renders with the fallback color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(alias = "restaurantName")]
    pub display_name: String,
    #[serde(alias = "primaryColor")]
    pub accent_color: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
        }
    }
}

impl Configuration {
    /// Returns a copy with the `Some` fields of `changes` applied.
    pub fn merged(&self, changes: ConfigUpdate) -> Self {
        Self {
            display_name: changes.display_name.unwrap_or_else(|| self.display_name.clone()),
            accent_color: changes.accent_color.unwrap_or_else(|| self.accent_color.clone()),
        }
    }
}

/// A partial edit produced by the branding editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub display_name: Option<String>,
    pub accent_color: Option<String>,
}

impl ConfigUpdate {
    pub fn display_name(name: impl Into<String>) -> Self {
        Self {
            display_name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn accent_color(color: impl Into<String>) -> Self {
        Self {
            accent_color: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.accent_color.is_none()
    }
}
