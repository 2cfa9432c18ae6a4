//! Branding editor state.
//!
//! Text inputs need owned buffers; the configuration itself only changes
//! through the store, so the editor keeps copies that are re-synced whenever
//! the field is not being edited.

use rbistro::Configuration;

#[derive(Debug, Clone, Default)]
pub struct AdminState {
    /// Text buffer for the restaurant name input
    name_text: String,
    /// Text buffer for the hex color input
    color_text: String,
}

impl AdminState {
    pub fn from_config(config: &Configuration) -> Self {
        Self {
            name_text: config.display_name.clone(),
            color_text: config.accent_color.clone(),
        }
    }

    pub fn name_text_mut(&mut self) -> &mut String {
        &mut self.name_text
    }

    pub fn color_text_mut(&mut self) -> &mut String {
        &mut self.color_text
    }

    pub fn sync_name(&mut self, config: &Configuration) {
        if self.name_text != config.display_name {
            self.name_text.clone_from(&config.display_name);
        }
    }

    pub fn sync_color(&mut self, config: &Configuration) {
        if self.color_text != config.accent_color {
            self.color_text.clone_from(&config.accent_color);
        }
    }
}
