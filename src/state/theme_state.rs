//! Theme and styling state management.
//!
//! Holds the fixed base palette and the projection derived from the
//! current configuration. The projection is an explicit value handed to
//! every surface rather than an ambient style context.

use rbistro::{project, Configuration, ThemeColors, ThemeProjection};

/// State related to visual theme and styling.
#[derive(Debug, Clone)]
pub struct ThemeState {
    /// Base palette the accent is layered on
    palette: ThemeColors,
    /// Accent values derived from the configuration
    projection: ThemeProjection,
}

impl ThemeState {
    /// Creates theme state projected from `config`.
    pub fn from_config(config: &Configuration) -> Self {
        Self {
            palette: ThemeColors::default(),
            projection: project(config),
        }
    }

    // ===== Theme Queries =====

    pub fn palette(&self) -> &ThemeColors {
        &self.palette
    }

    pub fn projection(&self) -> &ThemeProjection {
        &self.projection
    }

    // ===== Theme Mutations =====

    /// Recomputes the projection. Called after every configuration change.
    pub fn refresh(&mut self, config: &Configuration) {
        self.projection = project(config);
    }
}
