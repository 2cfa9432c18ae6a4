//! Theme application coordination.
//!
//! Pushes the current accent projection into egui's visuals.

use crate::app::AppState;

/// Coordinates theme application.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies the current theme to the egui context.
    ///
    /// Called every frame; the projection itself only changes when the
    /// configuration does.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let mut visuals = egui::Visuals::light();
        state
            .theme
            .projection()
            .apply(state.theme.palette(), &mut visuals);
        ctx.set_visuals(visuals);
    }
}
