//! Top-level surface selection.

/// Which surface the shell renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Booking,
    Admin,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Booking => ViewMode::Admin,
            ViewMode::Admin => ViewMode::Booking,
        }
    }
}

/// Flips between the booking form and the branding editor.
///
/// Holds no booking data and is never persisted, so every launch starts on
/// the booking form.
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    mode: ViewMode,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_booking() {
        assert_eq!(ViewRouter::new().mode(), ViewMode::Booking);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut router = ViewRouter::new();
        router.toggle();
        assert_eq!(router.mode(), ViewMode::Admin);
        router.toggle();
        assert_eq!(router.mode(), ViewMode::Booking);
    }
}
