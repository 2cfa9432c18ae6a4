//! UI panel rendering subsystem
//!
//! This module contains all UI rendering logic for the booking widget:
//! - Header (restaurant name, step indicator, progress bar)
//! - Booking panel (both wizard steps and the footer action)
//! - Date picker (month grid with typed fallback)
//! - Admin panel (branding editor with live preview)
//! - View switcher (floating toggle between surfaces)
//! - Panel manager (surface orchestration and layout)

pub mod header;
pub mod booking_panel;
pub mod date_picker;
pub mod admin_panel;
pub mod view_switcher;
pub mod panel_manager;
