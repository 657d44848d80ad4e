// Dropspot - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::{Color32, Rgba};

/// Accent colour of the upload flow (#31c3f8).
pub const ACCENT: Color32 = Color32::from_rgb(49, 195, 248);

/// Accent at low alpha, for the drag highlight and the success badge fill.
pub const ACCENT_FAINT: Color32 = Color32::from_rgba_premultiplied(49, 195, 248, 30);

/// Error colours.
pub const ERROR_RED: Color32 = Color32::from_rgb(220, 38, 38); // Red 600
pub const ERROR_FAINT: Color32 = Color32::from_rgba_premultiplied(220, 38, 38, 30);

/// Layout constants.
pub const CARD_WIDTH: f32 = 400.0;
pub const DROP_ZONE_HEIGHT: f32 = 220.0;
pub const DROP_ICON_SIZE: f32 = 48.0;
pub const PREVIEW_MAX_HEIGHT: f32 = 192.0;
pub const BADGE_SIZE: f32 = 64.0;
pub const PANEL_CORNER_RADIUS: f32 = 8.0;
pub const PANEL_PADDING: f32 = 24.0;
pub const LOADING_PANEL_SIZE: egui::Vec2 = egui::vec2(500.0, 500.0);

/// Dashed-border geometry for the drop zone.
pub const DASH_LENGTH: f32 = 8.0;
pub const DASH_GAP: f32 = 5.0;

/// Linear blend between two colours, `t` in 0..=1.
pub fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    Color32::from(egui::lerp(Rgba::from(a)..=Rgba::from(b), t))
}
