//! Color constants and draw-level styling for the dashboard.

use ratatui::style::Color;

use crate::home::power::DrawLevel;

/// Chart bar color for low draw (< 50 W).
pub const DRAW_LOW: Color = Color::Green;
/// Chart bar color for medium draw (< 100 W).
pub const DRAW_MEDIUM: Color = Color::Yellow;
/// Chart bar color for high draw (< 150 W).
pub const DRAW_HIGH: Color = Color::LightYellow;
/// Chart bar color for very high draw (>= 150 W).
pub const DRAW_VERY_HIGH: Color = Color::Red;
/// Highlight color for the current hour's bar.
pub const CURRENT_HOUR: Color = Color::Blue;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::Blue;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Device card "on" accent.
pub const DEVICE_ON: Color = Color::Green;
/// Device card "off" accent.
pub const DEVICE_OFF: Color = Color::Red;

/// Returns the chart color for a power figure.
pub fn draw_color(power_w: f32) -> Color {
    match DrawLevel::from_power_w(power_w) {
        DrawLevel::Low => DRAW_LOW,
        DrawLevel::Medium => DRAW_MEDIUM,
        DrawLevel::High => DRAW_HIGH,
        DrawLevel::VeryHigh => DRAW_VERY_HIGH,
    }
}
