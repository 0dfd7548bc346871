//! Neon palette

use macroquad::color::Color;

/// Neon cyan (center line and circle)
pub const NEON_CYAN: Color = Color::new(0.0, 0.898, 1.0, 1.0);
/// Dark background
pub const DARK_BLUE: Color = Color::new(0.039, 0.098, 0.184, 1.0);
/// Glow cyan (center decor core)
pub const LIGHT_CYAN: Color = Color::new(0.565, 0.878, 0.937, 1.0);
/// Neon orange (ball and paddles)
pub const NEON_ORANGE: Color = Color::new(1.0, 0.435, 0.380, 1.0);
/// Dimmer overlay behind the win message
pub const OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.45);

/// Same hue, different alpha
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, alpha)
}
