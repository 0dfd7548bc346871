//! Glow drawing helpers
//!
//! A glow is layered low-alpha copies of the core shape, largest first, so
//! the stacked alpha brightens toward the center. `layers == 0` draws the
//! core shape only.

use macroquad::prelude::*;

use super::colors::with_alpha;

/// Filled circle with a surrounding glow
pub fn draw_glow_circle(x: f32, y: f32, radius: f32, color: Color, layers: u32) {
    for i in (1..=layers).rev() {
        let ring = with_alpha(color, 0.04 * i as f32);
        draw_circle(x, y, radius + i as f32 * 2.5, ring);
    }
    draw_circle(x, y, radius, color);
}

/// Filled rectangle with rounded corners
///
/// Composed from two rectangles and four corner circles; macroquad has no
/// rounded-rect primitive.
pub fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    let r = r.min(w / 2.0).min(h / 2.0);
    draw_rectangle(x + r, y, w - 2.0 * r, h, color);
    draw_rectangle(x, y + r, w, h - 2.0 * r, color);
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}

/// Rounded rectangle with a surrounding glow
pub fn draw_glow_rounded_rect(x: f32, y: f32, w: f32, h: f32, color: Color, layers: u32) {
    let corner = w * 0.4;
    for i in (1..=layers).rev() {
        let grow = i as f32 * 1.5;
        let halo = with_alpha(color, 0.04 * i as f32);
        draw_rounded_rect(
            x - grow,
            y - grow,
            w + 2.0 * grow,
            h + 2.0 * grow,
            corner + grow,
            halo,
        );
    }
    draw_rounded_rect(x, y, w, h, corner, color);
}

/// Vertical line with a surrounding glow
pub fn draw_glow_vline(x: f32, y0: f32, y1: f32, color: Color, layers: u32) {
    for i in (1..=layers).rev() {
        let halo = with_alpha(color, 0.05 * i as f32);
        draw_line(x, y0, x, y1, 2.0 + i as f32 * 4.0, halo);
    }
    draw_line(x, y0, x, y1, 2.0, color);
}
