//! Neon scene rendering
//!
//! Pure presentation: reads the match state, draws through macroquad
//! primitives, never mutates simulation data.

pub mod colors;
pub mod scene;
pub mod shapes;

pub use scene::{draw_fps, draw_scene};
