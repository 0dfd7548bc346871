//! Neon Pong - a neon-styled two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state)
//! - `renderer`: Neon scene drawing on macroquad primitives
//! - `audio`: Sound effects and background music
//! - `settings`: Persisted preferences
//! - `scoreboard`: Persisted lifetime win tally

pub mod audio;
pub mod renderer;
pub mod scoreboard;
pub mod settings;
pub mod sim;

pub use scoreboard::Scoreboard;
pub use settings::{GlowQuality, Settings};

/// Game configuration constants
pub mod consts {
    /// Field dimensions, matching the window's drawable size
    pub const FIELD_WIDTH: f32 = 1280.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// Target frame rate; the simulation steps once per rendered frame
    pub const TARGET_FPS: f32 = 60.0;

    /// Ball defaults - velocity is measured in pixels per frame
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_SPEED: f32 = 7.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PADDLE_SPEED: f32 = 6.0;
    /// Horizontal gap between a paddle and its field edge
    pub const PADDLE_MARGIN: f32 = 10.0;

    /// Score at which a side wins and the round freezes
    pub const WIN_SCORE: u32 = 7;
}
