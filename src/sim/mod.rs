//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-frame stepping only (velocities are pixels per frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_overlap};
pub use state::{Ball, GameEvent, MatchPhase, MatchState, Paddle, PaddleControl, Side};
pub use tick::{FrameInput, tick};
