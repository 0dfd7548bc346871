//! Match state and core simulation types
//!
//! Everything the frame loop mutates lives here, behind explicit transition
//! methods, so the whole match can be driven and inspected without a window.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::consts::*;

/// The two competing sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Human player, defending the right edge
    Player,
    /// Scripted opponent, defending the left edge
    Cpu,
}

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Active gameplay
    Playing,
    /// A side reached the win threshold; scene frozen until restart
    GameOver,
}

/// Events emitted during a tick, consumed by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom field edge
    WallBounce,
    /// Ball reflected off a paddle
    PaddleHit(Side),
    /// A side scored a point
    Score(Side),
    /// A side reached the win threshold
    Win(Side),
}

/// The ball entity
///
/// Velocity is pixels per frame. Component magnitudes never change; bounces
/// flip signs and resets reassign the fixed magnitude with fresh signs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
            vel: Vec2::new(BALL_SPEED, BALL_SPEED),
            radius: BALL_RADIUS,
        }
    }

    /// Re-center the ball with a freshly randomized diagonal direction
    ///
    /// Each axis independently gets the full ball speed with a random sign.
    pub fn reset(&mut self, rng: &mut Pcg32) {
        self.pos = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);
        self.vel = Vec2::new(
            BALL_SPEED * random_sign(rng),
            BALL_SPEED * random_sign(rng),
        );
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

fn random_sign(rng: &mut Pcg32) -> f32 {
    if rng.random_range(0..2) == 0 { -1.0 } else { 1.0 }
}

/// How a paddle decides its vertical movement each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleControl {
    /// Driven by held directional inputs
    Human,
    /// Bang-bang tracker of the ball's vertical position
    Tracking,
}

/// A paddle entity, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub side: Side,
    pub control: PaddleControl,
}

impl Paddle {
    /// Create a paddle against its side's field edge, vertically centered
    pub fn new(side: Side, control: PaddleControl) -> Self {
        let x = match side {
            Side::Player => FIELD_WIDTH - PADDLE_WIDTH - PADDLE_MARGIN,
            Side::Cpu => PADDLE_MARGIN,
        };
        Self {
            pos: Vec2::new(x, FIELD_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PADDLE_SPEED,
            side,
            control,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Move from held directional inputs; both held at once cancel out
    pub fn steer(&mut self, up: bool, down: bool) {
        if up {
            self.pos.y -= self.speed;
        }
        if down {
            self.pos.y += self.speed;
        }
        self.clamp_to_field();
    }

    /// Track the ball: up while the center sits strictly above it, otherwise
    /// down. Exactly one branch fires, so the paddle oscillates by one speed
    /// step per frame when centered on the ball.
    pub fn track(&mut self, ball_y: f32) {
        if self.center_y() > ball_y {
            self.pos.y -= self.speed;
        } else {
            self.pos.y += self.speed;
        }
        self.clamp_to_field();
    }

    /// Force the paddle back inside the vertical play field
    pub fn clamp_to_field(&mut self) {
        self.pos.y = self.pos.y.clamp(0.0, FIELD_HEIGHT - self.size.y);
    }
}

/// Complete match state (deterministic given seed + inputs)
#[derive(Debug, Clone)]
pub struct MatchState {
    /// Match seed for reproducibility
    pub seed: u64,
    pub player_score: u32,
    pub cpu_score: u32,
    pub phase: MatchPhase,
    pub ball: Ball,
    pub player: Paddle,
    pub cpu: Paddle,
    /// Frame counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl MatchState {
    /// Create a fresh match with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            player_score: 0,
            cpu_score: 0,
            phase: MatchPhase::Playing,
            ball: Ball::new(),
            player: Paddle::new(Side::Player, PaddleControl::Human),
            cpu: Paddle::new(Side::Cpu, PaddleControl::Tracking),
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::GameOver
    }

    /// Credit a point, reset the ball, and check the win threshold
    pub fn award_point(&mut self, side: Side) {
        match side {
            Side::Player => self.player_score += 1,
            Side::Cpu => self.cpu_score += 1,
        }
        self.events.push(GameEvent::Score(side));
        let rng = &mut self.rng;
        self.ball.reset(rng);
        self.check_win();
    }

    /// Transition to `GameOver` once either score reaches the threshold
    fn check_win(&mut self) {
        let winner = if self.player_score >= WIN_SCORE {
            Some(Side::Player)
        } else if self.cpu_score >= WIN_SCORE {
            Some(Side::Cpu)
        } else {
            None
        };
        if let Some(side) = winner {
            self.phase = MatchPhase::GameOver;
            self.events.push(GameEvent::Win(side));
            log::info!(
                "match over: {:?} wins {}-{}",
                side,
                self.player_score,
                self.cpu_score
            );
        }
    }

    /// Explicit restart: zero the scores, resume play, re-center the ball
    ///
    /// Paddles stay where they were; only the round bookkeeping resets.
    pub fn restart(&mut self) {
        self.player_score = 0;
        self.cpu_score = 0;
        self.phase = MatchPhase::Playing;
        let rng = &mut self.rng;
        self.ball.reset(rng);
        log::info!("match restarted");
    }
}
