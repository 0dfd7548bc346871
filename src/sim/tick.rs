//! Per-frame simulation step
//!
//! Advances the match by exactly one frame in a fixed order: ball first,
//! then the human paddle, then the tracking paddle, then paddle collisions.

use super::collision::circle_rect_overlap;
use super::state::{GameEvent, MatchState, Paddle, PaddleControl, Side};
use crate::consts::*;

/// Input snapshot for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// "Up" movement key currently held
    pub move_up: bool,
    /// "Down" movement key currently held
    pub move_down: bool,
    /// Restart key pressed this frame (honored only after a win)
    pub restart: bool,
}

/// Advance the match by one frame
///
/// While the match is over, the scene stays frozen: nothing moves and no
/// score changes, but the restart input is still polled.
pub fn tick(state: &mut MatchState, input: &FrameInput) {
    state.events.clear();

    if state.is_over() {
        if input.restart {
            state.restart();
        }
        return;
    }

    state.time_ticks += 1;

    advance_ball(state);

    // A scoring event may have just ended the round; past this point nothing
    // else is allowed to move until restart.
    if state.is_over() {
        return;
    }

    // Trackers read this frame's ball position, not last frame's.
    let ball_y = state.ball.pos.y;
    update_paddle(&mut state.player, input, ball_y);
    update_paddle(&mut state.cpu, input, ball_y);

    resolve_paddle_collision(state, Side::Player);
    resolve_paddle_collision(state, Side::Cpu);
}

/// Move one paddle according to its control variant
fn update_paddle(paddle: &mut Paddle, input: &FrameInput, ball_y: f32) {
    match paddle.control {
        PaddleControl::Human => paddle.steer(input.move_up, input.move_down),
        PaddleControl::Tracking => paddle.track(ball_y),
    }
}

/// Move the ball, reflect it off the horizontal walls, and resolve scoring
fn advance_ball(state: &mut MatchState) {
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // Wall bounce (stays silent in the presentation layer)
    if ball.pos.y + ball.radius >= FIELD_HEIGHT || ball.pos.y - ball.radius <= 0.0 {
        ball.vel.y = -ball.vel.y;
        state.events.push(GameEvent::WallBounce);
    }

    // Crossing an edge credits the opposing side
    if ball.pos.x + ball.radius >= FIELD_WIDTH {
        state.award_point(Side::Cpu);
    } else if ball.pos.x - ball.radius <= 0.0 {
        state.award_point(Side::Player);
    }
}

/// Reflect the ball off one paddle if they overlap
///
/// The hit only registers while the ball travels toward that paddle's goal,
/// so overlap sustained across frames flips the sign once per approach.
fn resolve_paddle_collision(state: &mut MatchState, side: Side) {
    let paddle = match side {
        Side::Player => &state.player,
        Side::Cpu => &state.cpu,
    };
    let approaching = match side {
        Side::Player => state.ball.vel.x > 0.0,
        Side::Cpu => state.ball.vel.x < 0.0,
    };
    if approaching && circle_rect_overlap(state.ball.pos, state.ball.radius, &paddle.rect()) {
        state.ball.vel.x = -state.ball.vel.x;
        state.events.push(GameEvent::PaddleHit(side));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::MatchPhase;
    use glam::Vec2;

    #[test]
    fn test_wall_bounce_flips_vertical_sign() {
        let mut state = MatchState::new(5);
        state.ball.pos = Vec2::new(400.0, FIELD_HEIGHT - BALL_RADIUS - 3.0);
        state.ball.vel = Vec2::new(BALL_SPEED, BALL_SPEED);

        tick(&mut state, &FrameInput::default());
        assert_eq!(state.ball.vel.y, -BALL_SPEED);
        assert_eq!(state.ball.vel.x, BALL_SPEED);
        assert!(state.events.contains(&GameEvent::WallBounce));
    }

    #[test]
    fn test_player_scores_on_left_exit() {
        let mut state = MatchState::new(5);
        state.ball.pos = Vec2::new(BALL_RADIUS + 3.0, 400.0);
        state.ball.vel = Vec2::new(-BALL_SPEED, 0.0);
        // Keep the tracking paddle clear of the exit path
        state.cpu.pos.y = 0.0;

        tick(&mut state, &FrameInput::default());
        assert_eq!(state.player_score, 1);
        assert_eq!(state.cpu_score, 0);
        assert_eq!(state.ball.pos, Vec2::new(640.0, 400.0));
        assert_eq!(state.ball.vel.x.abs(), BALL_SPEED);
        assert_eq!(state.ball.vel.y.abs(), BALL_SPEED);
        assert!(state.events.contains(&GameEvent::Score(Side::Player)));
    }

    #[test]
    fn test_cpu_scores_on_right_exit() {
        let mut state = MatchState::new(5);
        state.ball.pos = Vec2::new(FIELD_WIDTH - BALL_RADIUS - 3.0, 400.0);
        state.ball.vel = Vec2::new(BALL_SPEED, 0.0);
        state.player.pos.y = 0.0;

        tick(&mut state, &FrameInput::default());
        assert_eq!(state.cpu_score, 1);
        assert!(state.events.contains(&GameEvent::Score(Side::Cpu)));
    }

    #[test]
    fn test_paddle_hit_flips_horizontal_sign_once() {
        let mut state = MatchState::new(5);
        // Overlapping the right paddle's inner edge, moving toward it
        state.ball.pos = Vec2::new(state.player.pos.x - BALL_RADIUS + 2.0, 400.0);
        state.ball.vel = Vec2::new(BALL_SPEED, 0.0);
        state.player.pos.y = 400.0 - PADDLE_HEIGHT / 2.0;

        tick(&mut state, &FrameInput::default());
        assert_eq!(state.ball.vel.x, -BALL_SPEED);
        assert!(state.events.contains(&GameEvent::PaddleHit(Side::Player)));

        // Still overlapping next frame, but now moving away: no second flip
        tick(&mut state, &FrameInput::default());
        assert_eq!(state.ball.vel.x, -BALL_SPEED);
        assert!(!state.events.contains(&GameEvent::PaddleHit(Side::Player)));
    }

    #[test]
    fn test_tracker_reads_post_advance_ball_position() {
        let mut state = MatchState::new(5);
        // Paddle center at 504; ball lands at 507 this frame, so the tracker
        // must move down even though it started above 500.
        state.cpu.pos.y = 504.0 - PADDLE_HEIGHT / 2.0;
        state.ball.pos = Vec2::new(600.0, 500.0);
        state.ball.vel = Vec2::new(BALL_SPEED, BALL_SPEED);
        let start_y = state.cpu.pos.y;

        tick(&mut state, &FrameInput::default());
        assert_eq!(state.cpu.pos.y, start_y + PADDLE_SPEED);
    }

    #[test]
    fn test_held_input_moves_player_paddle() {
        let mut state = MatchState::new(5);
        let start_y = state.player.pos.y;

        let input = FrameInput {
            move_up: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.player.pos.y, start_y - PADDLE_SPEED);

        let input = FrameInput {
            move_up: true,
            move_down: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.player.pos.y, start_y - PADDLE_SPEED);
    }

    #[test]
    fn test_win_freezes_everything_until_restart() {
        let mut state = MatchState::new(5);
        state.cpu_score = WIN_SCORE - 1;
        state.ball.pos = Vec2::new(FIELD_WIDTH - BALL_RADIUS - 3.0, 400.0);
        state.ball.vel = Vec2::new(BALL_SPEED, 0.0);
        state.player.pos.y = 0.0;

        tick(&mut state, &FrameInput::default());
        assert_eq!(state.phase, MatchPhase::GameOver);
        assert!(state.events.contains(&GameEvent::Win(Side::Cpu)));

        // Frozen: held input and elapsed frames change nothing
        let frozen_ball = state.ball;
        let frozen_player = state.player.pos;
        let frozen_cpu = state.cpu.pos;
        let frozen_ticks = state.time_ticks;
        let input = FrameInput {
            move_up: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &input);
        }
        assert_eq!(state.ball, frozen_ball);
        assert_eq!(state.player.pos, frozen_player);
        assert_eq!(state.cpu.pos, frozen_cpu);
        assert_eq!(state.time_ticks, frozen_ticks);
        assert_eq!(state.cpu_score, WIN_SCORE);

        // Restart is still polled while frozen
        let input = FrameInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, MatchPhase::Playing);
        assert_eq!(state.player_score, 0);
        assert_eq!(state.cpu_score, 0);
        assert_eq!(state.ball.pos, Vec2::new(640.0, 400.0));
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = MatchState::new(5);
        state.player_score = 3;
        state.cpu_score = 2;

        let input = FrameInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.player_score, 3);
        assert_eq!(state.cpu_score, 2);
        assert_eq!(state.phase, MatchPhase::Playing);
    }

    #[test]
    fn test_determinism() {
        let mut a = MatchState::new(99999);
        let mut b = MatchState::new(99999);
        let input = FrameInput {
            move_down: true,
            ..Default::default()
        };

        for _ in 0..1200 {
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.ball, b.ball);
        assert_eq!(a.player_score, b.player_score);
        assert_eq!(a.cpu_score, b.cpu_score);
    }
}
