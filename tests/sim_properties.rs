//! Property tests for the simulation invariants

use neon_pong::consts::*;
use neon_pong::sim::{FrameInput, MatchState, tick};
use proptest::prelude::*;

proptest! {
    /// Paddles stay inside [0, field_height - height] no matter what input
    /// sequence is held.
    #[test]
    fn paddles_never_leave_field(
        seed in any::<u64>(),
        moves in prop::collection::vec(any::<(bool, bool)>(), 1..400),
    ) {
        let mut state = MatchState::new(seed);
        for (up, down) in moves {
            let input = FrameInput {
                move_up: up,
                move_down: down,
                restart: false,
            };
            tick(&mut state, &input);
            for paddle in [&state.player, &state.cpu] {
                prop_assert!(paddle.pos.y >= 0.0);
                prop_assert!(paddle.pos.y <= FIELD_HEIGHT - paddle.size.y);
            }
        }
    }

    /// Velocity component magnitudes survive every bounce, paddle hit, and
    /// reset; only signs ever change.
    #[test]
    fn ball_axis_speeds_hold_magnitude(seed in any::<u64>(), frames in 1usize..1200) {
        let mut state = MatchState::new(seed);
        let input = FrameInput::default();
        for _ in 0..frames {
            tick(&mut state, &input);
            prop_assert_eq!(state.ball.vel.x.abs(), BALL_SPEED);
            prop_assert_eq!(state.ball.vel.y.abs(), BALL_SPEED);
        }
    }
}
