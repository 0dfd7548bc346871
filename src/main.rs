//! Neon Pong entry point
//!
//! Owns the window, the frame loop, and the mapping from simulation events
//! to sounds and the persisted scoreboard.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use macroquad::prelude::*;

use neon_pong::Scoreboard;
use neon_pong::audio::{AudioManager, SoundEffect};
use neon_pong::consts::*;
use neon_pong::renderer;
use neon_pong::settings::Settings;
use neon_pong::sim::{FrameInput, GameEvent, MatchState, tick};

fn window_conf() -> Conf {
    Conf {
        window_title: "Neon Pong".to_owned(),
        window_width: FIELD_WIDTH as i32,
        window_height: FIELD_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let settings = Settings::load();
    let mut scoreboard = Scoreboard::load();
    let mut audio = AudioManager::load().await;
    audio.apply_settings(&settings);
    audio.start_music();

    let seed = clock_seed();
    log::info!("starting match (seed {seed})");
    let mut state = MatchState::new(seed);

    let frame_budget = 1.0 / TARGET_FPS;

    loop {
        let input = FrameInput {
            move_up: is_key_down(KeyCode::Up),
            move_down: is_key_down(KeyCode::Down),
            restart: is_key_pressed(KeyCode::R),
        };
        tick(&mut state, &input);

        for event in &state.events {
            match *event {
                // Wall bounces stay silent
                GameEvent::WallBounce => {}
                GameEvent::PaddleHit(_) => audio.play(SoundEffect::PaddleHit),
                GameEvent::Score(side) => {
                    audio.play(SoundEffect::Score);
                    log::debug!(
                        "{side:?} scores ({}-{})",
                        state.player_score,
                        state.cpu_score
                    );
                }
                GameEvent::Win(side) => {
                    audio.play(SoundEffect::Win);
                    scoreboard.record_win(side);
                    scoreboard.save();
                }
            }
        }

        renderer::draw_scene(&state, &settings);
        if settings.show_fps {
            renderer::draw_fps();
        }

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        // Hold the loop near the target rate when vsync runs faster
        let elapsed = get_frame_time();
        if elapsed < frame_budget {
            std::thread::sleep(Duration::from_secs_f32(frame_budget - elapsed));
        }

        next_frame().await;
    }

    log::info!(
        "quitting - lifetime tally {} vs {}",
        scoreboard.player_wins,
        scoreboard.cpu_wins
    );
}
