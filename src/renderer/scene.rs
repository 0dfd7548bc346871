//! Full-frame scene drawing

use macroquad::prelude::*;

use super::colors::*;
use super::shapes::{draw_glow_circle, draw_glow_rounded_rect, draw_glow_vline};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Ball, MatchState, Paddle, Side};

/// Radius of the decorative center circle
const CENTER_CIRCLE_RADIUS: f32 = 150.0;

/// Draw one complete frame of the match
pub fn draw_scene(state: &MatchState, settings: &Settings) {
    clear_background(DARK_BLUE);

    let layers = settings.glow.layers();
    draw_center_decor(layers);
    draw_ball(&state.ball, layers);
    draw_paddle(&state.cpu, layers);
    draw_paddle(&state.player, layers);
    draw_scores(state);

    if state.is_over() {
        draw_win_overlay(state);
    }
}

fn draw_center_decor(layers: u32) {
    let cx = FIELD_WIDTH / 2.0;
    let cy = FIELD_HEIGHT / 2.0;

    // Glowing center circle
    for i in (1..=layers).rev() {
        let ring = with_alpha(NEON_CYAN, 0.03 * i as f32);
        draw_circle(cx, cy, CENTER_CIRCLE_RADIUS + i as f32 * 10.0, ring);
    }
    draw_circle(cx, cy, CENTER_CIRCLE_RADIUS, LIGHT_CYAN);

    // Glowing center line
    draw_glow_vline(cx, 0.0, FIELD_HEIGHT, NEON_CYAN, layers);
}

fn draw_ball(ball: &Ball, layers: u32) {
    draw_glow_circle(ball.pos.x, ball.pos.y, ball.radius, NEON_ORANGE, layers);
}

fn draw_paddle(paddle: &Paddle, layers: u32) {
    draw_glow_rounded_rect(
        paddle.pos.x,
        paddle.pos.y,
        paddle.size.x,
        paddle.size.y,
        NEON_ORANGE,
        layers,
    );
}

fn draw_scores(state: &MatchState) {
    draw_score_digit(state.cpu_score, FIELD_WIDTH / 4.0);
    draw_score_digit(state.player_score, 3.0 * FIELD_WIDTH / 4.0);
}

fn draw_score_digit(score: u32, center_x: f32) {
    let text = score.to_string();
    let dims = measure_text(&text, None, 80, 1.0);
    draw_text(&text, center_x - dims.width / 2.0, 90.0, 80.0, NEON_ORANGE);
}

fn draw_win_overlay(state: &MatchState) {
    draw_rectangle(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT, OVERLAY);

    let msg = match winner(state) {
        Side::Player => "PLAYER WINS!",
        Side::Cpu => "CPU WINS!",
    };
    let dims = measure_text(msg, None, 80, 1.0);
    draw_text(
        msg,
        FIELD_WIDTH / 2.0 - dims.width / 2.0,
        FIELD_HEIGHT / 2.0 - 40.0,
        80.0,
        LIGHT_CYAN,
    );

    let hint = "Press R to Restart";
    let dims = measure_text(hint, None, 40, 1.0);
    draw_text(
        hint,
        FIELD_WIDTH / 2.0 - dims.width / 2.0,
        FIELD_HEIGHT / 2.0 + 60.0,
        40.0,
        LIGHT_CYAN,
    );
}

fn winner(state: &MatchState) -> Side {
    if state.player_score >= WIN_SCORE {
        Side::Player
    } else {
        Side::Cpu
    }
}

/// FPS counter, top-left
pub fn draw_fps() {
    draw_text(&format!("{} FPS", get_fps()), 10.0, 24.0, 24.0, LIGHT_CYAN);
}
