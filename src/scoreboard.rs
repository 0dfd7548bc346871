//! Lifetime win tally
//!
//! Persisted across runs next to the settings file; updated whenever a
//! round ends.

use serde::{Deserialize, Serialize};

use crate::settings::{config_file, read_json, write_json};
use crate::sim::Side;

/// Win/loss record across every match played on this machine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub player_wins: u32,
    pub cpu_wins: u32,
    pub games_played: u32,
}

impl Scoreboard {
    const FILE_NAME: &'static str = "scoreboard.json";

    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished round
    pub fn record_win(&mut self, side: Side) {
        match side {
            Side::Player => self.player_wins += 1,
            Side::Cpu => self.cpu_wins += 1,
        }
        self.games_played += 1;
    }

    /// The side with more lifetime wins, if any
    pub fn leader(&self) -> Option<Side> {
        match self.player_wins.cmp(&self.cpu_wins) {
            std::cmp::Ordering::Greater => Some(Side::Player),
            std::cmp::Ordering::Less => Some(Side::Cpu),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Load from the config directory, starting fresh on any failure
    pub fn load() -> Self {
        let Some(path) = config_file(Self::FILE_NAME) else {
            return Self::new();
        };
        match read_json(&path) {
            Some(board) => board,
            None => Self::new(),
        }
    }

    /// Save to the config directory; failures only warn
    pub fn save(&self) {
        let Some(path) = config_file(Self::FILE_NAME) else {
            return;
        };
        if let Err(err) = write_json(&path, self) {
            log::warn!("failed to save scoreboard to {}: {err}", path.display());
        }
    }
}
