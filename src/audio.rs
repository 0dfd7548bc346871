//! Sound effects and background music
//!
//! Assets are loaded from `assets/sounds/` at startup. A missing or corrupt
//! file disables that one effect with a warning; the game plays on silent.

use macroquad::audio::{PlaySoundParams, Sound, load_sound, play_sound, set_sound_volume};

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a paddle
    PaddleHit,
    /// A side scored
    Score,
    /// A side reached the win threshold
    Win,
}

/// Audio manager for the game
pub struct AudioManager {
    hit: Option<Sound>,
    score: Option<Sound>,
    win: Option<Sound>,
    music: Option<Sound>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl AudioManager {
    /// Load all sound assets, disabling whichever fail
    pub async fn load() -> Self {
        Self {
            hit: load_effect("assets/sounds/hit.wav").await,
            score: load_effect("assets/sounds/score.wav").await,
            win: load_effect("assets/sounds/win.wav").await,
            music: load_effect("assets/sounds/bg_music.ogg").await,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.5,
            muted: false,
        }
    }

    /// Take volumes and mute from the persisted settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.master_volume = settings.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = settings.music_volume.clamp(0.0, 1.0);
        self.muted = settings.muted;

        // Retune the music stream if it is already playing
        if let Some(music) = &self.music {
            set_sound_volume(music, self.effective_music_volume());
        }
    }

    fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Fire-and-forget playback of one effect
    pub fn play(&self, effect: SoundEffect) {
        let volume = self.effective_sfx_volume();
        if volume <= 0.0 {
            return;
        }

        let sound = match effect {
            SoundEffect::PaddleHit => &self.hit,
            SoundEffect::Score => &self.score,
            SoundEffect::Win => &self.win,
        };
        if let Some(sound) = sound {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume,
                },
            );
        }
    }

    /// Start the looped background music
    pub fn start_music(&self) {
        if let Some(music) = &self.music {
            play_sound(
                music,
                PlaySoundParams {
                    looped: true,
                    volume: self.effective_music_volume(),
                },
            );
        }
    }
}

async fn load_effect(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => Some(sound),
        Err(err) => {
            log::warn!("failed to load sound {path}: {err:?} - effect disabled");
            None
        }
    }
}
