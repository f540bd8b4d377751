use log::warn;
use macroquad::audio::{Sound, load_sound, play_sound_once};

/// The spoken prompts the game plays at screen transitions. Every slot is
/// best-effort: a missing or undecodable file logs a warning once at load
/// time and the matching `play_*` call silently does nothing.
pub struct AudioBank {
    welcome: Option<Sound>,
    select: Option<Sound>,
    reunion: Option<Sound>,
}

impl AudioBank {
    /// Load the prompt files from `dir` (conventionally `assets/audio`)
    pub async fn load(dir: &str) -> Self {
        Self {
            welcome: load_clip(dir, "welcome.mp3").await,
            select: load_clip(dir, "select_prompt.mp3").await,
            reunion: load_clip(dir, "reunion.mp3").await,
        }
    }

    /// A bank with nothing in it; every play is a no-op
    pub fn silent() -> Self {
        Self {
            welcome: None,
            select: None,
            reunion: None,
        }
    }

    /// Main-menu greeting
    pub fn play_welcome(&self) {
        play(&self.welcome);
    }

    /// Setup-screen prompt
    pub fn play_select(&self) {
        play(&self.select);
    }

    /// Everyone-found-each-other celebration
    pub fn play_reunion(&self) {
        play(&self.reunion);
    }
}

fn play(slot: &Option<Sound>) {
    if let Some(sound) = slot {
        play_sound_once(sound);
    }
}

async fn load_clip(dir: &str, name: &str) -> Option<Sound> {
    let path = format!("{dir}/{name}");
    match load_sound(&path).await {
        Ok(sound) => Some(sound),
        Err(err) => {
            warn!("audio prompt {path} unavailable, continuing without it: {err:?}");
            None
        }
    }
}
