//! Sprite preload gate
//!
//! Both car sprites must be reported loaded before the frame loop may
//! start. A failed load is fatal to gameplay but not to the page: the
//! loop never starts and the error is surfaced through the UI text
//! sink. Loads are attempted once; there is no retry.

#[derive(Debug, Clone, Copy, Default)]
pub struct AssetGate {
    player_sprite: Option<bool>,
    opponent_sprite: Option<bool>,
}

impl AssetGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_loaded(&mut self, ok: bool) {
        self.player_sprite = Some(ok);
    }

    pub fn opponent_loaded(&mut self, ok: bool) {
        self.opponent_sprite = Some(ok);
    }

    /// Both sprites arrived intact
    pub fn ready(&self) -> bool {
        self.player_sprite == Some(true) && self.opponent_sprite == Some(true)
    }

    /// At least one sprite definitively failed
    pub fn failed(&self) -> bool {
        self.player_sprite == Some(false) || self.opponent_sprite == Some(false)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        if self.failed() {
            Some("Error loading assets. Please check console.")
        } else {
            None
        }
    }
}
