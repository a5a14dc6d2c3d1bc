//! Browser shell for the driving game core
//!
//! Owns the `Game` session and exposes wasm bindings for the JavaScript
//! side, which drives requestAnimationFrame, draws the scene from the
//! snapshot buffers, and wires DOM UI (score readout, game-over panel,
//! restart button).

#![cfg(target_arch = "wasm32")]

mod assets;
mod input;

use assets::AssetGate;
use game_core::{Control, Game};
use wasm_bindgen::prelude::*;

pub struct Shell {
    game: Game,
    assets: AssetGate,
    running: bool,
}

impl Shell {
    fn new(seed: u64, aspect: f32) -> Self {
        Self {
            game: Game::new(seed, aspect),
            assets: AssetGate::new(),
            running: false,
        }
    }

    /// Start the frame loop. Hard precondition: both sprites loaded.
    fn start(&mut self) -> Result<(), JsValue> {
        if let Some(message) = self.assets.error_message() {
            web_sys::console::error_1(&JsValue::from_str(message));
            return Err(JsValue::from_str(message));
        }
        if !self.assets.ready() {
            return Err(JsValue::from_str("Sprites still loading"));
        }
        self.running = true;
        Ok(())
    }

    /// One frame. Returns false when the host should stop requesting
    /// animation frames.
    fn tick(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        match self.game.step(dt) {
            Control::Continue => true,
            Control::Halt => {
                self.running = false;
                false
            }
        }
    }

    fn restart(&mut self) {
        self.game.restart();
        self.running = true;
    }
}

// Global shell storage for WASM bindings
static mut SHELL: Option<Shell> = None;

#[wasm_bindgen]
pub fn init(seed: u32, aspect: f32) {
    console_error_panic_hook::set_once();
    unsafe {
        SHELL = Some(Shell::new(seed as u64, aspect));
    }
}

/// Report a sprite load result ("player" or "opponent")
#[wasm_bindgen]
pub fn sprite_loaded(which: &str, ok: bool) -> Result<(), JsValue> {
    unsafe {
        if let Some(ref mut shell) = SHELL {
            match which {
                "player" => shell.assets.player_loaded(ok),
                "opponent" => shell.assets.opponent_loaded(ok),
                _ => return Err(JsValue::from_str("Unknown sprite")),
            }
            Ok(())
        } else {
            Err(JsValue::from_str("Shell not initialized"))
        }
    }
}

/// Start the loop once assets are in. Err carries the UI error text.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    unsafe {
        if let Some(ref mut shell) = SHELL {
            shell.start()
        } else {
            Err(JsValue::from_str("Shell not initialized"))
        }
    }
}

#[wasm_bindgen]
pub fn tick(dt: f32) -> bool {
    unsafe {
        if let Some(ref mut shell) = SHELL {
            shell.tick(dt)
        } else {
            false
        }
    }
}

#[wasm_bindgen]
pub fn key_down(key: &str) {
    unsafe {
        if let Some(ref mut shell) = SHELL {
            if let Some(key) = input::map_key(key) {
                shell.game.key_down(key);
            }
        }
    }
}

#[wasm_bindgen]
pub fn key_up(key: &str) {
    unsafe {
        if let Some(ref mut shell) = SHELL {
            if let Some(key) = input::map_key(key) {
                shell.game.key_up(key);
            }
        }
    }
}

/// Restart request from the UI button
#[wasm_bindgen]
pub fn restart() {
    unsafe {
        if let Some(ref mut shell) = SHELL {
            shell.restart();
        }
    }
}

/// Viewport resize; allowed even while game over
#[wasm_bindgen]
pub fn resize(aspect: f32) {
    unsafe {
        if let Some(ref mut shell) = SHELL {
            shell.game.resize(aspect);
        }
    }
}

#[wasm_bindgen]
pub fn score() -> u32 {
    unsafe { SHELL.as_ref().map(|s| s.game.score()).unwrap_or(0) }
}

#[wasm_bindgen]
pub fn is_game_over() -> bool {
    unsafe {
        SHELL
            .as_ref()
            .map(|s| s.game.phase().is_game_over())
            .unwrap_or(false)
    }
}

/// [x, y, vx, vy]
#[wasm_bindgen]
pub fn player_state() -> Vec<f32> {
    unsafe {
        SHELL
            .as_ref()
            .map(|s| {
                let snapshot = s.game.render_snapshot();
                vec![
                    snapshot.player_pos.x,
                    snapshot.player_pos.y,
                    snapshot.player_vel.x,
                    snapshot.player_vel.y,
                ]
            })
            .unwrap_or_default()
    }
}

/// [x, y, view_width, view_height]
#[wasm_bindgen]
pub fn camera_state() -> Vec<f32> {
    unsafe {
        SHELL
            .as_ref()
            .map(|s| {
                let snapshot = s.game.render_snapshot();
                vec![
                    snapshot.camera_pos.x,
                    snapshot.camera_pos.y,
                    snapshot.view_width,
                    snapshot.view_height,
                ]
            })
            .unwrap_or_default()
    }
}

/// Flat [x0, y0, x1, y1, ...] in spawn order
#[wasm_bindgen]
pub fn opponent_positions() -> Vec<f32> {
    unsafe {
        SHELL
            .as_ref()
            .map(|s| {
                s.game
                    .render_snapshot()
                    .opponents
                    .iter()
                    .flat_map(|p| [p.x, p.y])
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Flat [x0, y0, x1, y1, ...]
#[wasm_bindgen]
pub fn coin_positions() -> Vec<f32> {
    unsafe {
        SHELL
            .as_ref()
            .map(|s| {
                s.game
                    .render_snapshot()
                    .coins
                    .iter()
                    .flat_map(|p| [p.x, p.y])
                    .collect()
            })
            .unwrap_or_default()
    }
}
