use glam::Vec2;
use tracing::info;

use crate::{Config, Params};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, points: u32) {
        self.points += points;
    }

    pub fn reset(&mut self) {
        self.points = 0;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform sample in [0, 1)
    pub fn unit(&mut self) -> f32 {
        use rand::Rng;
        self.0.gen::<f32>()
    }

    /// Bernoulli trial with probability `p`
    pub fn chance(&mut self, p: f32) -> bool {
        self.unit() < p
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Direction keys the simulation understands. Arrow keys and WASD map
/// onto the same four directions in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

/// Currently-held direction keys, fed by the host input source
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    held: [bool; 4],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held[key as usize] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key as usize] = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key as usize]
    }

    pub fn clear(&mut self) {
        self.held = [false; 4];
    }
}

/// Difficulty progression state
///
/// Milestones are tier-guarded: a tier fires when the score's threshold
/// multiple exceeds the last fired tier, so a score that jumps past a
/// multiple in one event (coin bonus) still fires each crossed tier
/// exactly once.
#[derive(Debug, Clone, Copy)]
pub struct Difficulty {
    pub move_speed: f32,
    pub spawn_interval_base: f32,
    pub spawn_timer: f32,
    speed_tier: u32,
    traffic_tier: u32,
    next_seq: u64,
}

impl Difficulty {
    pub fn new() -> Self {
        Self {
            move_speed: Params::MOVE_SPEED_INITIAL,
            spawn_interval_base: Params::SPAWN_INTERVAL_INITIAL,
            spawn_timer: 0.0,
            speed_tier: 0,
            traffic_tier: 0,
            next_seq: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Hand out the next opponent spawn sequence number
    pub fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Evaluate difficulty milestones after a score change
    pub fn on_score(&mut self, score: u32, config: &Config, events: &mut Events) {
        let speed_tier = score / config.speed_score_step;
        if speed_tier > self.speed_tier {
            let crossed = speed_tier - self.speed_tier;
            self.move_speed += config.speed_increment * crossed as f32;
            self.speed_tier = speed_tier;
            events.speed_increased = true;
            info!(score, move_speed = self.move_speed, "player speed increased");
        }

        let traffic_tier = score / config.traffic_score_step;
        if traffic_tier > self.traffic_tier {
            let crossed = traffic_tier - self.traffic_tier;
            self.spawn_interval_base = (self.spawn_interval_base
                - config.traffic_decrement * crossed as f32)
                .max(config.spawn_interval_min);
            self.traffic_tier = traffic_tier;
            events.traffic_increased = true;
            info!(
                score,
                spawn_interval = self.spawn_interval_base,
                "traffic increased"
            );
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub passes: u32,
    pub coins_collected: u32,
    pub opponent_spawned: bool,
    pub coin_spawned: bool,
    pub speed_increased: bool,
    pub traffic_increased: bool,
    pub crashed: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn score_changed(&self) -> bool {
        self.passes > 0 || self.coins_collected > 0
    }
}

/// Viewport tracking - smoothed follow of the player car
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub pos: Vec2,
    pub view_height: f32,
    pub aspect: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            view_height: Params::VIEW_HEIGHT,
            aspect,
        }
    }

    pub fn view_width(&self) -> f32 {
        self.view_height * self.aspect
    }

    pub fn half_height(&self) -> f32 {
        self.view_height / 2.0
    }

    /// Y coordinate of the top edge of the visible area
    pub fn top(&self) -> f32 {
        self.pos.y + self.half_height()
    }

    /// Y coordinate of the bottom edge of the visible area
    pub fn bottom(&self) -> f32 {
        self.pos.y - self.half_height()
    }

    /// Recompute projection for a new aspect ratio. Game state is
    /// untouched; resize works mid-game and while game over.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Smoothly track the player, looking slightly ahead up the track
    pub fn follow(&mut self, player_pos: Vec2, dm: f32) {
        let target_y = player_pos.y + self.view_height * Params::CAMERA_AHEAD_Y;
        self.pos.y += (target_y - self.pos.y) * Params::CAMERA_BLEND_Y * dm;
        let target_x = player_pos.x * Params::CAMERA_LEAD_X;
        self.pos.x += (target_x - self.pos.x) * Params::CAMERA_BLEND_X * dm;
    }

    pub fn reset(&mut self) {
        self.pos = Vec2::ZERO;
    }
}

/// Game phase state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Playing,
    GameOver,
}

impl Phase {
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, Phase::GameOver)
    }
}

/// Signal returned by the per-frame tick: whether the driver should
/// request another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Halt,
}
