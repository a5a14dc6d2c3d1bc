use glam::Vec2;

/// Player car component - the single player-controlled entity
#[derive(Debug, Clone, Copy)]
pub struct PlayerCar {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl PlayerCar {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }

    /// Reset to the start position with zero velocity
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
    }
}

/// Opponent car component - oncoming traffic scrolling down the track
#[derive(Debug, Clone, Copy)]
pub struct Opponent {
    pub pos: Vec2,
    /// Spawn sequence number. Collision reporting uses spawn order, and
    /// ECS slot reuse makes entity ids unreliable for that.
    pub seq: u64,
    /// One-shot flag: set when this car's y crosses below the player's,
    /// so the pass is scored exactly once.
    pub passed: bool,
}

impl Opponent {
    pub fn new(pos: Vec2, seq: u64) -> Self {
        Self {
            pos,
            seq,
            passed: false,
        }
    }
}

/// Coin component - collectible bonus scrolling down slower than traffic
#[derive(Debug, Clone, Copy)]
pub struct Coin {
    pub pos: Vec2,
}

impl Coin {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }
}
