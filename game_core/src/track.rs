use glam::Vec2;

use crate::resources::GameRng;
use crate::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// AABB overlap test. Touching edges count as an overlap.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Track definition - a vertical strip of road the player drives on
#[derive(Debug, Clone)]
pub struct Track {
    pub width: f32,
}

impl Track {
    pub fn new() -> Self {
        Self {
            width: Params::TRACK_WIDTH,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    /// Lateral range the player's center may occupy
    pub fn drivable_half_width(&self, entity_half_width: f32) -> f32 {
        self.half_width() - entity_half_width
    }

    pub fn clamp_x(&self, x: f32, entity_half_width: f32) -> f32 {
        let half = self.drivable_half_width(entity_half_width);
        x.clamp(-half, half)
    }

    /// Random lateral spawn position, inset from the track edges by the
    /// entity's half-extent plus a fixed buffer
    pub fn spawn_x(&self, entity_half_extent: f32, rng: &mut GameRng) -> f32 {
        let margin = entity_half_extent + Params::SPAWN_MARGIN;
        rng.unit() * (self.width - margin * 2.0) - (self.half_width() - margin)
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::new()
    }
}
