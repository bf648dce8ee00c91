use glam::Vec2;

use crate::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_top_left_size(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    /// Square bounding a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    /// Strict overlap: boxes that only touch along an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

/// The drawing surface the game is played on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl Default for GameMap {
    fn default() -> Self {
        Self::with_size(Params::SURFACE_WIDTH, Params::SURFACE_HEIGHT)
    }
}

impl GameMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Ball spawn point (surface center)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Top edge of a vertically centered paddle
    pub fn paddle_spawn_y(&self, paddle_height: f32) -> f32 {
        (self.height - paddle_height) / 2.0
    }
}
