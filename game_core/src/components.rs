use glam::Vec2;

use crate::DirectionSource;

/// Which paddle an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Player, // Left, pointer controlled
    Ai,     // Right, follows the ball
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

/// Paddle component - represents one side's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge, clamped to the surface
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Center
    pub vel: Vec2, // Units per tick
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Put the ball back at `center` with a fixed serve speed in a random direction.
    ///
    /// The horizontal sign is drawn before the vertical one.
    pub fn reset(&mut self, center: Vec2, serve: Vec2, directions: &mut impl DirectionSource) {
        self.pos = center;
        let sign_x = directions.next_sign();
        let sign_y = directions.next_sign();
        self.vel = Vec2::new(serve.x * sign_x, serve.y * sign_y);
    }
}
