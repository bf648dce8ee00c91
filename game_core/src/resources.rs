use rand::{Rng, SeedableRng};

use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }
}

/// Source of serve directions, one sign per call
pub trait DirectionSource {
    /// Returns `1.0` or `-1.0`
    fn next_sign(&mut self) -> f32;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl DirectionSource for GameRng {
    fn next_sign(&mut self) -> f32 {
        if self.0.gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    }
}

/// Replays a fixed list of signs, wrapping around at the end
#[derive(Debug, Clone)]
pub struct FixedDirections {
    signs: Vec<f32>,
    next: usize,
}

impl FixedDirections {
    pub fn new(signs: Vec<f32>) -> Self {
        Self { signs, next: 0 }
    }

    /// Every serve goes right and down
    pub fn positive() -> Self {
        Self::new(vec![1.0])
    }
}

impl DirectionSource for FixedDirections {
    fn next_sign(&mut self) -> f32 {
        if self.signs.is_empty() {
            return 1.0;
        }
        let sign = self.signs[self.next % self.signs.len()];
        self.next = (self.next + 1) % self.signs.len();
        if sign < 0.0 {
            -1.0
        } else {
            1.0
        }
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>, // Last paddle hit this tick
    pub scored: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = None;
        self.scored = None;
    }
}
