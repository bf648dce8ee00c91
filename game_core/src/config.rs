use crate::{GameMap, Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub serve_speed_x: f32,
    pub serve_speed_y: f32,
    pub spin_factor: f32,
    pub ai_dead_band: f32,
    pub ai_step: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            serve_speed_x: Params::SERVE_SPEED_X,
            serve_speed_y: Params::SERVE_SPEED_Y,
            spin_factor: Params::SPIN_FACTOR,
            ai_dead_band: Params::AI_DEAD_BAND,
            ai_step: Params::AI_STEP,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge X of a paddle, fixed for the lifetime of the game
    pub fn paddle_x(&self, side: Side, map: &GameMap) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Ai => map.width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Vertical center of a paddle whose top edge is at `paddle_y`
    pub fn paddle_center_y(&self, paddle_y: f32) -> f32 {
        paddle_y + self.paddle_height / 2.0
    }

    /// Clamp a paddle's top edge so the whole paddle stays on the surface
    pub fn clamp_paddle_y(&self, y: f32, map: &GameMap) -> f32 {
        y.min(map.height - self.paddle_height).max(0.0)
    }

    /// Serve speed magnitudes as a vector
    pub fn serve_speed(&self) -> glam::Vec2 {
        glam::Vec2::new(self.serve_speed_x, self.serve_speed_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        let map = GameMap::new();
        assert_eq!(config.paddle_x(Side::Player, &map), 10.0, "Player paddle X");
        assert_eq!(config.paddle_x(Side::Ai, &map), 780.0, "AI paddle X");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        let map = GameMap::new();
        assert_eq!(config.clamp_paddle_y(-40.0, &map), 0.0);
        assert_eq!(config.clamp_paddle_y(1000.0, &map), 500.0);
        assert_eq!(config.clamp_paddle_y(250.0, &map), 250.0);
    }

    #[test]
    fn test_config_paddle_center_y() {
        let config = Config::new();
        assert_eq!(config.paddle_center_y(250.0), 300.0);
    }
}
