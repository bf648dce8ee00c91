//! Render pass for the Pong surface
//!
//! The game draws through the [`Surface`] trait so it never touches a host
//! drawing API directly. [`DrawList`] records the calls for headless use.

use crate::{Ball, Config, GameMap, Paddle, Params, Score, Side};
use hecs::World;

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const NET_GRAY: Color = Color::rgb(0x88, 0x88, 0x88);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#888888`
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Primitive drawing operations of a 2D surface
pub trait Surface {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { x: f32, y: f32, w: f32, h: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
    Circle { cx: f32, cy: f32, r: f32, color: Color },
    Text { text: String, x: f32, y: f32, font_size: f32, color: Color },
}

/// A surface that records draw calls in order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for DrawList {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Clear { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { cx, cy, r, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
    }
}

/// Draw one frame: clear, paddles, ball, net, scores
pub fn render(
    world: &World,
    map: &GameMap,
    config: &Config,
    score: &Score,
    surface: &mut impl Surface,
) {
    surface.clear(0.0, 0.0, map.width, map.height);

    let mut paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    paddles.sort_by_key(|p| p.side);
    for paddle in paddles {
        surface.fill_rect(
            config.paddle_x(paddle.side, map),
            paddle.y,
            config.paddle_width,
            config.paddle_height,
            Color::WHITE,
        );
    }

    for (_e, ball) in world.query::<&Ball>().iter() {
        surface.fill_circle(ball.pos.x, ball.pos.y, config.ball_radius, Color::WHITE);
    }

    let mut y = 0.0;
    while y < map.height {
        surface.fill_rect(
            map.width / 2.0 - Params::NET_WIDTH / 2.0,
            y,
            Params::NET_WIDTH,
            Params::NET_SEGMENT_LENGTH,
            Color::NET_GRAY,
        );
        y += Params::NET_SPACING;
    }

    for (side, x) in [
        (Side::Player, map.width / 4.0),
        (Side::Ai, 3.0 * map.width / 4.0),
    ] {
        surface.fill_text(
            &score.get(side).to_string(),
            x,
            Params::SCORE_Y,
            Params::SCORE_FONT_SIZE,
            Color::WHITE,
        );
    }
}
