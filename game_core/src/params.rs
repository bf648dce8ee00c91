/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // Gap between paddle and side edge

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const SERVE_SPEED_X: f32 = 5.0; // units per tick
    pub const SERVE_SPEED_Y: f32 = 4.0;
    pub const SPIN_FACTOR: f32 = 0.25; // Vertical speed per unit of offset from paddle center

    // AI
    pub const AI_DEAD_BAND: f32 = 10.0;
    pub const AI_STEP: f32 = 5.0; // units per tick

    // Net
    pub const NET_SPACING: f32 = 30.0;
    pub const NET_SEGMENT_LENGTH: f32 = 15.0;
    pub const NET_WIDTH: f32 = 2.0;

    // Score text
    pub const SCORE_FONT_SIZE: f32 = 32.0;
    pub const SCORE_Y: f32 = 50.0;
}
