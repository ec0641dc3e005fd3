/// Game tuning parameters for Pong
///
/// Units are window pixels and frames; speeds are pixels per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 960.0;
    pub const CENTER_LINE_WIDTH: f32 = 6.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 30.0;
    pub const PADDLE_HEIGHT: f32 = 180.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    pub const PADDLE_INSET_LEFT: f32 = 20.0; // left edge of the left paddle
    pub const PADDLE_INSET_RIGHT: f32 = 50.0; // right paddle sits at WIDTH - 50

    // Ball
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_SPEED: f32 = 3.0;

    // AI
    pub const AI_DEAD_ZONE: f32 = 10.0;

    // Score glyphs
    pub const SCORE_INSET_X: f32 = 400.0;
    pub const SCORE_Y: f32 = 300.0;
    pub const SCORE_GLYPH_HEIGHT: f32 = 100.0;

    // Frame pacing
    pub const TARGET_FPS: u32 = 120;
}
