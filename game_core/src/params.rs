use crate::render::Color;

/// Game tuning parameters for Pong
///
/// Distances are in pixels, time in milliseconds, speeds in pixels per millisecond.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f64 = 800.0;
    pub const FIELD_HEIGHT: f64 = 600.0;
    pub const WALL_THICKNESS: f64 = 20.0;

    // Paddle
    pub const PADDLE_WIDTH: f64 = 20.0;
    pub const PADDLE_HEIGHT: f64 = 100.0;
    pub const PADDLE_SPEED: f64 = 0.5;
    pub const PADDLE_INSET: f64 = 40.0; // Distance from field edge to paddle center

    // Ball
    pub const BALL_SIZE: f64 = 20.0;
    pub const BALL_SPEED: f64 = 0.3;
    pub const BALL_COLOR: Color = Color::Yellow;

    // Score
    pub const SCORE_TEXT_Y: f64 = 70.0;
    pub const SCORE_LABEL: &str = "Placar";

    // Physics
    pub const FIXED_DT: f64 = 5.0; // ms per micro-step
    pub const MAX_DT: f64 = 100.0; // Clamp to prevent large jumps
}
