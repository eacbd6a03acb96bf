use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::params::Params;
use crate::render::Color;

/// Game configuration
///
/// Every field is optional in TOML; missing ones fall back to `Params`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f64,
    pub field_height: f64,
    pub wall_thickness: f64,
    pub paddle_width: f64,
    pub paddle_height: f64,
    pub paddle_speed: f64,
    pub paddle_inset: f64,
    pub ball_size: f64,
    pub ball_speed: f64,
    pub ball_color: Color,
    pub reset_ball_on_point: bool,
    pub win_score: Option<u32>,
    pub fixed_dt: f64,
    pub max_dt: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            wall_thickness: Params::WALL_THICKNESS,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            ball_color: Params::BALL_COLOR,
            reset_ball_on_point: false,
            win_score: None,
            fixed_dt: Params::FIXED_DT,
            max_dt: Params::MAX_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("wall_thickness", self.wall_thickness),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("fixed_dt", self.fixed_dt),
            ("max_dt", self.max_dt),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("paddle_speed", self.paddle_speed),
            ("ball_speed", self.ball_speed),
            ("paddle_inset", self.paddle_inset),
        ];
        for (name, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        if 2.0 * self.wall_thickness >= self.field_width.min(self.field_height) {
            return Err(ConfigError::Invalid(
                "walls leave no room for the field".to_string(),
            ));
        }
        // The ball must not skip over a wall within one micro-step
        let travel = self.ball_speed * self.fixed_dt;
        if travel >= self.wall_thickness + self.ball_size {
            return Err(ConfigError::Invalid(format!(
                "ball moves {travel} per step, more than wall_thickness + ball_size"
            )));
        }
        if self.win_score == Some(0) {
            return Err(ConfigError::Invalid(
                "win_score must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
