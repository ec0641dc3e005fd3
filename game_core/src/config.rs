use crate::{Params, Side};

/// Who drives the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Opponent {
    /// Second player on the arrow keys
    #[default]
    Human,
    /// Paddle chases the ball's current height, no prediction
    SimpleChaseAi,
}

/// How the ball's direction is chosen after a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServeMode {
    /// Flip the horizontal factor so the serve goes to the other side
    #[default]
    Alternate,
    /// Pick a random sign for both factors
    Random,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub opponent: Opponent,
    pub audio: bool,
    /// Cleared window that only listens for quit: no paddles, ball or score
    pub minimal: bool,
    pub serve_mode: ServeMode,
    pub seed: u64,
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ai_dead_zone: f32,
    pub target_fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            opponent: Opponent::Human,
            audio: true,
            minimal: false,
            serve_mode: ServeMode::Alternate,
            seed: 12345,
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            target_fps: Params::TARGET_FPS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two humans sharing the keyboard
    pub fn two_player() -> Self {
        Self::default()
    }

    /// Left player against the chasing AI
    pub fn vs_ai() -> Self {
        Self {
            opponent: Opponent::SimpleChaseAi,
            ..Self::default()
        }
    }

    /// Two players, no audio cues
    pub fn silent() -> Self {
        Self {
            audio: false,
            ..Self::default()
        }
    }

    /// Empty court, no audio
    pub fn minimal() -> Self {
        Self {
            audio: false,
            minimal: true,
            ..Self::default()
        }
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => Params::PADDLE_INSET_LEFT,
            Side::Right => self.arena_width - Params::PADDLE_INSET_RIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 20.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 1230.0, "Right paddle X position");
    }

    #[test]
    fn test_presets() {
        assert_eq!(Config::two_player().opponent, Opponent::Human);
        assert!(Config::two_player().audio);
        assert_eq!(Config::vs_ai().opponent, Opponent::SimpleChaseAi);
        assert!(!Config::silent().audio);
        assert_eq!(Config::silent().opponent, Opponent::Human);
        assert!(!Config::two_player().minimal);
    }

    #[test]
    fn test_minimal_preset() {
        let config = Config::minimal();
        assert!(config.minimal);
        assert!(!config.audio);
        assert_eq!(config.arena_width, Params::ARENA_WIDTH);
    }
}
