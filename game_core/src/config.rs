use crate::params::Params;

/// Invalid startup configuration. The tick loop itself has no failure
/// modes, so this is the only error type the core exposes.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("playfield dimensions must be positive, got {width}x{height}")]
    BadField { width: u32, height: u32 },
    #[error("paddle dimensions must be positive, got {width}x{height}")]
    BadPaddle { width: u32, height: u32 },
    #[error("paddle height {paddle} does not fit in field height {field}")]
    PaddleTooTall { paddle: u32, field: u32 },
    #[error("ball radius must be positive")]
    BadBall,
    #[error("movement steps must be positive")]
    BadSpeed,
    #[error("tick rate must be positive")]
    BadTickRate,
}

/// Game configuration, supplied once at startup and immutable for the
/// session.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub field_width: u32,
    pub field_height: u32,
    pub paddle_width: u32,
    pub paddle_height: u32,
    pub paddle_step: u32,
    pub paddle_margin: u32,
    pub ball_radius: u32,
    pub ball_step: u32,
    pub tick_rate: u32,
    pub start_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_step: Params::PADDLE_STEP,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_step: Params::BALL_STEP,
            tick_rate: Params::TICK_RATE,
            start_delay_ms: Params::START_DELAY_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject configurations the simulation cannot run on. The original
    /// never validated; here a bad config is fatal at startup rather than
    /// undefined mid-game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width == 0 || self.field_height == 0 {
            return Err(ConfigError::BadField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if self.paddle_width == 0 || self.paddle_height == 0 {
            return Err(ConfigError::BadPaddle {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                field: self.field_height,
            });
        }
        if self.ball_radius == 0 {
            return Err(ConfigError::BadBall);
        }
        if self.paddle_step == 0 || self.ball_step == 0 {
            return Err(ConfigError::BadSpeed);
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::BadTickRate);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_zero_field_rejected() {
        let mut config = Config::new();
        config.field_width = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::BadField {
                width: 0,
                height: 600
            })
        );
    }

    #[test]
    fn test_zero_speed_rejected() {
        let mut config = Config::new();
        config.ball_step = 0;
        assert_eq!(config.validate(), Err(ConfigError::BadSpeed));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let mut config = Config::new();
        config.tick_rate = 0;
        assert_eq!(config.validate(), Err(ConfigError::BadTickRate));
    }

    #[test]
    fn test_oversized_paddle_rejected() {
        let mut config = Config::new();
        config.paddle_height = 700;
        assert_eq!(
            config.validate(),
            Err(ConfigError::PaddleTooTall {
                paddle: 700,
                field: 600
            })
        );
    }
}
