use crate::constants::SENSITIVITY;
use crate::state::LightState;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A `key=value` pair had no `=`.
    #[error("missing value for `{0}`")]
    MissingValue(String),

    /// A value was not a finite number.
    #[error("invalid number {value:?} for `{key}`")]
    InvalidNumber { key: String, value: String },

    #[error("sensitivity must be a positive finite number, got {0}")]
    InvalidSensitivity(f64),
}

/// Startup settings for a light session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightConfig {
    /// Drag distance that maps to a full 0..1 swing.
    pub sensitivity: f64,
    /// State the session starts in.
    pub initial: LightState,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            sensitivity: SENSITIVITY,
            initial: LightState::default(),
        }
    }
}

impl LightConfig {
    /// Parse `brightness`, `warmth` and `sensitivity` from a query string such
    /// as `?warmth=0.4&brightness=0.8`. Starting values are clamped into range;
    /// unknown keys are skipped.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let defaults = LightState::default();
        let mut brightness = defaults.brightness();
        let mut warmth = defaults.warmth();
        let mut sensitivity = SENSITIVITY;

        let pairs = query
            .trim()
            .trim_start_matches('?')
            .split('&')
            .filter(|p| !p.is_empty());
        for pair in pairs {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| ConfigError::MissingValue(pair.to_string()))?;
            match key.trim() {
                "brightness" => brightness = parse_number("brightness", value)?,
                "warmth" => warmth = parse_number("warmth", value)?,
                "sensitivity" => sensitivity = parse_number("sensitivity", value)?,
                other => log::warn!("[config] ignoring unknown key `{}`", other),
            }
        }

        let config = Self {
            sensitivity,
            initial: LightState::new(brightness, warmth),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sensitivity.is_finite() && self.sensitivity > 0.0) {
            return Err(ConfigError::InvalidSensitivity(self.sensitivity));
        }
        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        })
}
