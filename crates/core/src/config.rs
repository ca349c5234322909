use serde::{Deserialize, Serialize};

pub const DEFAULT_THRESHOLD_START: f64 = 73.35205304;
pub const DEFAULT_THRESHOLD_END: f64 = 54.10433993;
pub const NUM_THRESHOLDS: usize = 7;
pub const ENV_THRESHOLD_START: &str = "FOCUS_THRESHOLD_START";
pub const ENV_THRESHOLD_END: &str = "FOCUS_THRESHOLD_END";

/// Decision-threshold bounds for the emphasis sweep.
///
/// Constructed once at startup and passed by reference into each analysis
/// call; never mutated afterwards.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ThresholdConfig {
    start: f64,
    end: f64,
}

impl ThresholdConfig {
    pub fn new(start: f64, end: f64) -> Result<Self, ConfigError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ConfigError::NonFiniteThreshold);
        }
        if end <= 0.0 {
            return Err(ConfigError::NonPositiveThreshold);
        }
        if start <= end {
            return Err(ConfigError::ThresholdOrder { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// The strictly descending sweep, `start` and `end` inclusive.
    pub fn values(&self) -> Vec<f64> {
        let step = (self.start - self.end) / (NUM_THRESHOLDS as f64 - 1.0);
        (0..NUM_THRESHOLDS)
            .map(|k| self.start - k as f64 * step)
            .collect()
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_THRESHOLD_START,
            end: DEFAULT_THRESHOLD_END,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("threshold bounds must be finite")]
    NonFiniteThreshold,
    #[error("threshold bounds must be > 0")]
    NonPositiveThreshold,
    #[error("threshold start ({start}) must be greater than end ({end})")]
    ThresholdOrder { start: f64, end: f64 },
    #[error("invalid value for {key}: {value}")]
    InvalidEnvValue { key: String, value: String },
}

pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

#[derive(Clone, Debug, Default)]
pub struct StdEnv;

impl Env for StdEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: std::collections::BTreeMap<String, String>,
}

impl MapEnv {
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl Env for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// CLI flag wins over the environment, which wins over the default.
pub fn resolve_f64_with_default(
    cli_value: Option<f64>,
    env_key: &str,
    env: &impl Env,
    default: f64,
) -> Result<f64, ConfigError> {
    if let Some(v) = cli_value {
        return Ok(v);
    }
    match env.var(env_key) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidEnvValue {
            key: env_key.to_owned(),
            value: raw,
        }),
        None => Ok(default),
    }
}
