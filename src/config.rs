//! Configuration handling for the contact form

use crate::state::{Country, InputMode, Outcome};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable forcing the simulated outcome
pub const OUTCOME_ENV: &str = "CONTACT_FORM_OUTCOME";
/// Environment variable overriding the simulated delay
pub const DELAY_ENV: &str = "CONTACT_FORM_SUBMIT_DELAY_MS";

/// Invalid configuration value
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("success_probability must be between 0 and 1, got {0}")]
    InvalidProbability(f64),
    #[error("unknown default country '{0}'")]
    UnknownCountry(String),
    #[error("unknown outcome '{0}', expected success, failure or random")]
    InvalidOutcome(String),
    #[error("invalid submit delay '{0}', expected milliseconds")]
    InvalidDelay(String),
}

/// Outcome the simulated transport is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForcedOutcome {
    Success,
    Failure,
}

impl From<ForcedOutcome> for Outcome {
    fn from(forced: ForcedOutcome) -> Self {
        match forced {
            ForcedOutcome::Success => Outcome::Success,
            ForcedOutcome::Failure => Outcome::Failure,
        }
    }
}

/// User configuration for the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Simulated response delay in milliseconds
    pub submit_delay_ms: u64,
    /// Chance that a simulated submission succeeds
    pub success_probability: f64,
    /// Skip the coin flip and always resolve to this outcome
    pub forced_outcome: Option<ForcedOutcome>,
    /// Country preselected in phone mode
    pub default_country: String,
    /// Start with the phone field instead of email
    pub start_in_phone_mode: bool,
    /// Play entrance/exit animations
    pub animations: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1000,
            success_probability: 0.5,
            forced_outcome: None,
            default_country: "us".to_string(),
            start_in_phone_mode: false,
            animations: true,
        }
    }
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact-form", "contact-form-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location, writing the defaults
    /// there on first run
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_or_init(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load `path`, or save the defaults to it if it does not exist yet.
    /// A failed write is logged and the defaults are still returned.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }
        let config = Self::default();
        match config.save_to(path) {
            Ok(()) => tracing::info!("Wrote default config to {}", path.display()),
            Err(err) => tracing::warn!("Could not write default config: {err}"),
        }
        Ok(config)
    }

    /// Load configuration from a file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply environment overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn apply_env_from(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(value) = lookup(OUTCOME_ENV) {
            self.forced_outcome = match value.trim().to_ascii_lowercase().as_str() {
                "success" => Some(ForcedOutcome::Success),
                "failure" => Some(ForcedOutcome::Failure),
                "random" | "" => None,
                _ => return Err(ConfigError::InvalidOutcome(value)),
            };
        }
        if let Some(value) = lookup(DELAY_ENV) {
            self.submit_delay_ms = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidDelay(value.clone()))?;
        }
        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.success_probability) {
            return Err(ConfigError::InvalidProbability(self.success_probability));
        }
        if Country::find(&self.default_country).is_none() {
            return Err(ConfigError::UnknownCountry(self.default_country.clone()));
        }
        Ok(())
    }

    pub fn initial_mode(&self) -> InputMode {
        if self.start_in_phone_mode {
            InputMode::Phone
        } else {
            InputMode::Email
        }
    }

    /// Configured default country, or the fallback if unknown
    pub fn country(&self) -> &'static Country {
        Country::find(&self.default_country).unwrap_or_else(Country::fallback)
    }
}
