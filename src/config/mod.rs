//! Configuration management module
//! 
//! Handles loading, saving, and validation of the flow configuration:
//! screen delays and an optional content pack path.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::ContentPack;
use crate::util::format::format_delay;
use crate::{QuizFlowError, Result, APP_NAME, CONFIG_FILE};

/// Longest delay either timer may be configured with
pub const MAX_DELAY: Duration = Duration::from_secs(60);

/// Flow configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// How long the welcome screen waits before starting on its own
    #[serde(with = "delay_serde")]
    pub welcome_delay: Duration,
    /// How long placement feedback stays on screen before the next question
    #[serde(with = "delay_serde")]
    pub feedback_delay: Duration,
    /// TOML or JSON content pack replacing the built-in one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_path: Option<PathBuf>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            welcome_delay: Duration::from_secs(3),
            feedback_delay: Duration::from_millis(1500),
            content_path: None,
        }
    }
}

impl FlowConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the welcome auto-start delay
    pub fn with_welcome_delay(mut self, delay: Duration) -> Self {
        self.welcome_delay = delay;
        self
    }

    /// Set the placement feedback delay
    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    /// Set the content pack path
    pub fn with_content_path(mut self, path: PathBuf) -> Self {
        self.content_path = Some(path);
        self
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        for (name, delay) in [
            ("welcome_delay", self.welcome_delay),
            ("feedback_delay", self.feedback_delay),
        ] {
            if delay.is_zero() {
                return Err(QuizFlowError::ConfigError(
                    format!("{} must be greater than 0", name)
                ));
            }
            if delay > MAX_DELAY {
                return Err(QuizFlowError::ConfigError(format!(
                    "{} too long: {} (max: {})",
                    name, format_delay(delay), format_delay(MAX_DELAY)
                )));
            }
        }
        Ok(())
    }

    /// Content pack named by the configuration, or the built-in one
    pub fn content(&self) -> Result<ContentPack> {
        match &self.content_path {
            Some(path) => ContentPack::load(path),
            None => Ok(ContentPack::builtin()),
        }
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `path`, defaulting when it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| QuizFlowError::ConfigError(
                format!("Failed to read config file {}: {}", path.display(), e)
            ))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| QuizFlowError::ConfigError(
                format!("Failed to parse config file {}: {}", path.display(), e)
            ))?;

        // Validate the loaded configuration
        config.validate()?;
        log::info!("loaded config from {}", path.display());

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Validate before saving
        self.validate()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| QuizFlowError::ConfigError(
                    format!("Failed to create config directory {}: {}", parent.display(), e)
                ))?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(path, content)
            .map_err(|e| QuizFlowError::ConfigError(
                format!("Failed to write config file {}: {}", path.display(), e)
            ))?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/quizflow/quizflow.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| QuizFlowError::ConfigError(
                "Unable to determine config directory".to_string()
            ))?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

// Delays are written as humantime strings such as "3s" or "1500ms"
mod delay_serde {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*delay).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        humantime::parse_duration(&text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_valid() {
        let config = FlowConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.welcome_delay, Duration::from_secs(3));
        assert_eq!(config.feedback_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_toml_serialization() {
        let config = FlowConfig::new()
            .with_welcome_delay(Duration::from_secs(5))
            .with_content_path(PathBuf::from("/tmp/pack.toml"));
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        assert!(toml_str.contains("welcome_delay = \"5s\""));

        let deserialized: FlowConfig = toml::from_str(&toml_str).expect("Failed to deserialize from TOML");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: FlowConfig = toml::from_str("feedback_delay = \"750ms\"").unwrap();
        assert_eq!(config.feedback_delay, Duration::from_millis(750));
        assert_eq!(config.welcome_delay, Duration::from_secs(3));
        assert_eq!(config.content_path, None);
    }

    #[test]
    fn test_invalid_delays_rejected() {
        let zero = FlowConfig::new().with_feedback_delay(Duration::ZERO);
        assert!(matches!(zero.validate(), Err(QuizFlowError::ConfigError(_))));

        let long = FlowConfig::new().with_welcome_delay(Duration::from_secs(61));
        assert!(long.validate().is_err());

        assert!(toml::from_str::<FlowConfig>("welcome_delay = \"soon\"").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let config = FlowConfig::new().with_welcome_delay(Duration::from_secs(10));
        config.save_to(&path).unwrap();
        assert_eq!(FlowConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let dir = TempDir::new().unwrap();
        let config = FlowConfig::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, FlowConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "welcome_delay = \"0s\"").unwrap();
        assert!(matches!(FlowConfig::load_from(&path), Err(QuizFlowError::ConfigError(_))));
    }

    #[test]
    fn test_builtin_content_without_path() {
        let content = FlowConfig::default().content().unwrap();
        assert_eq!(content, ContentPack::builtin());
    }

    #[test]
    fn test_config_file_path() {
        let path = FlowConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("quizflow"));
        assert!(path.to_string_lossy().contains("quizflow.toml"));
    }
}
