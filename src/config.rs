//! Application configuration
//!
//! Loaded from `config.toml`. Every section is optional and falls back to
//! the defaults the app ships with.

use crate::interview::SessionConfig;
use crate::models::MB;
use crate::navigation::RestartPolicy;
use crate::{MockviewError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "MOCKVIEW_CONFIG";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub restart_policy: RestartPolicy,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            restart_policy: RestartPolicy::KeepProfile,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AttachmentConfig {
    pub resume_max_bytes: u64,
    pub portfolio_max_bytes: u64,
}

impl Default for AttachmentConfig {
    fn default() -> Self {
        Self {
            resume_max_bytes: 10 * MB,
            portfolio_max_bytes: 50 * MB,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: ThemeChoice,
}

/// Configuration for the whole app
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub interview: SessionConfig,
    pub navigation: NavigationConfig,
    pub attachments: AttachmentConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load a configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MockviewError::ConfigError(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        let config = Self::from_toml(&content)?;
        info!("[CONFIG] Loaded {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config file: `$MOCKVIEW_CONFIG`, then the user config dir.
    /// A missing file yields the defaults; a broken one is an error.
    pub fn discover() -> Result<Self> {
        let candidate = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(default_config_path);

        match candidate {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                debug!("[CONFIG] No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn with_interview(mut self, interview: SessionConfig) -> Self {
        self.interview = interview;
        self
    }

    pub fn with_restart_policy(mut self, policy: RestartPolicy) -> Self {
        self.navigation.restart_policy = policy;
        self
    }

    pub fn with_theme(mut self, theme: ThemeChoice) -> Self {
        self.ui.theme = theme;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.interview.validate()?;

        if self.attachments.resume_max_bytes == 0 || self.attachments.portfolio_max_bytes == 0 {
            return Err(MockviewError::ConfigError(
                "Attachment size limits must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mockview").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.interview.prep_seconds, 5);
        assert_eq!(config.interview.min_seconds, 15);
        assert_eq!(config.interview.max_seconds, 180);
        assert_eq!(config.interview.questions.len(), 6);
        assert_eq!(config.navigation.restart_policy, RestartPolicy::KeepProfile);
        assert_eq!(config.attachments.resume_max_bytes, 10 * MB);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [interview]
            min_seconds = 30

            [navigation]
            restart_policy = "clear_profile"
            "#,
        )
        .unwrap();

        assert_eq!(config.interview.min_seconds, 30);
        assert_eq!(config.interview.max_seconds, 180);
        assert_eq!(config.navigation.restart_policy, RestartPolicy::ClearProfile);
        assert_eq!(config.ui.theme, ThemeChoice::Dark);
    }

    #[test]
    fn test_custom_questions() {
        let config = AppConfig::from_toml(
            r#"
            [interview]
            questions = ["Why us?", "Why now?"]
            "#,
        )
        .unwrap();
        assert_eq!(config.interview.questions, vec!["Why us?", "Why now?"]);
    }

    #[test]
    fn test_min_above_max_is_rejected() {
        let err = AppConfig::from_toml(
            r#"
            [interview]
            min_seconds = 200
            max_seconds = 100
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, MockviewError::ConfigError(_)));
    }

    #[test]
    fn test_empty_question_list_is_rejected() {
        let result = AppConfig::from_toml("[interview]\nquestions = []\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_attachment_limit_is_rejected() {
        let result = AppConfig::from_toml("[attachments]\nresume_max_bytes = 0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = AppConfig::from_toml("[interview\nmin_seconds = ").unwrap_err();
        assert!(matches!(err, MockviewError::ConfigError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\ntheme = \"light\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.ui.theme, ThemeChoice::Light);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = AppConfig::load("/no/such/mockview.toml");
        assert!(matches!(result, Err(MockviewError::ConfigError(_))));
    }

    /// Serializes tests that change `MOCKVIEW_CONFIG`
    static ENV_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());

    #[test]
    fn test_discover_follows_env_path() {
        let _guard = ENV_LOCK.lock();
        let dir = tempfile::tempdir().unwrap();

        let valid = dir.path().join("valid.toml");
        fs::write(&valid, "[interview]\nprep_seconds = 3\n").unwrap();
        std::env::set_var(CONFIG_ENV, &valid);
        let config = AppConfig::discover().unwrap();
        assert_eq!(config.interview.prep_seconds, 3);

        std::env::set_var(CONFIG_ENV, dir.path().join("missing.toml"));
        let config = AppConfig::discover().unwrap();
        assert_eq!(config, AppConfig::default());

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[interview\nprep_seconds = ").unwrap();
        std::env::set_var(CONFIG_ENV, &broken);
        let result = AppConfig::discover();
        std::env::remove_var(CONFIG_ENV);
        assert!(matches!(result, Err(MockviewError::ConfigError(_))));
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::default()
            .with_restart_policy(RestartPolicy::ClearProfile)
            .with_theme(ThemeChoice::Light);
        assert_eq!(config.navigation.restart_policy, RestartPolicy::ClearProfile);
        assert_eq!(config.ui.theme, ThemeChoice::Light);
    }
}
