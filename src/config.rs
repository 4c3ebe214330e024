use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::wizard::{BackFromFirstStep, WizardOptions};

const CONFIG_DIR_NAME: &str = "Wizardry";
const CONFIG_FILE_NAME: &str = "wizard.json";

fn default_log_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardConfig {
    /// What going back from the first step does (`ignore` or `cancel`)
    #[serde(default)]
    pub back_from_first_step: BackFromFirstStep,

    /// Tracing filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            back_from_first_step: BackFromFirstStep::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl WizardConfig {
    /// Load configuration from the platform-specific config directory.
    /// Creates default config if file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        Self::load_or_create(&path)
    }

    /// Load `path`, writing the defaults there first if it is missing
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::load_from(path);
        }

        let config = Self::default();
        config.save_to(path)?;
        tracing::info!("Created default config at: {}", path.display());
        Ok(config)
    }

    /// Load and validate configuration from `path`
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let load_failed = |source: Box<dyn std::error::Error + Send + Sync>| {
            ConfigError::LoadFailed {
                path: path.display().to_string(),
                source,
            }
        };

        let content = fs::read_to_string(path).map_err(|e| load_failed(Box::new(e)))?;
        let config: WizardConfig =
            serde_json::from_str(&content).map_err(|e| load_failed(Box::new(e)))?;
        config.validate()?;

        tracing::debug!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::DirectoryCreationFailed {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let save_failed = |source: Box<dyn std::error::Error + Send + Sync>| {
            ConfigError::SaveFailed {
                path: path.display().to_string(),
                source,
            }
        };

        let json = serde_json::to_string_pretty(self).map_err(|e| save_failed(Box::new(e)))?;
        fs::write(path, json).map_err(|e| save_failed(Box::new(e)))?;

        Ok(())
    }

    /// `<config dir>/Wizardry/wizard.json`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoConfigDirectory)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log_filter must not be empty".to_string()));
        }
        Ok(())
    }

    /// Wizard behaviour selected by this configuration
    pub fn options(&self) -> WizardOptions {
        WizardOptions {
            back_from_first_step: self.back_from_first_step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WizardConfig::default();
        assert_eq!(config.back_from_first_step, BackFromFirstStep::Ignore);
        assert_eq!(config.log_filter, "info");
        assert!(config.validate().is_ok());
        assert_eq!(config.options(), WizardOptions::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("wizard.json");

        let config = WizardConfig {
            back_from_first_step: BackFromFirstStep::Cancel,
            log_filter: "wizardry=debug".to_string(),
        };
        config.save_to(&path).unwrap();

        let loaded = WizardConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.options().back_from_first_step,
            BackFromFirstStep::Cancel
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wizard.json");
        fs::write(&path, r#"{ "back_from_first_step": "cancel" }"#).unwrap();

        let config = WizardConfig::load_from(&path).unwrap();
        assert_eq!(config.back_from_first_step, BackFromFirstStep::Cancel);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wizard.json");
        assert!(!path.exists());

        let config = WizardConfig::load_or_create(&path).unwrap();
        assert_eq!(config, WizardConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wizard.json");
        fs::write(&path, r#"{ "log_filter": "  " }"#).unwrap();

        let err = WizardConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wizard.json");
        fs::write(&path, "{ not json").unwrap();

        let err = WizardConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::LoadFailed { .. }));
    }

    #[test]
    fn test_default_path() {
        if let Ok(path) = WizardConfig::default_path() {
            assert!(path.to_string_lossy().contains("Wizardry"));
            assert!(path.to_string_lossy().ends_with("wizard.json"));
        }
    }
}
