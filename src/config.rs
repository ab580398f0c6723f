// Logging settings, typically loaded from the tool's config file

use crate::error::{NimbusLogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings controlling where and how log files are written
///
/// Everything has a sensible default, so an absent `[logging]` section in
/// the tool's config file behaves the same as no config at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    /// Directory for log files (defaults to ~/.nimbus/logs)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Maximum log file size in bytes before rotation
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// Number of rotated backups to keep per log file
    #[serde(default = "default_backup_count")]
    pub backup_count: usize,

    /// Whether to mirror application records to the local syslog daemon
    #[serde(default)]
    pub use_syslog: bool,
}

// Default value functions for serde
fn default_max_file_size() -> u64 {
    1024 * 1024
}

fn default_backup_count() -> usize {
    2
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            log_dir: None,
            max_file_size: default_max_file_size(),
            backup_count: default_backup_count(),
            use_syslog: false,
        }
    }
}

impl LogSettings {
    /// Load settings from a file (supports TOML and JSON)
    pub fn from_file(path: &Path) -> Result<LogSettings> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| NimbusLogError::ConfigError(format!("Failed to read config file: {}", e)))?;

        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        let settings: LogSettings = match extension {
            "toml" => toml::from_str(&contents)
                .map_err(|e| NimbusLogError::InvalidConfig(format!("TOML parse error: {}", e)))?,
            "json" => serde_json::from_str(&contents)
                .map_err(|e| NimbusLogError::InvalidConfig(format!("JSON parse error: {}", e)))?,
            _ => {
                return Err(NimbusLogError::InvalidConfig(format!(
                    "Unsupported file format: {}. Use .toml or .json",
                    extension
                )))
            }
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate settings before use
    pub fn validate(&self) -> Result<()> {
        if self.max_file_size == 0 {
            return Err(NimbusLogError::ConfigValidationError(
                "max_file_size must be greater than zero".to_string(),
            ));
        }
        if self.backup_count == 0 {
            return Err(NimbusLogError::ConfigValidationError(
                "backup_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
