// Fixed filesystem locations for the log destinations

use crate::config::LogSettings;
use crate::error::{NimbusLogError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Per-user configuration directory name
const CONFIG_DIR_NAME: &str = ".nimbus";

/// Subdirectory of the configuration directory holding log files
const LOG_DIR_NAME: &str = "logs";

/// Application debug log file name
pub const DEBUG_FILE_NAME: &str = "debug.log";

/// Remote-shell subsystem debug log file name
pub const SSH_DEBUG_FILE_NAME: &str = "ssh-debug.log";

/// Cloud-API subsystem debug log file name
pub const CLOUD_DEBUG_FILE_NAME: &str = "cloud-debug.log";

/// Local syslog datagram socket, standard for most Linux distros
pub const SYSLOG_SOCKET: &str = "/dev/log";

/// Resolved filesystem locations for a router's file destinations
#[derive(Debug, Clone)]
pub struct LogPaths {
    log_dir: PathBuf,
}

impl LogPaths {
    /// Resolve paths from settings, defaulting to ~/.nimbus/logs
    pub fn from_settings(settings: &LogSettings) -> Self {
        let log_dir = settings.log_dir.clone().unwrap_or_else(default_log_dir);
        Self { log_dir }
    }

    /// Directory holding every log file
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Path of the application debug log
    pub fn debug_file(&self) -> PathBuf {
        self.log_dir.join(DEBUG_FILE_NAME)
    }

    /// Path of the remote-shell subsystem debug log
    pub fn ssh_debug_file(&self) -> PathBuf {
        self.log_dir.join(SSH_DEBUG_FILE_NAME)
    }

    /// Path of the cloud-API subsystem debug log
    pub fn cloud_debug_file(&self) -> PathBuf {
        self.log_dir.join(CLOUD_DEBUG_FILE_NAME)
    }

    /// Path of the local syslog socket
    pub fn syslog_socket(&self) -> PathBuf {
        PathBuf::from(SYSLOG_SOCKET)
    }

    /// Create the log directory (and parents) if missing
    pub fn create_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.log_dir).map_err(|e| {
            NimbusLogError::LogDirError(format!(
                "Failed to create {}: {}",
                self.log_dir.display(),
                e
            ))
        })
    }
}

fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(LOG_DIR_NAME)
}
