use thiserror::Error;

/// Main error type for the nimbus logging layer
#[derive(Debug, Error)]
pub enum NimbusLogError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration file: {0}")]
    InvalidConfig(String),

    #[error("Configuration validation failed: {0}")]
    ConfigValidationError(String),

    // Destination errors
    #[error("Failed to create log directory: {0}")]
    LogDirError(String),

    #[error("Failed to open log file: {0}")]
    LogFileError(String),

    #[error("Log rotation failed: {0}")]
    LogRotationError(String),

    #[error("Syslog error: {0}")]
    SyslogError(String),

    // Template errors
    #[error("Template table error: {0}")]
    TemplateError(String),

    // IO errors (automatically converted from std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for nimbus-log operations
pub type Result<T> = std::result::Result<T, NimbusLogError>;
