// Router - the registry wiring channels to their destinations

use crate::channel::Channel;
use crate::config::LogSettings;
use crate::error::Result;
use crate::level::Level;
use crate::paths::LogPaths;
use crate::record::{Record, RenderFlags};
#[cfg(unix)]
use crate::sink::SyslogSink;
use crate::sink::{ConsoleSink, RotatingFileSink, SessionBuffer, SessionBufferSink, Sink};
use crate::template::FileTemplate;
use std::collections::HashMap;
use std::panic::Location;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Name of the application channel
pub const APP_CHANNEL: &str = "nimbus";

/// Name of the remote-shell subsystem channel
pub const SSH_CHANNEL: &str = "ssh";

/// Name of the cloud-API subsystem channel
pub const CLOUD_CHANNEL: &str = "cloud";

/// Central registry wiring named channels to their destinations
///
/// Construct one per process (or per test) and pass it to the components
/// that need logging; nothing here relies on global state. Construction
/// performs no I/O - destinations are only opened by the configure calls,
/// and an unconfigured router silently discards everything.
pub struct LogRouter {
    paths: LogPaths,
    max_file_size: u64,
    backup_count: usize,
    pid: u32,
    session: SessionBuffer,
    channels: RwLock<HashMap<String, Arc<Channel>>>,
}

impl LogRouter {
    /// Create a router with default settings
    pub fn new() -> Self {
        Self::with_settings(LogSettings::default())
    }

    /// Create a router from explicit settings
    pub fn with_settings(settings: LogSettings) -> Self {
        Self {
            paths: LogPaths::from_settings(&settings),
            max_file_size: settings.max_file_size,
            backup_count: settings.backup_count,
            pid: std::process::id(),
            session: SessionBuffer::new(),
            channels: RwLock::new(HashMap::new()),
        }
    }

    /// Resolved filesystem locations this router writes to
    pub fn paths(&self) -> &LogPaths {
        &self.paths
    }

    /// Handle to the in-memory session buffer
    pub fn session(&self) -> SessionBuffer {
        self.session.clone()
    }

    /// Get or create the channel with the given name
    pub fn channel(&self, name: &str) -> Arc<Channel> {
        {
            let channels = match self.channels.read() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if let Some(channel) = channels.get(name) {
                return Arc::clone(channel);
            }
        }
        let mut channels = match self.channels.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Arc::clone(
            channels
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Channel::new(name))),
        )
    }

    /// Wire up the application channel
    ///
    /// Attaches the rotating debug file, the console at Info, and the
    /// session buffer; when `use_syslog` is set and the local syslog socket
    /// exists, a syslog destination is attached as well. Ensures the log
    /// directory exists first. Calling again rewires the channel from
    /// scratch, so repeated configuration never duplicates destinations.
    ///
    /// # Arguments
    /// * `use_syslog` - Mirror application records to the local syslog
    ///   daemon if its socket is present
    pub fn configure_application(&self, use_syslog: bool) -> Result<()> {
        self.paths.create_dirs()?;

        let mut sinks: Vec<Box<dyn Sink>> = Vec::new();
        sinks.push(Box::new(RotatingFileSink::with_policy(
            &self.paths.debug_file(),
            Level::Debug,
            FileTemplate::DebugWithPid,
            self.max_file_size,
            self.backup_count,
        )?));
        sinks.push(Box::new(ConsoleSink::new(Level::Info)));
        sinks.push(Box::new(SessionBufferSink::new(
            Level::Debug,
            FileTemplate::DebugWithPid,
            self.session.clone(),
        )));

        let mut syslog_attached = false;
        #[cfg(unix)]
        if use_syslog {
            if let Some(syslog) = SyslogSink::connect(
                &self.paths.syslog_socket(),
                Level::Debug,
                FileTemplate::DebugWithPid,
                APP_CHANNEL,
            )? {
                sinks.push(Box::new(syslog));
                syslog_attached = true;
            }
        }
        #[cfg(not(unix))]
        let _ = use_syslog;

        self.channel(APP_CHANNEL).set_sinks(Level::Debug, sinks);
        if syslog_attached {
            self.debug(&format!("Logging to {}", self.paths.syslog_socket().display()));
        }
        Ok(())
    }

    /// Wire up the remote-shell debug channel
    ///
    /// Records emitted through the `ssh` channel land in a rotating file
    /// of their own, formatted with the thread-stamped subsystem template.
    pub fn configure_ssh_debug_log(&self) -> Result<()> {
        self.configure_subsystem(SSH_CHANNEL, &self.paths.ssh_debug_file(), FileTemplate::RemoteShell)
    }

    /// Wire up the cloud-API debug channel
    pub fn configure_cloud_debug_log(&self) -> Result<()> {
        self.configure_subsystem(CLOUD_CHANNEL, &self.paths.cloud_debug_file(), FileTemplate::CloudApi)
    }

    fn configure_subsystem(&self, name: &str, path: &Path, template: FileTemplate) -> Result<()> {
        self.paths.create_dirs()?;
        let file = RotatingFileSink::with_policy(
            path,
            Level::Debug,
            template,
            self.max_file_size,
            self.backup_count,
        )?;
        self.channel(name).set_sinks(Level::Debug, vec![Box::new(file)]);
        Ok(())
    }

    /// Emit a record through the named channel
    #[track_caller]
    pub fn log(&self, channel: &str, level: Level, message: &str) {
        self.log_with(channel, level, message, RenderFlags::default());
    }

    /// Emit a record with explicit rendering flags
    #[track_caller]
    pub fn log_with(&self, channel: &str, level: Level, message: &str, flags: RenderFlags) {
        let location = Location::caller();
        let record = Record::new(level, message, channel, self.pid, location.file(), location.line());
        self.channel(channel).emit(&record, flags);
    }

    /// Emit a record with an explicit source location
    ///
    /// Used by adapters (such as the facade bridge) that already know
    /// where the record originated.
    pub fn log_from(&self, channel: &str, level: Level, message: &str, file: &str, line: u32) {
        let record = Record::new(level, message, channel, self.pid, file, line);
        self.channel(channel).emit(&record, RenderFlags::default());
    }

    /// Log a debug message on the application channel
    #[track_caller]
    pub fn debug(&self, message: &str) {
        self.log(APP_CHANNEL, Level::Debug, message);
    }

    /// Log an info message on the application channel
    #[track_caller]
    pub fn info(&self, message: &str) {
        self.log(APP_CHANNEL, Level::Info, message);
    }

    /// Log a warning on the application channel
    #[track_caller]
    pub fn warn(&self, message: &str) {
        self.log(APP_CHANNEL, Level::Warn, message);
    }

    /// Log an error on the application channel
    #[track_caller]
    pub fn error(&self, message: &str) {
        self.log(APP_CHANNEL, Level::Error, message);
    }

    /// Log a critical error on the application channel
    #[track_caller]
    pub fn critical(&self, message: &str) {
        self.log(APP_CHANNEL, Level::Critical, message);
    }

    /// Log a fatal error on the application channel
    #[track_caller]
    pub fn fatal(&self, message: &str) {
        self.log(APP_CHANNEL, Level::Fatal, message);
    }

    /// Print a message verbatim through the application channel
    #[track_caller]
    pub fn raw(&self, message: &str) {
        self.log_with(APP_CHANNEL, Level::Info, message, RenderFlags::default().raw());
    }
}

impl Default for LogRouter {
    fn default() -> Self {
        Self::new()
    }
}
