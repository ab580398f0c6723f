// Bridge from the `log` facade into the router

use crate::level::Level;
use crate::router::{LogRouter, APP_CHANNEL, CLOUD_CHANNEL, SSH_CHANNEL};
use std::sync::Arc;

/// Target prefixes routed to the remote-shell channel
const SSH_TARGETS: [&str; 2] = ["ssh", "libssh"];

/// Target prefixes routed to the cloud-API channel
const CLOUD_TARGETS: [&str; 3] = ["aws", "cloud", "s3"];

/// Adapter routing `log` facade records into a [`LogRouter`]
///
/// The remote-shell and cloud-API subsystem crates log through the `log`
/// facade under their own targets; this adapter steers those records to
/// the matching channel so they land in the right debug file. Everything
/// else goes to the application channel.
pub struct FacadeBridge {
    router: Arc<LogRouter>,
}

impl FacadeBridge {
    /// Create a bridge feeding the given router
    pub fn new(router: Arc<LogRouter>) -> Self {
        Self { router }
    }

    /// Install a bridge as the process-wide `log` logger
    ///
    /// The facade only accepts one logger per process, so this can be
    /// called once; later calls return the facade's error.
    pub fn install(router: Arc<LogRouter>) -> std::result::Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(FacadeBridge::new(router)))?;
        log::set_max_level(log::LevelFilter::Debug);
        Ok(())
    }

    fn channel_for(target: &str) -> &'static str {
        if SSH_TARGETS.iter().any(|prefix| target.starts_with(prefix)) {
            return SSH_CHANNEL;
        }
        if CLOUD_TARGETS.iter().any(|prefix| target.starts_with(prefix)) {
            return CLOUD_CHANNEL;
        }
        APP_CHANNEL
    }

    fn level_for(level: log::Level) -> Level {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

impl log::Log for FacadeBridge {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.router.log_from(
            Self::channel_for(record.target()),
            Self::level_for(record.level()),
            &record.args().to_string(),
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
        );
    }

    fn flush(&self) {}
}
