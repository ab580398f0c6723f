// Sink module - log destinations and their severity floors

mod console;
mod discard;
mod file;
mod memory;
#[cfg(unix)]
mod syslog;

pub use console::ConsoleSink;
pub use discard::DiscardSink;
pub use file::{RotatingFileSink, DEFAULT_BACKUP_COUNT, DEFAULT_MAX_LOG_SIZE};
pub use memory::{SessionBuffer, SessionBufferSink};
#[cfg(unix)]
pub use syslog::SyslogSink;

use crate::error::Result;
use crate::level::Level;
use crate::record::{Record, RenderFlags};

/// A destination for log records
///
/// Each sink owns an independent severity floor; records below it are
/// dropped silently. Sinks are driven under their channel's lock, so
/// implementations need no synchronization of their own.
pub trait Sink: Send {
    /// Minimum severity this sink accepts
    fn floor(&self) -> Level;

    /// Write one record to the destination
    fn emit(&mut self, record: &Record, flags: RenderFlags) -> Result<()>;
}
