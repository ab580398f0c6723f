// Log records and per-call rendering flags

use crate::level::Level;
use chrono::{DateTime, Local};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ID: u64 = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
}

/// Small sequential identifier for the calling thread, assigned on first use
///
/// Subsystem log lines carry this instead of the opaque OS thread handle.
pub fn current_thread_id() -> u64 {
    THREAD_ID.with(|id| *id)
}

/// A single log record flowing through the router
#[derive(Debug, Clone)]
pub struct Record {
    /// Severity of the record
    pub level: Level,
    /// Message text; may contain embedded newlines
    pub message: String,
    /// Name of the channel the record was emitted through
    pub channel: String,
    /// Local time the record was created
    pub timestamp: DateTime<Local>,
    /// Source file that emitted the record
    pub file: String,
    /// Source line that emitted the record
    pub line: u32,
    /// Process id captured by the router
    pub pid: u32,
    /// Sequential id of the emitting thread
    pub thread: u64,
}

impl Record {
    /// Create a record stamped with the current time and thread
    pub fn new(
        level: Level,
        message: impl Into<String>,
        channel: impl Into<String>,
        pid: u32,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            channel: channel.into(),
            timestamp: Local::now(),
            file: file.into(),
            line,
            pid,
            thread: current_thread_id(),
        }
    }

    /// Basename of the source file that produced this record
    pub fn file_name(&self) -> &str {
        Path::new(&self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.file)
    }
}

/// Per-call rendering modifiers for console output
///
/// Flags compose freely; wrapping is applied first, then newline handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderFlags {
    /// Print the message verbatim, bypassing the level templates
    pub raw: bool,
    /// Strip trailing whitespace and omit the terminating newline
    pub no_newline: bool,
    /// Word-wrap long lines to the console width
    pub word_wrap: bool,
    /// Join wrapped lines into one record instead of one record per line
    pub keep_joined: bool,
}

impl RenderFlags {
    /// Enable raw passthrough
    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    /// Suppress the trailing newline
    pub fn no_newline(mut self) -> Self {
        self.no_newline = true;
        self
    }

    /// Enable word wrapping
    pub fn word_wrap(mut self) -> Self {
        self.word_wrap = true;
        self
    }

    /// Keep wrapped lines joined in a single record
    pub fn keep_joined(mut self) -> Self {
        self.keep_joined = true;
        self
    }
}
