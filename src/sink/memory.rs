use crate::error::Result;
use crate::level::Level;
use crate::record::{Record, RenderFlags};
use crate::sink::Sink;
use crate::template::FileTemplate;
use std::sync::{Arc, Mutex};

/// Shared in-memory store of formatted session log lines
///
/// The application channel mirrors everything it logs into one of these so
/// a crash reporter can dump the whole session after the fact. Clones share
/// the same underlying store.
#[derive(Clone, Default)]
pub struct SessionBuffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl SessionBuffer {
    /// Create an empty session buffer
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }

    /// Snapshot of every line recorded so far, in emission order
    pub fn contents(&self) -> Vec<String> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }

    /// Number of lines recorded so far
    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all recorded lines
    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

/// Sink that mirrors formatted records into a [`SessionBuffer`]
pub struct SessionBufferSink {
    floor: Level,
    template: FileTemplate,
    buffer: SessionBuffer,
}

impl SessionBufferSink {
    /// Create a sink feeding the given buffer
    pub fn new(floor: Level, template: FileTemplate, buffer: SessionBuffer) -> Self {
        Self {
            floor,
            template,
            buffer,
        }
    }
}

impl Sink for SessionBufferSink {
    fn floor(&self) -> Level {
        self.floor
    }

    fn emit(&mut self, record: &Record, _flags: RenderFlags) -> Result<()> {
        self.buffer.push(self.template.format(record));
        Ok(())
    }
}
