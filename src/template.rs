// Format templates - how records turn into text

use crate::error::{NimbusLogError, Result};
use crate::level::Level;
use crate::record::Record;
use std::collections::HashMap;

/// Timestamp pattern used by the debug templates
pub const DEBUG_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Compact timestamp pattern used by the subsystem file templates
pub const SUBSYSTEM_TIMESTAMP: &str = "%Y%m%d-%H:%M:%S%.3f";

/// Shape of a console line for one severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleShape {
    /// `>>> message`
    Arrow,
    /// `*** LEVEL - message`
    Starred,
    /// `!!! LEVEL - message`
    Banged,
    /// `timestamp file:line - LEVEL - message`
    Debug,
    /// `LEVEL - message`
    Plain,
}

impl ConsoleShape {
    fn render(&self, record: &Record) -> String {
        match self {
            ConsoleShape::Arrow => format!(">>> {}", record.message),
            ConsoleShape::Starred => {
                format!("*** {} - {}", record.level.name(), record.message)
            }
            ConsoleShape::Banged => {
                format!("!!! {} - {}", record.level.name(), record.message)
            }
            ConsoleShape::Debug => format!(
                "{} {}:{} - {} - {}",
                record.timestamp.format(DEBUG_TIMESTAMP),
                record.file_name(),
                record.line,
                record.level.name(),
                record.message
            ),
            ConsoleShape::Plain => {
                format!("{} - {}", record.level.name(), record.message)
            }
        }
    }
}

/// Level-keyed table of console shapes, built once at startup
#[derive(Debug, Clone)]
pub struct ConsoleTemplates {
    shapes: HashMap<Level, ConsoleShape>,
}

impl ConsoleTemplates {
    /// Build the standard table covering every severity level
    pub fn standard() -> Self {
        let mut shapes = HashMap::new();
        shapes.insert(Level::Debug, ConsoleShape::Debug);
        shapes.insert(Level::Info, ConsoleShape::Arrow);
        shapes.insert(Level::Warn, ConsoleShape::Starred);
        shapes.insert(Level::Error, ConsoleShape::Banged);
        shapes.insert(Level::Critical, ConsoleShape::Banged);
        shapes.insert(Level::Fatal, ConsoleShape::Banged);
        let table = Self { shapes };
        debug_assert!(table.validate().is_ok());
        table
    }

    /// Build a table from an explicit mapping, requiring every level present
    pub fn from_shapes(shapes: HashMap<Level, ConsoleShape>) -> Result<Self> {
        let table = Self { shapes };
        table.validate()?;
        Ok(table)
    }

    /// Check that every severity level has a shape
    pub fn validate(&self) -> Result<()> {
        for level in Level::ALL {
            if !self.shapes.contains_key(&level) {
                return Err(NimbusLogError::TemplateError(format!(
                    "no console template for level {}",
                    level
                )));
            }
        }
        Ok(())
    }

    /// Format a record for console display
    ///
    /// A record emitted with the raw flag is returned verbatim. A level
    /// somehow absent from the table falls back to the plain
    /// `LEVEL - message` shape.
    pub fn format(&self, record: &Record, raw: bool) -> String {
        if raw {
            return record.message.clone();
        }
        self.shapes
            .get(&record.level)
            .copied()
            .unwrap_or(ConsoleShape::Plain)
            .render(record)
    }
}

/// Template applied by file-backed sinks, uniform across levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileTemplate {
    /// `timestamp PID: pid file:line - LEVEL - message`
    DebugWithPid,
    /// `PID: pid LVL [timestamp] thr=n channel: message`
    RemoteShell,
    /// `PID: pid LVL [timestamp] channel: message`
    CloudApi,
}

impl FileTemplate {
    /// Format a record into a single log line, without trailing newline
    pub fn format(&self, record: &Record) -> String {
        match self {
            FileTemplate::DebugWithPid => format!(
                "{} PID: {} {}:{} - {} - {}",
                record.timestamp.format(DEBUG_TIMESTAMP),
                record.pid,
                record.file_name(),
                record.line,
                record.level.name(),
                record.message
            ),
            FileTemplate::RemoteShell => format!(
                "PID: {} {} [{}] thr={} {}: {}",
                record.pid,
                record.level.abbrev(),
                record.timestamp.format(SUBSYSTEM_TIMESTAMP),
                record.thread,
                record.channel,
                record.message
            ),
            FileTemplate::CloudApi => format!(
                "PID: {} {} [{}] {}: {}",
                record.pid,
                record.level.abbrev(),
                record.timestamp.format(SUBSYSTEM_TIMESTAMP),
                record.channel,
                record.message
            ),
        }
    }
}
