use crate::error::Result;
use crate::level::Level;
use crate::record::{Record, RenderFlags};
use crate::sink::Sink;
use crate::template::ConsoleTemplates;
use crate::wrap;
use colored::Colorize;
use std::io::{self, Write};

/// Console destination writing to a normal and an error stream
///
/// Severity picks the stream: ERROR, CRITICAL and FATAL go to the error
/// stream, everything else to the normal stream. Streams default to the
/// process stdout/stderr but can be injected for tests. Output is flushed
/// after every record.
pub struct ConsoleSink {
    floor: Level,
    templates: ConsoleTemplates,
    normal: Box<dyn Write + Send>,
    error: Box<dyn Write + Send>,
}

impl ConsoleSink {
    /// Create a console sink bound to the process stdout/stderr
    pub fn new(floor: Level) -> Self {
        Self::with_streams(floor, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Create a console sink writing to the given streams
    pub fn with_streams(
        floor: Level,
        normal: Box<dyn Write + Send>,
        error: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            floor,
            templates: ConsoleTemplates::standard(),
            normal,
            error,
        }
    }

    fn colorize(level: Level, raw: bool, line: String) -> String {
        if raw {
            return line;
        }
        match level {
            Level::Debug => line.dimmed().to_string(),
            Level::Warn => line.yellow().to_string(),
            level if level.is_error_class() => line.red().bold().to_string(),
            _ => line,
        }
    }

    /// Format one record and write it to the stream picked by severity
    fn write_record(&mut self, record: &Record, flags: RenderFlags) -> Result<()> {
        let mut formatted = self.templates.format(record, flags.raw);
        if flags.no_newline {
            formatted.truncate(formatted.trim_end().len());
        }
        let formatted = Self::colorize(record.level, flags.raw, formatted);
        let stream = if record.level.is_error_class() {
            &mut self.error
        } else {
            &mut self.normal
        };
        if flags.no_newline {
            write!(stream, "{}", formatted)?;
        } else {
            writeln!(stream, "{}", formatted)?;
        }
        stream.flush()?;
        Ok(())
    }
}

impl Sink for ConsoleSink {
    fn floor(&self) -> Level {
        self.floor
    }

    fn emit(&mut self, record: &Record, flags: RenderFlags) -> Result<()> {
        if !flags.word_wrap {
            return self.write_record(record, flags);
        }
        let lines = wrap::wrap_message(&record.message);
        if flags.keep_joined {
            let mut joined = record.clone();
            joined.message = lines.join("\n");
            return self.write_record(&joined, flags);
        }
        // One record per wrapped line, each shaped by the level template
        for line in lines {
            let mut per_line = record.clone();
            per_line.message = line;
            self.write_record(&per_line, flags)?;
        }
        Ok(())
    }
}
