// Channels - named routing contexts that fan records out to sinks

use crate::error::NimbusLogError;
use crate::level::Level;
use crate::record::{Record, RenderFlags};
use crate::sink::{DiscardSink, Sink};
use std::sync::Mutex;

struct ChannelInner {
    floor: Level,
    sinks: Vec<Box<dyn Sink>>,
}

/// A named logical logger owning a severity floor and its destinations
///
/// Channels start with a single discard destination and silently absorb
/// records until a configuration entry point attaches real sinks, so the
/// router is safe to use as a library with no configuration at all.
pub struct Channel {
    name: String,
    inner: Mutex<ChannelInner>,
}

impl Channel {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            inner: Mutex::new(ChannelInner {
                floor: Level::Debug,
                sinks: vec![Box::new(DiscardSink)],
            }),
        }
    }

    /// Name of this channel
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum severity this channel emits
    pub fn floor(&self) -> Level {
        self.inner
            .lock()
            .map(|inner| inner.floor)
            .unwrap_or(Level::Debug)
    }

    /// Number of attached destinations
    pub fn sink_count(&self) -> usize {
        self.inner.lock().map(|inner| inner.sinks.len()).unwrap_or(0)
    }

    /// Replace this channel's floor and destinations
    pub(crate) fn set_sinks(&self, floor: Level, sinks: Vec<Box<dyn Sink>>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.floor = floor;
            inner.sinks = sinks;
        }
    }

    /// Fan a record out to every destination whose floor admits it
    ///
    /// Emission never fails: a destination error is reported as a one-line
    /// diagnostic on the process error stream and suppressed, so logging
    /// can never crash the host application. Panics are not intercepted.
    pub fn emit(&self, record: &Record, flags: RenderFlags) {
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };
        if record.level < inner.floor {
            return;
        }
        for sink in inner.sinks.iter_mut() {
            if record.level < sink.floor() {
                continue;
            }
            if let Err(e) = sink.emit(record, flags) {
                report_emit_failure(&self.name, &e);
            }
        }
    }
}

/// Diagnostic path for destination failures
fn report_emit_failure(channel: &str, err: &NimbusLogError) {
    eprintln!("nimbus-log: error emitting to channel '{}': {}", channel, err);
}
