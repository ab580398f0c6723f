use crate::error::Result;
use crate::level::Level;
use crate::record::{Record, RenderFlags};
use crate::sink::Sink;

/// Sink that silently absorbs every record
///
/// Every channel starts with one of these, which keeps the router safe to
/// use as a library with no configuration at all.
pub struct DiscardSink;

impl Sink for DiscardSink {
    fn floor(&self) -> Level {
        Level::Debug
    }

    fn emit(&mut self, _record: &Record, _flags: RenderFlags) -> Result<()> {
        Ok(())
    }
}
