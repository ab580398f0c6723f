use crate::error::{NimbusLogError, Result};
use crate::level::Level;
use crate::record::{Record, RenderFlags};
use crate::sink::Sink;
use crate::template::FileTemplate;
use std::os::unix::net::UnixDatagram;
use std::path::Path;

/// Syslog facility value for user-level messages
const FACILITY_USER: u8 = 1;

/// Destination sending records to the local syslog daemon
///
/// Connects to the BSD-style datagram socket most Linux syslog daemons
/// listen on. Attachment is opportunistic: when the socket is missing the
/// sink simply is not created, which the router treats as "skip syslog".
pub struct SyslogSink {
    floor: Level,
    template: FileTemplate,
    tag: String,
    socket: UnixDatagram,
}

impl SyslogSink {
    /// Connect to the syslog socket at `path`, if it exists
    ///
    /// Returns `Ok(None)` when the socket is absent so callers can skip
    /// the destination without treating it as a failure.
    pub fn connect(
        path: &Path,
        floor: Level,
        template: FileTemplate,
        tag: &str,
    ) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let socket = UnixDatagram::unbound().map_err(|e| {
            NimbusLogError::SyslogError(format!("Failed to create syslog socket: {}", e))
        })?;
        socket.connect(path).map_err(|e| {
            NimbusLogError::SyslogError(format!("Failed to connect to {}: {}", path.display(), e))
        })?;
        Ok(Some(Self {
            floor,
            template,
            tag: tag.to_string(),
            socket,
        }))
    }
}

impl Sink for SyslogSink {
    fn floor(&self) -> Level {
        self.floor
    }

    fn emit(&mut self, record: &Record, _flags: RenderFlags) -> Result<()> {
        let priority = (FACILITY_USER << 3) | record.level.syslog_severity();
        let datagram = format!(
            "<{}>{}[{}]: {}",
            priority,
            self.tag,
            record.pid,
            self.template.format(record)
        );
        self.socket.send(datagram.as_bytes()).map_err(|e| {
            NimbusLogError::SyslogError(format!("Failed to send to syslog: {}", e))
        })?;
        Ok(())
    }
}
