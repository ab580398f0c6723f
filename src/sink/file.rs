use crate::error::{NimbusLogError, Result};
use crate::level::Level;
use crate::record::{Record, RenderFlags};
use crate::sink::Sink;
use crate::template::FileTemplate;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default maximum log file size before rotation (1MiB)
pub const DEFAULT_MAX_LOG_SIZE: u64 = 1024 * 1024;

/// Default number of rotated backups kept alongside the current file
pub const DEFAULT_BACKUP_COUNT: usize = 2;

/// Rotating file destination
///
/// Appends one formatted line per record and rotates by renaming when the
/// size cap would be exceeded: `debug.log` becomes `debug.log.1`, existing
/// backups shift up, and the oldest beyond the backup count is dropped.
/// Total disk footprint stays within (backups + 1) x max size.
pub struct RotatingFileSink {
    floor: Level,
    template: FileTemplate,
    path: PathBuf,
    file: File,
    max_size: u64,
    backup_count: usize,
    size: u64,
}

impl RotatingFileSink {
    /// Open a rotating file sink with the default 1MiB / 2 backup policy
    pub fn new(path: &Path, floor: Level, template: FileTemplate) -> Result<Self> {
        Self::with_policy(path, floor, template, DEFAULT_MAX_LOG_SIZE, DEFAULT_BACKUP_COUNT)
    }

    /// Open a rotating file sink with a custom size cap and backup count
    ///
    /// # Arguments
    /// * `path` - Location of the current log file
    /// * `floor` - Minimum severity this sink accepts
    /// * `template` - Template applied to every record
    /// * `max_size` - Maximum size in bytes before rotation
    /// * `backup_count` - Rotated backups to keep; zero truncates instead
    pub fn with_policy(
        path: &Path,
        floor: Level,
        template: FileTemplate,
        max_size: u64,
        backup_count: usize,
    ) -> Result<Self> {
        let file = Self::open_append(path)?;
        let size = file.metadata().map(|m| m.len()).unwrap_or(0);
        Ok(Self {
            floor,
            template,
            path: path.to_path_buf(),
            file,
            max_size,
            backup_count,
            size,
        })
    }

    /// Path of the current log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current size of the log file in bytes
    pub fn size(&self) -> u64 {
        self.size
    }

    fn open_append(path: &Path) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                NimbusLogError::LogFileError(format!("Failed to open {}: {}", path.display(), e))
            })
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    /// Shift backups up one slot and start a fresh current file
    fn rotate(&mut self) -> Result<()> {
        let _ = self.file.flush();
        if self.backup_count == 0 {
            fs::remove_file(&self.path).map_err(|e| {
                NimbusLogError::LogRotationError(format!(
                    "Failed to truncate {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
        } else {
            let oldest = self.backup_path(self.backup_count);
            if oldest.exists() {
                fs::remove_file(&oldest).map_err(|e| {
                    NimbusLogError::LogRotationError(format!(
                        "Failed to remove {}: {}",
                        oldest.display(),
                        e
                    ))
                })?;
            }
            for index in (1..self.backup_count).rev() {
                let from = self.backup_path(index);
                if from.exists() {
                    let to = self.backup_path(index + 1);
                    fs::rename(&from, &to).map_err(|e| {
                        NimbusLogError::LogRotationError(format!(
                            "Failed to rotate {}: {}",
                            from.display(),
                            e
                        ))
                    })?;
                }
            }
            if self.path.exists() {
                fs::rename(&self.path, self.backup_path(1)).map_err(|e| {
                    NimbusLogError::LogRotationError(format!(
                        "Failed to rotate {}: {}",
                        self.path.display(),
                        e
                    ))
                })?;
            }
        }
        self.file = Self::open_append(&self.path)?;
        self.size = 0;
        Ok(())
    }
}

impl Sink for RotatingFileSink {
    fn floor(&self) -> Level {
        self.floor
    }

    fn emit(&mut self, record: &Record, _flags: RenderFlags) -> Result<()> {
        let mut line = self.template.format(record);
        line.push('\n');

        // Rotate before the write that would push the file past the cap
        if self.size > 0 && self.size + line.len() as u64 > self.max_size {
            self.rotate()?;
        }

        self.file.write_all(line.as_bytes()).map_err(|e| {
            NimbusLogError::LogFileError(format!(
                "Failed to write to {}: {}",
                self.path.display(),
                e
            ))
        })?;
        self.file.flush().map_err(|e| {
            NimbusLogError::LogFileError(format!("Failed to flush {}: {}", self.path.display(), e))
        })?;
        self.size += line.len() as u64;

        Ok(())
    }
}
