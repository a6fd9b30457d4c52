//! Append-only record log.
//!
//! `RecordLog<T>` stores any serializable type in a length-prefixed log and
//! backs the per-monster action history.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, ErrorKind, Read, Seek, SeekFrom, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::repository::{RepositoryError, Result};

/// Generic append-only log file.
///
/// Stores items of type `T` using the format:
/// ```text
/// [u32 length][bincode serialized T]
/// [u32 length][bincode serialized T]
/// ...
/// ```
///
/// Each entry is written with a single unbuffered write. A torn trailing
/// entry (for example after a crash mid-write) is cut off when the log is
/// opened, so new entries always follow the last complete one.
pub struct RecordLog<T> {
    name: String,
    path: PathBuf,
    file: File,
    /// Byte offset of the next append.
    current_offset: u64,
    _phantom: PhantomData<T>,
}

impl<T> RecordLog<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Open a log for appending, creating the directory and file if needed.
    pub fn open_or_create(base_dir: impl AsRef<Path>, filename: impl AsRef<str>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        std::fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;

        let filename = filename.as_ref();
        let path = base_dir.join(filename);

        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)
            .map_err(RepositoryError::Io)?;

        let file_size = file.metadata().map_err(RepositoryError::Io)?.len();
        let current_offset = complete_prefix_len(&file, file_size)?;
        if current_offset < file_size {
            tracing::warn!(
                "Torn tail in '{}': dropping {} bytes after offset {}",
                filename,
                file_size - current_offset,
                current_offset
            );
            file.set_len(current_offset).map_err(RepositoryError::Io)?;
        }

        tracing::debug!(
            "Opened record log: {} at offset {}",
            path.display(),
            current_offset
        );

        Ok(Self {
            name: filename.to_string(),
            path,
            file,
            current_offset,
            _phantom: PhantomData,
        })
    }

    /// Append an item. Returns the byte offset it was written at.
    ///
    /// A failed write is cut back off the file. Call [`RecordLog::sync`] to
    /// make a successful one durable.
    pub fn append(&mut self, item: &T) -> Result<u64> {
        let offset = self.current_offset;

        let bytes =
            bincode::serialize(item).map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let len = u32::try_from(bytes.len()).map_err(|_| {
            RepositoryError::Serialization(format!("entry of {} bytes is too large", bytes.len()))
        })?;

        let mut frame = Vec::with_capacity(4 + bytes.len());
        frame.extend_from_slice(&len.to_le_bytes());
        frame.extend_from_slice(&bytes);

        if let Err(e) = self.file.write_all(&frame) {
            if let Err(cleanup) = self.file.set_len(offset) {
                tracing::error!(
                    "Failed to cut partial entry from '{}' at offset {}: {}",
                    self.name,
                    offset,
                    cleanup
                );
            }
            return Err(RepositoryError::Io(e));
        }

        self.current_offset += frame.len() as u64;

        Ok(offset)
    }

    /// Read the item at `byte_offset`.
    ///
    /// Returns `Some((item, next_offset))`, or `None` past the last complete
    /// entry.
    pub fn read_at_offset(&self, byte_offset: u64) -> Result<Option<(T, u64)>> {
        let file = File::open(&self.path).map_err(RepositoryError::Io)?;
        let file_size = file.metadata().map_err(RepositoryError::Io)?.len();

        if byte_offset >= file_size {
            return Ok(None);
        }

        let mut reader = BufReader::new(file);
        reader
            .seek(SeekFrom::Start(byte_offset))
            .map_err(RepositoryError::Io)?;

        let mut len_bytes = [0u8; 4];
        match reader.read_exact(&mut len_bytes) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(RepositoryError::Io(e)),
        }
        let len = u32::from_le_bytes(len_bytes) as usize;

        let mut data = vec![0u8; len];
        match reader.read_exact(&mut data) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                tracing::warn!(
                    "Truncated entry in '{}' at offset {}; ignoring tail",
                    self.name,
                    byte_offset
                );
                return Ok(None);
            }
            Err(e) => return Err(RepositoryError::Io(e)),
        }

        let item = bincode::deserialize(&data).map_err(|e| {
            RepositoryError::CorruptedData(format!(
                "{} at offset {}: {}",
                self.name, byte_offset, e
            ))
        })?;

        Ok(Some((item, byte_offset + 4 + len as u64)))
    }

    /// Read every complete entry in append order.
    pub fn read_all(&self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut offset = 0;
        while let Some((item, next)) = self.read_at_offset(offset)? {
            items.push(item);
            offset = next;
        }
        Ok(items)
    }

    /// Force appended entries to disk.
    pub fn sync(&self) -> Result<()> {
        self.file.sync_data().map_err(RepositoryError::Io)
    }

    /// Drop every entry at or after `offset`.
    ///
    /// `offset` must be an entry boundary returned by [`RecordLog::append`]
    /// or [`RecordLog::size`].
    pub fn truncate(&mut self, offset: u64) -> Result<()> {
        if offset > self.current_offset {
            return Err(RepositoryError::CorruptedData(format!(
                "{}: cannot truncate to {} past end {}",
                self.name, offset, self.current_offset
            )));
        }
        self.file.set_len(offset).map_err(RepositoryError::Io)?;
        self.current_offset = offset;
        Ok(())
    }

    /// Current size of the log in bytes.
    pub fn size(&self) -> u64 {
        self.current_offset
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Length of the longest run of complete entries from the start of `file`.
fn complete_prefix_len(file: &File, file_size: u64) -> Result<u64> {
    let mut reader = BufReader::new(file);
    let mut offset = 0u64;

    while offset + 4 <= file_size {
        reader
            .seek(SeekFrom::Start(offset))
            .map_err(RepositoryError::Io)?;
        let mut len_bytes = [0u8; 4];
        reader
            .read_exact(&mut len_bytes)
            .map_err(RepositoryError::Io)?;

        let next = offset + 4 + u64::from(u32::from_le_bytes(len_bytes));
        if next > file_size {
            break;
        }
        offset = next;
    }

    Ok(offset)
}
