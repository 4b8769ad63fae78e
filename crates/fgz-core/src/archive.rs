//! In-memory archive assembly.

use tracing::debug;

use crate::compress::{self, CompressionLevel};
use crate::error::{PackError, PackResult};
use crate::record;

/// Collects encoded records in append order and compresses them once.
///
/// The archive is fully materialized in memory. After [`finish`] (or
/// [`finish_async`]) the builder is spent: further `append` or `finish` calls
/// fail with [`PackError::InvalidState`].
///
/// [`finish`]: ArchiveBuilder::finish
/// [`finish_async`]: ArchiveBuilder::finish_async
///
/// # Example
///
/// ```
/// use fgz_core::ArchiveBuilder;
///
/// let mut builder = ArchiveBuilder::new();
/// builder.append(b"a.js", b"X").unwrap();
/// builder.append(b"b.css", b"Y").unwrap();
/// assert_eq!(builder.pending_bytes(), 8 + 5 + 8 + 6);
///
/// let gz = builder.finish().unwrap();
/// assert_eq!(&gz[..2], &[0x1f, 0x8b]);
/// ```
#[derive(Debug, Default)]
pub struct ArchiveBuilder {
    records: Vec<Vec<u8>>,
    pending_bytes: usize,
    level: CompressionLevel,
    finished: bool,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: CompressionLevel) -> Self {
        self.level = level;
        self
    }

    /// Encode and append one entry.
    pub fn append(&mut self, name: &[u8], payload: &[u8]) -> PackResult<()> {
        if self.finished {
            return Err(PackError::InvalidState("append after finish"));
        }
        let rec = record::encode(name, payload)?;
        self.pending_bytes += rec.len();
        debug!(
            name = %String::from_utf8_lossy(name),
            bytes = payload.len(),
            "appended entry"
        );
        self.records.push(rec);
        Ok(())
    }

    /// Number of appended entries.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Uncompressed size of the archive so far.
    pub fn pending_bytes(&self) -> usize {
        self.pending_bytes
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn take_archive(&mut self) -> PackResult<Vec<u8>> {
        if self.finished {
            return Err(PackError::InvalidState("finish called twice"));
        }
        self.finished = true;
        let records = std::mem::take(&mut self.records);
        let mut out = Vec::with_capacity(self.pending_bytes);
        for rec in records {
            out.extend_from_slice(&rec);
        }
        Ok(out)
    }

    /// Concatenate all records and gzip them.
    pub fn finish(&mut self) -> PackResult<Vec<u8>> {
        let archive = self.take_archive()?;
        compress::compress(&archive, self.level)
    }

    /// Like [`ArchiveBuilder::finish`], compressing on the blocking pool.
    pub async fn finish_async(&mut self) -> PackResult<Vec<u8>> {
        let archive = self.take_archive()?;
        compress::compress_async(archive, self.level).await
    }
}
