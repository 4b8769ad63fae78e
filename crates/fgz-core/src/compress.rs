//! Gzip stage for finished archives.

use flate2::{Compression, GzBuilder};
use std::io::Write;

use crate::error::{PackError, PackResult};

/// Gzip compression level, 0 (store) through 9 (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionLevel(u32);

impl CompressionLevel {
    pub const MAX: u32 = 9;
    /// zlib's default level.
    pub const DEFAULT: u32 = 6;

    pub fn new(level: u32) -> PackResult<Self> {
        if level > Self::MAX {
            return Err(PackError::InvalidLevel { level });
        }
        Ok(Self(level))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<CompressionLevel> for Compression {
    fn from(level: CompressionLevel) -> Self {
        Compression::new(level.0)
    }
}

/// Gzip `data` into a standalone stream.
///
/// The header carries mtime 0 and OS "unknown", so identical input yields
/// identical output.
pub fn compress(data: &[u8], level: CompressionLevel) -> PackResult<Vec<u8>> {
    let mut encoder = GzBuilder::new()
        .mtime(0)
        .operating_system(255)
        .write(Vec::with_capacity(data.len() / 2 + 64), level.into());
    encoder.write_all(data).map_err(PackError::Compression)?;
    encoder.finish().map_err(PackError::Compression)
}

/// [`compress`] on the blocking pool. Owns its input so it can cross threads.
pub async fn compress_async(data: Vec<u8>, level: CompressionLevel) -> PackResult<Vec<u8>> {
    tokio::task::spawn_blocking(move || compress(&data, level)).await?
}
