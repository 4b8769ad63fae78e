//! Fixed-capacity writer used to lay out records.

use crate::error::{PackError, PackResult};

/// A byte writer with a capacity fixed at construction.
///
/// Every write checks the remaining capacity first and fails with
/// [`PackError::CapacityExceeded`] instead of growing or truncating.
#[derive(Debug)]
pub struct BoundedWriter {
    buf: Vec<u8>,
    capacity: usize,
}

impl BoundedWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn position(&self) -> usize {
        self.buf.len()
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.buf.len()
    }

    fn reserve(&self, requested: usize) -> PackResult<()> {
        let remaining = self.remaining();
        if requested > remaining {
            return Err(PackError::CapacityExceeded {
                requested,
                remaining,
            });
        }
        Ok(())
    }

    /// Write a big-endian u32.
    pub fn put_u32_be(&mut self, v: u32) -> PackResult<()> {
        self.reserve(4)?;
        self.buf.extend_from_slice(&v.to_be_bytes());
        Ok(())
    }

    pub fn put_bytes(&mut self, data: &[u8]) -> PackResult<()> {
        self.reserve(data.len())?;
        self.buf.extend_from_slice(data);
        Ok(())
    }

    /// Consume the writer. Fails unless every reserved byte was written.
    pub fn into_inner(self) -> PackResult<Vec<u8>> {
        if self.buf.len() != self.capacity {
            return Err(PackError::InvalidState("record buffer not completely filled"));
        }
        Ok(self.buf)
    }
}
