//! FGZ record encoding.
//!
//! One record per archived file, big-endian, no padding:
//!
//! ```text
//! [u32 name_len][name bytes][u32 data_len][data bytes]
//! ```
//!
//! Names are raw bytes. No text encoding is assumed or applied.

use crate::cursor::BoundedWriter;
use crate::error::{LengthField, PackError, PackResult};

/// Size of one length prefix.
pub(crate) const LEN_FIELD_SIZE: usize = 4;

/// Fixed bytes per record on top of name and payload.
pub const RECORD_OVERHEAD: usize = 2 * LEN_FIELD_SIZE;

/// One (name, payload) pair to be archived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: Vec<u8>,
    pub payload: Vec<u8>,
}

impl Entry {
    pub fn new(name: impl Into<Vec<u8>>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
        }
    }

    pub fn encode(&self) -> PackResult<Vec<u8>> {
        encode(&self.name, &self.payload)
    }
}

/// Serialized size of a record: `8 + name_len + payload_len`.
pub fn record_len(name_len: usize, payload_len: usize) -> usize {
    RECORD_OVERHEAD
        .saturating_add(name_len)
        .saturating_add(payload_len)
}

pub(crate) fn length_prefix(field: LengthField, len: usize) -> PackResult<u32> {
    u32::try_from(len).map_err(|_| PackError::LengthOverflow { field, len })
}

/// Encode one entry into a freshly allocated record.
///
/// Fails with [`PackError::LengthOverflow`] if either length does not fit in
/// a u32. Nothing is truncated.
pub fn encode(name: &[u8], payload: &[u8]) -> PackResult<Vec<u8>> {
    let name_len = length_prefix(LengthField::Name, name.len())?;
    let payload_len = length_prefix(LengthField::Payload, payload.len())?;

    let mut w = BoundedWriter::with_capacity(record_len(name.len(), payload.len()));
    w.put_u32_be(name_len)?;
    w.put_bytes(name)?;
    w.put_u32_be(payload_len)?;
    w.put_bytes(payload)?;
    w.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let rec = encode(b"a.js", b"X").unwrap();
        assert_eq!(
            rec,
            vec![0, 0, 0, 4, b'a', b'.', b'j', b's', 0, 0, 0, 1, b'X']
        );
        assert_eq!(rec.len(), record_len(4, 1));
    }

    #[test]
    fn test_lengths_are_big_endian() {
        let payload = vec![0xAB; 0x0102];
        let rec = encode(b"", &payload).unwrap();
        assert_eq!(&rec[..4], &[0, 0, 0, 0]);
        assert_eq!(&rec[4..8], &[0, 0, 0x01, 0x02]);
        assert_eq!(&rec[8..], payload.as_slice());
    }

    #[test]
    fn test_empty_name_and_payload() {
        let rec = encode(b"", b"").unwrap();
        assert_eq!(rec, vec![0u8; RECORD_OVERHEAD]);
    }

    #[test]
    fn test_non_text_bytes_preserved() {
        let name = [0xFF, 0x00, 0xC3, 0x28];
        let payload = [0x00, 0x80, 0xFE, 0x0A, 0x0D];
        let rec = Entry::new(name.to_vec(), payload.to_vec()).encode().unwrap();
        assert_eq!(&rec[4..8], &name);
        assert_eq!(&rec[12..], &payload);
    }

    #[test]
    fn test_entry_encode_matches_record_len() {
        let entry = Entry::new("index.html", "<html></html>");
        assert_eq!(
            entry.encode().unwrap().len(),
            record_len(entry.name.len(), entry.payload.len())
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_length_prefix_rejects_values_above_u32() {
        let too_big = u32::MAX as usize + 1;
        let err = length_prefix(LengthField::Payload, too_big).unwrap_err();
        assert!(matches!(
            err,
            PackError::LengthOverflow {
                field: LengthField::Payload,
                len
            } if len == too_big
        ));
        assert_eq!(
            length_prefix(LengthField::Name, u32::MAX as usize).unwrap(),
            u32::MAX
        );
    }
}
