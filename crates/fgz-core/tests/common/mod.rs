//! Independent inverse of the FGZ format, for tests only.

#![allow(dead_code)]

use flate2::read::GzDecoder;
use std::io::Read;

pub fn gunzip(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    GzDecoder::new(data)
        .read_to_end(&mut out)
        .expect("valid gzip stream");
    out
}

fn take_u32(buf: &[u8], pos: &mut usize) -> usize {
    let bytes: [u8; 4] = buf[*pos..*pos + 4].try_into().expect("4 bytes");
    *pos += 4;
    u32::from_be_bytes(bytes) as usize
}

fn take_bytes(buf: &[u8], pos: &mut usize, len: usize) -> Vec<u8> {
    let out = buf[*pos..*pos + len].to_vec();
    *pos += len;
    out
}

/// Split a decompressed record stream back into (name, payload) pairs.
pub fn decode_records(buf: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
    let mut pos = 0;
    let mut out = Vec::new();
    while pos < buf.len() {
        let name_len = take_u32(buf, &mut pos);
        let name = take_bytes(buf, &mut pos, name_len);
        let data_len = take_u32(buf, &mut pos);
        let data = take_bytes(buf, &mut pos, data_len);
        out.push((name, data));
    }
    out
}

pub fn decode_archive(gz: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
    decode_records(&gunzip(gz))
}
