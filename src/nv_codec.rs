//! Encode/decode the SPDY/3 compressed name/value header block.
//!
//! The uncompressed layout is `num_pairs:u32 be`, then for each pair
//! `name_len:u32, name_bytes, value_len:u32, value_bytes`. A value
//! containing embedded NUL bytes denotes multiple values joined by NUL.
//!
//! Compression runs through a `flate2::Compress`/`Decompress` pair seeded
//! with the fixed SPDY/3 dictionary (`dictionary::SPDY3_ZLIB_DICTIONARY`).
//! Those contexts are stateful across every block on a connection: this
//! module never constructs its own, it only drives ones handed to it by
//! the `Connection`.

use flate2::{Compress, Decompress, FlushCompress, FlushDecompress};
use log::trace;

use crate::error::{Result, SpdyError};
use crate::headers::Headers;

/// Serialises `headers` into the uncompressed NV layout, then runs it
/// through `compressor`, flushing with `Z_SYNC_FLUSH` so the peer can
/// decode this block without waiting for more input.
pub fn encode(compressor: &mut Compress, headers: &Headers) -> Result<Vec<u8>> {
    let mut plain = Vec::new();
    plain.extend_from_slice(&(headers.len() as u32).to_be_bytes());
    for (name, values) in headers.iter() {
        plain.extend_from_slice(&(name.len() as u32).to_be_bytes());
        plain.extend_from_slice(name);

        let joined = values.join(&0u8);
        plain.extend_from_slice(&(joined.len() as u32).to_be_bytes());
        plain.extend_from_slice(&joined);
    }

    let mut out = Vec::with_capacity(plain.len());
    compressor
        .compress_vec(&plain, &mut out, FlushCompress::Sync)
        .map_err(|e| SpdyError::BadHeaderBlock(format!("compression failed: {e}")))?;
    trace!("encoded NV block: {} plain bytes -> {} compressed bytes", plain.len(), out.len());
    Ok(out)
}

/// Decompresses `block` through `decompressor` and parses the resulting
/// uncompressed NV layout back into `Headers`.
pub fn decode(decompressor: &mut Decompress, block: &[u8]) -> Result<Headers> {
    if block.is_empty() {
        return Ok(Headers::new());
    }

    let plain = decompress_all(decompressor, block)?;
    parse_plain(&plain)
}

fn decompress_all(decompressor: &mut Decompress, block: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(block.len() * 4);
    decompressor
        .decompress_vec(block, &mut out, FlushDecompress::Sync)
        .map_err(|e| SpdyError::BadHeaderBlock(format!("decompression failed: {e}")))?;
    Ok(out)
}

fn parse_plain(data: &[u8]) -> Result<Headers> {
    let mut cursor = Cursor::new(data);
    let num_pairs = cursor.take_u32()?;

    let mut headers = Headers::new();
    for _ in 0..num_pairs {
        let name_len = cursor.take_u32()? as usize;
        let name = cursor.take_bytes(name_len)?;
        if name.is_empty() {
            return Err(SpdyError::BadHeaderBlock("empty header name".into()));
        }

        let value_len = cursor.take_u32()? as usize;
        let value = cursor.take_bytes(value_len)?;

        let values: Vec<Vec<u8>> = if value.contains(&0) {
            value.split(|b| *b == 0).map(|s| s.to_vec()).collect()
        } else {
            vec![value.to_vec()]
        };

        headers.set_multi(name.to_vec(), values);
    }

    Ok(headers)
}

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take_u32(&mut self) -> Result<u32> {
        let bytes = self.take_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn take_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.pos + len > self.data.len() {
            return Err(SpdyError::BadHeaderBlock(format!(
                "length field {} exceeds remaining input {}",
                len,
                self.data.len() - self.pos
            )));
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }
}
