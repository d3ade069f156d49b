//! Adaptive compression for streams of nanosecond timestamps.
//!
//! The encoding is chosen from the structure of the values. Timestamps
//! are first delta-encoded: the first value is the absolute starting
//! point, subsequent values the difference from the prior one. Real
//! timestamp streams tend to fall on even boundaries of time (every
//! 10s, every minute), so the deltas are scaled down by the largest
//! power of ten that divides all of them.
//!
//! If the scaled deltas are all identical and the stream is long enough,
//! the whole range is stored run-length encoded. Otherwise, if every
//! delta fits under `1 << 60` (about 36.5 years at nanosecond
//! resolution), the deltas are bit-packed with Simple8b. Any larger
//! delta forces the raw fallback of 8 bytes per timestamp.
//!
//! Every frame starts with a one-byte header: the 4 high bits are the
//! encoding tag, the 4 low bits the base-10 exponent of the divisor.
//!
//! ```text
//! byte 0:        tag << 4 | log10(divisor)
//! -- Packed --   8 bytes min, 8 bytes first value, Simple8b words
//! -- RLE --      8 bytes first value, varint delta / divisor, varint count
//! -- Raw --      8 bytes per timestamp, big-endian
//! ```

use bytes::BufMut;
use integer_encoding::VarInt;
use serde::{Deserialize, Serialize};

use crate::delta;
use crate::error::{DecodeError, EncodeError};
use crate::simple8b;

/// Bit-packed frame: deltas compressed with Simple8b
pub const ENCODING_PACKED: u8 = 0;
/// Run-length frame: one shared delta and a repeat count
pub const ENCODING_RLE: u8 = 1;
/// Raw frame: 8 bytes per timestamp
pub const ENCODING_RAW: u8 = 2;

/// Run-length encoding only pays off past this many values; shorter
/// streams always take the Packed or Raw path.
const RLE_MIN_LEN: usize = 60;

/// Largest count a single RLE frame may carry. The count varint is
/// otherwise unbounded by the wire format, so the decoder must not
/// trust it: a crafted 18-byte frame could claim close to `u64::MAX`
/// values and drive a multi-exabyte allocation. Streams longer than
/// this take the Packed path instead.
const MAX_RLE_COUNT: u64 = 1 << 24;

/// Byte length of the Packed frame header: tag byte, min, first value.
const PACKED_HEADER_LEN: usize = 17;

/// Byte length of the RLE frame prefix: tag byte and first value.
const RLE_HEADER_LEN: usize = 9;

/// Adaptive encoder buffering nanosecond timestamps.
///
/// Timestamps are collected by [`write`](Encoder::write);
/// [`bytes`](Encoder::bytes) picks the best of the three frame layouts
/// for the buffered values. The buffered state is plain data and can be
/// serialized and resumed between writes.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Encoder {
    /// Buffered nanosecond timestamps awaiting encoding
    ts: Vec<i64>,
}

impl Encoder {
    #[must_use]
    pub fn new() -> Self {
        Self { ts: Vec::new() }
    }

    /// Buffer a nanosecond timestamp.
    pub fn write(&mut self, t: i64) {
        self.ts.push(t);
    }

    /// Number of buffered timestamps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ts.is_empty()
    }

    /// Clear the buffered timestamps, keeping the allocation for reuse.
    pub fn reset(&mut self) {
        self.ts.clear();
    }

    /// Encode the buffered timestamps into a framed byte vector.
    ///
    /// Empty input yields an empty vector.
    ///
    /// # Errors
    /// Returns [`EncodeError::OutOfRange`] when a frame-of-reference
    /// residual exceeds the Simple8b ceiling on the Packed path.
    pub fn bytes(&self) -> Result<Vec<u8>, EncodeError> {
        if self.ts.is_empty() {
            return Ok(Vec::new());
        }

        let (min, max, divisor, rle, deltas) = delta::for_delta10(&self.ts);

        // The deltas are all the same, so the whole range can be
        // run-length encoded.
        if rle && self.ts.len() > RLE_MIN_LEN && self.ts.len() as u64 <= MAX_RLE_COUNT {
            let shared = self.ts[1].wrapping_sub(self.ts[0]);
            return Ok(self.encode_rle(self.ts[0], shared, divisor));
        }

        // The time range cannot be bit-packed, a delta exceeds 1 << 60.
        if max > simple8b::MAX_VALUE as i64 {
            return Ok(self.encode_raw());
        }

        encode_packed(min, divisor, &deltas)
    }

    fn encode_rle(&self, first: i64, shared: i64, divisor: i64) -> Vec<u8> {
        // Large varints can take up to 10 bytes each.
        let mut b = Vec::with_capacity(1 + 8 + 10 + 10);

        b.put_u8(ENCODING_RLE << 4 | log10(divisor));
        b.put_u64(first as u64);

        let mut tmp = [0u8; 10];
        let n = ((shared / divisor) as u64).encode_var(&mut tmp);
        b.extend_from_slice(&tmp[..n]);
        let n = (self.ts.len() as u64).encode_var(&mut tmp);
        b.extend_from_slice(&tmp[..n]);
        b
    }

    fn encode_raw(&self) -> Vec<u8> {
        let mut b = Vec::with_capacity(1 + self.ts.len() * 8);
        b.put_u8(ENCODING_RAW << 4);
        for &v in &self.ts {
            b.put_u64(v as u64);
        }
        b
    }
}

fn encode_packed(min: i64, divisor: i64, deltas: &[i64]) -> Result<Vec<u8>, EncodeError> {
    let mut enc = simple8b::Encoder::new();
    for &v in &deltas[1..] {
        enc.write(v as u64)?;
    }
    let packed = enc.bytes()?;

    let mut b = Vec::with_capacity(PACKED_HEADER_LEN + packed.len());
    b.put_u8(ENCODING_PACKED << 4 | log10(divisor));
    b.put_u64(min as u64);
    // The absolute first value, stored uncompressed.
    b.put_u64(deltas[0] as u64);
    b.extend_from_slice(packed);
    Ok(b)
}

/// Decoder over a single framed byte sequence.
///
/// The frame is decoded eagerly at construction; [`next`](Decoder::next)
/// and [`read`](Decoder::read) then iterate the timestamps in order.
/// Once exhausted, `next` returns false permanently.
pub struct Decoder {
    ts: Vec<i64>,
    i: usize,
    v: i64,
}

impl Decoder {
    /// Decode a frame produced by [`Encoder::bytes`]. An empty slice
    /// yields a decoder over zero timestamps.
    ///
    /// # Errors
    /// Returns [`DecodeError::UnknownEncoding`] for a header tag outside
    /// the three known encodings, [`DecodeError::InvalidFraming`] for a
    /// frame shorter than its fixed header or with a corrupt body, and
    /// [`DecodeError::CountOverflow`] for an RLE frame claiming more
    /// values than a frame may carry.
    pub fn new(b: &[u8]) -> Result<Self, DecodeError> {
        Ok(Self {
            ts: decode(b)?,
            i: 0,
            v: 0,
        })
    }

    /// Advance to the next timestamp, returning true while one is
    /// available.
    pub fn next(&mut self) -> bool {
        if self.i >= self.ts.len() {
            return false;
        }
        self.v = self.ts[self.i];
        self.i += 1;
        true
    }

    /// Returns the current nanosecond timestamp. Successive calls
    /// without an intervening [`next`](Decoder::next) return the same
    /// value.
    #[must_use]
    pub fn read(&self) -> i64 {
        self.v
    }
}

/// Returns the number of timestamps in a frame without decoding them.
///
/// # Errors
/// Returns [`DecodeError::UnknownEncoding`],
/// [`DecodeError::InvalidFraming`] or [`DecodeError::CountOverflow`]
/// under the same conditions as [`Decoder::new`].
pub fn count(b: &[u8]) -> Result<usize, DecodeError> {
    if b.is_empty() {
        return Ok(0);
    }

    let tag = b[0] >> 4;
    match tag {
        ENCODING_PACKED => {
            if b.len() < PACKED_HEADER_LEN {
                return Err(DecodeError::InvalidFraming { remaining: b.len() });
            }
            // One uncompressed first value plus the packed deltas.
            Ok(1 + simple8b::count_bytes(&b[PACKED_HEADER_LEN..])?)
        }
        ENCODING_RLE => {
            let (_, total) = read_rle_trailer(b)?;
            Ok(total as usize)
        }
        ENCODING_RAW => {
            if (b.len() - 1) % 8 != 0 {
                return Err(DecodeError::InvalidFraming {
                    remaining: (b.len() - 1) % 8,
                });
            }
            Ok((b.len() - 1) / 8)
        }
        _ => Err(DecodeError::UnknownEncoding { tag }),
    }
}

fn decode(b: &[u8]) -> Result<Vec<i64>, DecodeError> {
    if b.is_empty() {
        return Ok(Vec::new());
    }

    // Encoding tag is stored in the 4 high bits of the first byte.
    let tag = b[0] >> 4;
    match tag {
        ENCODING_PACKED => decode_packed(b),
        ENCODING_RLE => decode_rle(b),
        ENCODING_RAW => decode_raw(&b[1..]),
        _ => Err(DecodeError::UnknownEncoding { tag }),
    }
}

fn decode_packed(b: &[u8]) -> Result<Vec<i64>, DecodeError> {
    if b.len() < PACKED_HEADER_LEN {
        return Err(DecodeError::InvalidFraming { remaining: b.len() });
    }

    // Low 4 bits hold the base-10 exponent used to scale the deltas
    // back up.
    let divisor = pow10(b[0] & 0xF);
    let min = u64::from_be_bytes(b[1..9].try_into().unwrap()) as i64;
    let first = u64::from_be_bytes(b[9..17].try_into().unwrap()) as i64;

    let body = &b[PACKED_HEADER_LEN..];
    let n = simple8b::count_bytes(body)?;

    let mut ts = Vec::with_capacity(n + 1);
    ts.push(first);
    let mut dec = simple8b::Decoder::new(body);
    while dec.next() {
        ts.push(dec.read() as i64);
    }

    // Scale the deltas back up and take the prefix sum.
    for i in 1..ts.len() {
        ts[i] = ts[i].wrapping_mul(divisor).wrapping_add(min);
        ts[i] = ts[i - 1].wrapping_add(ts[i]);
    }
    Ok(ts)
}

fn decode_rle(b: &[u8]) -> Result<Vec<i64>, DecodeError> {
    let ((value, divisor, first), total) = read_rle_trailer(b)?;

    // Scale the shared delta back up.
    let shared = (value.wrapping_mul(divisor as u64)) as i64;

    // The first slot is overwritten by the starting timestamp, then the
    // prefix sum rebuilds the original values.
    let mut ts = vec![shared; total as usize];
    if let Some(slot) = ts.first_mut() {
        *slot = first;
    }
    for i in 1..ts.len() {
        ts[i] = ts[i - 1].wrapping_add(ts[i]);
    }
    Ok(ts)
}

/// Parse the fixed RLE prefix and both varints, returning
/// `((scaled delta, divisor, first), count)`.
///
/// The count is validated against [`MAX_RLE_COUNT`] here, so callers
/// can allocate or report it without re-checking.
fn read_rle_trailer(b: &[u8]) -> Result<((u64, i64, i64), u64), DecodeError> {
    if b.len() < RLE_HEADER_LEN {
        return Err(DecodeError::InvalidFraming { remaining: b.len() });
    }

    let divisor = pow10(b[0] & 0xF);
    let first = u64::from_be_bytes(b[1..9].try_into().unwrap()) as i64;

    let rest = &b[RLE_HEADER_LEN..];
    let (value, n) = u64::decode_var(rest)
        .ok_or(DecodeError::InvalidFraming { remaining: rest.len() })?;
    let rest = &rest[n..];
    let (total, _) = u64::decode_var(rest)
        .ok_or(DecodeError::InvalidFraming { remaining: rest.len() })?;

    if total > MAX_RLE_COUNT {
        return Err(DecodeError::CountOverflow { count: total });
    }

    Ok(((value, divisor, first), total))
}

fn decode_raw(b: &[u8]) -> Result<Vec<i64>, DecodeError> {
    if b.len() % 8 != 0 {
        return Err(DecodeError::InvalidFraming {
            remaining: b.len() % 8,
        });
    }

    Ok(b.chunks_exact(8)
        .map(|c| u64::from_be_bytes(c.try_into().unwrap()) as i64)
        .collect())
}

/// Base-10 exponent of a power-of-ten divisor, for the header nibble.
fn log10(mut divisor: i64) -> u8 {
    let mut e = 0;
    while divisor >= 10 {
        divisor /= 10;
        e += 1;
    }
    e
}

/// Divisor for a header nibble. The nibble caps the exponent at 15, so
/// the result always fits an i64.
fn pow10(e: u8) -> i64 {
    10_i64.pow(u32::from(e))
}
