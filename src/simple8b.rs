//! Simple8b 64-bit word packing.
//!
//! Implements the integer encoding published by Anh and Moffat in
//! "Index compression using 64-bit words" (Softw. Pract. Exper. 2010).
//! Multiple integers with values between 0 and `(1 << 60) - 1` are packed
//! into a single 64-bit word: a 4-bit selector in the most significant
//! bits names a row of the packing table, and the remaining 60 bits hold
//! the payload.
//!
//! ```text
//! selector:    0    1   2   3   4   5   6   7   8   9  10  11  12  13  14  15
//! bits:        0    0   1   2   3   4   5   6   7   8  10  12  15  20  30  60
//! n:         240  120  60  30  20  15  12  10   8   7   6   5   4   3   2   1
//! wasted:     60   60   0   0   0   0  12   0   4   4   0   0   0   0   0   0
//! ```
//!
//! Selectors 0 and 1 are special: they encode runs of 240 or 120 copies
//! of the literal value 1 using no payload bits at all. For example, when
//! every value fits in 4 bits, selector 5 packs 15 values at 4 bits each
//! into the low 60 bits of the word.

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, EncodeError};

/// Maximum value that can be packed into a Simple8b word.
pub const MAX_VALUE: u64 = (1 << 60) - 1;

/// Capacity of the pending-value buffers: the largest number of inputs a
/// single word can consume (selector 0).
const BUF_LEN: usize = 240;

/// Streaming encoder converting unsigned 64-bit integers to a compressed
/// byte slice of big-endian packed words.
///
/// Values above [`MAX_VALUE`] are accepted by [`write`](Encoder::write)
/// and rejected when a flush tries to pack them, so the error for a bad
/// value surfaces either at a later `write` or at the terminal
/// [`bytes`](Encoder::bytes) call.
///
/// The encoder state is plain data and can be serialized and resumed
/// between writes.
#[derive(Clone, Serialize, Deserialize)]
pub struct Encoder {
    /// Most recently written integers that have not been flushed
    buf: Vec<u64>,
    /// Index in buf of the head of pending values
    h: usize,
    /// Index in buf of the tail of pending values
    t: usize,
    /// Packed words flushed so far, 8 bytes each, big-endian
    bytes: Vec<u8>,
}

impl Encoder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0; BUF_LEN],
            h: 0,
            t: 0,
            bytes: Vec::with_capacity(128),
        }
    }

    /// Restore the encoder to its initial state, keeping the allocated
    /// buffers for reuse.
    pub fn reset(&mut self) {
        self.h = 0;
        self.t = 0;
        self.bytes.clear();
    }

    /// Append `v` to the pending buffer, flushing a packed word first if
    /// the buffer is full.
    ///
    /// # Errors
    /// Returns [`EncodeError::OutOfRange`] when a flush triggered by this
    /// write hits a previously buffered value above [`MAX_VALUE`].
    pub fn write(&mut self, v: u64) -> Result<(), EncodeError> {
        if self.t >= self.buf.len() {
            self.flush()?;
        }

        // The buf is full but there is space at the front, just shift
        // the values down.
        if self.t >= self.buf.len() {
            self.buf.copy_within(self.h.., 0);
            self.t -= self.h;
            self.h = 0;
        }
        self.buf[self.t] = v;
        self.t += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), EncodeError> {
        if self.t == 0 {
            return Ok(());
        }

        // Pack as many pending values into one word as we can.
        let (encoded, n) = encode(&self.buf[self.h..self.t])?;
        self.bytes.extend_from_slice(&encoded.to_be_bytes());

        // Move the head forward since we encoded those values.
        self.h += n;

        // If we encoded them all, reset the head and tail to the start.
        if self.h == self.t {
            self.h = 0;
            self.t = 0;
        }
        Ok(())
    }

    /// Drain the pending buffer and return all bytes written so far.
    ///
    /// # Errors
    /// Returns the first packing error encountered while draining.
    pub fn bytes(&mut self) -> Result<&[u8], EncodeError> {
        while self.t > 0 {
            self.flush()?;
        }
        Ok(&self.bytes)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Streaming decoder converting a compressed byte slice back to a stream
/// of unsigned 64-bit integers.
///
/// The decoder is single-pass: [`next`](Decoder::next) advances the
/// cursor, [`read`](Decoder::read) returns the current value without
/// advancing. `read` must only be called after `next` returned true.
pub struct Decoder<'a> {
    bytes: &'a [u8],
    buf: [u64; BUF_LEN],
    i: usize,
    n: usize,
}

impl<'a> Decoder<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            buf: [0; BUF_LEN],
            i: 0,
            n: 0,
        }
    }

    /// Rewind the decoder onto a new byte slice.
    pub fn reset(&mut self, bytes: &'a [u8]) {
        // buf does not need re-initialising, it is only read through i.
        self.bytes = bytes;
        self.i = 0;
        self.n = 0;
    }

    /// Advance the cursor by one value, consuming the next source word
    /// when the current one is exhausted. Returns true while a value is
    /// available.
    pub fn next(&mut self) -> bool {
        self.i += 1;

        if self.i >= self.n {
            self.read_word();
        }

        self.bytes.len() >= 8 || self.i < self.n
    }

    /// Returns the current value. Successive calls without an
    /// intervening [`next`](Decoder::next) return the same value.
    #[must_use]
    pub fn read(&self) -> u64 {
        self.buf[self.i]
    }

    fn read_word(&mut self) {
        if self.bytes.len() < 8 {
            return;
        }

        let v = u64::from_be_bytes(self.bytes[..8].try_into().unwrap());
        self.bytes = &self.bytes[8..];
        // A word that fails to decode contributes zero values and the
        // cursor moves on to the next one.
        self.n = decode(&mut self.buf, v).unwrap_or(0);
        self.i = 0;
    }
}

/// One row of the packing table: how many values a word consumes and at
/// what per-value width, with the straight-line pack and unpack bodies
/// for that shape.
struct Packing {
    n: usize,
    bits: usize,
    pack: fn(&[u64]) -> u64,
    unpack: fn(u64, &mut [u64]),
}

#[rustfmt::skip]
static SELECTOR: [Packing; 16] = [
    Packing { n: 240, bits: 0,  pack: pack240, unpack: unpack240 },
    Packing { n: 120, bits: 0,  pack: pack120, unpack: unpack120 },
    Packing { n: 60,  bits: 1,  pack: pack60,  unpack: unpack60 },
    Packing { n: 30,  bits: 2,  pack: pack30,  unpack: unpack30 },
    Packing { n: 20,  bits: 3,  pack: pack20,  unpack: unpack20 },
    Packing { n: 15,  bits: 4,  pack: pack15,  unpack: unpack15 },
    Packing { n: 12,  bits: 5,  pack: pack12,  unpack: unpack12 },
    Packing { n: 10,  bits: 6,  pack: pack10,  unpack: unpack10 },
    Packing { n: 8,   bits: 7,  pack: pack8,   unpack: unpack8 },
    Packing { n: 7,   bits: 8,  pack: pack7,   unpack: unpack7 },
    Packing { n: 6,   bits: 10, pack: pack6,   unpack: unpack6 },
    Packing { n: 5,   bits: 12, pack: pack5,   unpack: unpack5 },
    Packing { n: 4,   bits: 15, pack: pack4,   unpack: unpack4 },
    Packing { n: 3,   bits: 20, pack: pack3,   unpack: unpack3 },
    Packing { n: 2,   bits: 30, pack: pack2,   unpack: unpack2 },
    Packing { n: 1,   bits: 60, pack: pack1,   unpack: unpack1 },
];

/// Pack a prefix of `src` into a single word, returning the word and how
/// many values it consumed.
///
/// Selectors are tried in order of decreasing capacity and the first one
/// that accepts wins. Empty input returns `(0, 0)`.
///
/// # Errors
/// Returns [`EncodeError::OutOfRange`] when the next value exceeds
/// [`MAX_VALUE`], so no selector can hold it.
pub fn encode(src: &[u64]) -> Result<(u64, usize), EncodeError> {
    for p in &SELECTOR {
        if can_pack(src, p.n, p.bits) {
            return Ok(((p.pack)(&src[..p.n]), p.n));
        }
    }
    match src.first() {
        Some(&value) => Err(EncodeError::OutOfRange { value }),
        None => Ok((0, 0)),
    }
}

/// Bulk-pack `src` in place, returning the number of packed words
/// written to the front of the slice.
///
/// Each step consumes at least one value and produces exactly one word,
/// so the write cursor never overtakes the read cursor and no extra
/// allocation is needed. Callers that need the original values must pack
/// a copy.
///
/// # Errors
/// Stops at the first value above [`MAX_VALUE`].
pub fn encode_all(src: &mut [u64]) -> Result<usize, EncodeError> {
    let mut i = 0;
    let mut j = 0;

    while i < src.len() {
        let (encoded, n) = encode(&src[i..])?;
        src[j] = encoded;
        i += n;
        j += 1;
    }
    Ok(j)
}

/// Unpack a single word into `dst`, returning the number of decoded
/// values.
///
/// # Errors
/// Returns [`DecodeError::InvalidSelector`] when the top four bits fall
/// outside the packing table. This cannot happen for a well-formed
/// 64-bit word; the check guards against callers passing already-shifted
/// values.
pub fn decode(dst: &mut [u64; 240], v: u64) -> Result<usize, DecodeError> {
    let sel = (v >> 60) as usize;
    if sel >= SELECTOR.len() {
        return Err(DecodeError::InvalidSelector {
            selector: sel as u64,
        });
    }
    (SELECTOR[sel].unpack)(v, dst);
    Ok(SELECTOR[sel].n)
}

/// Unpack every word of `src` into `dst`, returning the total number of
/// decoded values.
///
/// `dst` must be large enough to receive every value; [`count_bytes`]
/// (or summing [`count`] over the words) gives the exact total.
///
/// # Errors
/// Returns [`DecodeError::InvalidSelector`] for a word whose top four
/// bits fall outside the packing table.
pub fn decode_all(dst: &mut [u64], src: &[u64]) -> Result<usize, DecodeError> {
    let mut j = 0;
    for &v in src {
        let sel = (v >> 60) as usize;
        if sel >= SELECTOR.len() {
            return Err(DecodeError::InvalidSelector {
                selector: sel as u64,
            });
        }
        (SELECTOR[sel].unpack)(v, &mut dst[j..]);
        j += SELECTOR[sel].n;
    }
    Ok(j)
}

/// Returns the number of integers encoded within a single word.
pub fn count(v: u64) -> Result<usize, DecodeError> {
    let sel = (v >> 60) as usize;
    if sel >= SELECTOR.len() {
        return Err(DecodeError::InvalidSelector {
            selector: sel as u64,
        });
    }
    Ok(SELECTOR[sel].n)
}

/// Returns the number of integers encoded in a byte slice of big-endian
/// packed words.
///
/// # Errors
/// Returns [`DecodeError::InvalidFraming`] when the slice length is not
/// a multiple of 8.
pub fn count_bytes(mut b: &[u8]) -> Result<usize, DecodeError> {
    let mut total = 0;
    while b.len() >= 8 {
        let v = u64::from_be_bytes(b[..8].try_into().unwrap());
        b = &b[8..];
        total += count(v)?;
    }

    if !b.is_empty() {
        return Err(DecodeError::InvalidFraming { remaining: b.len() });
    }
    Ok(total)
}

/// Returns true if `n` values from `src` can be stored using `bits` per
/// value.
///
/// Selectors 0 and 1 use zero bits to encode runs of 1s; their check
/// covers the entire remaining input, not just the first `n` values.
fn can_pack(src: &[u64], n: usize, bits: usize) -> bool {
    if src.len() < n {
        return false;
    }

    if bits == 0 {
        return src.iter().all(|&v| v == 1);
    }

    let max = (1u64 << bits) - 1;
    src[..n].iter().all(|&v| v <= max)
}

// pack240 packs 240 ones using no payload bits
fn pack240(_src: &[u64]) -> u64 {
    0
}

// pack120 packs 120 ones using no payload bits
fn pack120(_src: &[u64]) -> u64 {
    1 << 60
}

// pack60 packs 60 values using 1 bit each
fn pack60(src: &[u64]) -> u64 {
    2 << 60
        | src[0]
        | src[1] << 1
        | src[2] << 2
        | src[3] << 3
        | src[4] << 4
        | src[5] << 5
        | src[6] << 6
        | src[7] << 7
        | src[8] << 8
        | src[9] << 9
        | src[10] << 10
        | src[11] << 11
        | src[12] << 12
        | src[13] << 13
        | src[14] << 14
        | src[15] << 15
        | src[16] << 16
        | src[17] << 17
        | src[18] << 18
        | src[19] << 19
        | src[20] << 20
        | src[21] << 21
        | src[22] << 22
        | src[23] << 23
        | src[24] << 24
        | src[25] << 25
        | src[26] << 26
        | src[27] << 27
        | src[28] << 28
        | src[29] << 29
        | src[30] << 30
        | src[31] << 31
        | src[32] << 32
        | src[33] << 33
        | src[34] << 34
        | src[35] << 35
        | src[36] << 36
        | src[37] << 37
        | src[38] << 38
        | src[39] << 39
        | src[40] << 40
        | src[41] << 41
        | src[42] << 42
        | src[43] << 43
        | src[44] << 44
        | src[45] << 45
        | src[46] << 46
        | src[47] << 47
        | src[48] << 48
        | src[49] << 49
        | src[50] << 50
        | src[51] << 51
        | src[52] << 52
        | src[53] << 53
        | src[54] << 54
        | src[55] << 55
        | src[56] << 56
        | src[57] << 57
        | src[58] << 58
        | src[59] << 59
}

// pack30 packs 30 values using 2 bits each
fn pack30(src: &[u64]) -> u64 {
    3 << 60
        | src[0]
        | src[1] << 2
        | src[2] << 4
        | src[3] << 6
        | src[4] << 8
        | src[5] << 10
        | src[6] << 12
        | src[7] << 14
        | src[8] << 16
        | src[9] << 18
        | src[10] << 20
        | src[11] << 22
        | src[12] << 24
        | src[13] << 26
        | src[14] << 28
        | src[15] << 30
        | src[16] << 32
        | src[17] << 34
        | src[18] << 36
        | src[19] << 38
        | src[20] << 40
        | src[21] << 42
        | src[22] << 44
        | src[23] << 46
        | src[24] << 48
        | src[25] << 50
        | src[26] << 52
        | src[27] << 54
        | src[28] << 56
        | src[29] << 58
}

// pack20 packs 20 values using 3 bits each
fn pack20(src: &[u64]) -> u64 {
    4 << 60
        | src[0]
        | src[1] << 3
        | src[2] << 6
        | src[3] << 9
        | src[4] << 12
        | src[5] << 15
        | src[6] << 18
        | src[7] << 21
        | src[8] << 24
        | src[9] << 27
        | src[10] << 30
        | src[11] << 33
        | src[12] << 36
        | src[13] << 39
        | src[14] << 42
        | src[15] << 45
        | src[16] << 48
        | src[17] << 51
        | src[18] << 54
        | src[19] << 57
}

// pack15 packs 15 values using 4 bits each
fn pack15(src: &[u64]) -> u64 {
    5 << 60
        | src[0]
        | src[1] << 4
        | src[2] << 8
        | src[3] << 12
        | src[4] << 16
        | src[5] << 20
        | src[6] << 24
        | src[7] << 28
        | src[8] << 32
        | src[9] << 36
        | src[10] << 40
        | src[11] << 44
        | src[12] << 48
        | src[13] << 52
        | src[14] << 56
}

// pack12 packs 12 values using 5 bits each
fn pack12(src: &[u64]) -> u64 {
    6 << 60
        | src[0]
        | src[1] << 5
        | src[2] << 10
        | src[3] << 15
        | src[4] << 20
        | src[5] << 25
        | src[6] << 30
        | src[7] << 35
        | src[8] << 40
        | src[9] << 45
        | src[10] << 50
        | src[11] << 55
}

// pack10 packs 10 values using 6 bits each
fn pack10(src: &[u64]) -> u64 {
    7 << 60
        | src[0]
        | src[1] << 6
        | src[2] << 12
        | src[3] << 18
        | src[4] << 24
        | src[5] << 30
        | src[6] << 36
        | src[7] << 42
        | src[8] << 48
        | src[9] << 54
}

// pack8 packs 8 values using 7 bits each
fn pack8(src: &[u64]) -> u64 {
    8 << 60
        | src[0]
        | src[1] << 7
        | src[2] << 14
        | src[3] << 21
        | src[4] << 28
        | src[5] << 35
        | src[6] << 42
        | src[7] << 49
}

// pack7 packs 7 values using 8 bits each
fn pack7(src: &[u64]) -> u64 {
    9 << 60
        | src[0]
        | src[1] << 8
        | src[2] << 16
        | src[3] << 24
        | src[4] << 32
        | src[5] << 40
        | src[6] << 48
}

// pack6 packs 6 values using 10 bits each
fn pack6(src: &[u64]) -> u64 {
    10 << 60
        | src[0]
        | src[1] << 10
        | src[2] << 20
        | src[3] << 30
        | src[4] << 40
        | src[5] << 50
}

// pack5 packs 5 values using 12 bits each
fn pack5(src: &[u64]) -> u64 {
    11 << 60
        | src[0]
        | src[1] << 12
        | src[2] << 24
        | src[3] << 36
        | src[4] << 48
}

// pack4 packs 4 values using 15 bits each
fn pack4(src: &[u64]) -> u64 {
    12 << 60 | src[0] | src[1] << 15 | src[2] << 30 | src[3] << 45
}

// pack3 packs 3 values using 20 bits each
fn pack3(src: &[u64]) -> u64 {
    13 << 60 | src[0] | src[1] << 20 | src[2] << 40
}

// pack2 packs 2 values using 30 bits each
fn pack2(src: &[u64]) -> u64 {
    14 << 60 | src[0] | src[1] << 30
}

// pack1 packs 1 value using 60 bits
fn pack1(src: &[u64]) -> u64 {
    15 << 60 | src[0]
}

fn unpack240(_v: u64, dst: &mut [u64]) {
    dst[..240].fill(1);
}

fn unpack120(_v: u64, dst: &mut [u64]) {
    dst[..120].fill(1);
}

fn unpack60(v: u64, dst: &mut [u64]) {
    dst[0] = v & 1;
    dst[1] = (v >> 1) & 1;
    dst[2] = (v >> 2) & 1;
    dst[3] = (v >> 3) & 1;
    dst[4] = (v >> 4) & 1;
    dst[5] = (v >> 5) & 1;
    dst[6] = (v >> 6) & 1;
    dst[7] = (v >> 7) & 1;
    dst[8] = (v >> 8) & 1;
    dst[9] = (v >> 9) & 1;
    dst[10] = (v >> 10) & 1;
    dst[11] = (v >> 11) & 1;
    dst[12] = (v >> 12) & 1;
    dst[13] = (v >> 13) & 1;
    dst[14] = (v >> 14) & 1;
    dst[15] = (v >> 15) & 1;
    dst[16] = (v >> 16) & 1;
    dst[17] = (v >> 17) & 1;
    dst[18] = (v >> 18) & 1;
    dst[19] = (v >> 19) & 1;
    dst[20] = (v >> 20) & 1;
    dst[21] = (v >> 21) & 1;
    dst[22] = (v >> 22) & 1;
    dst[23] = (v >> 23) & 1;
    dst[24] = (v >> 24) & 1;
    dst[25] = (v >> 25) & 1;
    dst[26] = (v >> 26) & 1;
    dst[27] = (v >> 27) & 1;
    dst[28] = (v >> 28) & 1;
    dst[29] = (v >> 29) & 1;
    dst[30] = (v >> 30) & 1;
    dst[31] = (v >> 31) & 1;
    dst[32] = (v >> 32) & 1;
    dst[33] = (v >> 33) & 1;
    dst[34] = (v >> 34) & 1;
    dst[35] = (v >> 35) & 1;
    dst[36] = (v >> 36) & 1;
    dst[37] = (v >> 37) & 1;
    dst[38] = (v >> 38) & 1;
    dst[39] = (v >> 39) & 1;
    dst[40] = (v >> 40) & 1;
    dst[41] = (v >> 41) & 1;
    dst[42] = (v >> 42) & 1;
    dst[43] = (v >> 43) & 1;
    dst[44] = (v >> 44) & 1;
    dst[45] = (v >> 45) & 1;
    dst[46] = (v >> 46) & 1;
    dst[47] = (v >> 47) & 1;
    dst[48] = (v >> 48) & 1;
    dst[49] = (v >> 49) & 1;
    dst[50] = (v >> 50) & 1;
    dst[51] = (v >> 51) & 1;
    dst[52] = (v >> 52) & 1;
    dst[53] = (v >> 53) & 1;
    dst[54] = (v >> 54) & 1;
    dst[55] = (v >> 55) & 1;
    dst[56] = (v >> 56) & 1;
    dst[57] = (v >> 57) & 1;
    dst[58] = (v >> 58) & 1;
    dst[59] = (v >> 59) & 1;
}

fn unpack30(v: u64, dst: &mut [u64]) {
    dst[0] = v & 3;
    dst[1] = (v >> 2) & 3;
    dst[2] = (v >> 4) & 3;
    dst[3] = (v >> 6) & 3;
    dst[4] = (v >> 8) & 3;
    dst[5] = (v >> 10) & 3;
    dst[6] = (v >> 12) & 3;
    dst[7] = (v >> 14) & 3;
    dst[8] = (v >> 16) & 3;
    dst[9] = (v >> 18) & 3;
    dst[10] = (v >> 20) & 3;
    dst[11] = (v >> 22) & 3;
    dst[12] = (v >> 24) & 3;
    dst[13] = (v >> 26) & 3;
    dst[14] = (v >> 28) & 3;
    dst[15] = (v >> 30) & 3;
    dst[16] = (v >> 32) & 3;
    dst[17] = (v >> 34) & 3;
    dst[18] = (v >> 36) & 3;
    dst[19] = (v >> 38) & 3;
    dst[20] = (v >> 40) & 3;
    dst[21] = (v >> 42) & 3;
    dst[22] = (v >> 44) & 3;
    dst[23] = (v >> 46) & 3;
    dst[24] = (v >> 48) & 3;
    dst[25] = (v >> 50) & 3;
    dst[26] = (v >> 52) & 3;
    dst[27] = (v >> 54) & 3;
    dst[28] = (v >> 56) & 3;
    dst[29] = (v >> 58) & 3;
}

fn unpack20(v: u64, dst: &mut [u64]) {
    dst[0] = v & 7;
    dst[1] = (v >> 3) & 7;
    dst[2] = (v >> 6) & 7;
    dst[3] = (v >> 9) & 7;
    dst[4] = (v >> 12) & 7;
    dst[5] = (v >> 15) & 7;
    dst[6] = (v >> 18) & 7;
    dst[7] = (v >> 21) & 7;
    dst[8] = (v >> 24) & 7;
    dst[9] = (v >> 27) & 7;
    dst[10] = (v >> 30) & 7;
    dst[11] = (v >> 33) & 7;
    dst[12] = (v >> 36) & 7;
    dst[13] = (v >> 39) & 7;
    dst[14] = (v >> 42) & 7;
    dst[15] = (v >> 45) & 7;
    dst[16] = (v >> 48) & 7;
    dst[17] = (v >> 51) & 7;
    dst[18] = (v >> 54) & 7;
    dst[19] = (v >> 57) & 7;
}

fn unpack15(v: u64, dst: &mut [u64]) {
    dst[0] = v & 15;
    dst[1] = (v >> 4) & 15;
    dst[2] = (v >> 8) & 15;
    dst[3] = (v >> 12) & 15;
    dst[4] = (v >> 16) & 15;
    dst[5] = (v >> 20) & 15;
    dst[6] = (v >> 24) & 15;
    dst[7] = (v >> 28) & 15;
    dst[8] = (v >> 32) & 15;
    dst[9] = (v >> 36) & 15;
    dst[10] = (v >> 40) & 15;
    dst[11] = (v >> 44) & 15;
    dst[12] = (v >> 48) & 15;
    dst[13] = (v >> 52) & 15;
    dst[14] = (v >> 56) & 15;
}

fn unpack12(v: u64, dst: &mut [u64]) {
    dst[0] = v & 31;
    dst[1] = (v >> 5) & 31;
    dst[2] = (v >> 10) & 31;
    dst[3] = (v >> 15) & 31;
    dst[4] = (v >> 20) & 31;
    dst[5] = (v >> 25) & 31;
    dst[6] = (v >> 30) & 31;
    dst[7] = (v >> 35) & 31;
    dst[8] = (v >> 40) & 31;
    dst[9] = (v >> 45) & 31;
    dst[10] = (v >> 50) & 31;
    dst[11] = (v >> 55) & 31;
}

fn unpack10(v: u64, dst: &mut [u64]) {
    dst[0] = v & 63;
    dst[1] = (v >> 6) & 63;
    dst[2] = (v >> 12) & 63;
    dst[3] = (v >> 18) & 63;
    dst[4] = (v >> 24) & 63;
    dst[5] = (v >> 30) & 63;
    dst[6] = (v >> 36) & 63;
    dst[7] = (v >> 42) & 63;
    dst[8] = (v >> 48) & 63;
    dst[9] = (v >> 54) & 63;
}

fn unpack8(v: u64, dst: &mut [u64]) {
    dst[0] = v & 127;
    dst[1] = (v >> 7) & 127;
    dst[2] = (v >> 14) & 127;
    dst[3] = (v >> 21) & 127;
    dst[4] = (v >> 28) & 127;
    dst[5] = (v >> 35) & 127;
    dst[6] = (v >> 42) & 127;
    dst[7] = (v >> 49) & 127;
}

fn unpack7(v: u64, dst: &mut [u64]) {
    dst[0] = v & 255;
    dst[1] = (v >> 8) & 255;
    dst[2] = (v >> 16) & 255;
    dst[3] = (v >> 24) & 255;
    dst[4] = (v >> 32) & 255;
    dst[5] = (v >> 40) & 255;
    dst[6] = (v >> 48) & 255;
}

fn unpack6(v: u64, dst: &mut [u64]) {
    dst[0] = v & 1023;
    dst[1] = (v >> 10) & 1023;
    dst[2] = (v >> 20) & 1023;
    dst[3] = (v >> 30) & 1023;
    dst[4] = (v >> 40) & 1023;
    dst[5] = (v >> 50) & 1023;
}

fn unpack5(v: u64, dst: &mut [u64]) {
    dst[0] = v & 4095;
    dst[1] = (v >> 12) & 4095;
    dst[2] = (v >> 24) & 4095;
    dst[3] = (v >> 36) & 4095;
    dst[4] = (v >> 48) & 4095;
}

fn unpack4(v: u64, dst: &mut [u64]) {
    dst[0] = v & 32767;
    dst[1] = (v >> 15) & 32767;
    dst[2] = (v >> 30) & 32767;
    dst[3] = (v >> 45) & 32767;
}

fn unpack3(v: u64, dst: &mut [u64]) {
    dst[0] = v & 1048575;
    dst[1] = (v >> 20) & 1048575;
    dst[2] = (v >> 40) & 1048575;
}

fn unpack2(v: u64, dst: &mut [u64]) {
    dst[0] = v & 1073741823;
    dst[1] = (v >> 30) & 1073741823;
}

fn unpack1(v: u64, dst: &mut [u64]) {
    dst[0] = v & 1152921504606846975;
}
