//! `tickpack` - Word-aligned integer packing and adaptive timestamp
//! compression
//!
//! Two layered codecs for time-series storage engines:
//!
//! - **Simple8b** packs a variable number of small unsigned integers
//!   into fixed 64-bit words (Anh & Moffat, 2010). A 4-bit selector in
//!   every word names one of sixteen packing shapes, from 240 one-bit
//!   ones down to a single 60-bit value.
//! - **Timestamp codec** reduces a monotonic or semi-monotonic stream of
//!   nanosecond timestamps via delta encoding, a frame-of-reference
//!   transform and a shared power-of-ten divisor, then picks the best of
//!   three frame layouts: Simple8b bit-packed, run-length encoded, or
//!   raw 8 bytes per value.
//!
//! # Example
//! ```
//! use tickpack::timestamp;
//!
//! let mut enc = timestamp::Encoder::new();
//! let t0 = 1_695_000_000_000_000_000_i64;
//! for i in 0..100 {
//!     enc.write(t0 + i * 1_000_000_000); // one second apart
//! }
//! let bytes = enc.bytes().unwrap();
//! assert!(bytes.len() < 16); // run-length encoded
//!
//! let mut dec = timestamp::Decoder::new(&bytes).unwrap();
//! let mut i = 0;
//! while dec.next() {
//!     assert_eq!(dec.read(), t0 + i * 1_000_000_000);
//!     i += 1;
//! }
//! assert_eq!(i, 100);
//! ```
//!
//! The Simple8b layer is usable on its own for any stream of unsigned
//! integers below `1 << 60`:
//!
//! ```
//! use tickpack::simple8b;
//!
//! let mut enc = simple8b::Encoder::new();
//! for v in 0..30u64 {
//!     enc.write(v).unwrap();
//! }
//! let bytes = enc.bytes().unwrap().to_vec();
//! assert_eq!(simple8b::count_bytes(&bytes).unwrap(), 30);
//!
//! let mut dec = simple8b::Decoder::new(&bytes);
//! let mut expected = 0u64;
//! while dec.next() {
//!     assert_eq!(dec.read(), expected);
//!     expected += 1;
//! }
//! ```
//!
//! Both codecs are single-owner and fully synchronous: one encoder or
//! decoder per task, no shared state, all errors surfaced as `Result`s.

pub mod bits;
pub mod delta;
pub mod error;
pub mod simple8b;
pub mod timestamp;

pub use error::{DecodeError, EncodeError};

#[cfg(test)]
mod tests;
