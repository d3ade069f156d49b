//! Delta and frame-of-reference transforms over `i64` sequences.
//!
//! The timestamp codec reduces a raw sequence to small non-negative
//! integers in two steps: delta encoding (each value becomes the
//! difference from its predecessor), then a frame-of-reference transform
//! that subtracts the minimum delta and divides by the largest power of
//! ten common to every delta. Index 0 always holds the absolute starting
//! value and is never scaled.

/// Replace each successive value with its difference from the prior one.
///
/// `src[0]` keeps the absolute starting value. Iteration runs from the
/// high index down so earlier values stay available while later deltas
/// are still being computed.
pub fn delta(src: &mut [i64]) {
    for i in (1..src.len()).rev() {
        src[i] = src[i].wrapping_sub(src[i - 1]);
    }
}

/// Reverse [`delta`] by computing the prefix sum in place.
pub fn inverse_delta(src: &mut [i64]) {
    for i in 1..src.len() {
        src[i] = src[i].wrapping_add(src[i - 1]);
    }
}

/// Returns the minimum, the maximum and the largest common divisor of
/// the deltas in `src` that is also a power of 10.
///
/// Index 0 is the absolute starting value and is excluded. `max` is 0
/// when every delta is non-positive. The divisor starts at `10^12` and
/// is reduced by factors of 10 until it divides every delta; it never
/// reaches 0, `1` is the terminal value.
pub fn reference10(src: &[i64]) -> (i64, i64, i64) {
    let mut divisor = 1_000_000_000_000_i64;
    if src.len() < 2 {
        return (src.first().copied().unwrap_or(0), 0, divisor);
    }

    let mut min = i64::MAX;
    let mut max = 0;
    for &v in &src[1..] {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
        while divisor > 1 && v % divisor != 0 {
            divisor /= 10;
        }
    }
    (min, max, divisor)
}

/// Delta-encode `src` and apply the frame-of-reference transform.
///
/// Returns `(min, max, divisor, rle, deltas)` where `min`, `max` and
/// `divisor` come from [`reference10`], every delta at index >= 1 has
/// been rewritten as `(delta - min) / divisor`, and `rle` is true when
/// the sequence has more than one element and all scaled deltas are
/// equal.
pub fn for_delta10(src: &[i64]) -> (i64, i64, i64, bool, Vec<i64>) {
    if src.is_empty() {
        return (0, 0, 1, false, Vec::new());
    }

    let mut deltas = src.to_vec();
    delta(&mut deltas);

    let (min, max, divisor) = reference10(&deltas);

    let mut rle = true;
    for i in 1..deltas.len() {
        deltas[i] = deltas[i].wrapping_sub(min) / divisor;
        rle = i == 1 || rle && deltas[i - 1] == deltas[i];
    }
    rle = rle && deltas.len() > 1;

    (min, max, divisor, rle, deltas)
}

/// Reverse [`for_delta10`] in place: scale each delta back up by
/// `divisor`, add `min`, then undo the delta encoding.
pub fn inverse_for_delta10(min: i64, divisor: i64, src: &mut [i64]) {
    for v in src.iter_mut().skip(1) {
        *v = v.wrapping_mul(divisor).wrapping_add(min);
    }
    inverse_delta(src);
}
