//! Integer helpers for power-of-two alignment and ceiling division.
//!
//! Intermediate sums are computed in `u64` so that rounding a value close to [`u32::MAX`]
//! truncates the result rather than wrapping the addition. Callers keep their inputs within
//! the documented surface limits, where no truncation occurs.

/// Base two logarithm of a bytes-per-block value, rounded down.
///
/// `bytes_per_block` must be non-zero.
#[inline]
pub const fn bytes_per_block_log2(bytes_per_block: u32) -> u32 {
    bytes_per_block.leading_zeros() ^ 0x1F
}

/// Rounds `value` up to the next multiple of `size`.
#[inline]
pub const fn align_up(value: u32, size: u32) -> u32 {
    let remainder = value % size;
    if remainder == 0 {
        value
    } else {
        (value as u64 - remainder as u64 + size as u64) as u32
    }
}

/// Rounds `value` up to the next multiple of `1 << align_log2`.
#[inline]
pub const fn align_up_log2(value: u32, align_log2: u32) -> u32 {
    let mask = (1u64 << align_log2) - 1;
    (((value as u64 + mask) >> align_log2) << align_log2) as u32
}

/// `ceil(value / divisor)`.
#[inline]
pub const fn div_ceil(value: u32, divisor: u32) -> u32 {
    ((value as u64 + divisor as u64 - 1) / divisor as u64) as u32
}

/// `ceil(value / (1 << align_log2))`.
#[inline]
pub const fn div_ceil_log2(value: u32, align_log2: u32) -> u32 {
    ((value as u64 + (1u64 << align_log2) - 1) >> align_log2) as u32
}
