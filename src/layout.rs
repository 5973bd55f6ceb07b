//! Binary layout of the 16-byte value.
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |            entropy            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            entropy                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            entropy                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Both fields are stored most-significant byte first, so comparing two layouts byte by byte is
//! the same as comparing `(timestamp, entropy)` as a 128-bit unsigned integer.

use crate::error::{Error, Result};

/// The largest representable timestamp (`2^48 - 1`).
pub const MAX_TIMESTAMP: u64 = (1 << 48) - 1;

/// The largest representable entropy (`2^80 - 1`).
pub const MAX_ENTROPY: u128 = (1 << 80) - 1;

/// Packs a 48-bit timestamp and 10 bytes of entropy into the 16-byte layout.
///
/// # Errors
///
/// Returns [`Error::Overflow`] if `timestamp` is `2^48` or greater.
pub const fn pack(timestamp: u64, entropy: [u8; 10]) -> Result<[u8; 16]> {
    if timestamp > MAX_TIMESTAMP {
        return Err(Error::Overflow);
    }

    let ts = timestamp.to_be_bytes();
    Ok([
        ts[2], ts[3], ts[4], ts[5], ts[6], ts[7], entropy[0], entropy[1], entropy[2], entropy[3],
        entropy[4], entropy[5], entropy[6], entropy[7], entropy[8], entropy[9],
    ])
}

/// Splits the 16-byte layout into its timestamp and entropy fields.
pub const fn unpack(bytes: &[u8; 16]) -> (u64, [u8; 10]) {
    let b = bytes;
    (
        timestamp_of(bytes),
        [b[6], b[7], b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]],
    )
}

/// Reads the first 6 bytes as a big-endian unsigned integer.
pub const fn timestamp_of(bytes: &[u8; 16]) -> u64 {
    let b = bytes;
    u64::from_be_bytes([0, 0, b[0], b[1], b[2], b[3], b[4], b[5]])
}

/// Reads the last 10 bytes as a big-endian unsigned integer.
pub const fn entropy_of(bytes: &[u8; 16]) -> u128 {
    u128::from_be_bytes(*bytes) & MAX_ENTROPY
}

/// Adds one to a big-endian 80-bit value, returning `None` if it wraps past `2^80 - 1`.
pub fn increment_entropy(mut entropy: [u8; 10]) -> Option<[u8; 10]> {
    for e in entropy.iter_mut().rev() {
        let (sum, carry) = e.overflowing_add(1);
        *e = sum;
        if !carry {
            return Some(entropy);
        }
    }
    None
}
