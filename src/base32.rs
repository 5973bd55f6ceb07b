//! Crockford Base32 codec for 128-bit values.
//!
//! A ULID is 26 symbols of 5 bits each. The 130 bits carry the 128-bit value right-aligned, so the
//! leading symbol only ever uses its three low bits and must be one of `0` to `7`.

use crate::error::{Error, Result};

/// The 32-symbol Crockford alphabet (no `I`, `L`, `O`, or `U`).
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Length of the text representation.
pub const ENCODED_LEN: usize = 26;

const NO_VALUE: u8 = 0xff;

/// Maps an ASCII byte to its 5-bit value, or to `NO_VALUE`. Lower-case letters fold to upper-case.
const DECODE_MAP: [u8; 256] = {
    let mut map = [NO_VALUE; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        let c = ALPHABET[i];
        map[c as usize] = i as u8;
        map[c.to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    map
};

/// Encodes a 16-byte big-endian value into 26 upper-case ASCII symbols.
pub const fn encode(bytes: &[u8; 16]) -> [u8; ENCODED_LEN] {
    let n = u128::from_be_bytes(*bytes);
    let mut dst = [0u8; ENCODED_LEN];
    let mut i = 0;
    while i < ENCODED_LEN {
        let shift = 5 * (ENCODED_LEN - 1 - i);
        dst[i] = ALPHABET[((n >> shift) & 0x1f) as usize];
        i += 1;
    }
    dst
}

/// Decodes 26 Crockford Base32 symbols, in any case, into a 16-byte big-endian value.
///
/// # Errors
///
/// - [`Error::InvalidLength`] if `src` is not exactly 26 bytes long.
/// - [`Error::InvalidCharacter`] if any symbol is outside the alphabet.
/// - [`Error::Overflow`] if the value does not fit in 128 bits (leading symbol above `7`).
pub fn decode(src: &str) -> Result<[u8; 16]> {
    let src: &[u8; ENCODED_LEN] = src
        .as_bytes()
        .try_into()
        .map_err(|_| Error::InvalidLength)?;

    let mut n = 0u128;
    let mut head = 0u8;
    for (i, &c) in src.iter().enumerate() {
        let value = DECODE_MAP[c as usize];
        if value == NO_VALUE {
            return Err(Error::InvalidCharacter);
        }
        if i == 0 {
            head = value;
        }
        n = (n << 5) | value as u128;
    }

    if head > 7 {
        Err(Error::Overflow)
    } else {
        Ok(n.to_be_bytes())
    }
}
