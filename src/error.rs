use core::fmt;

/// A result type whose error defaults to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Error kinds reported by codec, construction, and generator operations.
///
/// All errors are returned synchronously to the immediate caller; nothing is retried internally.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Binary or text input is not of the exact expected byte or character count.
    InvalidLength,

    /// Base32 text contains a symbol outside the Crockford alphabet.
    InvalidCharacter,

    /// UUID text contains a non-hexadecimal digit or a misplaced hyphen.
    InvalidFormat,

    /// A timestamp (explicit or decoded) is `2^48` or greater, or an entropy value is `2^80` or
    /// greater.
    Overflow,

    /// A monotonic generator exhausted the 80-bit entropy space within one millisecond.
    EntropyOverflow,

    /// A monotonic generator was given a timestamp earlier than the last one it used.
    ClockRegression,

    /// The entropy source failed to fill the requested bytes.
    EntropySource,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidLength => "invalid length",
            Self::InvalidCharacter => "invalid character in base32 representation",
            Self::InvalidFormat => "invalid uuid representation",
            Self::Overflow => "field value out of range",
            Self::EntropyOverflow => "entropy exhausted within the same millisecond",
            Self::ClockRegression => "timestamp went backwards",
            Self::EntropySource => "entropy source failed",
        })
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}
