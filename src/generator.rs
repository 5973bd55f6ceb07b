//! Monotonic ULID generator and related types.

use crate::entropy::EntropySource;
use crate::error::{Error, Result};
use crate::layout::{self, MAX_TIMESTAMP};
use crate::Ulid;

#[cfg(feature = "tracing")]
use tracing::instrument;

#[cfg(feature = "std")]
mod shared;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use shared::SharedGenerator;

pub mod with_rand08;

/// State of a monotonic stream.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum State {
    /// No ULID has been generated yet.
    #[default]
    Fresh,

    /// Holds the fields of the last ULID generated.
    Primed {
        /// Timestamp of the last ULID.
        timestamp: u64,
        /// Entropy of the last ULID.
        entropy: [u8; 10],
    },
}

/// Represents a ULID generator that guarantees the strictly increasing order of ULIDs generated
/// within the same millisecond.
///
/// The first ULID of every millisecond takes fresh entropy from the source; each subsequent one
/// in the same millisecond takes the previous entropy plus one. The generator never reads the
/// system clock: the caller passes the Unix timestamp in milliseconds to every call.
///
/// This type is not synchronized. Keep one generator per thread, serialize access externally, or
/// wrap it in a [`SharedGenerator`] to share it across threads.
///
/// # Examples
///
/// ```rust
/// use ulidgen::{entropy::FixedEntropy, MonotonicGenerator};
///
/// let mut g = MonotonicGenerator::new(FixedEntropy([0; 10]));
/// let a = g.generate_core(1_696_118_400_000)?;
/// let b = g.generate_core(1_696_118_400_000)?;
/// assert!(a < b);
/// assert_eq!(b.entropy(), 1);
/// # Ok::<(), ulidgen::Error>(())
/// ```
///
/// # Generator functions
///
/// | Flavor                     | On clock rewind                           |
/// | -------------------------- | ----------------------------------------- |
/// | [`generate_core`]          | Returns [`Error::ClockRegression`]        |
/// | [`generate_or_reset_core`] | Resets generator, breaking the order      |
///
/// Both return [`Error::EntropyOverflow`] when the entropy cannot be incremented any further
/// within the same millisecond; retrying with a later timestamp is up to the caller.
///
/// [`generate_core`]: MonotonicGenerator::generate_core
/// [`generate_or_reset_core`]: MonotonicGenerator::generate_or_reset_core
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct MonotonicGenerator<E> {
    state: State,

    /// The entropy source used by the generator.
    source: E,
}

impl<E: EntropySource> MonotonicGenerator<E> {
    /// Creates a generator instance in the fresh state.
    pub const fn new(source: E) -> Self {
        Self {
            state: State::Fresh,
            source,
        }
    }

    /// Creates a generator that continues from a ULID with the given fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if `timestamp` is `2^48` or greater.
    pub fn with_state(source: E, timestamp: u64, entropy: [u8; 10]) -> Result<Self> {
        if timestamp > MAX_TIMESTAMP {
            return Err(Error::Overflow);
        }
        Ok(Self {
            state: State::Primed { timestamp, entropy },
            source,
        })
    }

    /// Returns the current state of the stream.
    pub const fn state(&self) -> State {
        self.state
    }

    /// Returns the timestamp of the last ULID generated, if any.
    pub const fn last_timestamp(&self) -> Option<u64> {
        match self.state {
            State::Fresh => None,
            State::Primed { timestamp, .. } => Some(timestamp),
        }
    }

    /// Consumes the generator and returns the entropy source.
    pub fn into_source(self) -> E {
        self.source
    }

    /// Forgets the last ULID so that the next call draws fresh entropy.
    pub fn reset(&mut self) {
        self.state = State::Fresh;
    }

    /// Generates a new ULID from the `unix_ts_ms` passed, or returns an error if the timestamp
    /// went backwards.
    ///
    /// The state is left untouched when an error is returned.
    ///
    /// # Errors
    ///
    /// - [`Error::Overflow`] if `unix_ts_ms` is `2^48` or greater.
    /// - [`Error::ClockRegression`] if `unix_ts_ms` is less than the last timestamp.
    /// - [`Error::EntropyOverflow`] if the entropy is exhausted for this millisecond.
    /// - The entropy source's error if fresh entropy cannot be drawn.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate_core(&mut self, unix_ts_ms: u64) -> Result<Ulid> {
        if unix_ts_ms > MAX_TIMESTAMP {
            return Err(Error::Overflow);
        }

        match self.state {
            State::Primed { timestamp, entropy } if unix_ts_ms == timestamp => {
                let Some(entropy) = layout::increment_entropy(entropy) else {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(unix_ts_ms, "entropy exhausted within millisecond");
                    return Err(Error::EntropyOverflow);
                };
                self.state = State::Primed { timestamp, entropy };
                Ulid::from_parts(timestamp, entropy)
            }
            State::Primed { timestamp, .. } if unix_ts_ms < timestamp => {
                #[cfg(feature = "tracing")]
                tracing::warn!(unix_ts_ms, last = timestamp, "timestamp went backwards");
                Err(Error::ClockRegression)
            }
            _ => {
                let value = Ulid::from_source(unix_ts_ms, &mut self.source)?;
                #[cfg(feature = "tracing")]
                tracing::trace!(unix_ts_ms, "drew fresh entropy");
                self.state = State::Primed {
                    timestamp: unix_ts_ms,
                    entropy: value.entropy_bytes(),
                };
                Ok(value)
            }
        }
    }

    /// Generates a new ULID from the `unix_ts_ms` passed, or resets the generator if the
    /// timestamp went backwards.
    ///
    /// A reset starts a new stream from `unix_ts_ms` with fresh entropy, so the returned ULID
    /// sorts before the previous one. Use [`generate_core`](Self::generate_core) to have the
    /// rewind reported instead.
    ///
    /// # Errors
    ///
    /// - [`Error::Overflow`] if `unix_ts_ms` is `2^48` or greater.
    /// - [`Error::EntropyOverflow`] if the entropy is exhausted for this millisecond.
    /// - The entropy source's error if fresh entropy cannot be drawn.
    pub fn generate_or_reset_core(&mut self, unix_ts_ms: u64) -> Result<Ulid> {
        match self.generate_core(unix_ts_ms) {
            Err(Error::ClockRegression) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(unix_ts_ms, "resetting generator");
                let prev = self.state;
                self.reset();
                let result = self.generate_core(unix_ts_ms);
                if result.is_err() {
                    self.state = prev;
                }
                result
            }
            result => result,
        }
    }
}
