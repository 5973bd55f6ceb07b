//! Entropy sources.
//!
//! The crate never chooses a random number generator on its own: construction and generation
//! draw bytes from whatever [`EntropySource`] the caller supplies. A fixed source is useful for
//! tests and reproducible output; a [`rand`] RNG can be plugged in through
//! [`with_rand08::Adapter`](crate::generator::with_rand08::Adapter).

use crate::error::Result;

/// A capability that fills a buffer with entropy.
///
/// This crate only ever requests 10 bytes at a time.
pub trait EntropySource {
    /// Fills `dest` entirely.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropySource`](crate::Error::EntropySource) if the source cannot supply
    /// the bytes. The reason is not carried further.
    fn fill_entropy(&mut self, dest: &mut [u8]) -> Result<()>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill_entropy(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill_entropy(dest)
    }
}

/// A source that always yields zero bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ZeroEntropy;

impl EntropySource for ZeroEntropy {
    fn fill_entropy(&mut self, dest: &mut [u8]) -> Result<()> {
        dest.fill(0);
        Ok(())
    }
}

/// A source that repeats the same 10 bytes on every draw.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FixedEntropy(/** The bytes handed out on each draw. */ pub [u8; 10]);

impl EntropySource for FixedEntropy {
    fn fill_entropy(&mut self, dest: &mut [u8]) -> Result<()> {
        for (d, s) in dest.iter_mut().zip(self.0.iter().cycle()) {
            *d = *s;
        }
        Ok(())
    }
}
