//! Integration with `rand` (v0.8) crate.

use super::MonotonicGenerator;
use crate::entropy::EntropySource;
use crate::error::{Error, Result};
use rand::RngCore;

/// An adapter that implements [`EntropySource`] for [`RngCore`] types.
///
/// Whether the entropy is cryptographically strong depends entirely on the wrapped RNG.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> EntropySource for Adapter<T> {
    fn fill_entropy(&mut self, dest: &mut [u8]) -> Result<()> {
        self.0.try_fill_bytes(dest).map_err(|_err| {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_err, "entropy source failed");
            Error::EntropySource
        })
    }
}

impl<T: RngCore> MonotonicGenerator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ulidgen::MonotonicGenerator;
    ///
    /// let mut g = MonotonicGenerator::with_rand08(rand::rngs::OsRng);
    /// println!("{}", g.generate_core(1_696_118_400_000)?);
    /// # Ok::<(), ulidgen::Error>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}
