use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::RngCore;

use super::{with_rand08::Adapter, MonotonicGenerator, State};
use crate::entropy::EntropySource;
use crate::error::Result;
use crate::Ulid;

/// A [`MonotonicGenerator`] behind a mutex, shareable across threads.
///
/// Every call locks for the duration of one state read, entropy draw, and state write. The lock
/// is never held across calls and is not reentrant.
///
/// # Examples
///
/// ```rust
/// use std::{sync, thread};
/// use ulidgen::SharedGenerator;
///
/// let g = sync::Arc::new(SharedGenerator::with_rand08(rand::rngs::OsRng));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 let ulid = g.generate_core(1_696_118_400_000).unwrap();
///                 println!("{} by thread {}", ulid, i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Debug, Default)]
pub struct SharedGenerator<E>(Mutex<MonotonicGenerator<E>>);

impl<E: EntropySource> SharedGenerator<E> {
    /// Creates a shared generator in the fresh state.
    pub const fn new(source: E) -> Self {
        Self(Mutex::new(MonotonicGenerator::new(source)))
    }

    /// Locks the inner generator.
    ///
    /// The inner state is only written after a successful generation, so a guard recovered from
    /// a poisoned lock is always consistent.
    fn lock(&self) -> MutexGuard<'_, MonotonicGenerator<E>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the current state of the stream.
    pub fn state(&self) -> State {
        self.lock().state()
    }

    /// See [`MonotonicGenerator::generate_core`].
    ///
    /// # Errors
    ///
    /// Same as [`MonotonicGenerator::generate_core`].
    pub fn generate_core(&self, unix_ts_ms: u64) -> Result<Ulid> {
        self.lock().generate_core(unix_ts_ms)
    }

    /// See [`MonotonicGenerator::generate_or_reset_core`].
    ///
    /// # Errors
    ///
    /// Same as [`MonotonicGenerator::generate_or_reset_core`].
    pub fn generate_or_reset_core(&self, unix_ts_ms: u64) -> Result<Ulid> {
        self.lock().generate_or_reset_core(unix_ts_ms)
    }

    /// Consumes the wrapper and returns the inner generator.
    pub fn into_inner(self) -> MonotonicGenerator<E> {
        self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: RngCore> SharedGenerator<Adapter<T>> {
    /// Creates a shared generator with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    pub const fn with_rand08(rng: T) -> Self {
        Self(Mutex::new(MonotonicGenerator::with_rand08(rng)))
    }
}

impl<E> From<MonotonicGenerator<E>> for SharedGenerator<E> {
    fn from(src: MonotonicGenerator<E>) -> Self {
        Self(Mutex::new(src))
    }
}
