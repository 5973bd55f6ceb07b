//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::{sync, time};

use crate::{Error, Ulid};
use inner::GlobalGenInner;

/// Rollback of the system clock, in milliseconds, beyond which the global generator gives up the
/// monotonic order and resets.
const ROLLBACK_ALLOWANCE: u64 = 10_000;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a ULID object.
///
/// This function employs a global generator and guarantees the process-wide monotonic order of
/// ULIDs. It is the only place in this crate that reads the system clock.
///
/// Unlike [`MonotonicGenerator::generate_core`](crate::MonotonicGenerator::generate_core), this
/// function does not fail on a clock rollback: it keeps using the last timestamp as long as the
/// rollback is within ten seconds, and moves to the next millisecond when the entropy of the
/// current one is exhausted, so the embedded timestamp may run slightly ahead of the clock. If
/// the clock moves back more than ten seconds, the generator resets and the monotonic order is
/// broken. On Unix, the generator also resets when the process ID changes (i.e., upon process
/// forks) to prevent collisions across processes.
///
/// # Panics
///
/// Panics if the operating system fails to supply entropy. Use [`try_ulid`] to handle that case.
///
/// # Examples
///
/// ```rust
/// let ulid = ulidgen::ulid();
/// println!("{}", ulid); // e.g., "01HBM8HS0097M4SGFFA9H6PZJC"
/// println!("{:?}", ulid.as_bytes()); // as 16-byte big-endian array
///
/// let ulid_string: String = ulidgen::ulid().to_string();
/// ```
pub fn ulid() -> Ulid {
    match try_ulid() {
        Ok(value) => value,
        Err(err) => panic!("ulidgen: could not generate ULID: {err}"),
    }
}

/// Generates a ULID object, returning an error if the entropy source fails.
///
/// See [`ulid`] for the ordering guarantees.
///
/// # Errors
///
/// Returns [`Error::EntropySource`] if the operating system fails to supply entropy.
pub fn try_ulid() -> Result<Ulid, Error> {
    let now = time::SystemTime::now()
        .duration_since(time::UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64);
    lock_global_gen().generate(now)
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use super::ROLLBACK_ALLOWANCE;
    use crate::{generator::with_rand08::Adapter, Error, MonotonicGenerator, Ulid};

    /// The type alias for the random number generator of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    type GlobalGenRng = ReseedingRng<ChaCha12Core, OsRng>;

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: Option<MonotonicGenerator<Adapter<GlobalGenRng>>>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: None,
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner generator, seeding it on first use and
        /// resetting it on Unix if the process ID has changed.
        fn get_mut(&mut self) -> Result<&mut MonotonicGenerator<Adapter<GlobalGenRng>>, Error> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                #[cfg(feature = "tracing")]
                tracing::debug!("process id changed; resetting global generator");
                *self = Default::default();
            }

            if self.generator.is_none() {
                let core = ChaCha12Core::from_rng(OsRng).map_err(|_err| {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(error = %_err, "could not seed global generator");
                    Error::EntropySource
                })?;
                let rng = ReseedingRng::new(core, 1024 * 64, OsRng);
                self.generator = Some(MonotonicGenerator::with_rand08(rng));
            }

            self.generator.as_mut().ok_or(Error::EntropySource)
        }

        /// Generates a ULID for the clock reading `now`.
        pub fn generate(&mut self, now: u64) -> Result<Ulid, Error> {
            let g = self.get_mut()?;

            let unix_ts_ms = match g.last_timestamp() {
                Some(last) if now + ROLLBACK_ALLOWANCE < last => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(now, last, "clock moved back too far; resetting global generator");
                    g.reset();
                    now
                }
                Some(last) => now.max(last),
                None => now,
            };

            match g.generate_core(unix_ts_ms) {
                Err(Error::EntropyOverflow) => g.generate_core(unix_ts_ms + 1),
                result => result,
            }
        }
    }

}
