//! A Rust implementation of ULID (Universally Unique Lexicographically Sortable Identifier)
//!
//! ```rust
//! # #[cfg(feature = "global_gen")]
//! # {
//! use ulidgen::ulid;
//!
//! let id = ulid();
//! println!("{}", id); // e.g., "01HBM8HS0097M4SGFFA9H6PZJC"
//! println!("{}", id.encode_uuid()); // e.g., "018ae888-e400-49e8-4c3c-ef5262cb7e4c"
//! println!("{:?}", id.as_bytes()); // as 16-byte big-endian array
//! # }
//! ```
//!
//! See [ULID specification](https://github.com/ulid/spec).
//!
//! # Field and bit layout
//!
//! A ULID is a 128-bit value with the following layout:
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
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in milliseconds.
//! - The 80-bit `entropy` field is filled from an [`EntropySource`] chosen by the caller.
//!
//! Both fields are big-endian, so the 16 bytes, the 128-bit integer, and the 26-digit Crockford
//! Base32 string all sort in the same order.
//!
//! # Monotonic generation
//!
//! [`MonotonicGenerator`] guarantees strictly increasing ULIDs within a stream: the first ULID of
//! a millisecond takes fresh entropy and each later ULID in the same millisecond takes the
//! previous entropy plus one. When the 80-bit entropy cannot be incremented further, the
//! generator returns [`Error::EntropyOverflow`] instead of wrapping. A timestamp smaller than the
//! previous one is reported as [`Error::ClockRegression`].
//!
//! ```rust
//! use ulidgen::{MonotonicGenerator, Ulid};
//!
//! let mut g = MonotonicGenerator::with_rand08(rand::rngs::OsRng);
//! let a = g.generate_core(1_696_118_400_000)?;
//! let b = g.generate_core(1_696_118_400_000)?;
//! assert!(a < b);
//! assert_eq!(b.entropy(), a.entropy() + 1);
//!
//! let c = b.to_string().parse::<Ulid>()?;
//! assert_eq!(b, c);
//! # Ok::<(), ulidgen::Error>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the primary [`ulid()`] function with a process-wide generator seeded
//!   from the operating system. Implies `std`.
//!
//! Optional features:
//!
//! - `std`: integrates the library with, among others, the system clock and `String`, and enables
//!   [`SharedGenerator`]. Without it the crate is `no_std`.
//! - `serde`: enables serialization and deserialization of [`Ulid`] via serde.
//! - `uuid`: enables conversion from/to [`uuid::Uuid`](https://docs.rs/uuid).
//! - `tracing`: emits [`tracing`](https://docs.rs/tracing) events on generator resets, clock
//!   regressions, entropy exhaustion, and entropy source failures.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{Error, Result};

pub mod base32;
pub mod entropy;
pub mod layout;

mod id;
pub use id::Ulid;

pub mod generator;
#[cfg(feature = "std")]
pub use generator::SharedGenerator;
#[doc(inline)]
pub use generator::MonotonicGenerator;

pub use entropy::EntropySource;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{try_ulid, ulid};
