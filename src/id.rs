use core::{fmt, str};

use fstr::FStr;

use crate::base32;
use crate::entropy::EntropySource;
use crate::error::{Error, Result};
use crate::layout::{self, MAX_ENTROPY, MAX_TIMESTAMP};

/// Represents a Universally Unique Lexicographically Sortable Identifier.
///
/// The derived ordering compares the 16 bytes lexicographically, which agrees with the numeric
/// order of `(timestamp, entropy)` and with the order of the Base32 strings.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Ulid([u8; 16]);

impl Ulid {
    /// Nil ULID (00000000000000000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max ULID (7ZZZZZZZZZZZZZZZZZZZZZZZZZ)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates an object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates an object from a byte slice that must be exactly 16 bytes long.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] for slices of any other length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        <[u8; 16]>::try_from(bytes)
            .map(Self)
            .map_err(|_| Error::InvalidLength)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the value as a 128-bit unsigned integer.
    pub const fn to_u128(self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Creates an object from a timestamp and 10 bytes of entropy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if `timestamp` is `2^48` or greater.
    pub const fn from_parts(timestamp: u64, entropy: [u8; 10]) -> Result<Self> {
        match layout::pack(timestamp, entropy) {
            Ok(bytes) => Ok(Self(bytes)),
            Err(err) => Err(err),
        }
    }

    /// Creates an object from a timestamp and 10 bytes drawn from `source`.
    ///
    /// The timestamp is checked before the source is touched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if `timestamp` is `2^48` or greater, or the error reported by
    /// `source`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ulidgen::{entropy::ZeroEntropy, Ulid};
    ///
    /// let x = Ulid::from_source(1_696_118_400_000, &mut ZeroEntropy)?;
    /// assert_eq!(&x.encode() as &str, "01HBM8HS000000000000000000");
    /// # Ok::<(), ulidgen::Error>(())
    /// ```
    pub fn from_source<S: EntropySource + ?Sized>(timestamp: u64, source: &mut S) -> Result<Self> {
        if timestamp > MAX_TIMESTAMP {
            return Err(Error::Overflow);
        }
        let mut entropy = [0u8; 10];
        source.fill_entropy(&mut entropy)?;
        Self::from_parts(timestamp, entropy)
    }

    /// Returns the 48-bit Unix timestamp in milliseconds.
    pub const fn timestamp(&self) -> u64 {
        layout::timestamp_of(&self.0)
    }

    /// Returns the 80-bit entropy as an unsigned integer.
    pub const fn entropy(&self) -> u128 {
        layout::entropy_of(&self.0)
    }

    /// Returns the 80-bit entropy as a big-endian byte array.
    pub const fn entropy_bytes(&self) -> [u8; 10] {
        layout::unpack(&self.0).1
    }

    /// Returns a copy with the timestamp replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if `timestamp` is `2^48` or greater.
    pub const fn with_timestamp(self, timestamp: u64) -> Result<Self> {
        Self::from_parts(timestamp, self.entropy_bytes())
    }

    /// Returns a copy with the entropy replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if `entropy` is `2^80` or greater.
    pub const fn with_entropy(self, entropy: u128) -> Result<Self> {
        if entropy > MAX_ENTROPY {
            return Err(Error::Overflow);
        }
        let e = entropy.to_be_bytes();
        Self::from_parts(
            self.timestamp(),
            [e[6], e[7], e[8], e[9], e[10], e[11], e[12], e[13], e[14], e[15]],
        )
    }

    /// Returns the next ULID within the same millisecond, or `None` if the entropy is already at
    /// its maximum.
    pub fn increment(self) -> Option<Self> {
        let (timestamp, entropy) = layout::unpack(&self.0);
        let entropy = layout::increment_entropy(entropy)?;
        Self::from_parts(timestamp, entropy).ok()
    }

    /// Returns the 26-digit Crockford Base32 string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ulidgen::Ulid;
    ///
    /// let x = "01arz3ndektsv4rrffq69g5fav".parse::<Ulid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "01ARZ3NDEKTSV4RRFFQ69G5FAV");
    /// assert_eq!(format!("{}", y), "01ARZ3NDEKTSV4RRFFQ69G5FAV");
    /// # Ok::<(), ulidgen::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<26> {
        let buffer = base32::encode(&self.0);
        debug_assert!(buffer.is_ascii());
        // SAFETY: the Base32 alphabet is ASCII
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Creates an object from the 26-digit Crockford Base32 string representation.
    ///
    /// # Errors
    ///
    /// See [`base32::decode`].
    pub fn parse(src: &str) -> Result<Self> {
        base32::decode(src).map(Self)
    }

    /// Returns the 8-4-4-4-12 lower-case hexadecimal string representation of the same 16 bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ulidgen::Ulid;
    ///
    /// let x = "01ARZ3NDEKTSV4RRFFQ69G5FAV".parse::<Ulid>()?;
    /// assert_eq!(&x.encode_uuid() as &str, "01563e3a-b5d3-d676-4c61-efb99302bd5b");
    /// assert_eq!(Ulid::parse_uuid("01563E3A-B5D3-D676-4C61-EFB99302BD5B"), Ok(x));
    /// # Ok::<(), ulidgen::Error>(())
    /// ```
    pub fn encode_uuid(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut pos = 0;
        for (i, &e) in self.0.iter().enumerate() {
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[pos] = b'-';
                pos += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: hex digits and hyphens are ASCII
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation, in either case.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidLength`] if `src` is not exactly 36 bytes long.
    /// - [`Error::InvalidFormat`] if a hyphen is missing or misplaced or a digit is not hex.
    pub fn parse_uuid(src: &str) -> Result<Self> {
        const ERR: Error = Error::InvalidFormat;

        let src: &[u8; 36] = src
            .as_bytes()
            .try_into()
            .map_err(|_| Error::InvalidLength)?;

        let mut dst = [0u8; 16];
        let mut iter = src.iter();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = iter.next().and_then(|&c| hex_value(c)).ok_or(ERR)?;
            let lo = iter.next().and_then(|&c| hex_value(c)).ok_or(ERR)?;
            *e = (hi << 4) | lo;
            if (i == 3 || i == 5 || i == 7 || i == 9) && iter.next() != Some(&b'-') {
                return Err(ERR);
            }
        }
        Ok(Self(dst))
    }
}

const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for Ulid {
    /// Returns the 26-digit canonical Crockford Base32 string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Ulid {
    type Err = Error;

    /// Creates an object from the 26-digit Crockford Base32 string representation.
    fn from_str(src: &str) -> Result<Self> {
        Self::parse(src)
    }
}

impl From<Ulid> for [u8; 16] {
    fn from(src: Ulid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Ulid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Ulid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self> {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for Ulid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Ulid> for u128 {
    fn from(src: Ulid) -> Self {
        src.to_u128()
    }
}

impl From<u128> for Ulid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{Error, Ulid};
    use std::time;

    impl From<Ulid> for String {
        fn from(src: Ulid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Ulid {
        type Error = Error;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }

    impl Ulid {
        /// Returns the timestamp as a [`SystemTime`](time::SystemTime).
        pub fn datetime(&self) -> time::SystemTime {
            time::UNIX_EPOCH + time::Duration::from_millis(self.timestamp())
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Ulid;

    impl From<Ulid> for uuid::Uuid {
        fn from(src: Ulid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Ulid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Ulid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Ulid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Ulid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Ulid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a ULID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::from_slice(value).map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Error, Ulid};
    use crate::entropy::{EntropySource, FixedEntropy, ZeroEntropy};
    use crate::layout::MAX_TIMESTAMP;

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [((u64, [u8; 10]), &'static str, &'static str)] {
        &[
            (
                (0, [0x00; 10]),
                "00000000000000000000000000",
                "00000000-0000-0000-0000-000000000000",
            ),
            (
                (MAX_TIMESTAMP, [0xff; 10]),
                "7ZZZZZZZZZZZZZZZZZZZZZZZZZ",
                "ffffffff-ffff-ffff-ffff-ffffffffffff",
            ),
            (
                (MAX_TIMESTAMP, [0x00; 10]),
                "7ZZZZZZZZZ0000000000000000",
                "ffffffff-ffff-0000-0000-000000000000",
            ),
            (
                (0, [0xff; 10]),
                "0000000000ZZZZZZZZZZZZZZZZ",
                "00000000-0000-ffff-ffff-ffffffffffff",
            ),
            (
                (1_696_118_400_000, [0x00; 10]),
                "01HBM8HS000000000000000000",
                "018ae888-e400-0000-0000-000000000000",
            ),
            (
                (
                    1_469_918_176_385,
                    [0xd6, 0x73, 0x11, 0xad, 0x9f, 0x4f, 0xb5, 0xa5, 0x1b, 0x6b],
                ),
                "01ARYZ6S41TSSH3BCZ9YTTA6VB",
                "01563df3-6481-d673-11ad-9f4fb5a51b6b",
            ),
            (
                (
                    1_469_922_850_259,
                    [0xd6, 0x76, 0x4c, 0x61, 0xef, 0xb9, 0x93, 0x02, 0xbd, 0x5b],
                ),
                "01ARZ3NDEKTSV4RRFFQ69G5FAV",
                "01563e3a-b5d3-d676-4c61-efb99302bd5b",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for &((ts, entropy), text, uuid) in prepare_cases() {
            let from_parts = Ulid::from_parts(ts, entropy).unwrap();
            assert_eq!(from_parts.timestamp(), ts);
            assert_eq!(from_parts.entropy_bytes(), entropy);
            assert_eq!(&from_parts.encode() as &str, text);
            assert_eq!(&from_parts.to_string(), text);
            assert_eq!(&from_parts.encode_uuid() as &str, uuid);
            assert_eq!(Ok(from_parts), text.parse());
            assert_eq!(Ok(from_parts), text.to_lowercase().parse());
            assert_eq!(Ok(from_parts), Ulid::parse_uuid(uuid));
            assert_eq!(Ok(from_parts), Ulid::parse_uuid(&uuid.to_uppercase()));
            #[cfg(feature = "uuid")]
            assert_eq!(&uuid::Uuid::from(from_parts).to_string(), uuid);
        }
    }

    /// Encodes the reference timestamp with zero entropy
    #[test]
    fn encodes_the_reference_timestamp_with_zero_entropy() {
        let e = Ulid::from_source(1_696_118_400_000, &mut ZeroEntropy).unwrap();
        assert!(e.encode().ends_with("0000000000000000"));
        assert!(e.encode_uuid().ends_with("-0000-0000-000000000000"));
    }

    /// Rejects timestamps of 48 bits or more
    #[test]
    fn rejects_timestamps_of_48_bits_or_more() {
        assert!(Ulid::from_parts(MAX_TIMESTAMP, [0; 10]).is_ok());
        assert_eq!(
            Ulid::from_parts(MAX_TIMESTAMP + 1, [0; 10]),
            Err(Error::Overflow)
        );
        assert!(Ulid::from_source(MAX_TIMESTAMP, &mut ZeroEntropy).is_ok());
        assert_eq!(
            Ulid::from_source(MAX_TIMESTAMP + 1, &mut ZeroEntropy),
            Err(Error::Overflow)
        );
        assert_eq!(
            Ulid::NIL.with_timestamp(MAX_TIMESTAMP + 1),
            Err(Error::Overflow)
        );
        assert_eq!(Ulid::NIL.with_entropy(1 << 80), Err(Error::Overflow));
    }

    /// Propagates entropy source failure unchanged
    #[test]
    fn propagates_entropy_source_failure_unchanged() {
        struct Failing(usize);
        impl EntropySource for Failing {
            fn fill_entropy(&mut self, _: &mut [u8]) -> crate::Result<()> {
                self.0 += 1;
                Err(Error::EntropySource)
            }
        }

        let mut src = Failing(0);
        assert_eq!(Ulid::from_source(42, &mut src), Err(Error::EntropySource));
        assert_eq!(src.0, 1);

        // overflow is detected before the source is consulted
        assert_eq!(Ulid::from_source(1 << 48, &mut src), Err(Error::Overflow));
        assert_eq!(src.0, 1);
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            ("", Error::InvalidLength),
            ("01ARZ3NDEKTSV4RRFFQ69G5FA", Error::InvalidLength),
            ("01ARZ3NDEKTSV4RRFFQ69G5FAVV", Error::InvalidLength),
            (" 01ARZ3NDEKTSV4RRFFQ69G5FAV", Error::InvalidLength),
            ("01ARZ3NDEKTSV4RRFFQ69G5FAV ", Error::InvalidLength),
            ("01ARZ3NDEKTSV4RRFFQ69G5FAU", Error::InvalidCharacter),
            ("01ARZ3NDEKTSV4RRFFQ69G5FAO", Error::InvalidCharacter),
            ("01ARZ3NDEKTSV4RRFFQ69G5FAI", Error::InvalidCharacter),
            ("01ARZ3NDEKTSV4RRFFQ69G5FAl", Error::InvalidCharacter),
            ("01ARZ3NDEK-SV4RRFFQ69G5FAV", Error::InvalidCharacter),
            ("81ARZ3NDEKTSV4RRFFQ69G5FAV", Error::Overflow),
            ("Z1ARZ3NDEKTSV4RRFFQ69G5FAV", Error::Overflow),
        ];

        for (text, err) in cases {
            assert_eq!(text.parse::<Ulid>(), Err(err), "{text}");
        }
    }

    /// Returns error to invalid UUID representation
    #[test]
    fn returns_error_to_invalid_uuid_representation() {
        let cases = [
            ("", Error::InvalidLength),
            ("01563e3ab5d3d6764c61efb99302bd5b", Error::InvalidLength),
            ("{01563e3a-b5d3-d676-4c61-efb99302bd5b}", Error::InvalidLength),
            (" 01563e3a-b5d3-d676-4c61-efb99302bd5b", Error::InvalidLength),
            ("01563e3a-b5d3d676-4c61-efb99302bd5b", Error::InvalidLength),
            ("01563e3a-b5d3-d676-4c61_efb99302bd5b", Error::InvalidFormat),
            ("01563e3ab-5d3-d676-4c61-efb99302bd5b", Error::InvalidFormat),
            ("01563g3a-b5d3-d676-4c61-efb99302bd5b", Error::InvalidFormat),
            ("01563e3a-b5d3-d6 6-4c61-efb99302bd5b", Error::InvalidFormat),
            ("+1563e3a-b5d3-d676-4c61-efb99302bd5b", Error::InvalidFormat),
            ("01563e3a-b5d3-d676-4c61-efb99302bd5-", Error::InvalidFormat),
        ];

        for (text, err) in cases {
            assert_eq!(Ulid::parse_uuid(text), Err(err), "{text}");
        }
    }

    /// Returns Nil and Max ULIDs
    #[test]
    fn returns_nil_and_max_ulids() {
        assert_eq!(&Ulid::NIL.encode() as &str, "00000000000000000000000000");
        assert_eq!(&Ulid::MAX.encode() as &str, "7ZZZZZZZZZZZZZZZZZZZZZZZZZ");
        assert_eq!(
            &Ulid::MAX.encode_uuid() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
        assert_eq!(Ulid::MAX.timestamp(), MAX_TIMESTAMP);
        assert_eq!(Ulid::MAX.entropy(), (1 << 80) - 1);
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for &((ts, entropy), _, _) in prepare_cases() {
            let e = Ulid::from_parts(ts, entropy).unwrap();
            assert_eq!(Ulid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Ulid::from(u128::from(e)), e);
            assert_eq!(Ulid::from_slice(e.as_ref()), Ok(e));
            assert_eq!(Ulid::try_from(&e.as_bytes()[..]), Ok(e));
            assert_eq!(Ulid::from_bytes(*e.as_bytes()), e);
            assert_eq!(e.encode().parse(), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Ulid::try_from(e.to_string()), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Ulid::try_from(String::from(e).to_lowercase()), Ok(e));
            assert_eq!(Ulid::parse_uuid(&e.encode_uuid()), Ok(e));
            assert_eq!(e.with_timestamp(ts), Ok(e));
            assert_eq!(e.with_entropy(e.entropy()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Ulid::from(<uuid::Uuid>::from(e)), e);
        }
    }

    /// Rejects slices of wrong length
    #[test]
    fn rejects_slices_of_wrong_length() {
        for len in [0, 1, 15, 17, 32] {
            let bytes = vec![0u8; len];
            assert_eq!(Ulid::from_slice(&bytes), Err(Error::InvalidLength));
        }
    }

    /// Replaces fields without touching the other
    #[test]
    fn replaces_fields_without_touching_the_other() {
        let e = Ulid::from_parts(0x0123_4567_89ab, [0x5a; 10]).unwrap();
        let f = e.with_timestamp(42).unwrap();
        assert_eq!(f.timestamp(), 42);
        assert_eq!(f.entropy_bytes(), [0x5a; 10]);

        let g = e.with_entropy(0x1234).unwrap();
        assert_eq!(g.timestamp(), 0x0123_4567_89ab);
        assert_eq!(g.entropy(), 0x1234);
        assert_eq!(g.entropy_bytes(), [0, 0, 0, 0, 0, 0, 0, 0, 0x12, 0x34]);
    }

    /// Increments within the same millisecond
    #[test]
    fn increments_within_the_same_millisecond() {
        let e = Ulid::from_parts(7, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff]).unwrap();
        let f = e.increment().unwrap();
        assert!(e < f);
        assert_eq!(f.timestamp(), 7);
        assert_eq!(f.entropy(), 0x100);
        assert_eq!(Ulid::from_parts(7, [0xff; 10]).unwrap().increment(), None);
    }

    /// Orders bytes, integers, and strings identically
    #[test]
    fn orders_bytes_integers_and_strings_identically() {
        use rand::RngCore;
        let mut rng = rand::thread_rng();
        let mut samples: Vec<Ulid> = prepare_cases()
            .iter()
            .map(|&((ts, entropy), _, _)| Ulid::from_parts(ts, entropy).unwrap())
            .collect();
        for _ in 0..1_000 {
            let mut entropy = [0u8; 10];
            rng.fill_bytes(&mut entropy);
            // narrow timestamp range makes ties likely
            let ts = 1_696_118_400_000 + rng.next_u64() % 4;
            samples.push(Ulid::from_parts(ts, entropy).unwrap());
        }

        for a in &samples {
            for b in samples.iter().step_by(7) {
                let ord = a.cmp(b);
                assert_eq!(ord, a.as_bytes().cmp(b.as_bytes()));
                assert_eq!(ord, u128::from(*a).cmp(&u128::from(*b)));
                assert_eq!(ord, a.encode()[..].cmp(&b.encode()[..]));
                assert_eq!(ord, (a.timestamp(), a.entropy()).cmp(&(b.timestamp(), b.entropy())));
            }
        }
    }

    /// Uses fixed entropy as given
    #[test]
    fn uses_fixed_entropy_as_given() {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let e = Ulid::from_source(99, &mut FixedEntropy(bytes)).unwrap();
        assert_eq!(e.entropy_bytes(), bytes);
        assert_eq!(e.timestamp(), 99);
    }

    /// Converts timestamp to system time
    #[cfg(feature = "std")]
    #[test]
    fn converts_timestamp_to_system_time() {
        use std::time;
        let e = Ulid::from_parts(1_696_118_400_000, [0; 10]).unwrap();
        assert_eq!(
            e.datetime().duration_since(time::UNIX_EPOCH).unwrap(),
            time::Duration::from_millis(1_696_118_400_000)
        );
    }
}
