use crate::codec;
use crate::error::{Error, Result};
use fstr::FStr;
use std::{cmp, fmt, hash, str};

/// Represents a Universally Unique IDentifier.
///
/// The value is an immutable 16-byte big-endian array. Equality and hashing consider all 16
/// bytes. Ordering is not plain byte order, though: UUIDs are first ordered by version, and
/// version 1 UUIDs are then ordered by their 60-bit timestamp so that time-based UUIDs sort
/// chronologically despite the RFC 4122 field layout placing the least significant `time_low`
/// field first.
///
/// # Examples
///
/// ```rust
/// use uuid4122::Uuid;
///
/// let a = "00000002-0000-1000-8000-000000000000".parse::<Uuid>()?;
/// let b = "00000001-0001-1000-8000-000000000000".parse::<Uuid>()?;
/// assert!(a.as_bytes() > b.as_bytes());
/// assert!(a < b); // b has the later timestamp
/// # Ok::<(), uuid4122::Error>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Uuid([u8; 16]);

/// The variant field of a UUID, determined by the top bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// `0xx`: reserved for NCS backward compatibility.
    Ncs,
    /// `10x`: the layout specified by RFC 4122.
    Rfc4122,
    /// `110`: reserved for Microsoft backward compatibility.
    Microsoft,
    /// `111`: reserved for future definition.
    Future,
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Name space for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self::from_u128(0x6ba7b810_9dad_11d1_80b4_00c04fd430c8);

    /// Name space for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self::from_u128(0x6ba7b811_9dad_11d1_80b4_00c04fd430c8);

    /// Name space for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self::from_u128(0x6ba7b812_9dad_11d1_80b4_00c04fd430c8);

    /// Name space for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self::from_u128(0x6ba7b814_9dad_11d1_80b4_00c04fd430c8);

    /// Creates an object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates an object from a 128-bit unsigned integer.
    pub const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }

    /// Creates an object from the 16 bytes of `bytes` starting at `offset`.
    ///
    /// An all-zero selection yields a value equal to [`Uuid::NIL`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Range`] if `bytes` does not hold 16 bytes at `offset`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let buffer = [0u8; 20];
    /// assert_eq!(Uuid::from_slice(&buffer, 4)?, Uuid::NIL);
    /// assert!(Uuid::from_slice(&buffer, 5).is_err());
    /// # Ok::<(), uuid4122::Error>(())
    /// ```
    pub fn from_slice(bytes: &[u8], offset: usize) -> Result<Self> {
        offset
            .checked_add(16)
            .and_then(|end| bytes.get(offset..end))
            .and_then(|s| <[u8; 16]>::try_from(s).ok())
            .map(Self)
            .ok_or(Error::Range {
                offset,
                len: bytes.len(),
            })
    }

    /// Creates an object from any of the canonical, raw hex, braced, braced raw hex, and URN
    /// string representations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if `src` is not one of the accepted representations.
    pub fn parse(src: &str) -> Result<Self> {
        codec::decode(src).map(Self)
    }

    /// Same as [`Uuid::parse`], but returns `None` instead of an error.
    pub fn try_parse(src: &str) -> Option<Self> {
        Self::parse(src).ok()
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a copy of the underlying byte array.
    pub const fn to_bytes(&self) -> [u8; 16] {
        self.0
    }

    /// Returns the 128-bit unsigned integer representation.
    pub const fn to_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Returns `true` if this is the Nil UUID.
    pub const fn is_nil(&self) -> bool {
        self.to_u128() == 0
    }

    /// Creates a version 1 UUID from its 60-bit timestamp, 14-bit clock sequence, and node ID.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` or `clock_seq` does not fit in its field.
    pub const fn from_fields_v1(timestamp: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        if timestamp >= 1 << 60 || clock_seq >= 1 << 14 {
            panic!("invalid field value");
        }

        Self([
            (timestamp >> 24) as u8,
            (timestamp >> 16) as u8,
            (timestamp >> 8) as u8,
            timestamp as u8,
            (timestamp >> 40) as u8,
            (timestamp >> 32) as u8,
            0x10 | (timestamp >> 56) as u8,
            (timestamp >> 48) as u8,
            0x80 | (clock_seq >> 8) as u8,
            clock_seq as u8,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Returns the variant field.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 5 {
            0b000..=0b011 => Variant::Ncs,
            0b100..=0b101 => Variant::Rfc4122,
            0b110 => Variant::Microsoft,
            _ => Variant::Future,
        }
    }

    /// Returns the version field (0-15), which is meaningful only if the variant is
    /// [`Variant::Rfc4122`].
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the 60-bit timestamp of a version 1 UUID, counted in 100-nanosecond intervals since
    /// 1582-10-15 00:00:00 UTC.
    pub const fn timestamp(&self) -> Option<u64> {
        if self.version() != 1 {
            return None;
        }
        let (hi, mid, low) = self.time_fields();
        Some((hi as u64) << 48 | (mid as u64) << 32 | low as u64)
    }

    /// Returns the 14-bit clock sequence of a version 1 UUID.
    pub const fn clock_sequence(&self) -> Option<u16> {
        if self.version() != 1 {
            return None;
        }
        Some(u16::from_be_bytes([self.0[8], self.0[9]]) & 0x3fff)
    }

    /// Returns the 6-byte node ID of a version 1 UUID.
    pub const fn node_id(&self) -> Option<[u8; 6]> {
        if self.version() != 1 {
            return None;
        }
        let b = &self.0;
        Some([b[10], b[11], b[12], b[13], b[14], b[15]])
    }

    /// Returns `(time_hi, time_mid, time_low)` in priority order, with the version bits of
    /// `time_hi_and_version` masked out.
    const fn time_fields(&self) -> (u16, u16, u32) {
        let b = &self.0;
        (
            u16::from_be_bytes([b[6] & 0x0f, b[7]]),
            u16::from_be_bytes([b[4], b[5]]),
            u32::from_be_bytes([b[0], b[1], b[2], b[3]]),
        )
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let x = "{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), uuid4122::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        // SAFETY: the codec only writes ASCII hex digits and hyphens
        unsafe { FStr::from_inner_unchecked(codec::encode(&self.0)) }
    }

    /// Folds the four 32-bit words into one and mixes them with the MurmurHash3 finalizer.
    fn fold(&self) -> u64 {
        let n = self.to_u128();
        let mut k = (n >> 64) as u64 ^ (n as u64).rotate_left(32);
        k ^= k >> 33;
        k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
        k ^= k >> 33;
        k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
        k ^= k >> 33;
        k
    }
}

impl Ord for Uuid {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.version().cmp(&other.version()).then_with(|| {
            if self.version() == 1 {
                self.time_fields()
                    .cmp(&other.time_fields())
                    .then_with(|| self.0[8..].cmp(&other.0[8..]))
            } else {
                self.0.cmp(&other.0)
            }
        })
    }
}

impl PartialOrd for Uuid {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl hash::Hash for Uuid {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.fold());
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from any of the accepted string representations.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    /// Creates an object from a slice that must be exactly 16 bytes long.
    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        if src.len() == 16 {
            Self::from_slice(src, 0)
        } else {
            Err(Error::Range {
                offset: 0,
                len: src.len(),
            })
        }
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        src.to_u128()
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self::from_u128(src)
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = Error;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl de::Visitor<'_> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Uuid::parse(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Uuid::try_from(value).map_err(de::Error::custom)
        }
    }

}
