//! RFC 4122 Universally Unique IDentifiers: parsing, formatting, ordering, and generation of
//! time-based (version 1), random (version 4), and name-based (version 5) UUIDs.
//!
//! ```rust
//! use uuid4122::{uuid1, uuid4, uuid5, Uuid};
//!
//! let uuid = uuid1()?;
//! println!("{}", uuid); // e.g. "c79f4001-e13d-11ec-80b4-01c04fd430c8"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//!
//! let uuid = uuid5(Uuid::NAMESPACE_DNS, "python.org");
//! assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
//! # Ok::<(), uuid4122::Error>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! Version 1 UUIDs have the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |       time_hi         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|      clock_seq            |          node (0-1)           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          node (2-5)                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit timestamp counts 100-nanosecond intervals since 1582-10-15 00:00:00 UTC and is
//!   split into `time_low` (32 bits), `time_mid` (16 bits), and `time_hi` (12 bits).
//! - The 4-bit `ver` field is set at `0001`.
//! - The 2-bit `var` field is set at `10`.
//! - The 14-bit `clock_seq` field changes whenever the generator cannot rule out a repeated
//!   timestamp, e.g. after the clock went backwards.
//! - The 48-bit `node` field identifies the generator. This library fills it with random bits
//!   and sets the multicast bit unless a node ID is given.
//!
//! Version 4 UUIDs fill everything but `ver` (`0100`) and `var` with random bits, and version 5
//! UUIDs fill them with the leading bits of the SHA-1 digest of a namespace UUID followed by a
//! name (`ver` set at `0101`).
//!
//! # Ordering
//!
//! [`Uuid`] orders values by version first and then version 1 values by their timestamp, so
//! UUIDs from a [`V1Generator`] sort chronologically. Other versions fall back to byte order.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the thread-local default generators behind [`uuid1()`],
//!   [`uuid4()`], and [`uuid5()`].
//!
//! Optional features:
//!
//! - `serde`: enables serialization and deserialization of [`Uuid`].
//! - `uuid`: enables conversions between [`Uuid`] and `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod codec;

mod error;
pub use error::{Error, Result};

mod id;
pub use id::{Uuid, Variant};

pub mod generator;
pub use generator::{RandSource, StdClock, TimeSource};

mod v1;
pub use v1::V1Generator;

mod v4;
pub use v4::V4Generator;

mod v5;
pub use v5::V5Generator;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid1, uuid4, uuid5};
