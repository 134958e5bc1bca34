//! Error type shared by the codec, the value type, and the generators.

/// Errors returned by fallible operations of this crate.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The string is not any of the accepted UUID representations.
    ///
    /// `index` points at the byte offset of the first offending character, or is `None` if the
    /// length alone rules out every representation.
    #[error("invalid string representation {src:?}{}", fmt_index(.index))]
    Format { src: String, index: Option<usize> },

    /// The byte slice does not contain 16 bytes at the given offset.
    #[error("16 bytes at offset {offset} out of range for slice of length {len}")]
    Range { offset: usize, len: usize },

    /// A generator was constructed from invalid input.
    #[error("invalid argument: {0}")]
    Argument(&'static str),

    /// A single generator was asked for more UUIDs than its 100-nanosecond clock can stamp.
    #[error("cannot generate more than 10M UUIDs/sec from a single generator")]
    RateLimit,
}

fn fmt_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {i}"),
        None => String::new(),
    }
}

/// A specialized [`Result`](std::result::Result) type for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
