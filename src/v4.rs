//! UUIDv4-related functionality

use crate::{generator::RandSource, Uuid};

/// Represents a UUIDv4 generator that fills every non-constant bit with a random number.
///
/// # Examples
///
/// ```rust
/// use uuid4122::V4Generator;
///
/// let mut g = V4Generator::with_rand08(rand::thread_rng());
/// let uuid = g.generate();
/// assert_eq!(uuid.version(), 4);
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    pub fn generate(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        for chunk in bytes.chunks_exact_mut(4) {
            chunk.copy_from_slice(&self.rng.next_u32().to_be_bytes());
        }
        bytes[6] = 0x40 | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Uuid::from(bytes)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid4122::V4Generator;
///
/// V4Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{i}] {e}"));
/// ```
impl<R: RandSource> Iterator for V4Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource> std::iter::FusedIterator for V4Generator<R> {}
