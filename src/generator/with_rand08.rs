//! Integration with `rand` (v0.8) crate.

use super::RandSource;
use crate::{StdClock, V1Generator, V4Generator};
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }
}

impl<T: RngCore> V4Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::V4Generator;
    ///
    /// let mut g = V4Generator::with_rand08(rand::rngs::OsRng);
    /// println!("{}", g.generate());
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}

impl V1Generator<StdClock> {
    /// Creates a generator object reading the system clock, drawing the node ID and initial clock
    /// sequence from a random number generator that implements [`RngCore`] from `rand` (v0.8)
    /// crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::V1Generator;
    ///
    /// let mut g = V1Generator::with_rand08(&mut rand::rngs::OsRng);
    /// println!("{}", g.generate()?);
    /// # Ok::<(), uuid4122::Error>(())
    /// ```
    pub fn with_rand08<T: RngCore + ?Sized>(rng: &mut T) -> Self {
        Self::new(Adapter(rng), StdClock::new())
    }
}
