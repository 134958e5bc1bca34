//! Pluggable random number and time sources consumed by the UUID generators.

pub mod with_rand08;

#[cfg(test)]
pub(crate) mod tests;

/// A trait that defines the minimum random number generator interface for the generators.
///
/// Implementations must produce uniformly distributed values; generators that derive identity
/// from random bits (the node ID and clock sequence of [`V1Generator`](crate::V1Generator) and
/// every bit of a [`V4Generator`](crate::V4Generator) output) assume a cryptographically strong
/// source.
pub trait RandSource {
    /// Returns the next random `u32`.
    fn next_u32(&mut self) -> u32;

    /// Returns the next random `u16`.
    fn next_u16(&mut self) -> u16 {
        (self.next_u32() >> 16) as u16
    }
}

impl<T: RandSource + ?Sized> RandSource for &mut T {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_u16(&mut self) -> u16 {
        (**self).next_u16()
    }
}

/// A trait that defines the clock interface for [`V1Generator`](crate::V1Generator).
///
/// The generator anchors its timestamps to [`unix_ts_100ns`](TimeSource::unix_ts_100ns) once at
/// construction and then advances them by the monotonic [`ticks`](TimeSource::ticks) counter, so
/// later adjustments of the wall clock do not affect a running generator.
pub trait TimeSource {
    /// Returns the number of ticks per second counted by [`ticks`](TimeSource::ticks).
    fn frequency(&self) -> u64;

    /// Returns the current value of a monotonic tick counter.
    fn ticks(&mut self) -> u64;

    /// Returns the current wall-clock time in 100-nanosecond intervals since the Unix epoch.
    fn unix_ts_100ns(&mut self) -> u64;
}

/// [`TimeSource`] implementation that reads [`std::time::Instant`] for ticks at nanosecond
/// resolution and [`std::time::SystemTime`] for the wall clock.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct StdClock {
    origin: std::time::Instant,
}

impl StdClock {
    /// Creates a clock whose tick counter starts now.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for StdClock {
    fn frequency(&self) -> u64 {
        1_000_000_000
    }

    fn ticks(&mut self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }

    fn unix_ts_100ns(&mut self) -> u64 {
        use std::time;
        (time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .expect("clock may have gone backwards")
            .as_nanos()
            / 100) as u64
    }
}
