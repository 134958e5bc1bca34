//! UUIDv1-related functionality

use crate::error::{Error, Result};
use crate::generator::{RandSource, TimeSource};
use crate::Uuid;

/// Number of 100-nanosecond intervals between 1582-10-15 and 1970-01-01.
const GREGORIAN_TO_UNIX_100NS: u64 = 0x01b2_1dd2_1381_4000;

const INTERVALS_PER_SECOND: u128 = 10_000_000;

/// Number of 100-nanosecond intervals in a millisecond, which is also the maximum number of UUIDs
/// a generator stamps ahead of a clock that has not moved.
const MAX_EXTRA_INTERVALS: u64 = 10_000;

const MAX_TIMESTAMP: u64 = (1 << 60) - 1;

const MAX_CLOCK_SEQ: u16 = (1 << 14) - 1;

/// Represents a UUIDv1 generator that stamps UUIDs with a 60-bit Gregorian timestamp, a 14-bit
/// clock sequence, and a 6-byte node ID.
///
/// The generator reads the wall clock once at construction and derives every subsequent timestamp
/// from a monotonic tick counter, so the UUIDs from one generator are strictly increasing under
/// the [`Uuid`] ordering unless the tick counter itself moves backwards. When a tick counter with
/// a resolution coarser than 100 nanoseconds returns the same reading repeatedly, the generator
/// stamps consecutive UUIDs with consecutive 100-nanosecond intervals ahead of the clock, up to
/// 10,000 of them, after which [`generate`](V1Generator::generate) returns [`Error::RateLimit`]
/// until the clock moves. When the tick counter moves backwards, the generator increments the
/// clock sequence to keep the UUIDs unique.
///
/// The generator is not synchronized. Share it across threads through a [`Mutex`] to keep the
/// ordering guarantee process-wide:
///
/// ```rust
/// use std::{sync, thread};
/// use uuid4122::V1Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V1Generator::with_rand08(&mut rand::thread_rng())));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate().unwrap(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
///
/// [`Mutex`]: std::sync::Mutex
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct V1Generator<T> {
    clock_seq: u16,
    node_id: [u8; 6],

    /// Timestamp corresponding to `origin_ticks`.
    zero_point: u64,
    origin_ticks: u64,

    /// Elapsed intervals observed by the last successful `generate()` call.
    last_intervals: u64,
    extra_intervals: u64,

    /// The time source used by the generator.
    clock: T,
}

impl<T: TimeSource> V1Generator<T> {
    /// Creates a generator instance with a random node ID and clock sequence.
    ///
    /// The node ID has the multicast bit set so that it never collides with an IEEE 802 MAC
    /// address.
    pub fn new<R: RandSource>(mut rng: R, clock: T) -> Self {
        let mut node_id = [0u8; 6];
        node_id[..4].copy_from_slice(&rng.next_u32().to_be_bytes());
        node_id[4..].copy_from_slice(&rng.next_u16().to_be_bytes());
        node_id[0] |= 0x01;
        let clock_seq = rng.next_u16() & MAX_CLOCK_SEQ;
        Self::with_state(node_id, clock_seq, clock)
    }

    /// Creates a generator instance with the given node ID and a random clock sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if `node_id` is not exactly 6 bytes long.
    pub fn with_node_id<R: RandSource>(mut rng: R, node_id: &[u8], clock: T) -> Result<Self> {
        let node_id = <[u8; 6]>::try_from(node_id)
            .map_err(|_| Error::Argument("node ID must be exactly 6 bytes long"))?;
        Ok(Self::with_state(node_id, rng.next_u16() & MAX_CLOCK_SEQ, clock))
    }

    /// Creates a generator instance that takes over the node ID and clock sequence of another
    /// generator.
    ///
    /// Only the lower 14 bits of `clock_seq` are used.
    pub fn with_state(node_id: [u8; 6], clock_seq: u16, mut clock: T) -> Self {
        let zero_point = GREGORIAN_TO_UNIX_100NS + clock.unix_ts_100ns();
        let origin_ticks = clock.ticks();
        log::trace!("uuid v1 generator created: node {node_id:02x?}, clock sequence {clock_seq}");
        Self {
            clock_seq: clock_seq & MAX_CLOCK_SEQ,
            node_id,
            zero_point,
            origin_ticks,
            last_intervals: 0,
            extra_intervals: 0,
            clock,
        }
    }

    /// Creates a generator instance that continues from the last UUID generated by a previous
    /// generator, possibly on another host.
    ///
    /// The new generator inherits the node ID and clock sequence of `last`. If the timestamp of
    /// `last` is not behind the current timestamp of this generator, which happens when this
    /// host's clock is behind the one that generated `last`, the clock sequence is incremented
    /// to keep the new UUIDs distinct from the previous ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if `last` is not a version 1 UUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::{StdClock, Uuid, V1Generator};
    ///
    /// let last = Uuid::from_fields_v1((1 << 60) - 1, 42, [1, 2, 3, 4, 5, 6]);
    /// let mut g = V1Generator::from_last_uuid(last, StdClock::new())?;
    /// assert_eq!(g.node_id(), [1, 2, 3, 4, 5, 6]);
    /// assert_eq!(g.clock_sequence(), 43);
    /// assert_eq!(g.generate()?.clock_sequence(), Some(43));
    /// # Ok::<(), uuid4122::Error>(())
    /// ```
    pub fn from_last_uuid(last: Uuid, clock: T) -> Result<Self> {
        let (Some(timestamp), Some(clock_seq), Some(node_id)) =
            (last.timestamp(), last.clock_sequence(), last.node_id())
        else {
            return Err(Error::Argument("last UUID must be a version 1 UUID"));
        };

        let mut g = Self::with_state(node_id, clock_seq, clock);
        if timestamp >= g.current_timestamp() {
            g.clock_seq = (g.clock_seq + 1) & MAX_CLOCK_SEQ;
            log::debug!(
                "last uuid {last} is not behind the clock; clock sequence incremented to {}",
                g.clock_seq
            );
        }
        Ok(g)
    }

    /// Returns the node ID.
    pub const fn node_id(&self) -> [u8; 6] {
        self.node_id
    }

    /// Returns the current clock sequence.
    pub const fn clock_sequence(&self) -> u16 {
        self.clock_seq
    }

    /// Generates a new UUIDv1 object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RateLimit`] if the clock has not moved during the last 10,000 calls. The
    /// generator state is left untouched, so a later call succeeds once the clock moves.
    pub fn generate(&mut self) -> Result<Uuid> {
        let intervals = self.elapsed_intervals();
        if intervals == self.last_intervals {
            if self.extra_intervals >= MAX_EXTRA_INTERVALS {
                log::warn!("uuid v1 generator exceeded {MAX_EXTRA_INTERVALS} UUIDs per clock tick");
                return Err(Error::RateLimit);
            }
            self.extra_intervals += 1;
        } else if intervals < self.last_intervals {
            self.clock_seq = (self.clock_seq + 1) & MAX_CLOCK_SEQ;
            self.extra_intervals = 0;
            log::debug!(
                "clock went backwards by {} intervals; clock sequence incremented to {}",
                self.last_intervals - intervals,
                self.clock_seq
            );
        } else {
            // carry over the intervals stamped ahead that the clock has not caught up with yet
            let stamped = self.last_intervals + self.extra_intervals;
            self.extra_intervals = (stamped + 1).saturating_sub(intervals);
        }
        self.last_intervals = intervals;

        let timestamp = self
            .zero_point
            .wrapping_add(intervals)
            .wrapping_add(self.extra_intervals);
        Ok(Uuid::from_fields_v1(
            timestamp & MAX_TIMESTAMP,
            self.clock_seq,
            self.node_id,
        ))
    }

    /// Returns the timestamp the next call of `generate()` would stamp, without consuming it.
    fn current_timestamp(&mut self) -> u64 {
        self.zero_point.wrapping_add(self.elapsed_intervals()) & MAX_TIMESTAMP
    }

    /// Converts the ticks elapsed since construction into 100-nanosecond intervals.
    fn elapsed_intervals(&mut self) -> u64 {
        let ticks = self.clock.ticks().saturating_sub(self.origin_ticks);
        let frequency = self.clock.frequency().max(1);
        (ticks as u128 * INTERVALS_PER_SECOND / frequency as u128) as u64
    }
}
