use super::{RandSource, TimeSource};
use std::{cell::Cell, rc::Rc};

/// Random source returning `rand::random()` values.
pub struct ThreadRandSource;

impl RandSource for ThreadRandSource {
    fn next_u32(&mut self) -> u32 {
        rand::random()
    }
}

/// Random source returning the same value on every call.
pub struct ConstRandSource(pub u32);

impl RandSource for ConstRandSource {
    fn next_u32(&mut self) -> u32 {
        self.0
    }
}

/// Time source whose tick counter is moved by hand through a shared handle.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MockClock {
    pub frequency: u64,
    pub ticks: Rc<Cell<u64>>,
    pub unix_ts_100ns: u64,
}

impl MockClock {
    /// 2022-06-01T00:00:00Z
    pub const UNIX_TS_100NS: u64 = 16_540_416_000_000_000;

    pub fn new(frequency: u64) -> Self {
        Self {
            frequency,
            ticks: Rc::new(Cell::new(1_000)),
            unix_ts_100ns: Self::UNIX_TS_100NS,
        }
    }

    pub fn advance(&self, ticks: u64) {
        self.ticks.set(self.ticks.get() + ticks);
    }

    pub fn rewind(&self, ticks: u64) {
        self.ticks.set(self.ticks.get() - ticks);
    }
}

impl TimeSource for MockClock {
    fn frequency(&self) -> u64 {
        self.frequency
    }

    fn ticks(&mut self) -> u64 {
        self.ticks.get()
    }

    fn unix_ts_100ns(&mut self) -> u64 {
        self.unix_ts_100ns
    }
}
