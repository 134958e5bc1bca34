//! Default generators and entry point functions

#![cfg(feature = "global_gen")]

use crate::error::Result;
use crate::generator::with_rand08::Adapter;
use crate::{StdClock, Uuid, V1Generator, V4Generator, V5Generator};
use rand::rngs::{OsRng, ThreadRng};
use std::cell::RefCell;

thread_local! {
    static GLOBAL_GEN: RefCell<GlobalGenInner> = RefCell::default();
}

/// Generates a UUIDv1 object.
///
/// This function employs a thread-local generator and guarantees the per-thread monotonic order of
/// UUIDs. On Unix, this function resets the generator when the process ID changes (i.e. upon
/// process forks) so that the child process draws a new node ID and clock sequence.
///
/// # Errors
///
/// Returns [`Error::RateLimit`](crate::Error::RateLimit) if the calling thread requests more
/// UUIDs than the system clock can stamp.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4122::uuid1()?;
/// println!("{uuid}"); // e.g., "c79f4001-e13d-11ec-80b4-01c04fd430c8"
/// assert_eq!(uuid.version(), 1);
/// # Ok::<(), uuid4122::Error>(())
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn uuid1() -> Result<Uuid> {
    GLOBAL_GEN.with(|g| g.borrow_mut().get_mut().v1.generate())
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4122::uuid4();
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn uuid4() -> Uuid {
    GLOBAL_GEN.with(|g| g.borrow_mut().get_mut().v4.generate())
}

/// Generates a UUIDv5 object of `name` within `namespace`.
///
/// # Examples
///
/// ```rust
/// use uuid4122::Uuid;
///
/// let uuid = uuid4122::uuid5(Uuid::NAMESPACE_DNS, "python.org");
/// assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn uuid5(namespace: Uuid, name: &str) -> Uuid {
    V5Generator::new(namespace).generate(name)
}

/// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
#[derive(Debug)]
struct GlobalGenInner {
    #[cfg(unix)]
    pid: u32,
    v1: V1Generator<StdClock>,
    v4: V4Generator<Adapter<ThreadRng>>,
}

impl Default for GlobalGenInner {
    fn default() -> Self {
        Self {
            #[cfg(unix)]
            pid: std::process::id(),
            v1: V1Generator::with_rand08(&mut OsRng),
            v4: V4Generator::with_rand08(rand::thread_rng()),
        }
    }
}

impl GlobalGenInner {
    /// Returns a mutable reference to the generators, resetting them on Unix if the process ID
    /// has changed.
    fn get_mut(&mut self) -> &mut Self {
        #[cfg(unix)]
        if self.pid != std::process::id() {
            // As of rand v0.8.5 and rand_chacha v0.3.1, up to 63 `u32` values have to be used
            // before ThreadRng reseeds after a fork.
            // See https://github.com/rust-random/rand/pull/1317
            let _: [[u32; 32]; 2] = rand::random();
            *self = Default::default();
        }
        self
    }
}
