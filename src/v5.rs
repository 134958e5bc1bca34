//! UUIDv5-related functionality

use crate::Uuid;
use sha1::{Digest, Sha1};

/// Represents a UUIDv5 generator that derives UUIDs from names within a namespace.
///
/// The same namespace and name always produce the same UUID.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{Uuid, V5Generator};
///
/// let g = V5Generator::new(Uuid::NAMESPACE_DNS);
/// assert_eq!(
///     g.generate("python.org").to_string(),
///     "886313e1-3b8a-5372-9b90-0c9aee199e5d"
/// );
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct V5Generator {
    namespace: Uuid,
}

impl V5Generator {
    /// Creates a generator bound to `namespace`.
    pub const fn new(namespace: Uuid) -> Self {
        Self { namespace }
    }

    /// Returns the namespace this generator is bound to.
    pub const fn namespace(&self) -> Uuid {
        self.namespace
    }

    /// Generates the UUIDv5 object of `name` within the namespace.
    pub fn generate(&self, name: &str) -> Uuid {
        let digest = Sha1::new()
            .chain_update(self.namespace.as_bytes())
            .chain_update(name.as_bytes())
            .finalize();

        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        bytes[6] = 0x50 | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Uuid::from(bytes)
    }
}
