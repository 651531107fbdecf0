//! # Event Discriminators
//!
//! Events written to `Program data:` lines are prefixed with an 8-byte tag
//! derived from the event name: the first 8 bytes of `sha256("event:<Name>")`.
//! This is the same tag Anchor programs emit, so payloads from any program
//! following that convention can be recognised without an IDL.
//!
//! [`DiscriminatorCache`] memoises the hash per name. It is owned by whoever
//! needs it (usually an [`EventExtractor`](crate::events::EventExtractor)) rather
//! than living in a global, and it is safe to share between threads.

use dashmap::DashMap;
use sha2::{Digest, Sha256};
use std::fmt;

/// Length of an event discriminator in bytes.
pub const DISCRIMINATOR_LEN: usize = 8;
/// Namespace prepended to the event name before hashing.
pub const EVENT_NAMESPACE: &str = "event";

/// An 8-byte tag identifying an event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventDiscriminator([u8; DISCRIMINATOR_LEN]);

impl EventDiscriminator {
    pub const fn new(bytes: [u8; DISCRIMINATOR_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; DISCRIMINATOR_LEN] {
        &self.0
    }

    /// Returns `true` if `data` starts with this discriminator.
    ///
    /// Data shorter than [`DISCRIMINATOR_LEN`] never matches.
    pub fn is_prefix_of(&self, data: &[u8]) -> bool {
        data.len() >= DISCRIMINATOR_LEN && data[..DISCRIMINATOR_LEN] == self.0
    }
}

impl From<[u8; DISCRIMINATOR_LEN]> for EventDiscriminator {
    fn from(bytes: [u8; DISCRIMINATOR_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for EventDiscriminator {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for EventDiscriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Computes the discriminator for `name` without caching.
pub fn compute_discriminator(name: &str) -> EventDiscriminator {
    let mut hasher = Sha256::new();
    hasher.update(EVENT_NAMESPACE.as_bytes());
    hasher.update(b":");
    hasher.update(name.as_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; DISCRIMINATOR_LEN];
    bytes.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
    EventDiscriminator(bytes)
}

/// A thread-safe memoisation table of event name to discriminator.
///
/// Entries are never evicted. Two threads racing on the same missing name may
/// both hash it; only one insert wins and both observe the same value.
#[derive(Debug, Default)]
pub struct DiscriminatorCache {
    entries: DashMap<String, EventDiscriminator>,
}

impl DiscriminatorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the discriminator for `name`, computing and storing it on first use.
    pub fn discriminator(&self, name: &str) -> EventDiscriminator {
        if let Some(hit) = self.entries.get(name) {
            return *hit;
        }
        *self
            .entries
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::debug!(event = name, "Computing event discriminator");
                compute_discriminator(name)
            })
    }

    /// Checks whether `data` is tagged with the discriminator of `name`.
    ///
    /// Fails closed: anything shorter than 8 bytes is `false`.
    pub fn matches(&self, data: &[u8], name: &str) -> bool {
        if data.len() < DISCRIMINATOR_LEN {
            return false;
        }
        self.discriminator(name).is_prefix_of(data)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
