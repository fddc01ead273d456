//! a thread-safe handle to a registry
//!
//! [`SharedRegistry`] wraps a [`FriendshipRegistry`] in `Arc<RwLock<_>>`. Registration takes the
//! write lock, so registrations are serialized. Lookups take the read lock and can run
//! concurrently. Cloning the handle shares the same registry.

use crate::{FriendshipRegistry, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// # Example
///
/// ```
/// use friendships::shared::SharedRegistry;
/// use std::thread;
///
/// let registry = SharedRegistry::new();
/// let handles: Vec<_> = ["Mati", "Kuba", "Roman"]
///     .into_iter()
///     .map(|friend| {
///         let registry = registry.clone();
///         thread::spawn(move || registry.register_friendship("Bartek", friend))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap()?;
/// }
/// assert_eq!(registry.friends_of("Bartek")?.len(), 3);
/// # Ok::<(), friendships::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<FriendshipRegistry>>,
}

impl SharedRegistry {
    pub fn new() -> Self {
        Self::from_registry(FriendshipRegistry::new())
    }

    pub fn from_registry(registry: FriendshipRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// See [`FriendshipRegistry::register_friendship`].
    pub fn register_friendship(&self, person_a: &str, person_b: &str) -> Result<()> {
        self.inner.write().register_friendship(person_a, person_b)
    }

    /// See [`FriendshipRegistry::friends_of`]. The friends are copied out, since a borrow can't
    /// outlive the lock.
    pub fn friends_of(&self, person: &str) -> Result<Vec<String>> {
        Ok(self.inner.read().friends_of(person)?.to_vec())
    }

    /// See [`FriendshipRegistry::are_friends`].
    pub fn are_friends(&self, person_a: &str, person_b: &str) -> Result<bool> {
        self.inner.read().are_friends(person_a, person_b)
    }

    /// Run `f` with the read lock held.
    pub fn read<R>(&self, f: impl FnOnce(&FriendshipRegistry) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<FriendshipRegistry> for SharedRegistry {
    fn from(registry: FriendshipRegistry) -> Self {
        Self::from_registry(registry)
    }
}
