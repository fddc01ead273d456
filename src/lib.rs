//! An in-memory registry of mutual friendships between named people.
//!
//! A [`FriendshipRegistry`] maps each person to the ordered list of their direct friends.
//! Friendships are symmetric: [`register_friendship`](FriendshipRegistry::register_friendship)
//! always updates both sides in the same call, and it validates both names before touching
//! anything, so a rejected call leaves the registry exactly as it was.
//!
//! A person who has never been registered isn't an error. They just have no friends.
//!
//! ```
//! use friendships::FriendshipRegistry;
//!
//! let mut registry = FriendshipRegistry::new();
//! registry.register_friendship("Bartek", "Mati")?;
//! assert_eq!(registry.friends_of("Bartek")?, ["Mati"]);
//! assert_eq!(registry.friends_of("Mati")?, ["Bartek"]);
//! assert!(registry.are_friends("Mati", "Bartek")?);
//! assert!(registry.friends_of("Kuba")?.is_empty());
//! assert!(registry.register_friendship("Kuba", "   ").is_err());
//! # Ok::<(), friendships::Error>(())
//! ```
//!
//! `FriendshipRegistry` is an ordinary value with no interior mutability. Share it between threads
//! with [`SharedRegistry`](shared::SharedRegistry), which puts it behind a reader/writer lock.

pub mod error;
pub mod iter;
pub mod person;
pub mod shared;


pub use error::{Error, Result};

use error::Argument;
use iter::{Iter, People};

/// What [`register_friendship`](FriendshipRegistry::register_friendship) does when a pair is
/// registered more than once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// Append every time. Registering the same pair twice leaves each person with the other
    /// listed twice.
    #[default]
    Keep,
    /// Only append a friend who isn't already in the list. Lists keep their insertion order.
    Ignore,
}

#[derive(Clone, Debug, Default)]
pub struct FriendshipRegistry {
    friendships: hashbrown::HashMap<String, Vec<String>>,
    policy: DuplicatePolicy,
}

impl FriendshipRegistry {
    /// Construct a new, empty `FriendshipRegistry` that keeps duplicate registrations.
    ///
    /// The registry will not allocate until someone is registered.
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::Keep)
    }

    /// Construct a new, empty `FriendshipRegistry` with room for at least `capacity` people.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_policy_and_capacity(DuplicatePolicy::Keep, capacity)
    }

    /// Construct a new, empty `FriendshipRegistry` with a custom [`DuplicatePolicy`].
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self::with_policy_and_capacity(policy, 0)
    }

    pub fn with_policy_and_capacity(policy: DuplicatePolicy, capacity: usize) -> Self {
        Self {
            friendships: hashbrown::HashMap::with_capacity(capacity),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// The number of people with at least one registered friendship.
    pub fn len(&self) -> usize {
        self.friendships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friendships.is_empty()
    }

    /// Returns true if `person` has been registered. Blank names are never registered, so this
    /// returns false for them rather than an error.
    pub fn contains_person(&self, person: &str) -> bool {
        self.friendships.contains_key(person)
    }

    /// Make `person_a` and `person_b` friends of each other.
    ///
    /// `person_b` is appended to `person_a`'s friends and `person_a` to `person_b`'s, creating
    /// either entry if it doesn't exist yet. Under [`DuplicatePolicy::Ignore`], a side that
    /// already lists the other person is left alone.
    ///
    /// Registering someone with themselves is allowed. Under the default policy that lists them
    /// twice in their own friends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either name is empty or all whitespace. Both names
    /// are checked before anything is modified.
    pub fn register_friendship(&mut self, person_a: &str, person_b: &str) -> Result<()> {
        let person_a = person::validate(person_a, Argument::First)?;
        let person_b = person::validate(person_b, Argument::Second)?;
        self.add_friend(person_a, person_b);
        self.add_friend(person_b, person_a);
        tracing::debug!(person = person_a, friend = person_b, "registered friendship");
        Ok(())
    }

    fn add_friend(&mut self, person: &str, friend: &str) {
        // Look up by &str first so that existing entries don't allocate a new key.
        if let Some(friends) = self.friendships.get_mut(person) {
            if self.policy == DuplicatePolicy::Ignore && friends.iter().any(|f| f == friend) {
                return;
            }
            friends.push(friend.to_owned());
        } else {
            self.friendships
                .insert(person.to_owned(), vec![friend.to_owned()]);
        }
    }

    /// Get `person`'s friends, in the order they were registered.
    ///
    /// Someone who has never been registered has no friends, and this returns an empty slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `person` is empty or all whitespace.
    pub fn friends_of(&self, person: &str) -> Result<&[String]> {
        let person = person::validate(person, Argument::Person)?;
        let friends = self.lookup(person);
        tracing::trace!(person, count = friends.len(), "looked up friends");
        Ok(friends)
    }

    /// Returns true if `person_b` is one of `person_a`'s friends. If `person_a` has never been
    /// registered, the answer is false.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either name is empty or all whitespace.
    pub fn are_friends(&self, person_a: &str, person_b: &str) -> Result<bool> {
        let person_a = person::validate(person_a, Argument::First)?;
        let person_b = person::validate(person_b, Argument::Second)?;
        let result = self.lookup(person_a).iter().any(|f| f == person_b);
        tracing::trace!(person = person_a, other = person_b, result, "checked friendship");
        Ok(result)
    }

    fn lookup(&self, person: &str) -> &[String] {
        self.friendships
            .get(person)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterate over every registered person and their friends, in no particular order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.friendships.iter(),
        }
    }

    /// Iterate over every registered person, in no particular order.
    pub fn people(&self) -> People<'_> {
        People { inner: self.iter() }
    }
}
