//! iterator types

use crate::FriendshipRegistry;

/// An iterator over `(&str, &[String])` person/friends pairs. Returned by
/// [`iter`](crate::FriendshipRegistry::iter) or automatically constructed by iterating over
/// `&FriendshipRegistry`.
///
/// The order is unspecified.
#[derive(Clone, Debug)]
pub struct Iter<'registry> {
    pub(crate) inner: hashbrown::hash_map::Iter<'registry, String, Vec<String>>,
}

impl<'registry> Iterator for Iter<'registry> {
    type Item = (&'registry str, &'registry [String]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(person, friends)| (person.as_str(), friends.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'registry> IntoIterator for &'registry FriendshipRegistry {
    type Item = (&'registry str, &'registry [String]);
    type IntoIter = Iter<'registry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over person names. Returned by [`people`](crate::FriendshipRegistry::people).
#[derive(Clone, Debug)]
pub struct People<'registry> {
    pub(crate) inner: Iter<'registry>,
}

impl<'registry> Iterator for People<'registry> {
    type Item = &'registry str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(person, _friends)| person)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for People<'_> {}
