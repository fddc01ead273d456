//! error types

use std::fmt;

/// which argument of a call was rejected
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Argument {
    /// the first person of a pair
    First,
    /// the second person of a pair
    Second,
    /// the single person passed to [`friends_of`](crate::FriendshipRegistry::friends_of)
    Person,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Argument::First => "first",
            Argument::Second => "second",
            Argument::Person => "requested",
        };
        write!(f, "{}", name)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A person-identifier was empty or contained only whitespace.
    #[error("invalid argument: {argument} person must not be blank")]
    InvalidArgument { argument: Argument },
}

impl Error {
    pub fn argument(&self) -> Argument {
        match self {
            Error::InvalidArgument { argument } => *argument,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
