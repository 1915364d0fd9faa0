//! Post id allocation.

use std::fmt;
use std::str::FromStr;

use super::PostId;
use crate::error::DomainError;

/// How new post ids are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// `number of posts currently stored + 1`.
    ///
    /// After a delete this can hand out an id that is still in use
    /// (create 3, delete 2, create -> id 3 again).
    #[default]
    Length,
    /// A counter that only grows. Ids are unique for the process lifetime.
    Monotonic,
}

impl FromStr for IdPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(Self::Length),
            "monotonic" => Ok(Self::Monotonic),
            other => Err(DomainError::InvalidIdPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "length"),
            Self::Monotonic => write!(f, "monotonic"),
        }
    }
}

/// Hands out post ids according to an [`IdPolicy`].
///
/// Must be driven under the same lock that guards the post sequence so that
/// `current_len` is accurate.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    policy: IdPolicy,
    issued: PostId,
}

impl IdAllocator {
    pub fn new(policy: IdPolicy) -> Self {
        Self { policy, issued: 0 }
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Next id, given how many posts the store holds right now.
    pub fn next(&mut self, current_len: usize) -> PostId {
        let id = match self.policy {
            IdPolicy::Length => current_len as PostId + 1,
            IdPolicy::Monotonic => self.issued + 1,
        };
        self.issued = self.issued.max(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy() {
        assert_eq!("length".parse::<IdPolicy>(), Ok(IdPolicy::Length));
        assert_eq!(" Monotonic ".parse::<IdPolicy>(), Ok(IdPolicy::Monotonic));
        assert_eq!(
            "random".parse::<IdPolicy>(),
            Err(DomainError::InvalidIdPolicy("random".to_string()))
        );
    }

    #[test]
    fn test_length_policy_follows_store_size() {
        let mut ids = IdAllocator::new(IdPolicy::Length);
        assert_eq!(ids.next(0), 1);
        assert_eq!(ids.next(1), 2);
        assert_eq!(ids.next(2), 3);
        // one post deleted: size is back to 2
        assert_eq!(ids.next(2), 3);
    }

    #[test]
    fn test_monotonic_policy_ignores_store_size() {
        let mut ids = IdAllocator::new(IdPolicy::Monotonic);
        assert_eq!(ids.next(0), 1);
        assert_eq!(ids.next(1), 2);
        assert_eq!(ids.next(2), 3);
        assert_eq!(ids.next(2), 4);
        assert_eq!(ids.next(0), 5);
    }
}
