use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Permission string attached to a user profile (`user.permissions`).
///
/// The client never interprets these beyond exact match and the wildcard
/// `"all"`; screen gating is role-based, see `spellstudy-navigation`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub const WILDCARD: Permission = Permission(Cow::Borrowed("all"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_str() == "all"
    }

    /// True if `held` contains this permission or the wildcard.
    pub fn granted_by(&self, held: &[Permission]) -> bool {
        held.iter().any(|p| p.is_wildcard() || p == self)
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Permission {
    fn from(value: &str) -> Self {
        Self(Cow::Owned(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granted_by_exact_or_wildcard() {
        let read = Permission::from("student.read");
        assert!(read.granted_by(&[Permission::from("student.read")]));
        assert!(read.granted_by(&[Permission::WILDCARD]));
        assert!(!read.granted_by(&[Permission::from("student.write")]));
        assert!(!read.granted_by(&[]));
    }
}
