use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier as issued by the backend (e.g. `"Admin"`, `"teacher"`).
///
/// Roles stay opaque strings at this layer. The backend is not consistent
/// about casing, and the two gating mechanisms in the app key on different
/// vocabularies, so no normalization happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(Cow<'static, str>);

impl RoleId {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RoleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoleId {
    fn from(value: &str) -> Self {
        Self(Cow::Owned(value.to_string()))
    }
}

impl From<String> for RoleId {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl PartialEq<str> for RoleId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for RoleId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// The lowercase `USER_ROLES` vocabulary used by tab selection and the
/// category catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Superuser,
    Admin,
    Principal,
    Teacher,
    Staff,
    Accountant,
    Student,
    Parent,
}

impl UserRole {
    pub const ALL: [UserRole; 8] = [
        UserRole::Superuser,
        UserRole::Admin,
        UserRole::Principal,
        UserRole::Teacher,
        UserRole::Staff,
        UserRole::Accountant,
        UserRole::Student,
        UserRole::Parent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Superuser => "superuser",
            UserRole::Admin => "admin",
            UserRole::Principal => "principal",
            UserRole::Teacher => "teacher",
            UserRole::Staff => "staff",
            UserRole::Accountant => "accountant",
            UserRole::Student => "student",
            UserRole::Parent => "parent",
        }
    }

    /// Exact, case-sensitive lookup. `"Admin"` is not `admin`.
    pub fn parse(role: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == role)
    }

    /// Rank in the lowercase priority table (higher is more privileged).
    ///
    /// This table is independent of [`crate::priority_of`]; the two are kept
    /// apart on purpose and disagree on vocabulary and scale.
    pub fn rank(&self) -> u8 {
        match self {
            UserRole::Superuser => 7,
            UserRole::Admin => 6,
            UserRole::Principal => 5,
            UserRole::Teacher => 4,
            UserRole::Accountant => 3,
            UserRole::Staff => 2,
            UserRole::Student | UserRole::Parent => 1,
        }
    }

    pub fn role_id(&self) -> RoleId {
        RoleId::from_static(self.as_str())
    }
}

impl core::fmt::Display for UserRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rank of a role string in the lowercase table; `None` for anything outside
/// the `USER_ROLES` vocabulary.
pub fn role_rank(role: &str) -> Option<u8> {
    UserRole::parse(role).map(|r| r.rank())
}
