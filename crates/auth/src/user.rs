//! User profile as returned by the backend on login and persisted on device.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use spellstudy_core::{SchoolId, UserId};

use crate::{Permission, RoleId};

/// Role assumed when the backend omits one.
pub const DEFAULT_ROLE: RoleId = RoleId::from_static("Staff");

fn default_role() -> RoleId {
    DEFAULT_ROLE
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Authenticated user profile.
///
/// Immutable for the lifetime of a session; a re-login replaces it wholesale.
/// Fields the client does not model are kept in `extra` so the persisted blob
/// survives a save/load cycle unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// `_id` on the wire. A plain `id` key stays in `extra`; see
    /// [`User::normalized`].
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,

    /// Missing or `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,

    /// Human-readable name (`personname` on the wire).
    #[serde(rename = "personname", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default = "default_role")]
    pub role: RoleId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<RoleId>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<Permission>>,

    #[serde(rename = "schoolId", alias = "school_id", default, skip_serializing_if = "Option::is_none")]
    pub school_id: Option<SchoolId>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(username: impl Into<String>, role: impl Into<RoleId>) -> Self {
        Self {
            id: None,
            username: username.into(),
            display_name: None,
            email: None,
            role: role.into(),
            roles: None,
            permissions: None,
            school_id: None,
            extra: Map::new(),
        }
    }

    /// Fill the role fields the way a fresh login does: a blank role becomes
    /// [`DEFAULT_ROLE`], missing `roles` become `[role]`, missing
    /// `permissions` become empty. Without `_id`, a string `id` from `extra`
    /// is used as the id.
    pub fn normalized(mut self) -> Self {
        if self.id.is_none() {
            self.id = self
                .extra
                .get("id")
                .and_then(Value::as_str)
                .and_then(|id| id.parse().ok());
        }
        if self.role.as_str().trim().is_empty() {
            self.role = DEFAULT_ROLE;
        }
        if self.roles.is_none() {
            self.roles = Some(vec![self.role.clone()]);
        }
        if self.permissions.is_none() {
            self.permissions = Some(Vec::new());
        }
        self
    }

    /// Name shown in greetings and the drawer header.
    pub fn display_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ if !self.username.is_empty() => &self.username,
            _ => "User",
        }
    }
}
