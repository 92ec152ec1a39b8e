//! Role resolution: `User` → `RoleInfo`.

use serde::{Deserialize, Serialize};

use crate::{Permission, RoleId, User, priority_of};

/// Role-derived view of the signed-in user.
///
/// Never authored directly; always produced by [`resolve`]. The default value
/// is the logged-out state (no role, level 0). Field names are camelCase on
/// the wire, like every other store payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleInfo {
    pub primary_role: Option<RoleId>,
    pub all_roles: Vec<RoleId>,
    pub highest_priority_role: Option<RoleId>,
    pub highest_priority_level: u32,
    pub permissions: Vec<Permission>,
}

impl RoleInfo {
    pub fn primary_role(&self) -> Option<&str> {
        self.primary_role.as_ref().map(RoleId::as_str)
    }

    pub fn has_permission(&self, required: &Permission) -> bool {
        required.granted_by(&self.permissions)
    }
}

/// Derive [`RoleInfo`] from a user profile.
///
/// `highest_priority_role` is the user's primary role as-is; it is not the
/// maximum over `all_roles`, even when another held role outranks it.
pub fn resolve(user: &User) -> RoleInfo {
    let primary = user.role.clone();
    let all_roles = user
        .roles
        .clone()
        .unwrap_or_else(|| vec![primary.clone()]);

    RoleInfo {
        highest_priority_level: priority_of(primary.as_str()),
        highest_priority_role: Some(primary.clone()),
        primary_role: Some(primary),
        all_roles,
        permissions: user.permissions.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn resolve_single_role_user() {
        let user = User::new("t.one", "Teacher");
        let info = resolve(&user);

        assert_eq!(info.primary_role(), Some("Teacher"));
        assert_eq!(info.all_roles, vec![RoleId::from("Teacher")]);
        assert_eq!(info.highest_priority_level, 60);
        assert!(info.permissions.is_empty());
    }

    #[test]
    fn highest_priority_role_is_not_the_max() {
        let user = User {
            roles: Some(vec![RoleId::from("Teacher"), RoleId::from("Super Admin")]),
            ..User::new("t.two", "Teacher")
        };
        let info = resolve(&user);

        assert_eq!(info.highest_priority_role, Some(RoleId::from("Teacher")));
        assert_eq!(info.highest_priority_level, 60);
        assert_eq!(info.all_roles.len(), 2);
    }

    #[test]
    fn permissions_carry_over() {
        let user = User {
            permissions: Some(vec![Permission::from("fee.collect")]),
            ..User::new("acc", "Accountant")
        };
        let info = resolve(&user);
        assert!(info.has_permission(&Permission::from("fee.collect")));
        assert!(!info.has_permission(&Permission::from("staff.write")));
    }

    #[test]
    fn default_is_logged_out() {
        let info = RoleInfo::default();
        assert_eq!(info.primary_role(), None);
        assert_eq!(info.highest_priority_level, 0);
    }

    #[test]
    fn wire_form_is_camel_case() {
        let info = resolve(&User::new("a", "admin"));
        let wire = serde_json::to_value(&info).unwrap();

        assert_eq!(wire["primaryRole"], "admin");
        assert_eq!(wire["allRoles"], serde_json::json!(["admin"]));
        assert_eq!(wire["highestPriorityLevel"], 10);
        assert_eq!(serde_json::from_value::<RoleInfo>(wire).unwrap(), info);
    }

    proptest! {
        #[test]
        fn highest_priority_role_equals_user_role(
            role in "[A-Za-z ]{1,16}",
            extra in prop::collection::vec("[A-Za-z ]{1,16}", 0..5),
        ) {
            let user = User {
                roles: if extra.is_empty() {
                    None
                } else {
                    Some(extra.iter().map(|r| RoleId::from(r.as_str())).collect())
                },
                ..User::new("p", role.as_str())
            };
            let info = resolve(&user);

            prop_assert_eq!(info.highest_priority_role.as_ref(), Some(&user.role));
            prop_assert_eq!(info.highest_priority_level, priority_of(user.role.as_str()));
        }
    }
}
