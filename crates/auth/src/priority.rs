//! Display-vocabulary role tables (`"Super Admin"`, `"Teacher"`, ...).
//!
//! These key on the capitalized role names the backend puts on user
//! profiles. The lowercase `USER_ROLES` table lives in [`crate::roles`].

/// Rank returned for any role outside the table.
pub const FALLBACK_PRIORITY: u32 = 10;

const PRIORITIES: [(&str, u32); 9] = [
    ("Super Admin", 100),
    ("Admin", 90),
    ("Principal", 80),
    ("Vice Principal", 70),
    ("Teacher", 60),
    ("Staff", 50),
    ("Accountant", 40),
    ("Parent", 30),
    ("Student", 20),
];

/// Priority of a role (higher is more privileged).
///
/// Unknown roles get [`FALLBACK_PRIORITY`] instead of an error so new role
/// strings from the backend keep working.
pub fn priority_of(role: &str) -> u32 {
    PRIORITIES
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, p)| *p)
        .unwrap_or(FALLBACK_PRIORITY)
}

/// Whether `role` appears in the priority table.
pub fn is_ranked(role: &str) -> bool {
    PRIORITIES.iter().any(|(name, _)| *name == role)
}

/// Drawer-header label for a display-vocabulary role.
///
/// Falls back to the raw role, or `"User"` when there is none.
pub fn drawer_display_name(role: Option<&str>) -> &str {
    let Some(role) = role.filter(|r| !r.is_empty()) else {
        return "User";
    };
    match role {
        "Super Admin" => "Super Administrator",
        "Admin" => "Administrator",
        "Principal" => "Principal",
        "Vice Principal" => "Vice Principal",
        "Teacher" => "Teacher",
        "Accountant" => "Accountant",
        "Staff" => "Staff Member",
        "Parent" => "Parent",
        "Student" => "Student",
        other => other,
    }
}

/// Dashboard badge label for a lowercase role; falls back to the raw role.
pub fn dashboard_display_name(role: &str) -> &str {
    match role {
        "superuser" => "Super Administrator",
        "admin" => "Administrator",
        "teacher" => "Teacher",
        "accountant" => "Accountant",
        "student" => "Student",
        "parent" => "Parent",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn named_priorities() {
        assert_eq!(priority_of("Super Admin"), 100);
        assert_eq!(priority_of("Admin"), 90);
        assert_eq!(priority_of("Principal"), 80);
        assert_eq!(priority_of("Vice Principal"), 70);
        assert_eq!(priority_of("Teacher"), 60);
        assert_eq!(priority_of("Staff"), 50);
        assert_eq!(priority_of("Accountant"), 40);
        assert_eq!(priority_of("Parent"), 30);
        assert_eq!(priority_of("Student"), 20);
    }

    #[test]
    fn lowercase_names_are_not_in_this_table() {
        assert_eq!(priority_of("admin"), FALLBACK_PRIORITY);
        assert_eq!(priority_of("teacher"), FALLBACK_PRIORITY);
    }

    #[test]
    fn display_names() {
        assert_eq!(drawer_display_name(Some("Staff")), "Staff Member");
        assert_eq!(drawer_display_name(Some("janitor")), "janitor");
        assert_eq!(drawer_display_name(None), "User");
        assert_eq!(dashboard_display_name("superuser"), "Super Administrator");
        assert_eq!(dashboard_display_name("guest"), "guest");
    }

    proptest! {
        /// Any role outside the named set ranks at the fallback, below Teacher.
        #[test]
        fn unknown_roles_get_fallback_rank(role in "\\PC{0,24}") {
            prop_assume!(!is_ranked(&role));
            prop_assert_eq!(priority_of(&role), FALLBACK_PRIORITY);
            prop_assert!(priority_of(&role) < priority_of("Teacher"));
        }
    }
}
