//! Bottom tab bundles.

use serde::Serialize;
use spellstudy_auth::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tab {
    /// Route name; stable across roles.
    pub name: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn tab(name: &'static str, label: &'static str, icon: &'static str) -> Tab {
    Tab { name, label, icon }
}

const DASHBOARD: Tab = tab("Dashboard", "Dashboard", "dashboard");
const STUDENTS: Tab = tab("Students", "Students", "school");
const CLASSES: Tab = tab("Classes", "Classes", "class");
const STAFF: Tab = tab("Staff", "Staff", "people");
const FEES: Tab = tab("Fees", "Fees", "payment");
const MORE: Tab = tab("More", "More", "more-horiz");

/// Tabs for a user's raw role string.
///
/// A missing role is treated as `staff`. Roles outside the lowercase
/// vocabulary (including differently cased ones) get the default bundle.
pub fn tabs_for_role(role: Option<&str>) -> Vec<Tab> {
    let role = UserRole::parse(role.unwrap_or(UserRole::Staff.as_str()));

    match role {
        Some(UserRole::Admin | UserRole::Principal) => vec![DASHBOARD, STUDENTS, CLASSES, STAFF, MORE],
        Some(UserRole::Teacher) => vec![
            DASHBOARD,
            Tab {
                label: "My Students",
                ..STUDENTS
            },
            Tab {
                label: "My Classes",
                ..CLASSES
            },
            MORE,
        ],
        Some(UserRole::Accountant) => vec![DASHBOARD, STUDENTS, FEES, MORE],
        _ => vec![DASHBOARD, STUDENTS, MORE],
    }
}
