//! Role gating for the dashboard.

use serde::Serialize;
use spellstudy_auth::RoleInfo;

use crate::catalog::{CATALOG, Category, Task};

/// Role used when the signed-in user has no resolvable role.
pub const GUEST_ROLE: &str = "guest";

/// `allowed` admits `role` if it lists it verbatim, or if it lists the
/// wildcard `all` and `role` is `superuser`.
///
/// Matching is exact and case-sensitive.
pub fn role_allows(allowed: &[&str], role: &str) -> bool {
    if role == "superuser" && allowed.contains(&"all") {
        return true;
    }
    allowed.contains(&role)
}

/// The dashboard's role: primary role, else highest-priority role, else
/// [`GUEST_ROLE`].
pub fn dashboard_role(info: &RoleInfo) -> &str {
    info.primary_role
        .as_ref()
        .or(info.highest_priority_role.as_ref())
        .map(|r| r.as_str())
        .unwrap_or(GUEST_ROLE)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleCategory {
    pub category: &'static Category,
    pub tasks: Vec<&'static Task>,
}

/// Categories a role may open, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisibleCategories {
    entries: Vec<VisibleCategory>,
}

impl VisibleCategories {
    pub fn get(&self, id: &str) -> Option<&VisibleCategory> {
        self.entries.iter().find(|e| e.category.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.category.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VisibleCategory> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Filter the catalog down to what `role` may see.
///
/// Tasks are filtered with the same category-level predicate, so an admitted
/// category keeps all of its tasks. Categories left with no tasks are dropped.
pub fn visible_categories(role: &str) -> VisibleCategories {
    let entries = CATALOG
        .iter()
        .filter(|category| role_allows(category.roles, role))
        .filter_map(|category| {
            let tasks: Vec<&'static Task> = category
                .tasks
                .iter()
                .filter(|_| role_allows(category.roles, role))
                .collect();
            (!tasks.is_empty()).then_some(VisibleCategory { category, tasks })
        })
        .collect();

    VisibleCategories { entries }
}

/// A dashboard shortcut outside the category grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub route: &'static str,
    pub roles: &'static [&'static str],
}

const QUICK_ACTIONS: [QuickAction; 1] = [QuickAction {
    id: "newAdmission",
    title: "New Admission",
    subtitle: "Add new student",
    icon: "🎓",
    route: "AddStudentScreen",
    roles: &["superuser", "admin"],
}];

pub fn quick_actions(role: &str) -> Vec<QuickAction> {
    QUICK_ACTIONS
        .into_iter()
        .filter(|a| role_allows(a.roles, role))
        .collect()
}
