//! `spellstudy-navigation`: what a role gets to see.
//!
//! Two independent decisions live here and are deliberately not unified:
//! the bottom tab bundle (keyed by [`UserRole`](spellstudy_auth::UserRole))
//! and the dashboard category catalog (keyed by raw lowercase role strings).

pub mod catalog;
pub mod tabs;
pub mod visibility;

pub use catalog::{CATALOG, Category, Task, category_grants};
pub use tabs::{Tab, tabs_for_role};
pub use visibility::{
    GUEST_ROLE, QuickAction, VisibleCategories, VisibleCategory, dashboard_role, quick_actions,
    role_allows, visible_categories,
};
