//! `spellstudy-auth`: roles, permissions, user profiles and role resolution.
//!
//! Pure and transport-agnostic: nothing here talks to the network or storage.

pub mod permissions;
pub mod priority;
pub mod resolve;
pub mod roles;
pub mod user;

pub use permissions::Permission;
pub use priority::{FALLBACK_PRIORITY, dashboard_display_name, drawer_display_name, priority_of};
pub use resolve::{RoleInfo, resolve};
pub use roles::{RoleId, UserRole, role_rank};
pub use user::{DEFAULT_ROLE, User};
