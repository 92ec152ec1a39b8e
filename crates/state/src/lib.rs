//! `spellstudy-state`: the application store.
//!
//! A reducer over a fixed schema: actions in, immutable snapshots out. No IO;
//! persistence is an explicit step taken by callers after a successful auth
//! action.

pub mod action;
pub mod reducer;
pub mod state;
pub mod store;
pub mod subscription;

pub use action::{Action, ActionDecodeError, ActionKind};
pub use reducer::reduce;
pub use state::{
    AppState, DashboardStats, ListCache, Navigation, Reports, Selection, Session, SessionPatch,
    Theme, ThemePatch, UiState,
};
pub use store::{Store, StoreError};
pub use subscription::Subscription;
