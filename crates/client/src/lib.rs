//! `spellstudy-client`
//!
//! The IO edge of the school client:
//! - persisted session storage (in-memory or SQLite)
//! - the REST client and its endpoint table
//! - session flows (restore, login, logout) that tie storage, the API and
//!   the state store together
//!
//! The backend stays the authority; nothing here caches resource data.

pub mod api;
pub mod config;
pub mod endpoints;
pub mod session;
pub mod storage;

pub use api::{ApiClient, ApiError, BatchRequest, DashboardBatch};
pub use config::ClientConfig;
pub use session::{AuthBackend, AuthError, Credentials, SessionService};
pub use storage::{KeyValueBackend, MemoryBackend, SqliteBackend, StorageService};
