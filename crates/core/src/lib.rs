//! `spellstudy-core`: shared foundation for the SpellStudy client crates.
//!
//! Pure primitives only (no IO, no HTTP, no storage).

pub mod error;
pub mod id;

pub use error::DomainError;
pub use id::{SchoolId, UserId};
