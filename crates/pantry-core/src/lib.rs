//! Pantry Core — shared domain types for the recipe service.
//!
//! This crate defines:
//! - Domain models ([`models::recipe`], [`models::user`], [`models::session`])
//! - The error taxonomy shared across all crates ([`PantryError`])
//! - Repository traits implemented by `pantry-db` ([`repository`])

pub mod error;
pub mod models;
pub mod repository;

pub use error::{PantryError, PantryResult};
