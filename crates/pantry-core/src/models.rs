//! Domain models for Pantry.
//!
//! These are the core types shared across all crates.

pub mod recipe;
pub mod session;
pub mod user;
