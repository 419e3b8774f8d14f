//! Pantry Server — HTTP/JSON API over the recipe repositories.
//!
//! The binary entry point lives in `main.rs`; everything else is
//! library code so integration tests can drive the full router
//! against an in-memory store.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
