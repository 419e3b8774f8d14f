//! Shared application state.

use pantry_db::{SurrealRecipeRepository, SurrealUserRepository};
use surrealdb::{Connection, Surreal};

/// Repositories shared by every request handler.
///
/// Generic over the SurrealDB connection type so the same handlers run
/// against the WebSocket engine in production and the in-memory engine
/// in tests.
pub struct AppState<C: Connection> {
    pub users: SurrealUserRepository<C>,
    pub recipes: SurrealRecipeRepository<C>,
}

impl<C: Connection> AppState<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self {
            users: SurrealUserRepository::new(db.clone()),
            recipes: SurrealRecipeRepository::new(db),
        }
    }
}
