//! SurrealDB repository implementations.

mod recipe;
mod user;

pub use recipe::SurrealRecipeRepository;
pub use user::{SurrealUserRepository, verify_password};
