//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Recipe operations that act on
//! a single record take an `owner_id` parameter so ownership isolation
//! is enforced at the query level: a record that exists but belongs to
//! someone else is indistinguishable from one that does not exist.

use uuid::Uuid;

use crate::error::PantryResult;
use crate::models::{
    recipe::{CreateRecipe, Recipe, UpdateRecipe},
    user::{CreateUser, User},
};

pub trait UserRepository: Send + Sync {
    /// Hashes the raw password and stores the new account.
    fn create(&self, input: CreateUser) -> impl Future<Output = PantryResult<User>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = PantryResult<User>> + Send;
    fn get_by_email(&self, email: &str) -> impl Future<Output = PantryResult<User>> + Send;
}

pub trait RecipeRepository: Send + Sync {
    fn create(&self, input: CreateRecipe) -> impl Future<Output = PantryResult<Recipe>> + Send;

    /// All recipes owned by `owner_id`, newest first.
    fn list_by_owner(
        &self,
        owner_id: Uuid,
    ) -> impl Future<Output = PantryResult<Vec<Recipe>>> + Send;

    fn get_by_id(
        &self,
        owner_id: Uuid,
        id: Uuid,
    ) -> impl Future<Output = PantryResult<Recipe>> + Send;

    /// All recipes regardless of owner, newest first (public feed).
    fn list_all(&self) -> impl Future<Output = PantryResult<Vec<Recipe>>> + Send;

    /// Single recipe regardless of owner (public feed).
    fn get_public(&self, id: Uuid) -> impl Future<Output = PantryResult<Recipe>> + Send;

    fn update(
        &self,
        owner_id: Uuid,
        id: Uuid,
        input: UpdateRecipe,
    ) -> impl Future<Output = PantryResult<Recipe>> + Send;

    /// Permanent delete. Referenced images are not cleaned up.
    fn delete(&self, owner_id: Uuid, id: Uuid) -> impl Future<Output = PantryResult<()>> + Send;
}
