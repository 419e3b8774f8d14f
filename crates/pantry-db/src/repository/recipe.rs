//! SurrealDB implementation of [`RecipeRepository`].
//!
//! Every operation on a single record filters on `owner_id` in the
//! same statement, so "not yours" and "does not exist" collapse into
//! the same `NotFound` outcome. The public feed operations are the
//! only unscoped reads.

use chrono::{DateTime, Utc};
use pantry_core::error::PantryResult;
use pantry_core::models::recipe::{CreateRecipe, Recipe, UpdateRecipe};
use pantry_core::repository::RecipeRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct RecipeRow {
    owner_id: String,
    title: String,
    description: String,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    prep_time: u32,
    cook_time: u32,
    servings: u32,
    category: String,
    image: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct RecipeRowWithId {
    record_id: String,
    owner_id: String,
    title: String,
    description: String,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    prep_time: u32,
    cook_time: u32,
    servings: u32,
    category: String,
    image: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RecipeRow {
    fn into_recipe(self, id: Uuid) -> Result<Recipe, DbError> {
        let owner_id = Uuid::parse_str(&self.owner_id)
            .map_err(|e| DbError::Query(format!("invalid owner UUID: {e}")))?;
        Ok(Recipe {
            id,
            title: self.title,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            category: self.category,
            image: self.image,
            owner_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl RecipeRowWithId {
    fn try_into_recipe(self) -> Result<Recipe, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Query(format!("invalid UUID: {e}")))?;
        let owner_id = Uuid::parse_str(&self.owner_id)
            .map_err(|e| DbError::Query(format!("invalid owner UUID: {e}")))?;
        Ok(Recipe {
            id,
            title: self.title,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            category: self.category,
            image: self.image,
            owner_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// SurrealDB implementation of the Recipe repository.
#[derive(Clone)]
pub struct SurrealRecipeRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealRecipeRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> RecipeRepository for SurrealRecipeRepository<C> {
    async fn create(&self, input: CreateRecipe) -> PantryResult<Recipe> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('recipe', $id) SET \
                 owner_id = $owner_id, \
                 title = $title, description = $description, \
                 ingredients = $ingredients, \
                 instructions = $instructions, \
                 prep_time = $prep_time, cook_time = $cook_time, \
                 servings = $servings, \
                 category = $category, image = $image",
            )
            .bind(("id", id_str.clone()))
            .bind(("owner_id", input.owner_id.to_string()))
            .bind(("title", input.title))
            .bind(("description", input.description))
            .bind(("ingredients", input.ingredients))
            .bind(("instructions", input.instructions))
            .bind(("prep_time", input.prep_time))
            .bind(("cook_time", input.cook_time))
            .bind(("servings", input.servings))
            .bind(("category", input.category))
            .bind(("image", input.image))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<RecipeRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "recipe".into(),
            id: id_str,
        })?;

        Ok(row.into_recipe(id)?)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> PantryResult<Vec<Recipe>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM recipe \
                 WHERE owner_id = $owner_id \
                 ORDER BY created_at DESC",
            )
            .bind(("owner_id", owner_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<RecipeRowWithId> = result.take(0).map_err(DbError::from)?;

        let recipes = rows
            .into_iter()
            .map(|row| row.try_into_recipe())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(recipes)
    }

    async fn get_by_id(&self, owner_id: Uuid, id: Uuid) -> PantryResult<Recipe> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query(
                "SELECT * FROM type::record('recipe', $id) \
                 WHERE owner_id = $owner_id",
            )
            .bind(("id", id_str.clone()))
            .bind(("owner_id", owner_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<RecipeRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "recipe".into(),
            id: id_str,
        })?;

        Ok(row.into_recipe(id)?)
    }

    async fn list_all(&self) -> PantryResult<Vec<Recipe>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM recipe \
                 ORDER BY created_at DESC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<RecipeRowWithId> = result.take(0).map_err(DbError::from)?;

        let recipes = rows
            .into_iter()
            .map(|row| row.try_into_recipe())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(recipes)
    }

    async fn get_public(&self, id: Uuid) -> PantryResult<Recipe> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('recipe', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<RecipeRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "recipe".into(),
            id: id_str,
        })?;

        Ok(row.into_recipe(id)?)
    }

    async fn update(&self, owner_id: Uuid, id: Uuid, input: UpdateRecipe) -> PantryResult<Recipe> {
        let id_str = id.to_string();

        let mut sets = Vec::new();
        if input.title.is_some() {
            sets.push("title = $title");
        }
        if input.description.is_some() {
            sets.push("description = $description");
        }
        if input.ingredients.is_some() {
            sets.push("ingredients = $ingredients");
        }
        if input.instructions.is_some() {
            sets.push("instructions = $instructions");
        }
        if input.prep_time.is_some() {
            sets.push("prep_time = $prep_time");
        }
        if input.cook_time.is_some() {
            sets.push("cook_time = $cook_time");
        }
        if input.servings.is_some() {
            sets.push("servings = $servings");
        }
        if input.category.is_some() {
            sets.push("category = $category");
        }
        if input.image.is_some() {
            sets.push("image = $image");
        }
        sets.push("updated_at = time::now()");

        let query = format!(
            "UPDATE type::record('recipe', $id) SET {} \
             WHERE owner_id = $owner_id",
            sets.join(", ")
        );

        let mut builder = self
            .db
            .query(&query)
            .bind(("id", id_str.clone()))
            .bind(("owner_id", owner_id.to_string()));

        if let Some(title) = input.title {
            builder = builder.bind(("title", title));
        }
        if let Some(description) = input.description {
            builder = builder.bind(("description", description));
        }
        if let Some(ingredients) = input.ingredients {
            builder = builder.bind(("ingredients", ingredients));
        }
        if let Some(instructions) = input.instructions {
            builder = builder.bind(("instructions", instructions));
        }
        if let Some(prep_time) = input.prep_time {
            builder = builder.bind(("prep_time", prep_time));
        }
        if let Some(cook_time) = input.cook_time {
            builder = builder.bind(("cook_time", cook_time));
        }
        if let Some(servings) = input.servings {
            builder = builder.bind(("servings", servings));
        }
        if let Some(category) = input.category {
            builder = builder.bind(("category", category));
        }
        if let Some(image) = input.image {
            builder = builder.bind(("image", image));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<RecipeRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "recipe".into(),
            id: id_str,
        })?;

        Ok(row.into_recipe(id)?)
    }

    async fn delete(&self, owner_id: Uuid, id: Uuid) -> PantryResult<()> {
        let id_str = id.to_string();

        // RETURN BEFORE yields the deleted record, so an empty result
        // distinguishes "nothing deleted" from success.
        let mut result = self
            .db
            .query(
                "DELETE type::record('recipe', $id) \
                 WHERE owner_id = $owner_id RETURN BEFORE",
            )
            .bind(("id", id_str.clone()))
            .bind(("owner_id", owner_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<RecipeRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(DbError::NotFound {
                entity: "recipe".into(),
                id: id_str,
            }
            .into());
        }

        Ok(())
    }
}
