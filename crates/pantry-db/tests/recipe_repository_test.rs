//! Integration tests for the Recipe repository using in-memory SurrealDB.

use pantry_core::error::PantryError;
use pantry_core::models::recipe::{CreateRecipe, UpdateRecipe};
use pantry_core::repository::RecipeRepository;
use pantry_db::repository::SurrealRecipeRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    pantry_db::run_migrations(&db).await.unwrap();
    db
}

fn sample_recipe(owner_id: Uuid, title: &str) -> CreateRecipe {
    CreateRecipe {
        owner_id,
        title: title.into(),
        description: "A test recipe".into(),
        ingredients: vec!["flour".into(), "water".into()],
        instructions: vec!["mix".into(), "bake".into()],
        prep_time: 10,
        cook_time: 25,
        servings: 4,
        category: "baking".into(),
        image: String::new(),
    }
}

#[tokio::test]
async fn create_and_get_recipe() {
    let db = setup().await;
    let repo = SurrealRecipeRepository::new(db);
    let owner = Uuid::new_v4();

    let recipe = repo.create(sample_recipe(owner, "Bread")).await.unwrap();

    assert_eq!(recipe.title, "Bread");
    assert_eq!(recipe.owner_id, owner);
    assert_eq!(recipe.ingredients, vec!["flour", "water"]);
    assert_eq!(recipe.instructions, vec!["mix", "bake"]);
    assert_eq!(recipe.prep_time, 10);
    assert_eq!(recipe.cook_time, 25);
    assert_eq!(recipe.servings, 4);
    assert_eq!(recipe.category, "baking");
    assert_eq!(recipe.image, "");

    let fetched = repo.get_by_id(owner, recipe.id).await.unwrap();
    assert_eq!(fetched, recipe);
}

#[tokio::test]
async fn list_by_owner_is_scoped_and_newest_first() {
    let db = setup().await;
    let repo = SurrealRecipeRepository::new(db);
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    repo.create(sample_recipe(alice, "First")).await.unwrap();
    repo.create(sample_recipe(alice, "Second")).await.unwrap();
    repo.create(sample_recipe(bob, "Other")).await.unwrap();

    let recipes = repo.list_by_owner(alice).await.unwrap();
    assert_eq!(recipes.len(), 2);
    assert!(recipes.iter().all(|r| r.owner_id == alice));

    // Newest first.
    assert_eq!(recipes[0].title, "Second");
    assert_eq!(recipes[1].title, "First");
    assert!(recipes[0].created_at >= recipes[1].created_at);
}

#[tokio::test]
async fn get_by_id_enforces_ownership() {
    let db = setup().await;
    let repo = SurrealRecipeRepository::new(db);
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let recipe = repo.create(sample_recipe(alice, "Private")).await.unwrap();

    // Owner sees it.
    assert!(repo.get_by_id(alice, recipe.id).await.is_ok());

    // A different user gets NotFound, indistinguishable from absence.
    let result = repo.get_by_id(bob, recipe.id).await;
    assert!(matches!(result, Err(PantryError::NotFound { .. })));
}

#[tokio::test]
async fn public_feed_ignores_ownership() {
    let db = setup().await;
    let repo = SurrealRecipeRepository::new(db);
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let a = repo.create(sample_recipe(alice, "Alice's")).await.unwrap();
    let b = repo.create(sample_recipe(bob, "Bob's")).await.unwrap();

    let all = repo.list_all().await.unwrap();
    assert_eq!(all.len(), 2);
    // Newest first.
    assert_eq!(all[0].id, b.id);
    assert_eq!(all[1].id, a.id);

    // Anyone can read a single recipe through the public path.
    let fetched = repo.get_public(a.id).await.unwrap();
    assert_eq!(fetched.id, a.id);
}

#[tokio::test]
async fn update_changes_only_named_fields() {
    let db = setup().await;
    let repo = SurrealRecipeRepository::new(db);
    let owner = Uuid::new_v4();

    let recipe = repo.create(sample_recipe(owner, "Stew")).await.unwrap();

    let updated = repo
        .update(
            owner,
            recipe.id,
            UpdateRecipe {
                title: Some("Hearty Stew".into()),
                prep_time: Some(15),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Hearty Stew");
    assert_eq!(updated.prep_time, 15);

    // Everything else stays as it was.
    assert_eq!(updated.description, recipe.description);
    assert_eq!(updated.ingredients, recipe.ingredients);
    assert_eq!(updated.cook_time, recipe.cook_time);
    assert_eq!(updated.servings, recipe.servings);
    assert_eq!(updated.created_at, recipe.created_at);

    // The modification timestamp moves forward.
    assert!(updated.updated_at > recipe.updated_at);
}

#[tokio::test]
async fn update_enforces_ownership() {
    let db = setup().await;
    let repo = SurrealRecipeRepository::new(db);
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let recipe = repo.create(sample_recipe(alice, "Cake")).await.unwrap();

    let result = repo
        .update(
            bob,
            recipe.id,
            UpdateRecipe {
                title: Some("Stolen Cake".into()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(PantryError::NotFound { .. })));

    // The recipe is unchanged.
    let fetched = repo.get_by_id(alice, recipe.id).await.unwrap();
    assert_eq!(fetched.title, "Cake");
}

#[tokio::test]
async fn update_missing_recipe_not_found() {
    let db = setup().await;
    let repo = SurrealRecipeRepository::new(db);

    let result = repo
        .update(
            Uuid::new_v4(),
            Uuid::new_v4(),
            UpdateRecipe {
                title: Some("Ghost".into()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(PantryError::NotFound { .. })));
}

#[tokio::test]
async fn delete_is_permanent() {
    let db = setup().await;
    let repo = SurrealRecipeRepository::new(db);
    let owner = Uuid::new_v4();

    let recipe = repo.create(sample_recipe(owner, "Soup")).await.unwrap();

    repo.delete(owner, recipe.id).await.unwrap();

    let result = repo.get_by_id(owner, recipe.id).await;
    assert!(matches!(result, Err(PantryError::NotFound { .. })));

    // Gone from the public feed too.
    let public = repo.get_public(recipe.id).await;
    assert!(matches!(public, Err(PantryError::NotFound { .. })));
}

#[tokio::test]
async fn delete_enforces_ownership() {
    let db = setup().await;
    let repo = SurrealRecipeRepository::new(db);
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let recipe = repo.create(sample_recipe(alice, "Pie")).await.unwrap();

    let result = repo.delete(bob, recipe.id).await;
    assert!(matches!(result, Err(PantryError::NotFound { .. })));

    // Still there for the owner.
    assert!(repo.get_by_id(alice, recipe.id).await.is_ok());
}

#[tokio::test]
async fn delete_missing_recipe_not_found() {
    let db = setup().await;
    let repo = SurrealRecipeRepository::new(db);

    let result = repo.delete(Uuid::new_v4(), Uuid::new_v4()).await;
    assert!(matches!(result, Err(PantryError::NotFound { .. })));
}
