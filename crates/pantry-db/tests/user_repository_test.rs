//! Integration tests for the User repository using in-memory SurrealDB.

use pantry_core::error::PantryError;
use pantry_core::models::user::{CreateUser, UserRole};
use pantry_core::repository::UserRepository;
use pantry_db::repository::SurrealUserRepository;
use pantry_db::verify_password;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    pantry_db::run_migrations(&db).await.unwrap();
    db
}

#[tokio::test]
async fn create_and_get_user() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let user = repo
        .create(CreateUser {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            password: "SuperSecret123!".into(),
        })
        .await
        .unwrap();

    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, UserRole::User);

    // Password should be hashed, not stored in plaintext.
    assert_ne!(user.password_hash, "SuperSecret123!");
    assert!(user.password_hash.starts_with("$argon2id$"));

    // Get by ID should return the same user.
    let fetched = repo.get_by_id(user.id).await.unwrap();
    assert_eq!(fetched.id, user.id);
    assert_eq!(fetched.name, "Alice");
}

#[tokio::test]
async fn password_verification() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let user = repo
        .create(CreateUser {
            name: "Bob".into(),
            email: "bob@example.com".into(),
            password: "MyPassword42!".into(),
        })
        .await
        .unwrap();

    // Correct password should verify.
    assert!(verify_password("MyPassword42!", &user.password_hash, None).unwrap());

    // Wrong password should not verify.
    assert!(!verify_password("WrongPassword", &user.password_hash, None).unwrap());
}

#[tokio::test]
async fn password_with_pepper() {
    let db = setup().await;
    let pepper = "server-secret-pepper".to_string();
    let repo = SurrealUserRepository::with_pepper(db, pepper.clone());

    let user = repo
        .create(CreateUser {
            name: "Carol".into(),
            email: "carol@example.com".into(),
            password: "PepperedPass!".into(),
        })
        .await
        .unwrap();

    // Verify with pepper should succeed.
    assert!(verify_password("PepperedPass!", &user.password_hash, Some(&pepper)).unwrap());

    // Verify without pepper should fail.
    assert!(!verify_password("PepperedPass!", &user.password_hash, None).unwrap());
}

#[tokio::test]
async fn get_user_by_email() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let user = repo
        .create(CreateUser {
            name: "Eve".into(),
            email: "eve@example.com".into(),
            password: "pass123".into(),
        })
        .await
        .unwrap();

    let fetched = repo.get_by_email("eve@example.com").await.unwrap();
    assert_eq!(fetched.id, user.id);

    let missing = repo.get_by_email("nobody@example.com").await;
    assert!(matches!(missing, Err(PantryError::NotFound { .. })));
}

#[tokio::test]
async fn get_unknown_user_not_found() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let result = repo.get_by_id(uuid::Uuid::new_v4()).await;
    assert!(matches!(result, Err(PantryError::NotFound { .. })));
}

#[tokio::test]
async fn duplicate_email_rejected() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let first = repo
        .create(CreateUser {
            name: "User A".into(),
            email: "same@example.com".into(),
            password: "pass123".into(),
        })
        .await
        .unwrap();

    let result = repo
        .create(CreateUser {
            name: "User B".into(),
            email: "same@example.com".into(),
            password: "pass456".into(),
        })
        .await;

    assert!(result.is_err(), "duplicate email should be rejected");

    // The original account must be untouched.
    let fetched = repo.get_by_email("same@example.com").await.unwrap();
    assert_eq!(fetched.id, first.id);
    assert_eq!(fetched.name, "User A");
}
