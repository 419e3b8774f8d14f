//! Route table.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Extension, Router};
use pantry_auth::AuthConfig;
use surrealdb::Connection;

use crate::handlers;
use crate::state::AppState;

/// Upload bodies may exceed the validation ceiling; the limit only has
/// to be high enough that oversized files are turned away with the
/// documented message instead of a bare 413.
const UPLOAD_BODY_LIMIT: usize = 64 * 1024 * 1024;

pub fn router<C: Connection>(state: Arc<AppState<C>>, auth: Arc<AuthConfig>) -> Router {
    Router::new()
        .route(
            "/api/recipes",
            get(handlers::list_recipes::<C>).post(handlers::create_recipe::<C>),
        )
        .route(
            "/api/recipes/public",
            get(handlers::list_public_recipes::<C>),
        )
        .route(
            "/api/recipes/public/{id}",
            get(handlers::get_public_recipe::<C>),
        )
        .route(
            "/api/recipes/{id}",
            get(handlers::get_recipe::<C>)
                .put(handlers::update_recipe::<C>)
                .delete(handlers::delete_recipe::<C>),
        )
        .route("/api/signup", post(handlers::signup::<C>))
        .route(
            "/api/upload",
            post(handlers::upload).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route("/health", get(handlers::health))
        .layer(Extension(state))
        .layer(Extension(auth))
}
