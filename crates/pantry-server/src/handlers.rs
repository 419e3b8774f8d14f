//! HTTP request handlers.
//!
//! Request bodies are deserialized into explicit schemas and
//! normalized up front: list fields accept a bare string or an array
//! of strings, numeric fields accept a number or a numeric string.
//! Handlers own the wire contract; persistence stays typed.

use std::sync::Arc;

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Extension, Multipart, Path};
use axum::http::StatusCode;
use pantry_core::PantryError;
use pantry_core::models::recipe::{CreateRecipe, Recipe, UpdateRecipe};
use pantry_core::models::user::CreateUser;
use pantry_core::repository::{RecipeRepository, UserRepository};
use pantry_storage::{translate_storage_uri, validate_upload};
use serde::{Deserialize, Deserializer, Serialize};
use surrealdb::Connection;
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::extract::{ApiJson, CurrentUser};
use crate::state::AppState;

/// A JSON value that is either a bare string or an array of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// A JSON value that is either a number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

impl NumberOrText {
    /// Coerce to a count. Only non-negative integers that fit in a
    /// `u32` survive; everything else is `None`.
    fn as_u32(&self) -> Option<u32> {
        match self {
            NumberOrText::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            NumberOrText::Text(s) => s.trim().parse::<u32>().ok(),
        }
    }
}

/// Normalize a list field. A bare string becomes a one-element list;
/// an empty string or empty array counts as absent.
fn normalize_list(value: Option<OneOrMany>) -> Option<Vec<String>> {
    match value {
        Some(OneOrMany::One(s)) if !s.is_empty() => Some(vec![s]),
        Some(OneOrMany::Many(items)) if !items.is_empty() => Some(items),
        _ => None,
    }
}

/// Distinguishes an absent key (`None`) from an explicit JSON `null`
/// (`Some(None)`).
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

fn coerce_update_number(value: Option<NumberOrText>, field: &str) -> Result<Option<u32>, ApiError> {
    match value {
        None => Ok(None),
        Some(v) => v.as_u32().map(Some).ok_or_else(|| {
            ApiError::InvalidArgument(format!("{field} must be a non-negative number"))
        }),
    }
}

/// An id that cannot be a UUID cannot name anyone's recipe.
fn parse_owned_recipe_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound("Recipe not found".into()))
}

/// Stored image references may be storage URIs; responses always carry
/// a fetchable URL.
fn resolve_image_url(mut recipe: Recipe) -> Recipe {
    recipe.image = translate_storage_uri(&recipe.image);
    recipe
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    message: String,
}

// ---------------------------------------------------------------------------
// Recipes (session-scoped)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeBody {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    ingredients: Option<OneOrMany>,
    #[serde(default)]
    instructions: Option<OneOrMany>,
    #[serde(default)]
    prep_time: Option<NumberOrText>,
    #[serde(default)]
    cook_time: Option<NumberOrText>,
    #[serde(default)]
    servings: Option<NumberOrText>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCreated {
    message: String,
    recipe_id: Uuid,
}

pub async fn create_recipe<C: Connection>(
    Extension(state): Extension<Arc<AppState<C>>>,
    CurrentUser(session): CurrentUser,
    ApiJson(body): ApiJson<CreateRecipeBody>,
) -> Result<(StatusCode, Json<RecipeCreated>), ApiError> {
    let title = body.title.filter(|t| !t.is_empty());
    let description = body.description.filter(|d| !d.is_empty());
    let ingredients = normalize_list(body.ingredients);
    let instructions = normalize_list(body.instructions);

    let (Some(title), Some(description), Some(ingredients), Some(instructions)) =
        (title, description, ingredients, instructions)
    else {
        return Err(ApiError::InvalidArgument("Missing required fields".into()));
    };

    let input = CreateRecipe {
        owner_id: session.user_id,
        title,
        description,
        ingredients,
        instructions,
        prep_time: body.prep_time.and_then(|v| v.as_u32()).unwrap_or(0),
        cook_time: body.cook_time.and_then(|v| v.as_u32()).unwrap_or(0),
        // A zero serving count makes no sense for a stored recipe.
        servings: body
            .servings
            .and_then(|v| v.as_u32())
            .filter(|v| *v != 0)
            .unwrap_or(1),
        category: body.category.unwrap_or_default(),
        image: body.image.unwrap_or_default(),
    };

    let recipe = state.recipes.create(input).await?;
    info!(recipe_id = %recipe.id, owner_id = %session.user_id, "Recipe created");

    Ok((
        StatusCode::CREATED,
        Json(RecipeCreated {
            message: "Recipe created successfully".into(),
            recipe_id: recipe.id,
        }),
    ))
}

pub async fn list_recipes<C: Connection>(
    Extension(state): Extension<Arc<AppState<C>>>,
    CurrentUser(session): CurrentUser,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let recipes = state.recipes.list_by_owner(session.user_id).await?;
    Ok(Json(recipes.into_iter().map(resolve_image_url).collect()))
}

pub async fn get_recipe<C: Connection>(
    Extension(state): Extension<Arc<AppState<C>>>,
    CurrentUser(session): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    let id = parse_owned_recipe_id(&id)?;
    let recipe = state.recipes.get_by_id(session.user_id, id).await?;
    Ok(Json(resolve_image_url(recipe)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeBody {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    ingredients: Option<OneOrMany>,
    #[serde(default)]
    instructions: Option<OneOrMany>,
    #[serde(default)]
    prep_time: Option<NumberOrText>,
    #[serde(default)]
    cook_time: Option<NumberOrText>,
    #[serde(default)]
    servings: Option<NumberOrText>,
    #[serde(default, deserialize_with = "double_option")]
    category: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    image: Option<Option<String>>,
}

pub async fn update_recipe<C: Connection>(
    Extension(state): Extension<Arc<AppState<C>>>,
    CurrentUser(session): CurrentUser,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateRecipeBody>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = parse_owned_recipe_id(&id)?;

    let input = UpdateRecipe {
        // Text and list fields only change when a usable value arrives.
        title: body.title.filter(|t| !t.is_empty()),
        description: body.description.filter(|d| !d.is_empty()),
        ingredients: normalize_list(body.ingredients),
        instructions: normalize_list(body.instructions),
        // Numeric fields must coerce if present; an explicit zero applies.
        prep_time: coerce_update_number(body.prep_time, "prepTime")?,
        cook_time: coerce_update_number(body.cook_time, "cookTime")?,
        servings: coerce_update_number(body.servings, "servings")?,
        // Optional text fields: a present key always applies, null clears.
        category: body.category.map(|v| v.unwrap_or_default()),
        image: body.image.map(|v| v.unwrap_or_default()),
    };

    state.recipes.update(session.user_id, id, input).await?;

    Ok(Json(MessageBody {
        message: "Recipe updated successfully".into(),
    }))
}

pub async fn delete_recipe<C: Connection>(
    Extension(state): Extension<Arc<AppState<C>>>,
    CurrentUser(session): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = parse_owned_recipe_id(&id)?;
    state.recipes.delete(session.user_id, id).await?;
    info!(recipe_id = %id, owner_id = %session.user_id, "Recipe deleted");

    Ok(Json(MessageBody {
        message: "Recipe deleted successfully".into(),
    }))
}

// ---------------------------------------------------------------------------
// Public feed
// ---------------------------------------------------------------------------

pub async fn list_public_recipes<C: Connection>(
    Extension(state): Extension<Arc<AppState<C>>>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let recipes = state.recipes.list_all().await?;
    Ok(Json(recipes.into_iter().map(resolve_image_url).collect()))
}

pub async fn get_public_recipe<C: Connection>(
    Extension(state): Extension<Arc<AppState<C>>>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    let id =
        Uuid::parse_str(&id).map_err(|_| ApiError::InvalidArgument("Invalid recipe ID".into()))?;
    let recipe = state.recipes.get_public(id).await?;
    Ok(Json(resolve_image_url(recipe)))
}

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SignupBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    message: String,
    user_id: Uuid,
}

pub async fn signup<C: Connection>(
    Extension(state): Extension<Arc<AppState<C>>>,
    ApiJson(body): ApiJson<SignupBody>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let name = body.name.filter(|v| !v.is_empty());
    let email = body.email.filter(|v| !v.is_empty());
    let password = body.password.filter(|v| !v.is_empty());

    let (Some(name), Some(email), Some(password)) = (name, email, password) else {
        return Err(ApiError::InvalidArgument("Missing required fields".into()));
    };

    // The unique index on email backstops this check under races.
    match state.users.get_by_email(&email).await {
        Ok(_) => return Err(ApiError::Conflict("User already exists".into())),
        Err(PantryError::NotFound { .. }) => {}
        Err(other) => return Err(other.into()),
    }

    let user = state
        .users
        .create(CreateUser {
            name,
            email,
            password,
        })
        .await?;
    info!(user_id = %user.id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully".into(),
            user_id: user.id,
        }),
    ))
}

// ---------------------------------------------------------------------------
// Upload pre-flight
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    success: bool,
    message: String,
    filename: String,
    size: u64,
    #[serde(rename = "type")]
    content_type: String,
}

/// Validates an upload without persisting a byte: the file part is
/// streamed, counted, and discarded.
pub async fn upload(
    CurrentUser(_session): CurrentUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut multipart =
        multipart.map_err(|_| ApiError::InvalidArgument("No file provided".into()))?;

    let mut file = None;
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::InvalidArgument("Invalid request body".into()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();

        let mut size: u64 = 0;
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|_| ApiError::InvalidArgument("Invalid request body".into()))?
        {
            size += chunk.len() as u64;
        }

        file = Some((filename, content_type, size));
        break;
    }

    let Some((filename, content_type, size)) = file else {
        return Err(ApiError::InvalidArgument("No file provided".into()));
    };

    validate_upload(&content_type, size)
        .map_err(|err| ApiError::InvalidArgument(err.to_string()))?;

    info!(filename = %filename, size, content_type = %content_type, "Upload validated");

    Ok(Json(UploadResponse {
        success: true,
        message: "File validated successfully".into(),
        filename,
        size,
        content_type,
    }))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

pub async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_fields_accept_bare_strings() {
        let body: CreateRecipeBody = serde_json::from_value(json!({
            "ingredients": "2 eggs",
            "instructions": ["whisk", "fry"],
        }))
        .unwrap();

        assert_eq!(normalize_list(body.ingredients), Some(vec!["2 eggs".to_string()]));
        assert_eq!(
            normalize_list(body.instructions),
            Some(vec!["whisk".to_string(), "fry".to_string()])
        );
    }

    #[test]
    fn empty_list_values_count_as_absent() {
        let body: CreateRecipeBody = serde_json::from_value(json!({
            "ingredients": "",
            "instructions": [],
        }))
        .unwrap();

        assert_eq!(normalize_list(body.ingredients), None);
        assert_eq!(normalize_list(body.instructions), None);
    }

    #[test]
    fn numbers_coerce_from_strings() {
        let cases: &[(serde_json::Value, Option<u32>)] = &[
            (json!(15), Some(15)),
            (json!("15"), Some(15)),
            (json!(" 10 "), Some(10)),
            (json!(0), Some(0)),
            (json!("abc"), None),
            (json!(-3), None),
            (json!(2.5), None),
            (json!(""), None),
        ];

        for (value, expected) in cases {
            let parsed: NumberOrText = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(parsed.as_u32(), *expected, "coercing {value}");
        }
    }

    #[test]
    fn update_body_distinguishes_null_from_absent() {
        let absent: UpdateRecipeBody = serde_json::from_value(json!({})).unwrap();
        assert_eq!(absent.category, None);

        let null: UpdateRecipeBody = serde_json::from_value(json!({ "category": null })).unwrap();
        assert_eq!(null.category, Some(None));

        let set: UpdateRecipeBody =
            serde_json::from_value(json!({ "category": "dessert" })).unwrap();
        assert_eq!(set.category, Some(Some("dessert".to_string())));
    }

    #[test]
    fn update_numbers_reject_garbage() {
        let body: UpdateRecipeBody =
            serde_json::from_value(json!({ "prepTime": "soon" })).unwrap();
        assert!(coerce_update_number(body.prep_time, "prepTime").is_err());

        let body: UpdateRecipeBody = serde_json::from_value(json!({ "prepTime": "25" })).unwrap();
        assert_eq!(coerce_update_number(body.prep_time, "prepTime").unwrap(), Some(25));

        let body: UpdateRecipeBody = serde_json::from_value(json!({})).unwrap();
        assert_eq!(coerce_update_number(body.prep_time, "prepTime").unwrap(), None);
    }
}
