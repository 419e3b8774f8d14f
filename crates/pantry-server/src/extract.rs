//! Request extractors.

use std::sync::Arc;

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::header;
use axum::http::request::Parts;
use pantry_auth::{AuthConfig, validate_session_token};
use pantry_core::models::session::SessionUser;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;

/// The authenticated caller, established from the `Authorization`
/// bearer token. Any failure along the way is a 401; the response
/// never says which check failed.
pub struct CurrentUser(pub SessionUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth = parts
            .extensions
            .get::<Arc<AuthConfig>>()
            .ok_or_else(|| ApiError::Internal("auth configuration missing".into()))?;

        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        let token = header.strip_prefix("Bearer ").ok_or(ApiError::Unauthorized)?;

        let session = validate_session_token(token, auth).map_err(|err| {
            debug!(error = %err, "Session token rejected");
            ApiError::Unauthorized
        })?;

        Ok(CurrentUser(session))
    }
}

/// JSON body extractor that folds every deserialization failure into
/// the uniform `{"error": ...}` envelope instead of axum's plain-text
/// rejections.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                debug!(error = %rejection, "Request body rejected");
                Err(ApiError::InvalidArgument("Invalid request body".into()))
            }
        }
    }
}
