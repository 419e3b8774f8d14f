//! Authenticated session context.

use uuid::Uuid;

use crate::models::user::UserRole;

/// The authenticated caller, established from a verified session token.
///
/// Carries only what request handling needs; the full [`super::user::User`]
/// record is never loaded for authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: Uuid,
    pub role: UserRole,
}
