//! Pantry Auth — validation of session tokens issued by the external
//! identity provider.

pub mod config;
pub mod error;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use token::{SessionClaims, issue_session_token, validate_session_token};
