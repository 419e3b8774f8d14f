//! Server configuration from the environment.

use std::fmt::Display;
use std::str::FromStr;
use std::{env, fs};

use anyhow::Context;
use pantry_auth::AuthConfig;
use pantry_db::DbConfig;
use tracing::{info, warn};

pub struct ServerConfig {
    pub port: u16,
    pub db: DbConfig,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration, falling back to defaults for everything
    /// except the session verification key.
    pub fn load() -> anyhow::Result<Self> {
        let defaults = DbConfig::default();
        let db = DbConfig {
            url: var("PANTRY_DB_URL").unwrap_or(defaults.url),
            namespace: var("PANTRY_DB_NS").unwrap_or(defaults.namespace),
            database: var("PANTRY_DB_DB").unwrap_or(defaults.database),
            username: var("PANTRY_DB_USER").unwrap_or(defaults.username),
            password: var("PANTRY_DB_PASS").unwrap_or(defaults.password),
        };

        let auth = AuthConfig {
            session_public_key_pem: session_public_key()?,
            issuer: var("PANTRY_SESSION_ISSUER").unwrap_or_else(|| "pantry".to_string()),
            ..AuthConfig::default()
        };

        Ok(Self {
            port: try_load("PANTRY_PORT", 3000),
            db,
            auth,
        })
    }
}

/// The Ed25519 verification key for session tokens, inline or from a
/// file.
fn session_public_key() -> anyhow::Result<String> {
    if let Some(pem) = var("PANTRY_SESSION_PUBLIC_KEY") {
        return Ok(pem);
    }
    if let Some(path) = var("PANTRY_SESSION_PUBLIC_KEY_FILE") {
        return fs::read_to_string(&path)
            .map(|s| s.trim().to_string())
            .with_context(|| format!("failed to read session public key from {path}"));
    }
    anyhow::bail!(
        "PANTRY_SESSION_PUBLIC_KEY or PANTRY_SESSION_PUBLIC_KEY_FILE must hold the session verification key"
    )
}

fn var(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(e) => {
                warn!("Invalid {key} value: {e}, using default {default}");
                default
            }
        },
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
