//! Authentication configuration.

/// Configuration for session-token validation.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// PEM-encoded Ed25519 public key of the identity provider, used
    /// for session-token verification.
    pub session_public_key_pem: String,
    /// PEM-encoded Ed25519 private key for token signing. Only set in
    /// tests and local tooling; production never signs.
    pub session_private_key_pem: Option<String>,
    /// Session token lifetime in seconds, used when signing
    /// (default: 2_592_000 = 30 days).
    pub session_lifetime_secs: u64,
    /// Expected token issuer (`iss` claim).
    pub issuer: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_public_key_pem: String::new(),
            session_private_key_pem: None,
            session_lifetime_secs: 2_592_000,
            issuer: "pantry".into(),
        }
    }
}
