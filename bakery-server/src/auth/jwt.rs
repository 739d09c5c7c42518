//! JWT token service
//!
//! Issues the HS256 token returned by login and validates it for the admin
//! guard.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum accepted secret length
pub const MIN_SECRET_LEN: usize = 32;

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HMAC secret, at least 32 bytes
    pub secret: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
    pub issuer: String,
    pub audience: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiration_minutes: 1440,
            issuer: "bakery-server".to_string(),
            audience: "bakery-clients".to_string(),
        }
    }

    /// Read `JWT_SECRET`, `JWT_EXPIRATION_MINUTES`, `JWT_ISSUER`, `JWT_AUDIENCE`
    pub fn from_env(environment: &str) -> Result<Self, JwtError> {
        let mut config = Self::new(load_jwt_secret(environment)?);
        if let Some(minutes) = std::env::var("JWT_EXPIRATION_MINUTES")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.expiration_minutes = minutes;
        }
        if let Ok(issuer) = std::env::var("JWT_ISSUER") {
            config.issuer = issuer;
        }
        if let Ok(audience) = std::env::var("JWT_AUDIENCE") {
            config.audience = audience;
        }
        Ok(config)
    }
}

/// Load the secret, falling back to a fixed key only in development
fn load_jwt_secret(environment: &str) -> Result<String, JwtError> {
    let secret = match std::env::var("JWT_SECRET") {
        Ok(secret) => secret,
        Err(_) if environment == "development" => {
            tracing::warn!("JWT_SECRET not set, using the development key");
            "dev-JWT_SECRET-not-for-production".to_string()
        }
        Err(_) => {
            return Err(JwtError::ConfigError(format!(
                "JWT_SECRET must be set in {environment} environment"
            )));
        }
    };
    if secret.len() < MIN_SECRET_LEN {
        return Err(JwtError::ConfigError(format!(
            "JWT_SECRET must be at least {MIN_SECRET_LEN} characters long"
        )));
    }
    Ok(secret)
}

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub username: String,
    pub role: String,
    /// Expiry (unix seconds)
    pub exp: i64,
    /// Issued at (unix seconds)
    pub iat: i64,
    pub iss: String,
    pub aud: String,
}

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// JWT token service
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a token for a user
    pub fn generate_token(
        &self,
        user_id: &str,
        username: &str,
        role: &str,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            role: role.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Validate and decode a token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Strip the `Bearer ` prefix from an Authorization header
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}
