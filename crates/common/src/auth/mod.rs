//! Authentication and authorization utilities
//!
//! Provides:
//! - JWT token generation and validation
//! - Password hashing and verification (Argon2)
//! - Route-guard middleware and the `AuthUser` extractor

use crate::errors::{AppError, Result};
use crate::ADMIN_ROLE;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Email of the authenticated user
    pub email: String,

    /// Role (USER or ADMIN)
    pub role: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl JwtClaims {
    /// Parse the subject back into a user id
    pub fn user_id(&self) -> Result<i32> {
        self.sub.parse().map_err(|_| AppError::InvalidToken)
    }

    /// Check whether the claims carry the admin role
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// JWT token manager
#[derive(Clone)]
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_secs: i64,
}

impl JwtManager {
    /// Create a new JWT manager with the given secret
    pub fn new(secret: &str, expiration_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_secs: expiration_secs as i64,
        }
    }

    /// Generate a new JWT token for a user
    pub fn generate_token(&self, user_id: i32, email: &str, role: &str) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expiration_secs);

        let claims = JwtClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| AppError::Internal {
            message: format!("Failed to generate token: {}", e),
        })
    }

    /// Validate and decode a JWT token
    pub fn validate_token(&self, token: &str) -> Result<JwtClaims> {
        decode::<JwtClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::ExpiredToken,
                _ => AppError::InvalidToken,
            })
    }
}

/// Hash a password for storage
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
}

/// Verify a password against a stored hash
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Extract the token from a `Bearer <token>` Authorization header
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

/// Middleware guarding routes behind a valid bearer token
///
/// Decoded claims are attached to request extensions for handlers
/// and the `AuthUser` extractor.
pub async fn require_auth(
    State(jwt): State<JwtManager>,
    mut request: Request,
    next: Next,
) -> std::result::Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized {
            message: "Missing Authorization header".to_string(),
        })?;

    let token = extract_bearer_token(auth_header).ok_or(AppError::InvalidToken)?;
    let claims = jwt.validate_token(token)?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Middleware restricting a route to admins; must run after `require_auth`
pub async fn require_admin(
    request: Request,
    next: Next,
) -> std::result::Result<Response, AppError> {
    let claims = request
        .extensions()
        .get::<JwtClaims>()
        .ok_or_else(|| AppError::Unauthorized {
            message: "Missing authentication context".to_string(),
        })?;

    if !claims.is_admin() {
        return Err(AppError::Forbidden {
            message: "Admins only".to_string(),
        });
    }

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user's claims
#[derive(Debug, Clone)]
pub struct AuthUser(pub JwtClaims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<JwtClaims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::Unauthorized {
                message: "Missing authentication context".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_roundtrip() {
        let manager = JwtManager::new("test_secret", 3600);

        let token = manager.generate_token(7, "alice@example.com", "USER").unwrap();
        let claims = manager.validate_token(&token).unwrap();

        assert_eq!(claims.sub, "7");
        assert_eq!(claims.user_id().unwrap(), 7);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.role, "USER");
        assert!(!claims.is_admin());
    }

    #[test]
    fn test_jwt_wrong_secret_rejected() {
        let manager = JwtManager::new("test_secret", 3600);
        let other = JwtManager::new("other_secret", 3600);

        let token = manager.generate_token(7, "alice@example.com", "USER").unwrap();
        let err = other.validate_token(&token).unwrap_err();

        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn test_jwt_expired_rejected() {
        let manager = JwtManager::new("test_secret", 3600);

        // Craft claims with an expiry well past the default leeway
        let now = Utc::now().timestamp();
        let claims = JwtClaims {
            sub: "7".to_string(),
            email: "alice@example.com".to_string(),
            role: "USER".to_string(),
            exp: now - 300,
            iat: now - 3900,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test_secret"),
        )
        .unwrap();

        let err = manager.validate_token(&token).unwrap_err();
        assert!(matches!(err, AppError::ExpiredToken));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer_token("abc.def.ghi"), None);
        assert_eq!(extract_bearer_token("Basic abc"), None);
    }

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
        assert!(!verify_password("hunter2", "not-a-phc-string"));
    }

    #[test]
    fn test_admin_claims() {
        let manager = JwtManager::new("test_secret", 3600);
        let token = manager.generate_token(1, "root@example.com", "ADMIN").unwrap();
        let claims = manager.validate_token(&token).unwrap();
        assert!(claims.is_admin());
    }
}
