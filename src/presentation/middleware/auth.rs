//! Authentication Middleware
//!
//! JWT validation middleware for protected routes. Tokens are issued by the
//! external authentication service and signed with the shared secret.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::shared::error::{AppError, MISSING_AUTHENTICATION};
use crate::startup::AppState;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID, e.g. `user-123`)
    #[serde(alias = "id")]
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    #[serde(default)]
    pub iat: i64,
}

/// Authenticated user extension
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

/// Authentication middleware that validates JWT tokens
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Authentication(MISSING_AUTHENTICATION.into()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Authentication("Invalid authorization header format".into()))?;

    let user_id = verify_token(token, &state.settings.jwt.secret)?;

    request.extensions_mut().insert(AuthUser { user_id });

    Ok(next.run(request).await)
}

/// Decode an access token and return its subject.
pub fn verify_token(token: &str, secret: &str) -> Result<String, AppError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::Authentication("Token expired".into())
        }
        _ => AppError::Authentication("Invalid token".into()),
    })?;

    if token_data.claims.sub.is_empty() {
        return Err(AppError::Authentication("Invalid token claims".into()));
    }

    Ok(token_data.claims.sub)
}
