//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::shared::error::AppError;

/// Raw JSON request body, left untyped for entity validation.
///
/// Malformed JSON is rejected as a validation error instead of axum's
/// plain-text rejection.
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

impl JsonPayload {
    /// Set a string field, overriding any client-supplied value.
    ///
    /// Non-object payloads are left alone so entity validation rejects them.
    pub fn with_field(mut self, key: &str, value: impl Into<String>) -> Self {
        if let Value::Object(map) = &mut self.0 {
            map.insert(key.to_owned(), Value::String(value.into()));
        }
        self
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        Ok(Self(value))
    }
}
