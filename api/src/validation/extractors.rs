//! Custom Axum extractors for rule-checked input
//!
//! `ValidatedJson<T>` parses the request body as raw JSON, evaluates the
//! rule table bound to `T` against it, and only then deserializes into
//! the typed request. Validating the raw value means a missing or
//! mistyped field reports its rule's message instead of a serde error.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use super::rules::{self, Rule};

/// A field-level validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation error response body
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub message: String,
    pub errors: Vec<FieldError>,
    pub code: u16,
    pub timestamp: String,
    pub correlation_id: String,
}

impl ValidationErrorResponse {
    pub fn new(errors: Vec<FieldError>) -> Self {
        let error_summary = if errors.len() == 1 {
            format!("Validation failed for field '{}'", errors[0].field)
        } else {
            format!("Validation failed for {} fields", errors.len())
        };

        Self {
            error: "ValidationError".to_string(),
            message: error_summary,
            errors,
            code: 400,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            correlation_id: Uuid::new_v4().to_string(),
        }
    }
}

/// Validation error that converts to an HTTP response
#[derive(Debug)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }
}

impl axum::response::IntoResponse for ValidationError {
    fn into_response(self) -> axum::response::Response {
        let response = ValidationErrorResponse::new(self.errors);
        (StatusCode::BAD_REQUEST, Json(response)).into_response()
    }
}

/// Binds a request type to the static rule table checked before it is
/// deserialized.
pub trait RuleSet {
    const RULES: &'static [Rule];
}

/// JSON extractor that runs a route's rule table before deserializing
///
/// Use this instead of `Json<T>` to:
/// 1. Parse the body as raw JSON
/// 2. Evaluate every rule in the table bound to `T`, aggregating all
///    violations (no short-circuit)
/// 3. Return a detailed 400 listing each violated field and message
/// 4. Deserialize into `T` only when the table passed
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + RuleSet + Send,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Step 1: parse the raw JSON body
        let Json(payload) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|err| {
                let message = match err {
                    axum::extract::rejection::JsonRejection::JsonDataError(e) => {
                        format!("Invalid JSON data: {}", e.body_text())
                    }
                    axum::extract::rejection::JsonRejection::JsonSyntaxError(e) => {
                        format!("JSON syntax error: {}", e.body_text())
                    }
                    axum::extract::rejection::JsonRejection::MissingJsonContentType(_) => {
                        "Content-Type must be application/json".to_string()
                    }
                    axum::extract::rejection::JsonRejection::BytesRejection(_) => {
                        "Failed to read request body".to_string()
                    }
                    _ => "Invalid JSON payload".to_string(),
                };
                ValidationError::single("body", message)
            })?;

        // Step 2: evaluate the route's rule table
        let errors = rules::apply(T::RULES, &payload);
        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }

        // Step 3: deserialize the typed request. Only fields no rule
        // covers can still fail here (e.g. a non-string lastname).
        let data = serde_json::from_value::<T>(payload).map_err(|err| {
            ValidationError::single("body", format!("Invalid request body: {}", err))
        })?;

        Ok(ValidatedJson(data))
    }
}

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error() {
        let error = FieldError::new("email", "Please enter a valid email");
        assert_eq!(error.field, "email");
        assert_eq!(error.message, "Please enter a valid email");
    }

    #[test]
    fn test_validation_error_response() {
        let errors = vec![
            FieldError::new("fullname.firstname", "Firstname must be at least 3 characters long"),
            FieldError::new("password", "Password must be at least 6 characters long"),
        ];

        let response = ValidationErrorResponse::new(errors);

        assert_eq!(response.error, "ValidationError");
        assert_eq!(response.code, 400);
        assert_eq!(response.errors.len(), 2);
        assert!(response.message.contains("2 fields"));
    }

    #[test]
    fn test_single_error_response() {
        let errors = vec![FieldError::new("email", "Please enter a valid email")];
        let response = ValidationErrorResponse::new(errors);

        assert!(response.message.contains("field 'email'"));
    }

    #[test]
    fn test_error_body_shape() {
        let response = ValidationErrorResponse::new(vec![FieldError::new(
            "vehicle.capacity",
            "Capacity must be at least 1",
        )]);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["errors"][0]["field"], "vehicle.capacity");
        assert_eq!(value["errors"][0]["message"], "Capacity must be at least 1");
        assert_eq!(value["code"], 400);
    }
}
