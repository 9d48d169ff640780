//! Request validation for the registration routes
//!
//! Validation is data-driven: each route declares a static table of
//! `(field path, constraint, message)` rules, and a single evaluator
//! runs the whole table against the raw JSON payload, aggregating every
//! violation before the handler is reached.
//!
//! # Components
//!
//! 1. **Rules** - `Rule` tables and the dot-path evaluator (`rules`)
//! 2. **Extractors** - `ValidatedJson<T>`, the Axum extractor driving a
//!    table bound through the `RuleSet` trait (`extractors`)
//! 3. **Validators** - the shared field predicates (`validators`)
//!
//! # Validation Error Response
//!
//! When a rule table fails, a 400 Bad Request is returned:
//!
//! ```json
//! {
//!   "error": "ValidationError",
//!   "message": "Validation failed for 2 fields",
//!   "errors": [
//!     {"field": "fullname.firstname", "message": "Firstname must be at least 3 characters long"},
//!     {"field": "vehicle.capacity", "message": "Capacity must be at least 1"}
//!   ],
//!   "code": 400,
//!   "timestamp": "2026-08-07T10:30:00Z",
//!   "correlation_id": "uuid-here"
//! }
//! ```

pub mod extractors;
pub mod requests;
pub mod rules;
pub mod validators;

// Re-export commonly used items
pub use extractors::{FieldError, RuleSet, ValidatedJson, ValidationError};
pub use rules::{Constraint, Rule, CAPTAIN_REGISTRATION_RULES, USER_REGISTRATION_RULES};
