//! Declarative field rules evaluated against raw request payloads
//!
//! Each route owns a static table of `Rule`s. A rule names a
//! dot-addressable field path, the constraint the value must satisfy,
//! and the client-facing message reported when it does not. The
//! evaluator runs the whole table in declaration order with no
//! short-circuit so a single response lists every violation.

use serde_json::Value;

use super::extractors::FieldError;
use super::validators;

/// Predicate applied to the value at a rule's field path
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// String of at least this many characters
    MinLen(usize),
    /// Syntactically valid email address
    Email,
    /// Integer greater than or equal to this value
    IntMin(i64),
    /// String equal to one of the listed values
    OneOf(&'static [&'static str]),
}

impl Constraint {
    /// A missing field (`None`), a null, or a value of the wrong JSON
    /// type satisfies no constraint.
    pub fn is_satisfied(&self, value: Option<&Value>) -> bool {
        let Some(value) = value else {
            return false;
        };
        match self {
            Constraint::MinLen(min) => value
                .as_str()
                .map_or(false, |s| validators::meets_min_len(s, *min)),
            Constraint::Email => value.as_str().map_or(false, validators::is_valid_email),
            Constraint::IntMin(min) => value.as_i64().map_or(false, |n| n >= *min),
            Constraint::OneOf(allowed) => value
                .as_str()
                .map_or(false, |s| allowed.iter().any(|v| *v == s)),
        }
    }
}

/// One field-level constraint with its failure message
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub field: &'static str,
    pub constraint: Constraint,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(field: &'static str, constraint: Constraint, message: &'static str) -> Self {
        Rule {
            field,
            constraint,
            message,
        }
    }
}

/// Resolve a dot-addressable path (e.g. `vehicle.color`) inside a JSON
/// payload. Missing segments and non-object intermediates resolve to
/// `None`.
pub fn resolve<'a>(payload: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(payload, |current, segment| current.get(segment))
}

/// Evaluate every rule in declaration order, collecting one error per
/// failing rule. Later rules run regardless of earlier failures so the
/// caller sees all violations at once.
pub fn apply(rules: &[Rule], payload: &Value) -> Vec<FieldError> {
    rules
        .iter()
        .filter(|rule| !rule.constraint.is_satisfied(resolve(payload, rule.field)))
        .map(|rule| FieldError::new(rule.field, rule.message))
        .collect()
}

/// Rule table for POST /captains/register
pub const CAPTAIN_REGISTRATION_RULES: &[Rule] = &[
    Rule::new(
        "fullname.firstname",
        Constraint::MinLen(3),
        "Firstname must be at least 3 characters long",
    ),
    Rule::new("email", Constraint::Email, "Please enter a valid email"),
    Rule::new(
        "password",
        Constraint::MinLen(6),
        "Password must be at least 6 characters long",
    ),
    Rule::new(
        "vehicle.color",
        Constraint::MinLen(3),
        "Color must be at least 3 characters long",
    ),
    Rule::new(
        "vehicle.plate",
        Constraint::MinLen(3),
        "Plate must be at least 3 characters long",
    ),
    Rule::new(
        "vehicle.capacity",
        Constraint::IntMin(1),
        "Capacity must be at least 1",
    ),
    Rule::new(
        "vehicle.vehicleType",
        Constraint::OneOf(&["car", "motorcycle", "auto"]),
        "Vehicle type must be car, motorcycle, or auto",
    ),
];

/// Rule table for POST /users/register
pub const USER_REGISTRATION_RULES: &[Rule] = &[
    Rule::new(
        "fullname.firstname",
        Constraint::MinLen(3),
        "Firstname must be at least 3 characters long",
    ),
    Rule::new("email", Constraint::Email, "Please enter a valid email"),
    Rule::new(
        "password",
        Constraint::MinLen(6),
        "Password must be at least 6 characters long",
    ),
];
