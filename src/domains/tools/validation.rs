//! Declarative parameter validation.
//!
//! Each tool declares a `ToolSchema` next to its registration. The generic
//! validator checks raw JSON arguments against the schema and produces a
//! normalized argument object (defaults applied, only known fields kept) or
//! a failure naming the offending field and constraint.
//!
//! Validation is synchronous and side-effect-free, and always runs before a
//! handler - the store never observes a partially-invalid request.

use rmcp::model::JsonObject;
use serde_json::Value;
use thiserror::Error;

/// A validation failure naming the offending field.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Invalid parameter '{field}': {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Expected JSON type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Number,
    Boolean,
}

impl FieldType {
    fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

/// A constraint predicate applied after the type check.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Minimum string length.
    MinLen(usize),

    /// Maximum string length.
    MaxLen(usize),

    /// Exact string length (e.g. three-letter currency codes).
    ExactLen(usize),

    /// Number must be strictly positive.
    Positive,

    /// Inclusive numeric upper bound.
    Max(f64),

    /// Case-insensitive enumeration membership.
    OneOfIgnoreCase(&'static [&'static str]),
}

/// Schema for a single named field.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    name: &'static str,
    kind: FieldType,
    required: bool,
    default: Option<Value>,
    constraints: Vec<Constraint>,
}

impl FieldSchema {
    pub fn string(name: &'static str) -> Self {
        Self::new(name, FieldType::String)
    }

    pub fn number(name: &'static str) -> Self {
        Self::new(name, FieldType::Number)
    }

    pub fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldType::Boolean)
    }

    fn new(name: &'static str, kind: FieldType) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
            constraints: Vec::new(),
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Give the field a default, applied when the argument is absent.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn min_len(self, len: usize) -> Self {
        self.with(Constraint::MinLen(len))
    }

    pub fn max_len(self, len: usize) -> Self {
        self.with(Constraint::MaxLen(len))
    }

    pub fn exact_len(self, len: usize) -> Self {
        self.with(Constraint::ExactLen(len))
    }

    pub fn positive(self) -> Self {
        self.with(Constraint::Positive)
    }

    pub fn max(self, bound: f64) -> Self {
        self.with(Constraint::Max(bound))
    }

    pub fn one_of(self, allowed: &'static [&'static str]) -> Self {
        self.with(Constraint::OneOfIgnoreCase(allowed))
    }

    fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    fn check_type(&self, value: &Value) -> Result<(), ValidationError> {
        let ok = match self.kind {
            FieldType::String => value.is_string(),
            FieldType::Number => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
        };
        if ok {
            Ok(())
        } else {
            Err(ValidationError::new(
                self.name,
                format!("expected a {}", self.kind.name()),
            ))
        }
    }

    fn check_constraints(&self, value: &Value) -> Result<(), ValidationError> {
        for constraint in &self.constraints {
            match constraint {
                Constraint::MinLen(min) => {
                    let s = value.as_str().unwrap_or_default();
                    if s.chars().count() < *min {
                        return Err(ValidationError::new(
                            self.name,
                            format!("must be at least {} character(s)", min),
                        ));
                    }
                }
                Constraint::MaxLen(max) => {
                    let s = value.as_str().unwrap_or_default();
                    if s.chars().count() > *max {
                        return Err(ValidationError::new(
                            self.name,
                            format!("must be at most {} character(s)", max),
                        ));
                    }
                }
                Constraint::ExactLen(len) => {
                    let s = value.as_str().unwrap_or_default();
                    if s.chars().count() != *len {
                        return Err(ValidationError::new(
                            self.name,
                            format!("must be exactly {} character(s)", len),
                        ));
                    }
                }
                Constraint::Positive => {
                    let n = value.as_f64().unwrap_or_default();
                    if n <= 0.0 {
                        return Err(ValidationError::new(self.name, "must be greater than zero"));
                    }
                }
                Constraint::Max(bound) => {
                    let n = value.as_f64().unwrap_or_default();
                    if n > *bound {
                        return Err(ValidationError::new(
                            self.name,
                            format!("must not exceed {}", bound),
                        ));
                    }
                }
                Constraint::OneOfIgnoreCase(allowed) => {
                    let s = value.as_str().unwrap_or_default();
                    if !allowed.iter().any(|a| a.eq_ignore_ascii_case(s)) {
                        return Err(ValidationError::new(
                            self.name,
                            format!("must be one of: {}", allowed.join(", ")),
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Ordered set of field schemas for one tool.
#[derive(Debug, Clone)]
pub struct ToolSchema {
    fields: Vec<FieldSchema>,
}

impl ToolSchema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self { fields }
    }

    /// Validate raw arguments against the schema.
    ///
    /// Returns a normalized object containing every known field with its
    /// default applied, or the first failure encountered. Unknown extra
    /// fields are ignored.
    pub fn validate(&self, args: &JsonObject) -> Result<JsonObject, ValidationError> {
        let mut normalized = JsonObject::new();

        for field in &self.fields {
            let supplied = args.get(field.name).filter(|v| !v.is_null());

            let value = match (supplied, &field.default) {
                (Some(v), _) => v.clone(),
                (None, Some(default)) => default.clone(),
                (None, None) if field.required => {
                    return Err(ValidationError::new(field.name, "missing required parameter"));
                }
                (None, None) => continue,
            };

            field.check_type(&value)?;
            field.check_constraints(&value)?;
            normalized.insert(field.name.to_string(), value);
        }

        Ok(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> ToolSchema {
        ToolSchema::new(vec![
            FieldSchema::string("user_id").required().min_len(1),
            FieldSchema::number("amount").required().positive().max(10_000.0),
            FieldSchema::string("currency")
                .default_value(json!("GBP"))
                .exact_len(3)
                .one_of(&["GBP", "EUR", "USD", "JPY"]),
            FieldSchema::boolean("detailed").default_value(json!(false)),
        ])
    }

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_valid_arguments_normalized_with_defaults() {
        let normalized = schema()
            .validate(&args(json!({ "user_id": "u1", "amount": 25.0 })))
            .unwrap();
        assert_eq!(normalized["user_id"], json!("u1"));
        assert_eq!(normalized["currency"], json!("GBP"));
        assert_eq!(normalized["detailed"], json!(false));
    }

    #[test]
    fn test_missing_required_field_names_the_field() {
        let err = schema()
            .validate(&args(json!({ "amount": 25.0 })))
            .unwrap_err();
        assert_eq!(err.field, "user_id");
        assert!(err.message.contains("missing"));
    }

    #[test]
    fn test_type_mismatch_rejected() {
        let err = schema()
            .validate(&args(json!({ "user_id": "u1", "amount": "lots" })))
            .unwrap_err();
        assert_eq!(err.field, "amount");
    }

    #[test]
    fn test_positive_constraint() {
        let err = schema()
            .validate(&args(json!({ "user_id": "u1", "amount": 0.0 })))
            .unwrap_err();
        assert_eq!(err.field, "amount");
        assert!(err.message.contains("greater than zero"));
    }

    #[test]
    fn test_upper_bound_is_inclusive() {
        assert!(schema()
            .validate(&args(json!({ "user_id": "u1", "amount": 10_000.0 })))
            .is_ok());
        let err = schema()
            .validate(&args(json!({ "user_id": "u1", "amount": 10_000.01 })))
            .unwrap_err();
        assert_eq!(err.field, "amount");
    }

    #[test]
    fn test_enumeration_membership_case_insensitive() {
        let ok = schema().validate(&args(
            json!({ "user_id": "u1", "amount": 1.0, "currency": "eur" }),
        ));
        assert!(ok.is_ok());

        let err = schema()
            .validate(&args(
                json!({ "user_id": "u1", "amount": 1.0, "currency": "CHF" }),
            ))
            .unwrap_err();
        assert_eq!(err.field, "currency");
        assert!(err.message.contains("one of"));
    }

    #[test]
    fn test_exact_length_constraint() {
        let err = schema()
            .validate(&args(
                json!({ "user_id": "u1", "amount": 1.0, "currency": "EURO" }),
            ))
            .unwrap_err();
        assert_eq!(err.field, "currency");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let normalized = schema()
            .validate(&args(
                json!({ "user_id": "u1", "amount": 1.0, "debug": true }),
            ))
            .unwrap();
        assert!(normalized.get("debug").is_none());
    }

    #[test]
    fn test_null_treated_as_absent() {
        let normalized = schema()
            .validate(&args(
                json!({ "user_id": "u1", "amount": 1.0, "currency": null }),
            ))
            .unwrap();
        assert_eq!(normalized["currency"], json!("GBP"));
    }
}
