// ABOUTME: Validates raw JSON tool arguments against a tool's declared fields.
// ABOUTME: Produces a ToolInput for the handler or a ToolError before any handler runs.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input validation.
//!
//! Rules: absent or `null` input is treated as `{}`; anything other than an
//! object is rejected; each declared field must be present with exactly its
//! declared primitive type; undeclared fields are ignored and dropped.

use serde_json::{Map, Value};

use crate::errors::{AppError, AppResult, ToolError};

use super::traits::ToolInputSchema;

/// Validated tool input. Holds only declared fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolInput {
    fields: Map<String, Value>,
}

impl ToolInput {
    /// Get a declared string field
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or not a string, which only
    /// happens when a handler reads a field it did not declare
    pub fn require_str(&self, name: &str) -> AppResult<&str> {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::internal(format!("undeclared string field '{name}' read")))
    }

    /// Number of validated fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the tool declares no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Validate `raw` against `schema` for the tool `tool_name`
///
/// # Errors
///
/// - `InvalidArguments` when `raw` is not an object (or null)
/// - `MissingParameter` when a declared field is absent
/// - `InvalidParameter` when a declared field has the wrong type
pub fn validate(
    tool_name: &str,
    schema: &ToolInputSchema,
    raw: Option<Value>,
) -> Result<ToolInput, ToolError> {
    let mut object = match raw {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Object(object)) => object,
        Some(other) => {
            return Err(ToolError::invalid_arguments(tool_name, json_type_name(&other)));
        }
    };

    let mut fields = Map::new();
    for spec in &schema.fields {
        let value = object
            .remove(spec.name)
            .ok_or_else(|| ToolError::missing_parameter(tool_name, spec.name))?;

        if !spec.field_type.matches(&value) {
            return Err(ToolError::invalid_parameter(
                tool_name,
                spec.name,
                format!(
                    "expected {}, received {}",
                    spec.field_type.as_str(),
                    json_type_name(&value)
                ),
            ));
        }
        fields.insert(spec.name.to_owned(), value);
    }

    Ok(ToolInput { fields })
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::traits::FieldSpec;
    use serde_json::json;

    fn username_schema() -> ToolInputSchema {
        ToolInputSchema::with_fields([FieldSpec::string("okta_username")])
    }

    #[test]
    fn test_null_and_absent_are_empty_objects() {
        assert!(validate("welcome", &ToolInputSchema::empty(), None).is_ok());
        assert!(validate("welcome", &ToolInputSchema::empty(), Some(Value::Null)).is_ok());
        assert_eq!(
            validate("reset", &username_schema(), None),
            Err(ToolError::missing_parameter("reset", "okta_username"))
        );
    }

    #[test]
    fn test_non_object_rejected() {
        let err = validate("welcome", &ToolInputSchema::empty(), Some(json!([1, 2]))).unwrap_err();
        assert_eq!(err, ToolError::invalid_arguments("welcome", "array"));
    }

    #[test]
    fn test_wrong_type_rejected_without_coercion() {
        let err = validate("reset", &username_schema(), Some(json!({"okta_username": {"a": 1}})))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidParameter { ref parameter, .. } if parameter == "okta_username"));

        let err = validate("reset", &username_schema(), Some(json!({"okta_username": 12})))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let input = validate(
            "reset",
            &username_schema(),
            Some(json!({"okta_username": "alice", "admin": true})),
        )
        .unwrap();
        assert_eq!(input.len(), 1);
        assert_eq!(input.require_str("okta_username").unwrap(), "alice");
        assert!(input.require_str("admin").is_err());
    }
}
