//! Recursive structural comparator for server responses
//!
//! Validates an observed response tree against a previously captured
//! template tree. A template describes a minimum contract, not an
//! exhaustive schema: extra keys in the response are never flagged.
//!
//! Checks run per template key in a fixed order: presence, value type,
//! extended rules, mustMatch. Traversal is left-to-right and
//! top-to-bottom in template key declaration order, and the first
//! violation found is returned; violations are never collected.
//!
//! Objects located in arrays are not subject to verification. If a
//! server response returns an array of objects at the top level, store
//! the object itself as the template and pass it to the validator
//! directly.

use serde_json::{Map, Value};

use super::errors::{ValidationError, ValidationResult};
use super::mask::ValidationChecks;
use super::rules::compile_entries;

/// Validates a response tree against a template tree.
///
/// Only `Object` template roots are supported. The call is a pure
/// function of its inputs: no state is kept between calls and no I/O
/// happens here.
///
/// # Errors
///
/// Returns the first violation found, in check order (see module docs).
pub fn validate(
    response: &Value,
    template: &Value,
    checks: ValidationChecks,
) -> ValidationResult<()> {
    let template_obj = template.as_object().ok_or_else(|| {
        ValidationError::type_mismatch("$root", "object", json_type_name(template))
    })?;

    let response_obj = response.as_object().ok_or_else(|| {
        ValidationError::type_mismatch("$root", "object", json_type_name(response))
    })?;

    validate_object(response_obj, template_obj, checks, "", 0)
}

/// Validates one object level, recursing into nested objects.
fn validate_object(
    response: &Map<String, Value>,
    template: &Map<String, Value>,
    checks: ValidationChecks,
    path_prefix: &str,
    depth: usize,
) -> ValidationResult<()> {
    // Top-level presence is gated on `keys`, nested presence on
    // `sub_entity_keys`.
    let presence_enabled = if depth == 0 {
        checks.keys
    } else {
        checks.sub_entity_keys
    };

    for entry in compile_entries(template) {
        let path = make_path(path_prefix, entry.key);

        let observed = match response.get(entry.key) {
            Some(value) => value,
            None => {
                // An optional key that is absent is skipped entirely:
                // no further checks, no recursion.
                if entry.rules.is_optional || !presence_enabled {
                    continue;
                }
                return Err(ValidationError::missing_key(path));
            }
        };

        if checks.types_of_values {
            let expected = json_type_name(entry.value);
            let actual = json_type_name(observed);
            if expected != actual {
                return Err(ValidationError::type_mismatch(path, expected, actual));
            }
        }

        if checks.extended_rules {
            entry.rules.evaluate(observed, entry.value, &path)?;

            // mustMatch is an additional equality gate over the whole
            // subtree, evaluated last for the key.
            if entry.rules.must_match && observed != entry.value {
                return Err(ValidationError::must_match(path));
            }
        }

        // Recurse into nested objects. When type checking is disabled the
        // response value may have drifted to another kind; recursion then
        // simply does not apply. Arrays are never walked element by
        // element.
        if let (Value::Object(template_child), Value::Object(response_child)) =
            (entry.value, observed)
        {
            validate_object(response_child, template_child, checks, &path, depth + 1)?;
        }
    }

    Ok(())
}

/// Returns the JSON variant name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a field path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}
