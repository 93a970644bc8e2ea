//! Rule entries embedded in templates
//!
//! A template may attach extended constraints to a field by placing a
//! sibling object under the key `<field>-Rules`. Example template:
//!
//! ```json
//! {
//!   "age": 20,
//!   "age-Rules": { "minimum": 18, "maximum": 27 },
//!
//!   "userPassword": "qwerty123",
//!   "userPassword-Rules": {
//!     "lengthMustBeEqualOrGreaterThan": 6,
//!     "lengthMustBeEqualOrLessThan": 20
//!   }
//! }
//! ```
//!
//! The suffix convention is resolved exactly once, when an object level
//! is compiled into [`TemplateEntry`] records; the validator itself never
//! matches key suffixes. Keys not in the rule vocabulary are ignored, so
//! old engines keep accepting templates that grow new rule keys.
//!
//! Rule applicability is a capability of the observed value's kind:
//! string rules on non-strings, numeric bounds on non-numbers and
//! cardinality rules on non-arrays are deliberate no-ops. Booleans
//! support no extended rules at all.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::errors::{ValidationError, ValidationResult};

/// Suffix that marks a rule entry inside a template object
pub const RULES_SUFFIX: &str = "-Rules";

/// Extended constraints for one template field
///
/// All keys are optional and evaluated independently; an absent key
/// imposes no constraint. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldRules {
    /// Absence of the field in the response is not an error
    pub is_optional: bool,
    /// Response value must be deeply equal to the template value
    pub must_match: bool,
    /// Response string length must equal the template string length
    pub equal_in_length: bool,
    /// Response string length lower bound (inclusive)
    pub length_must_be_equal_or_greater_than: Option<u64>,
    /// Response string length upper bound (inclusive)
    pub length_must_be_equal_or_less_than: Option<u64>,
    /// Response string must end with this suffix
    pub has_suffix: Option<String>,
    /// Response string must equal one element of this array
    pub match_with_one_of: Option<Vec<String>>,
    /// Response array length lower bound (inclusive)
    pub elements_must_be_equal_or_more_than: Option<u64>,
    /// Response array length upper bound (inclusive)
    pub elements_must_be_equal_or_less_than: Option<u64>,
    /// Response number lower bound (inclusive)
    pub minimum: Option<f64>,
    /// Response number upper bound (inclusive)
    pub maximum: Option<f64>,
}

impl FieldRules {
    /// Interprets a template value as a rule entry.
    ///
    /// A malformed rule entry behaves as if it were absent: templates are
    /// data from disk and must not make the engine fail on their own shape.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Evaluates the constraint rules against the observed value.
    ///
    /// `is_optional` and `must_match` are handled by the comparator, not
    /// here. Constraints are checked in a fixed order and the first
    /// violated one is returned.
    pub fn evaluate(
        &self,
        observed: &Value,
        template_value: &Value,
        path: &str,
    ) -> ValidationResult<()> {
        match observed {
            Value::String(s) => self.evaluate_string(s, template_value, path),
            Value::Number(n) => match n.as_f64() {
                Some(n) => self.evaluate_number(n, path),
                None => Ok(()),
            },
            Value::Array(items) => self.evaluate_array(items.len(), path),
            // No extended rules apply to booleans, nulls or objects.
            _ => Ok(()),
        }
    }

    fn evaluate_string(
        &self,
        observed: &str,
        template_value: &Value,
        path: &str,
    ) -> ValidationResult<()> {
        let length = string_length(observed);

        if self.equal_in_length {
            // Inert when the template value is not itself a string.
            if let Value::String(template_str) = template_value {
                let expected = string_length(template_str);
                if length != expected {
                    return Err(ValidationError::rule_violation(
                        path,
                        "equalInLength",
                        format!("string length == {}", expected),
                        format!("string length {}", length),
                    ));
                }
            }
        }

        if let Some(min) = self.length_must_be_equal_or_greater_than {
            if (length as u64) < min {
                return Err(ValidationError::rule_violation(
                    path,
                    "lengthMustBeEqualOrGreaterThan",
                    format!("string length >= {}", min),
                    format!("string length {}", length),
                ));
            }
        }

        if let Some(max) = self.length_must_be_equal_or_less_than {
            if (length as u64) > max {
                return Err(ValidationError::rule_violation(
                    path,
                    "lengthMustBeEqualOrLessThan",
                    format!("string length <= {}", max),
                    format!("string length {}", length),
                ));
            }
        }

        if let Some(suffix) = &self.has_suffix {
            if !observed.ends_with(suffix.as_str()) {
                return Err(ValidationError::rule_violation(
                    path,
                    "hasSuffix",
                    format!("string ending with '{}'", suffix),
                    format!("'{}'", observed),
                ));
            }
        }

        if let Some(one_of) = &self.match_with_one_of {
            if !one_of.iter().any(|candidate| candidate == observed) {
                return Err(ValidationError::rule_violation(
                    path,
                    "matchWithOneOf",
                    format!("one of {:?}", one_of),
                    format!("'{}'", observed),
                ));
            }
        }

        Ok(())
    }

    fn evaluate_number(&self, observed: f64, path: &str) -> ValidationResult<()> {
        if let Some(min) = self.minimum {
            if observed < min {
                return Err(ValidationError::rule_violation(
                    path,
                    "minimum",
                    format!("number >= {}", min),
                    format!("{}", observed),
                ));
            }
        }

        if let Some(max) = self.maximum {
            if observed > max {
                return Err(ValidationError::rule_violation(
                    path,
                    "maximum",
                    format!("number <= {}", max),
                    format!("{}", observed),
                ));
            }
        }

        Ok(())
    }

    fn evaluate_array(&self, length: usize, path: &str) -> ValidationResult<()> {
        if let Some(min) = self.elements_must_be_equal_or_more_than {
            if (length as u64) < min {
                return Err(ValidationError::rule_violation(
                    path,
                    "elementsMustBeEqualOrMoreThan",
                    format!("array length >= {}", min),
                    format!("array length {}", length),
                ));
            }
        }

        if let Some(max) = self.elements_must_be_equal_or_less_than {
            if (length as u64) > max {
                return Err(ValidationError::rule_violation(
                    path,
                    "elementsMustBeEqualOrLessThan",
                    format!("array length <= {}", max),
                    format!("array length {}", length),
                ));
            }
        }

        Ok(())
    }
}

/// One compiled template field: key, value and its rules
#[derive(Debug)]
pub struct TemplateEntry<'a> {
    /// Field key
    pub key: &'a str,
    /// Template value for the field
    pub value: &'a Value,
    /// Rules attached to the field (defaults when no rule entry exists)
    pub rules: FieldRules,
}

/// Compiles one template object level into entries.
///
/// Rule entries are folded into their field; keys carrying the rule
/// suffix never surface as fields of their own. Iteration order follows
/// the template's key declaration order.
pub fn compile_entries(template: &Map<String, Value>) -> Vec<TemplateEntry<'_>> {
    template
        .iter()
        .filter(|(key, _)| !key.ends_with(RULES_SUFFIX))
        .map(|(key, value)| {
            let rules = template
                .get(&format!("{}{}", key, RULES_SUFFIX))
                .map(FieldRules::from_value)
                .unwrap_or_default();
            TemplateEntry { key, value, rules }
        })
        .collect()
}

/// String length in Unicode scalar values.
fn string_length(s: &str) -> usize {
    s.chars().count()
}
