//! Response validation
//!
//! Validates live API responses against stored template responses by
//! structural comparison. A template is an ordinary JSON object whose
//! shape is the expected shape of the response, annotated with
//! per-field rule objects: a key `"city"` may be accompanied by a
//! sibling `"city-Rules"` object that constrains the value beyond its
//! type.
//!
//! The rule vocabulary:
//!
//! * `isOptional` - the key may be absent; when absent, nothing else
//!   about it is checked.
//! * `mustMatch` - the response value must equal the template value
//!   exactly.
//! * `equalInLength` - a string must have the same length as the
//!   template string.
//! * `lengthMustBeEqualOrGreaterThan` / `lengthMustBeEqualOrLessThan` -
//!   inclusive string length bounds.
//! * `hasSuffix` - the string must end with the given suffix.
//! * `matchWithOneOf` - the string must be one of the listed values.
//! * `elementsMustBeEqualOrMoreThan` / `elementsMustBeEqualOrLessThan` -
//!   inclusive array cardinality bounds.
//! * `minimum` / `maximum` - inclusive numeric bounds.
//!
//! Rules apply only where they make sense for the observed value kind;
//! a rule attached to a value of another kind is ignored rather than
//! rejected. In particular booleans carry no applicable rules, and
//! array elements are never validated individually: only the array's
//! presence, type and cardinality are checked.
//!
//! Which check categories run is controlled by [`ValidationChecks`];
//! each category can be toggled independently. Violations surface as a
//! single [`ValidationError`] carrying the first failure found, in
//! template declaration order.

pub mod dispatch;
pub mod errors;
pub mod mask;
pub mod rules;
pub mod validator;

pub use dispatch::ResponseValidator;
pub use errors::{
    Outcome, ValidationError, ValidationErrorCode, ValidationResult, ViolationDetails,
};
pub use mask::ValidationChecks;
pub use rules::{FieldRules, TemplateEntry, RULES_SUFFIX};
pub use validator::{json_type_name, validate};
