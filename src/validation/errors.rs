//! Validation error types
//!
//! Error codes:
//! - VK_MISSING_KEY (INVALID)
//! - VK_TYPE_MISMATCH (INVALID)
//! - VK_RULE_VIOLATION (INVALID)
//! - VK_MUST_MATCH_VIOLATION (INVALID)
//! - VK_TEMPLATE_UNAVAILABLE (UNAVAILABLE)
//!
//! The first four mean the response does not conform to its template.
//! VK_TEMPLATE_UNAVAILABLE means no template could be resolved, so
//! validation could not be performed at all. Callers must never treat
//! it as "response is valid".

use std::fmt;

/// Outcome class of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response violates its template
    Invalid,
    /// No template could be resolved; validation was not performed
    Unavailable,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Invalid => write!(f, "INVALID"),
            Outcome::Unavailable => write!(f, "UNAVAILABLE"),
        }
    }
}

/// Validation error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorCode {
    /// Required template key absent from the response
    MissingKey,
    /// Variant tag of the response value differs from the template's
    TypeMismatch,
    /// An extended rule (length, suffix, membership, range, cardinality) failed
    RuleViolation,
    /// mustMatch demanded structural equality and it did not hold
    MustMatchViolation,
    /// No template resolved for the requested method
    TemplateUnavailable,
}

impl ValidationErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorCode::MissingKey => "VK_MISSING_KEY",
            ValidationErrorCode::TypeMismatch => "VK_TYPE_MISMATCH",
            ValidationErrorCode::RuleViolation => "VK_RULE_VIOLATION",
            ValidationErrorCode::MustMatchViolation => "VK_MUST_MATCH_VIOLATION",
            ValidationErrorCode::TemplateUnavailable => "VK_TEMPLATE_UNAVAILABLE",
        }
    }

    /// Returns the outcome class for this code
    pub fn outcome(&self) -> Outcome {
        match self {
            ValidationErrorCode::TemplateUnavailable => Outcome::Unavailable,
            _ => Outcome::Invalid,
        }
    }
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Expected vs actual details for a failed check
#[derive(Debug, Clone)]
pub struct ViolationDetails {
    /// Expected type, value or condition
    pub expected: String,
    /// Actual type or value found
    pub actual: String,
}

impl ViolationDetails {
    pub fn new(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for ViolationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, got {}", self.expected, self.actual)
    }
}

/// Validation error with full context
#[derive(Debug)]
pub struct ValidationError {
    /// Error code
    code: ValidationErrorCode,
    /// Dot-delimited key path from root to the failure site
    path: String,
    /// Human-readable message
    message: String,
    /// Violated rule name, for rule violations
    rule: Option<&'static str>,
    /// Expected vs actual, where relevant
    details: Option<ViolationDetails>,
}

impl ValidationError {
    /// Create a missing key error
    pub fn missing_key(path: impl Into<String>) -> Self {
        Self {
            code: ValidationErrorCode::MissingKey,
            path: path.into(),
            message: "required key absent from response".into(),
            rule: None,
            details: Some(ViolationDetails::new("key to be present", "missing")),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        path: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self {
            code: ValidationErrorCode::TypeMismatch,
            path: path.into(),
            message: format!("value type {} does not match template type {}", actual, expected),
            rule: None,
            details: Some(ViolationDetails::new(expected, actual)),
        }
    }

    /// Create a rule violation error
    pub fn rule_violation(
        path: impl Into<String>,
        rule: &'static str,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        let details = ViolationDetails::new(expected, actual);
        Self {
            code: ValidationErrorCode::RuleViolation,
            path: path.into(),
            message: format!("rule '{}' violated: {}", rule, details),
            rule: Some(rule),
            details: Some(details),
        }
    }

    /// Create a mustMatch violation error
    pub fn must_match(path: impl Into<String>) -> Self {
        Self {
            code: ValidationErrorCode::MustMatchViolation,
            path: path.into(),
            message: "response value is not structurally identical to template value".into(),
            rule: Some("mustMatch"),
            details: None,
        }
    }

    /// Create a template unavailable error
    pub fn template_unavailable(method: impl Into<String>) -> Self {
        let method = method.into();
        Self {
            code: ValidationErrorCode::TemplateUnavailable,
            path: String::new(),
            message: format!("no template resolved for method '{}'", method),
            rule: None,
            details: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ValidationErrorCode {
        self.code
    }

    /// Returns the outcome class
    pub fn outcome(&self) -> Outcome {
        self.code.outcome()
    }

    /// Returns the offending key path (empty for template unavailability)
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the violated rule name, if any
    pub fn rule(&self) -> Option<&'static str> {
        self.rule
    }

    /// Returns expected vs actual details, if any
    pub fn details(&self) -> Option<&ViolationDetails> {
        self.details.as_ref()
    }

    /// Returns true if validation could not be performed at all
    pub fn is_unavailable(&self) -> bool {
        self.outcome() == Outcome::Unavailable
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.outcome(), self.code)?;
        if !self.path.is_empty() {
            write!(f, " at '{}'", self.path)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
