//! Method dispatch
//!
//! Ties the comparator to the template store: given a method and a
//! live response, resolve the stored template and run the structural
//! checks against it. A method without a template is an unavailability
//! outcome rather than a validity verdict, and is logged as critical
//! so it is never silently absorbed.

use serde_json::Value;

use crate::api::Method;
use crate::observability::Logger;
use crate::template::TemplateStore;

use super::errors::{ValidationError, ValidationResult};
use super::mask::ValidationChecks;
use super::validator;

/// Validates responses for any catalogued method against the store.
#[derive(Debug)]
pub struct ResponseValidator<'a> {
    store: &'a TemplateStore,
}

impl<'a> ResponseValidator<'a> {
    pub fn new(store: &'a TemplateStore) -> Self {
        Self { store }
    }

    /// Full validation with every check category enabled.
    pub fn validate(&self, method: Method, response: &Value) -> ValidationResult<()> {
        self.validate_with_checks(method, response, ValidationChecks::all())
    }

    /// Validation restricted to the given check categories.
    pub fn validate_with_checks(
        &self,
        method: Method,
        response: &Value,
        checks: ValidationChecks,
    ) -> ValidationResult<()> {
        let template = self.store.template(method).map_err(|e| {
            Logger::critical(
                "validation",
                &format!("template unavailable for '{}': {}", method.endpoint(), e),
            );
            ValidationError::template_unavailable(method.endpoint())
        })?;
        validator::validate(response, &template, checks)
    }

    pub fn validate_users_get(&self, response: &Value) -> ValidationResult<()> {
        self.validate(Method::UsersGet, response)
    }

    pub fn validate_friends_get(&self, response: &Value) -> ValidationResult<()> {
        self.validate(Method::FriendsGet, response)
    }

    pub fn validate_wall_get(&self, response: &Value) -> ValidationResult<()> {
        self.validate(Method::WallGet, response)
    }

    pub fn validate_photos_get_all(&self, response: &Value) -> ValidationResult<()> {
        self.validate(Method::PhotosGetAll, response)
    }
}
