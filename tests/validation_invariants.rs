//! Validation invariant tests
//!
//! End-to-end checks of the comparator through the public surface:
//! store a template, validate responses against it, assert on the
//! verdicts. Covers determinism, check-category independence,
//! tolerance of extra keys, and the documented limits of the rule
//! language.

use serde_json::{json, Value};
use tempfile::TempDir;

use vklayer::api::Method;
use vklayer::template::TemplateStore;
use vklayer::validation::{
    validate, ResponseValidator, ValidationChecks, ValidationErrorCode,
};

fn store_with(method: Method, template: Value) -> (TempDir, TemplateStore) {
    let dir = TempDir::new().unwrap();
    let store = TemplateStore::open(dir.path()).unwrap();
    store.put(method, template).unwrap();
    (dir, store)
}

fn users_template() -> Value {
    json!({
        "response": {
            "id": 1,
            "first_name": "First",
            "first_name-Rules": {"lengthMustBeEqualOrGreaterThan": 2},
            "last_name": "Last",
            "city": "Prague",
            "city-Rules": {"isOptional": true, "matchWithOneOf": ["Prague", "Berlin"]},
            "counters": {
                "followers": 0,
                "followers-Rules": {"minimum": 0}
            },
            "friend_ids": [1, 2],
            "friend_ids-Rules": {"elementsMustBeEqualOrLessThan": 5}
        }
    })
}

// =============================================================================
// DETERMINISM
// =============================================================================

/// The same response and template produce the same verdict every time.
#[test]
fn test_repeated_validation_is_deterministic() {
    let (_dir, store) = store_with(Method::UsersGet, users_template());
    let validator = ResponseValidator::new(&store);

    let good = json!({
        "response": {
            "id": 42,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "counters": {"followers": 10},
            "friend_ids": [5]
        }
    });
    let bad = json!({"response": {"id": 42}});

    for _ in 0..20 {
        assert!(validator.validate_users_get(&good).is_ok());
        let err = validator.validate_users_get(&bad).unwrap_err();
        assert_eq!(err.code(), ValidationErrorCode::MissingKey);
        assert_eq!(err.path(), "response.first_name");
    }
}

/// The first violation reported follows template declaration order.
#[test]
fn test_first_violation_follows_template_order() {
    let template = json!({
        "alpha": 1,
        "beta": "x",
        "gamma": true
    });
    let response = json!({"alpha": 1});

    // Both beta and gamma are missing; beta is declared first.
    let err = validate(&response, &template, ValidationChecks::all()).unwrap_err();
    assert_eq!(err.path(), "beta");
}

// =============================================================================
// CHECK-CATEGORY INDEPENDENCE
// =============================================================================

/// Disabling one category never weakens the others.
#[test]
fn test_disabled_presence_still_checks_types() {
    let template = json!({"count": 1});
    let response = json!({"count": "one"});

    let checks = ValidationChecks::types_of_values();
    let err = validate(&response, &template, checks).unwrap_err();
    assert_eq!(err.code(), ValidationErrorCode::TypeMismatch);
}

/// Top-level and nested presence are separate categories.
#[test]
fn test_sub_entity_keys_independent_of_keys() {
    let template = json!({"outer": {"inner": 1}});
    let response = json!({"outer": {}});

    // Only top-level presence enabled: the nested gap passes.
    let mut checks = ValidationChecks::keys();
    checks.types_of_values = true;
    assert!(validate(&response, &template, checks).is_ok());

    // Nested presence enabled: it fails.
    checks.sub_entity_keys = true;
    let err = validate(&response, &template, checks).unwrap_err();
    assert_eq!(err.path(), "outer.inner");
}

/// With every category disabled any object passes.
#[test]
fn test_no_checks_accepts_anything() {
    let template = users_template();
    let response = json!({"unrelated": true});
    assert!(validate(&response, &template, ValidationChecks::none()).is_ok());
}

// =============================================================================
// TOLERANCE AND LIMITS
// =============================================================================

/// Keys present in the response but absent from the template are ignored.
#[test]
fn test_extra_response_keys_are_tolerated() {
    let (_dir, store) = store_with(Method::UsersGet, users_template());
    let validator = ResponseValidator::new(&store);

    let response = json!({
        "response": {
            "id": 42,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "counters": {"followers": 10, "videos": 3},
            "friend_ids": [],
            "is_verified": true,
            "occupation": {"type": "work"}
        }
    });
    assert!(validator.validate_users_get(&response).is_ok());
}

/// A template stripped of its rule objects accepts everything the
/// annotated template accepts.
#[test]
fn test_template_without_rules_is_weaker() {
    let annotated = users_template();
    let mut plain = annotated.clone();
    strip_rules(&mut plain);

    let response = json!({
        "response": {
            "id": 42,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "city": "Prague",
            "counters": {"followers": 10},
            "friend_ids": [1]
        }
    });
    assert!(validate(&response, &annotated, ValidationChecks::all()).is_ok());
    assert!(validate(&response, &plain, ValidationChecks::all()).is_ok());

    // A rule violation only the annotated template can see.
    let off_list = json!({
        "response": {
            "id": 42,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "city": "Atlantis",
            "counters": {"followers": 10},
            "friend_ids": [1]
        }
    });
    assert!(validate(&off_list, &annotated, ValidationChecks::all()).is_err());
    assert!(validate(&off_list, &plain, ValidationChecks::all()).is_ok());
}

fn strip_rules(value: &mut Value) {
    if let Value::Object(map) = value {
        map.retain(|key, _| !key.ends_with("-Rules"));
        for child in map.values_mut() {
            strip_rules(child);
        }
    }
}

/// Array elements are never validated individually; only presence,
/// type and cardinality of the array itself are checked.
#[test]
fn test_array_elements_are_not_inspected() {
    let template = json!({
        "items": [{"id": 1, "text": "a"}],
        "items-Rules": {"elementsMustBeEqualOrMoreThan": 1}
    });

    // Elements of a completely different shape still pass.
    let response = json!({"items": ["just", "strings", 7]});
    assert!(validate(&response, &template, ValidationChecks::all()).is_ok());

    // The cardinality bound still applies.
    let empty = json!({"items": []});
    let err = validate(&empty, &template, ValidationChecks::all()).unwrap_err();
    assert_eq!(err.code(), ValidationErrorCode::RuleViolation);
}

/// Boolean values accept any rule object without effect.
#[test]
fn test_boolean_rules_are_inert() {
    let template = json!({
        "online": true,
        "online-Rules": {"minimum": 5, "hasSuffix": "x", "equalInLength": true}
    });
    let response = json!({"online": false});
    assert!(validate(&response, &template, ValidationChecks::all()).is_ok());
}

// =============================================================================
// OPTIONAL AND MUST-MATCH
// =============================================================================

/// An absent optional key skips presence, type and rule checks alike.
#[test]
fn test_absent_optional_key_skips_everything() {
    let (_dir, store) = store_with(Method::UsersGet, users_template());
    let validator = ResponseValidator::new(&store);

    let response = json!({
        "response": {
            "id": 42,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "counters": {"followers": 10},
            "friend_ids": []
        }
    });
    assert!(validator.validate_users_get(&response).is_ok());
}

/// A present optional key is validated in full.
#[test]
fn test_present_optional_key_is_validated() {
    let (_dir, store) = store_with(Method::UsersGet, users_template());
    let validator = ResponseValidator::new(&store);

    let response = json!({
        "response": {
            "id": 42,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "city": "Atlantis",
            "counters": {"followers": 10},
            "friend_ids": []
        }
    });
    let err = validator.validate_users_get(&response).unwrap_err();
    assert_eq!(err.code(), ValidationErrorCode::RuleViolation);
    assert_eq!(err.rule(), Some("matchWithOneOf"));
}

/// mustMatch compares whole subtrees for exact equality.
#[test]
fn test_must_match_on_subtree() {
    let template = json!({
        "error": {"error_code": 5, "error_msg": "User authorization failed"},
        "error-Rules": {"mustMatch": true}
    });

    let same = json!({
        "error": {"error_msg": "User authorization failed", "error_code": 5}
    });
    assert!(validate(&same, &template, ValidationChecks::all()).is_ok());

    let different = json!({
        "error": {"error_code": 6, "error_msg": "Too many requests"}
    });
    let err = validate(&different, &template, ValidationChecks::all()).unwrap_err();
    assert_eq!(err.code(), ValidationErrorCode::MustMatchViolation);
}

// =============================================================================
// DISPATCH
// =============================================================================

/// A method without a template is unavailability, not invalidity.
#[test]
fn test_missing_template_is_unavailable_not_invalid() {
    let dir = TempDir::new().unwrap();
    let store = TemplateStore::open(dir.path()).unwrap();
    let validator = ResponseValidator::new(&store);

    let err = validator
        .validate(Method::PhotosGetAll, &json!({"response": {}}))
        .unwrap_err();
    assert_eq!(err.code(), ValidationErrorCode::TemplateUnavailable);
    assert!(err.is_unavailable());
}

/// Violations are verdicts, not unavailability.
#[test]
fn test_violation_is_not_unavailable() {
    let (_dir, store) = store_with(Method::UsersGet, users_template());
    let validator = ResponseValidator::new(&store);

    let err = validator
        .validate_users_get(&json!({"response": {}}))
        .unwrap_err();
    assert!(!err.is_unavailable());
}
