//! Point extraction
//!
//! Pulls single values out of response JSON without building a full
//! model, for callers that need one field from a large payload. All
//! lookups use JSON pointers and report the missing pointer on failure.

use serde_json::Value;

use crate::api::errors::{ApiError, ApiResult};

/// Platform code of the first user's last-seen record in a "users.get"
/// payload.
pub fn last_seen_platform_in_users_get(json: &Value) -> ApiResult<i64> {
    integer_at(json, "/response/0/last_seen/platform")
}

/// Follower count from a counters object as returned by "users.get"
/// with the `counters` field requested.
pub fn followers_in_users_get_from_counters(counters: &Value) -> ApiResult<i64> {
    integer_at(counters, "/followers")
}

/// Identifier of the post created by a "wall.post" call.
pub fn post_id_in_wall_post(json: &Value) -> ApiResult<i64> {
    integer_at(json, "/response/post_id")
}

fn integer_at(json: &Value, pointer: &str) -> ApiResult<i64> {
    json.pointer(pointer)
        .ok_or_else(|| ApiError::missing_field(pointer))?
        .as_i64()
        .ok_or_else(|| {
            ApiError::mapping_failed(format!("value at '{}' is not an integer", pointer))
        })
}
