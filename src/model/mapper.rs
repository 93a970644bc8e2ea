//! Model mapping
//!
//! Builds typed models from raw response JSON. Every endpoint wraps
//! its payload in a `"response"` envelope; list endpoints additionally
//! nest the records under `"items"`. Mapping failures surface as
//! [`ApiError`] values, never panics.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::errors::{ApiError, ApiResult};

use super::friend::Friend;
use super::photo::{Photo, PhotoGalleryCollection};
use super::user_profile::UserProfile;
use super::wall_post::WallPost;

/// Detailed user records from a "users.get" payload.
pub fn users_get(json: &Value) -> ApiResult<Vec<UserProfile>> {
    mapped(envelope(json)?)
}

/// Friend records from a "friends.get" payload.
pub fn friends_get(json: &Value) -> ApiResult<Vec<Friend>> {
    mapped(items(json)?)
}

/// Wall posts from a "wall.get" payload, newest first as delivered.
pub fn wall_posts(json: &Value) -> ApiResult<Vec<WallPost>> {
    mapped(items(json)?)
}

/// Photos from a "photos.getAll" payload.
pub fn photos_get_all(json: &Value) -> ApiResult<Vec<Photo>> {
    mapped(items(json)?)
}

/// Full gallery (count plus page) from a "photos.getAll" payload.
pub fn photos_collection(json: &Value) -> ApiResult<PhotoGalleryCollection> {
    mapped(envelope(json)?)
}

fn envelope(json: &Value) -> ApiResult<&Value> {
    json.get("response")
        .ok_or_else(|| ApiError::missing_field("response"))
}

fn items(json: &Value) -> ApiResult<&Value> {
    envelope(json)?
        .get("items")
        .ok_or_else(|| ApiError::missing_field("response.items"))
}

fn mapped<T: DeserializeOwned>(value: &Value) -> ApiResult<T> {
    serde_json::from_value(value.clone()).map_err(|e| ApiError::mapping_failed(e.to_string()))
}
