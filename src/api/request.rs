//! Request construction
//!
//! Builds full request URLs (base URL + endpoint + query parameters)
//! from a method and a parameter dictionary. Per-method defaults are
//! injected first, then caller parameters override them. The API version
//! is pinned on every request.
//!
//! Transport is not this crate's concern: the output is a [`Url`] for
//! whatever HTTP client the application uses.

use std::collections::BTreeMap;

use url::Url;

use super::errors::{ApiError, ApiResult};
use super::methods::Method;

/// Base prefix prepended to every method endpoint
pub const BASE_URL: &str = "https://api.vk.com/method/";

/// API version sent with every request
pub const API_VERSION: &str = "5.21";

/// Parameter dictionary for request construction
pub type Params = BTreeMap<String, String>;

/// Builds API request URLs
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base: String,
}

impl RequestBuilder {
    /// Creates a builder over the default base URL.
    pub fn new() -> Self {
        Self {
            base: BASE_URL.to_string(),
        }
    }

    /// Creates a builder over a custom base URL (must end with '/').
    pub fn with_base(base: &str) -> ApiResult<Self> {
        Url::parse(base)
            .map_err(|e| ApiError::invalid_request(format!("invalid base URL: {}", e)))?;
        Ok(Self { base: base.to_string() })
    }

    /// The main entry point: builds the URL for any method plus a
    /// parameter dictionary. Defaults are merged in first, so callers
    /// only pass what they want to override.
    pub fn build(&self, method: Method, params: &Params) -> ApiResult<Url> {
        let base = Url::parse(&self.base)
            .map_err(|e| ApiError::invalid_request(format!("invalid base URL: {}", e)))?;
        let mut url = base
            .join(method.endpoint())
            .map_err(|e| ApiError::invalid_request(format!("cannot join endpoint: {}", e)))?;

        let mut merged = defaults_for(method);
        for (key, value) in params {
            merged.insert(key.clone(), value.clone());
        }
        merged.insert("v".into(), API_VERSION.into());

        {
            let mut query = url.query_pairs_mut();
            for (key, value) in &merged {
                query.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Request for "users.get".
    pub fn users_get(
        &self,
        user_ids: &[&str],
        fields: &[&str],
        name_case: Option<&str>,
    ) -> ApiResult<Url> {
        let mut params = Params::new();
        if !user_ids.is_empty() {
            params.insert("user_ids".into(), user_ids.join(","));
        }
        if !fields.is_empty() {
            params.insert("fields".into(), fields.join(","));
        }
        if let Some(name_case) = name_case {
            params.insert("name_case".into(), name_case.into());
        }
        self.build(Method::UsersGet, &params)
    }

    /// Request for "wall.get".
    pub fn wall_get(
        &self,
        owner_id: Option<&str>,
        offset: u64,
        count: u64,
        filter: Option<&str>,
    ) -> ApiResult<Url> {
        let mut params = Params::new();
        if let Some(owner_id) = owner_id {
            params.insert("owner_id".into(), owner_id.into());
        }
        params.insert("offset".into(), offset.to_string());
        if count > 0 {
            params.insert("count".into(), count.to_string());
        }
        if let Some(filter) = filter {
            params.insert("filter".into(), filter.into());
        }
        self.build(Method::WallGet, &params)
    }

    /// Request for "wall.post".
    pub fn wall_post(
        &self,
        owner_id: Option<&str>,
        message: Option<&str>,
        attachments: Option<&str>,
    ) -> ApiResult<Url> {
        let mut params = Params::new();
        if let Some(owner_id) = owner_id {
            params.insert("owner_id".into(), owner_id.into());
        }
        if let Some(message) = message {
            params.insert("message".into(), message.into());
        }
        if let Some(attachments) = attachments {
            params.insert("attachments".into(), attachments.into());
        }
        self.build(Method::WallPost, &params)
    }

    /// Request for "photos.getAll".
    pub fn photos_get_all(
        &self,
        owner_id: Option<&str>,
        offset: u64,
        count: u64,
    ) -> ApiResult<Url> {
        let mut params = Params::new();
        if let Some(owner_id) = owner_id {
            params.insert("owner_id".into(), owner_id.into());
        }
        params.insert("offset".into(), offset.to_string());
        if count > 0 {
            params.insert("count".into(), count.to_string());
        }
        self.build(Method::PhotosGetAll, &params)
    }

    /// Request for "friends.get".
    pub fn friends_get(
        &self,
        user_id: Option<&str>,
        order: Option<&str>,
        fields: &[&str],
        count: u64,
        offset: u64,
    ) -> ApiResult<Url> {
        let mut params = Params::new();
        if let Some(user_id) = user_id {
            params.insert("user_id".into(), user_id.into());
        }
        if let Some(order) = order {
            params.insert("order".into(), order.into());
        }
        if !fields.is_empty() {
            params.insert("fields".into(), fields.join(","));
        }
        if count > 0 {
            params.insert("count".into(), count.to_string());
        }
        params.insert("offset".into(), offset.to_string());
        self.build(Method::FriendsGet, &params)
    }

    /// Request for "photos.getWallUploadServer".
    pub fn photos_get_wall_upload_server(
        &self,
        user_id: Option<&str>,
        group_id: Option<&str>,
    ) -> ApiResult<Url> {
        let mut params = Params::new();
        if let Some(user_id) = user_id {
            params.insert("user_id".into(), user_id.into());
        }
        if let Some(group_id) = group_id {
            params.insert("group_id".into(), group_id.into());
        }
        self.build(Method::PhotosGetWallUploadServer, &params)
    }

    /// Request for "photos.saveWallPhoto".
    pub fn photos_save_wall_photo(
        &self,
        user_id: Option<&str>,
        group_id: Option<&str>,
        photo: &str,
        server: i64,
        hash: &str,
    ) -> ApiResult<Url> {
        let mut params = Params::new();
        if let Some(user_id) = user_id {
            params.insert("user_id".into(), user_id.into());
        }
        if let Some(group_id) = group_id {
            params.insert("group_id".into(), group_id.into());
        }
        params.insert("photo".into(), photo.into());
        params.insert("server".into(), server.to_string());
        params.insert("hash".into(), hash.into());
        self.build(Method::PhotosSaveWallPhoto, &params)
    }

    /// Request for "auth.logout".
    pub fn logout(&self) -> ApiResult<Url> {
        self.build(Method::Logout, &Params::new())
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-method default parameters.
fn defaults_for(method: Method) -> Params {
    let mut defaults = Params::new();
    match method {
        Method::UsersGet => {
            defaults.insert(
                "fields".into(),
                "photo_50,photo_100,online,last_seen,music".into(),
            );
            defaults.insert("name_case".into(), "Nom".into());
        }
        Method::WallGet => {
            defaults.insert("count".into(), "10".into());
            defaults.insert("filter".into(), "all".into());
        }
        Method::PhotosGetAll => {
            defaults.insert("count".into(), "50".into());
            defaults.insert("no_service_albums".into(), "0".into());
        }
        Method::FriendsGet => {
            defaults.insert("order".into(), "hints".into());
            defaults.insert("count".into(), "100".into());
        }
        _ => {}
    }
    defaults
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_value(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_build_joins_endpoint_onto_base() {
        let url = RequestBuilder::new()
            .build(Method::UsersGet, &Params::new())
            .unwrap();
        assert!(url.as_str().starts_with("https://api.vk.com/method/users.get?"));
    }

    #[test]
    fn test_version_is_pinned_on_every_request() {
        let builder = RequestBuilder::new();
        for method in Method::ALL {
            let url = builder.build(method, &Params::new()).unwrap();
            assert_eq!(query_value(&url, "v").as_deref(), Some(API_VERSION));
        }
    }

    #[test]
    fn test_defaults_injected() {
        let url = RequestBuilder::new()
            .build(Method::WallGet, &Params::new())
            .unwrap();
        assert_eq!(query_value(&url, "count").as_deref(), Some("10"));
        assert_eq!(query_value(&url, "filter").as_deref(), Some("all"));
    }

    #[test]
    fn test_caller_params_override_defaults() {
        let mut params = Params::new();
        params.insert("count".into(), "25".into());

        let url = RequestBuilder::new().build(Method::WallGet, &params).unwrap();
        assert_eq!(query_value(&url, "count").as_deref(), Some("25"));
    }

    #[test]
    fn test_users_get_convenience() {
        let url = RequestBuilder::new()
            .users_get(&["155510513"], &["online", "music"], None)
            .unwrap();
        assert_eq!(query_value(&url, "user_ids").as_deref(), Some("155510513"));
        assert_eq!(query_value(&url, "fields").as_deref(), Some("online,music"));
        // Default name_case survives when not overridden.
        assert_eq!(query_value(&url, "name_case").as_deref(), Some("Nom"));
    }

    #[test]
    fn test_friends_get_defaults() {
        let url = RequestBuilder::new()
            .friends_get(None, None, &[], 0, 0)
            .unwrap();
        assert_eq!(query_value(&url, "order").as_deref(), Some("hints"));
        assert_eq!(query_value(&url, "count").as_deref(), Some("100"));
    }

    #[test]
    fn test_custom_base_url() {
        let builder = RequestBuilder::with_base("https://example.test/api/").unwrap();
        let url = builder.logout().unwrap();
        assert!(url.as_str().starts_with("https://example.test/api/auth.logout?"));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(RequestBuilder::with_base("not a url").is_err());
    }
}
