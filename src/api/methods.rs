//! API method identifiers
//!
//! The set of remote methods this SDK supports. Endpoint strings follow
//! the remote naming scheme ("users.get", "wall.post", ...). The enum is
//! the key for request construction, template storage and response
//! validation alike.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::ApiError;

/// Supported API methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Extended information about users
    UsersGet,
    /// Friend ids or extended information about user friends
    FriendsGet,
    /// Entries from a user's or community's wall
    WallGet,
    /// Create a post on a wall
    WallPost,
    /// All photos of a user or community in anti-chronological order
    PhotosGetAll,
    /// Server address for uploading a photo to a wall
    PhotosGetWallUploadServer,
    /// Save photos after a successful upload
    PhotosSaveWallPhoto,
    /// End the session
    Logout,
}

impl Method {
    /// Every supported method, in declaration order
    pub const ALL: [Method; 8] = [
        Method::UsersGet,
        Method::FriendsGet,
        Method::WallGet,
        Method::WallPost,
        Method::PhotosGetAll,
        Method::PhotosGetWallUploadServer,
        Method::PhotosSaveWallPhoto,
        Method::Logout,
    ];

    /// Returns the remote endpoint name
    pub fn endpoint(&self) -> &'static str {
        match self {
            Method::UsersGet => "users.get",
            Method::FriendsGet => "friends.get",
            Method::WallGet => "wall.get",
            Method::WallPost => "wall.post",
            Method::PhotosGetAll => "photos.getAll",
            Method::PhotosGetWallUploadServer => "photos.getWallUploadServer",
            Method::PhotosSaveWallPhoto => "photos.saveWallPhoto",
            Method::Logout => "auth.logout",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.endpoint())
    }
}

impl FromStr for Method {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .iter()
            .copied()
            .find(|method| method.endpoint() == s)
            .ok_or_else(|| ApiError::unknown_method(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_round_trip() {
        for method in Method::ALL {
            let parsed: Method = method.endpoint().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn test_unknown_endpoint_rejected() {
        let result: Result<Method, _> = "users.teleport".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_display_matches_endpoint() {
        assert_eq!(Method::UsersGet.to_string(), "users.get");
        assert_eq!(Method::PhotosGetAll.to_string(), "photos.getAll");
        assert_eq!(Method::Logout.to_string(), "auth.logout");
    }
}
