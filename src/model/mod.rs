//! Typed response models
//!
//! Plain serde structs for the payloads the client consumes, plus the
//! mapper functions that build them from raw response JSON.

pub mod friend;
pub mod mapper;
pub mod photo;
pub mod user_profile;
pub mod wall_post;

pub use friend::Friend;
pub use photo::{Photo, PhotoGalleryCollection};
pub use user_profile::{LastSeen, UserProfile};
pub use wall_post::{Counter, WallPost};
