use chrono::serde::ts_seconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post from a user's or community's wall ("wall.get").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallPost {
    pub id: i64,
    pub from_id: i64,
    pub owner_id: i64,
    #[serde(with = "ts_seconds")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub post_type: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub comments: Option<Counter>,
    #[serde(default)]
    pub likes: Option<Counter>,
    #[serde(default)]
    pub reposts: Option<Counter>,
}

/// Counter object (`{"count": N, ...}`) attached to posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counter {
    pub count: i64,
}

impl WallPost {
    pub fn likes_count(&self) -> i64 {
        self.likes.as_ref().map_or(0, |c| c.count)
    }

    pub fn comments_count(&self) -> i64 {
        self.comments.as_ref().map_or(0, |c| c.count)
    }
}
