use chrono::serde::ts_seconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Detailed user record from "users.get".
///
/// Only the fields the client requests by default are modelled;
/// anything else in the payload is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub photo_50: Option<String>,
    #[serde(default)]
    pub photo_100: Option<String>,
    #[serde(default)]
    pub online: Option<i64>,
    #[serde(default)]
    pub last_seen: Option<LastSeen>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_online(&self) -> bool {
        self.online == Some(1)
    }
}

/// Last-seen record nested in a user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastSeen {
    #[serde(with = "ts_seconds")]
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub platform: Option<i64>,
}
