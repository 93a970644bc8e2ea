use chrono::serde::ts_seconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Photo record from "photos.getAll".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: i64,
    pub album_id: i64,
    pub owner_id: i64,
    #[serde(with = "ts_seconds")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub photo_75: Option<String>,
    #[serde(default)]
    pub photo_130: Option<String>,
    #[serde(default)]
    pub photo_604: Option<String>,
    #[serde(default)]
    pub photo_807: Option<String>,
    #[serde(default)]
    pub photo_1280: Option<String>,
}

impl Photo {
    /// Largest size variant present on the record.
    pub fn largest_url(&self) -> Option<&str> {
        self.photo_1280
            .as_deref()
            .or(self.photo_807.as_deref())
            .or(self.photo_604.as_deref())
            .or(self.photo_130.as_deref())
            .or(self.photo_75.as_deref())
    }
}

/// Full gallery payload: total count plus the requested page of photos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoGalleryCollection {
    pub count: i64,
    pub items: Vec<Photo>,
}
