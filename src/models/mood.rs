use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single mood entry as stored and as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_id: String,
    pub mood: String,
    pub note: String,
    /// Calendar day, `YYYY-MM-DD`.
    pub date: String,
    pub deleted: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMoodRequest {
    pub user_id: Option<String>,
    pub mood: Option<String>,
    pub note: Option<String>,
    pub date: Option<String>,
    pub deleted: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateMoodRequest {
    pub mood: Option<String>,
    pub note: Option<String>,
    pub date: Option<String>,
    pub deleted: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodQuery {
    pub user_id: Option<String>,
}

/// Validated insert payload; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewMood {
    pub user_id: String,
    pub mood: String,
    pub note: String,
    pub date: String,
    pub deleted: bool,
}

/// The fields a replace overwrites. `user_id` is deliberately absent.
#[derive(Debug, Clone)]
pub struct MoodFields {
    pub mood: String,
    pub note: String,
    pub date: String,
    pub deleted: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
