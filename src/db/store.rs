use async_trait::async_trait;
use uuid::Uuid;

use crate::models::mood::{MoodEntry, MoodFields, NewMood};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The caller's id is not a well-formed identifier.
    #[error("{0}")]
    InvalidId(#[from] uuid::Error),

    #[error("an entry already exists for this user and date")]
    Duplicate,

    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

/// The mood collection. Ids cross this boundary as opaque strings; each
/// backend decides what a well-formed id looks like.
#[async_trait]
pub trait MoodStore: Send + Sync {
    /// Non-deleted entries for `user_id`, newest `date` first.
    async fn list_active(&self, user_id: &str) -> Result<Vec<MoodEntry>, StoreError>;

    async fn find_active(&self, id: &str) -> Result<Option<MoodEntry>, StoreError>;

    /// Exact `(user_id, date)` match, deleted or not.
    async fn find_by_day(&self, user_id: &str, date: &str) -> Result<Option<MoodEntry>, StoreError>;

    /// Entries for `user_id` with `start <= date < end`, deleted or not.
    async fn count_between(&self, user_id: &str, start: &str, end: &str) -> Result<i64, StoreError>;

    async fn insert(&self, new: NewMood) -> Result<MoodEntry, StoreError>;

    /// Overwrites the mutable fields. Returns whether an entry matched.
    async fn replace(&self, id: &str, fields: MoodFields) -> Result<bool, StoreError>;

    /// Sets `deleted = true`. Returns whether an entry matched.
    async fn mark_deleted(&self, id: &str) -> Result<bool, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

pub(crate) fn parse_id(id: &str) -> Result<Uuid, StoreError> {
    Ok(Uuid::parse_str(id)?)
}
