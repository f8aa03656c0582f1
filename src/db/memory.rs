//! In-process `MoodStore` used by the test suites.

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::store::{parse_id, MoodStore, StoreError};
use crate::models::mood::{MoodEntry, MoodFields, NewMood};

#[derive(Default)]
pub struct MemoryMoodStore {
    entries: Mutex<Vec<MoodEntry>>,
}

impl MemoryMoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw view including soft-deleted entries.
    pub async fn all(&self) -> Vec<MoodEntry> {
        self.entries.lock().await.clone()
    }
}

#[async_trait]
impl MoodStore for MemoryMoodStore {
    async fn list_active(&self, user_id: &str) -> Result<Vec<MoodEntry>, StoreError> {
        let entries = self.entries.lock().await;
        let mut moods: Vec<MoodEntry> = entries
            .iter()
            .filter(|m| m.user_id == user_id && !m.deleted)
            .cloned()
            .collect();
        moods.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(moods)
    }

    async fn find_active(&self, id: &str) -> Result<Option<MoodEntry>, StoreError> {
        let id = parse_id(id)?;
        let entries = self.entries.lock().await;
        Ok(entries.iter().find(|m| m.id == id && !m.deleted).cloned())
    }

    async fn find_by_day(&self, user_id: &str, date: &str) -> Result<Option<MoodEntry>, StoreError> {
        let entries = self.entries.lock().await;
        Ok(entries
            .iter()
            .find(|m| m.user_id == user_id && m.date == date)
            .cloned())
    }

    async fn count_between(&self, user_id: &str, start: &str, end: &str) -> Result<i64, StoreError> {
        let entries = self.entries.lock().await;
        let count = entries
            .iter()
            .filter(|m| m.user_id == user_id && m.date.as_str() >= start && m.date.as_str() < end)
            .count();
        Ok(count as i64)
    }

    async fn insert(&self, new: NewMood) -> Result<MoodEntry, StoreError> {
        let mut entries = self.entries.lock().await;
        if entries
            .iter()
            .any(|m| m.user_id == new.user_id && m.date == new.date)
        {
            return Err(StoreError::Duplicate);
        }
        let entry = MoodEntry {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            mood: new.mood,
            note: new.note,
            date: new.date,
            deleted: new.deleted,
        };
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn replace(&self, id: &str, fields: MoodFields) -> Result<bool, StoreError> {
        let id = parse_id(id)?;
        let mut entries = self.entries.lock().await;
        let Some(owner) = entries.iter().find(|m| m.id == id).map(|m| m.user_id.clone()) else {
            return Ok(false);
        };
        if entries
            .iter()
            .any(|m| m.id != id && m.user_id == owner && m.date == fields.date)
        {
            return Err(StoreError::Duplicate);
        }
        let Some(entry) = entries.iter_mut().find(|m| m.id == id) else {
            return Ok(false);
        };
        entry.mood = fields.mood;
        entry.note = fields.note;
        entry.date = fields.date;
        entry.deleted = fields.deleted;
        Ok(true)
    }

    async fn mark_deleted(&self, id: &str) -> Result<bool, StoreError> {
        let id = parse_id(id)?;
        let mut entries = self.entries.lock().await;
        match entries.iter_mut().find(|m| m.id == id) {
            Some(entry) => {
                entry.deleted = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
