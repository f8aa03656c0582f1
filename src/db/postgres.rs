use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{parse_id, MoodStore, StoreError};
use crate::models::mood::{MoodEntry, MoodFields, NewMood};

const COLUMNS: &str = "id, user_id, mood, note, date, deleted";

#[derive(Clone)]
pub struct PgMoodStore {
    pool: PgPool,
}

impl PgMoodStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MoodStore for PgMoodStore {
    async fn list_active(&self, user_id: &str) -> Result<Vec<MoodEntry>, StoreError> {
        let moods = sqlx::query_as::<_, MoodEntry>(&format!(
            r#"
            SELECT {COLUMNS} FROM moods
            WHERE user_id = $1 AND deleted = false
            ORDER BY date COLLATE "C" DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(moods)
    }

    async fn find_active(&self, id: &str) -> Result<Option<MoodEntry>, StoreError> {
        let id = parse_id(id)?;
        let mood = sqlx::query_as::<_, MoodEntry>(&format!(
            "SELECT {COLUMNS} FROM moods WHERE id = $1 AND deleted = false"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(mood)
    }

    async fn find_by_day(&self, user_id: &str, date: &str) -> Result<Option<MoodEntry>, StoreError> {
        let mood = sqlx::query_as::<_, MoodEntry>(&format!(
            "SELECT {COLUMNS} FROM moods WHERE user_id = $1 AND date = $2"
        ))
        .bind(user_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(mood)
    }

    async fn count_between(&self, user_id: &str, start: &str, end: &str) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM moods
            WHERE user_id = $1 AND date COLLATE "C" >= $2 AND date COLLATE "C" < $3
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn insert(&self, new: NewMood) -> Result<MoodEntry, StoreError> {
        let result = sqlx::query_as::<_, MoodEntry>(&format!(
            r#"
            INSERT INTO moods (user_id, mood, note, date, deleted)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&new.user_id)
        .bind(&new.mood)
        .bind(&new.note)
        .bind(&new.date)
        .bind(new.deleted)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(mood) => Ok(mood),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(StoreError::Duplicate),
            Err(e) => Err(e.into()),
        }
    }

    async fn replace(&self, id: &str, fields: MoodFields) -> Result<bool, StoreError> {
        let id = parse_id(id)?;
        let result = sqlx::query(
            "UPDATE moods SET mood = $2, note = $3, date = $4, deleted = $5 WHERE id = $1",
        )
        .bind(id)
        .bind(&fields.mood)
        .bind(&fields.note)
        .bind(&fields.date)
        .bind(fields.deleted)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.rows_affected() > 0),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(StoreError::Duplicate),
            Err(e) => Err(e.into()),
        }
    }

    async fn mark_deleted(&self, id: &str) -> Result<bool, StoreError> {
        let id = parse_id(id)?;
        let result = sqlx::query("UPDATE moods SET deleted = true WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
