//! Mood entry rules: one entry per user per calendar day, one per calendar
//! month, soft deletion.
//!
//! Dates are kept as `YYYY-MM-DD` strings all the way into storage, so month
//! bucketing is a plain string range `[first of month, first of next month)`.
//! That only holds while every stored date is zero-padded ISO, which is why
//! [`parse_entry_date`] refuses anything that does not round-trip exactly.

use chrono::{Datelike, Months, NaiveDate};

use crate::db::MoodStore;
use crate::error::{AppError, AppResult, ALREADY_LOGGED};
use crate::models::mood::{
    CreateMoodRequest, MoodEntry, MoodFields, NewMood, UpdateMoodRequest,
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const NOT_FOUND: &str = "Mood not found";
const MISSING_USER_ID: &str = "Missing userId query parameter";
const MISSING_CREATE_FIELDS: &str = "Missing required fields: userId, mood or date";
const MISSING_UPDATE_FIELDS: &str = "Mood and date are required";
const MONTHLY_LIMIT: &str = "You can post mood only once per month";

/// Empty strings count as missing.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse a calendar day, accepting only the canonical zero-padded form.
pub fn parse_entry_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|day| day.format(DATE_FORMAT).to_string() == raw)
        .ok_or_else(|| {
            AppError::InvalidRequest(format!(
                "Invalid date '{raw}': expected a calendar day in YYYY-MM-DD form"
            ))
        })
}

/// Half-open `[first of month, first of next month)` containing `day`.
///
/// `None` when the end bound has no four-digit year, since the bounds are
/// compared as strings.
pub fn month_window(day: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(day.year(), day.month(), 1)?;
    let end = start.checked_add_months(Months::new(1))?;
    if end.year() > 9999 {
        return None;
    }
    Some((start, end))
}

pub async fn list_moods(store: &dyn MoodStore, user_id: Option<String>) -> AppResult<Vec<MoodEntry>> {
    let user_id =
        present(user_id).ok_or_else(|| AppError::InvalidRequest(MISSING_USER_ID.into()))?;

    Ok(store.list_active(&user_id).await?)
}

pub async fn get_mood(store: &dyn MoodStore, id: &str) -> AppResult<MoodEntry> {
    store
        .find_active(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))
}

pub async fn create_mood(store: &dyn MoodStore, req: CreateMoodRequest) -> AppResult<MoodEntry> {
    let (Some(user_id), Some(mood), Some(date)) =
        (present(req.user_id), present(req.mood), present(req.date))
    else {
        return Err(AppError::InvalidRequest(MISSING_CREATE_FIELDS.into()));
    };

    let day = parse_entry_date(&date)?;

    // Soft-deleted entries still occupy their day and their month.
    if store.find_by_day(&user_id, &date).await?.is_some() {
        tracing::debug!(user_id = %user_id, date = %date, "Mood rejected: day already logged");
        return Err(AppError::Conflict(ALREADY_LOGGED.into()));
    }

    let (start, end) = month_window(day).ok_or_else(|| {
        AppError::InvalidRequest(format!("Invalid date '{date}': out of supported range"))
    })?;
    let this_month = store
        .count_between(
            &user_id,
            &start.format(DATE_FORMAT).to_string(),
            &end.format(DATE_FORMAT).to_string(),
        )
        .await?;

    if this_month >= 1 {
        tracing::debug!(user_id = %user_id, date = %date, "Mood rejected: monthly limit");
        return Err(AppError::TooManyRequests(MONTHLY_LIMIT.into()));
    }

    let created = store
        .insert(NewMood {
            user_id,
            mood,
            note: req.note.unwrap_or_default(),
            date,
            deleted: req.deleted.unwrap_or(false),
        })
        .await?;

    tracing::info!(id = %created.id, user_id = %created.user_id, "Mood created");
    Ok(created)
}

/// Replace the mutable fields. The day and month rules are not re-checked.
pub async fn update_mood(store: &dyn MoodStore, id: &str, req: UpdateMoodRequest) -> AppResult<()> {
    let (Some(mood), Some(date)) = (present(req.mood), present(req.date)) else {
        return Err(AppError::InvalidRequest(MISSING_UPDATE_FIELDS.into()));
    };
    parse_entry_date(&date)?;

    let fields = MoodFields {
        mood,
        note: req.note.unwrap_or_default(),
        date,
        deleted: req.deleted.unwrap_or(false),
    };

    if !store.replace(id, fields).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    Ok(())
}

pub async fn soft_delete_mood(store: &dyn MoodStore, id: &str) -> AppResult<()> {
    if !store.mark_deleted(id).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    tracing::info!(id = %id, "Mood soft-deleted");
    Ok(())
}
