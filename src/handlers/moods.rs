use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{AppJson, AppQuery};
use crate::error::AppResult;
use crate::models::mood::{
    CreateMoodRequest, MessageResponse, MoodEntry, MoodQuery, UpdateMoodRequest,
};
use crate::services::moods as rules;
use crate::AppState;

pub async fn list_moods(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<MoodQuery>,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let moods = rules::list_moods(state.moods.as_ref(), query.user_id).await?;
    Ok(Json(moods))
}

pub async fn get_mood(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MoodEntry>> {
    let mood = rules::get_mood(state.moods.as_ref(), &id).await?;
    Ok(Json(mood))
}

pub async fn create_mood(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateMoodRequest>,
) -> AppResult<(StatusCode, Json<MoodEntry>)> {
    let mood = rules::create_mood(state.moods.as_ref(), body).await?;
    Ok((StatusCode::CREATED, Json(mood)))
}

pub async fn update_mood(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<UpdateMoodRequest>,
) -> AppResult<Json<MessageResponse>> {
    rules::update_mood(state.moods.as_ref(), &id, body).await?;
    Ok(Json(MessageResponse::new("Mood updated successfully")))
}

pub async fn delete_mood(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    rules::soft_delete_mood(state.moods.as_ref(), &id).await?;
    Ok(Json(MessageResponse::new("Mood deleted")))
}
