use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::db::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    TooManyRequests(String),

    #[error(transparent)]
    Storage(StoreError),
}

pub const ALREADY_LOGGED: &str = "Mood already logged for this date";

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            // Unique (user_id, date) index caught a concurrent duplicate.
            StoreError::Duplicate => AppError::Conflict(ALREADY_LOGGED.into()),
            other => AppError::Storage(other),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let AppError::Storage(e) = &self {
            tracing::error!(error = %e, "Storage error");
        }

        // Storage failures surface their raw message to the caller.
        let body = json!({ "error": self.to_string() });

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
