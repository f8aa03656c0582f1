use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

pub mod health;
pub mod moods;

/// `Json` whose rejections render in the API's `{ "error": ... }` shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Query` whose rejections render in the API's `{ "error": ... }` shape.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
