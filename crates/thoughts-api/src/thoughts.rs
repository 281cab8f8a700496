use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use thoughts_types::{ApiEnvelope, CreateThoughtRequest, MessageError, validate_message};

use crate::AppState;
use crate::error::ApiError;

/// Page size of the recent-thoughts feed.
pub const RECENT_LIMIT: i64 = 20;

pub async fn index() -> &'static str {
    "Happy Thoughts API\n\n\
     GET    /\n\
     GET    /thoughts\n\
     POST   /thoughts\n\
     GET    /thoughts/{id}\n\
     PATCH  /thoughts/{id}/like\n"
}

pub async fn list_thoughts(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let thoughts = state.store.recent(RECENT_LIMIT).await?;
    Ok(Json(ApiEnvelope::ok(thoughts, "Found the latest thoughts")))
}

pub async fn create_thought(
    State(state): State<AppState>,
    Json(req): Json<CreateThoughtRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let raw = req.message.ok_or(MessageError::Missing)?;
    let message = validate_message(&raw)?;
    let thought = state.store.insert(message).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiEnvelope::ok(thought, "New thought posted")),
    ))
}

/// A well-formed id with no matching record is a success with a null payload,
/// not an error.
pub async fn get_thought(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let thought = state.store.find(&id).await?;
    let message = if thought.is_some() {
        "Found the thought"
    } else {
        "No thought with that id"
    };
    Ok(Json(ApiEnvelope::ok(thought, message)))
}

pub async fn like_thought(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let thought = state
        .store
        .add_heart(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(id))?;
    Ok((
        StatusCode::CREATED,
        Json(ApiEnvelope::ok(thought, "New like!")),
    ))
}
