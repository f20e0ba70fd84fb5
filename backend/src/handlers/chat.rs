//! HTTP handlers for the FieldScore assistant

use axum::{extract::State, response::IntoResponse, Json};
use shared::{validate_chat_message, ChatQuery, ChatReply};

use crate::error::AppResult;
use crate::handlers::SOURCE_HEADER;
use crate::AppState;

/// Ask the assistant a question
/// POST /api/v1/chat
pub async fn send_chat_message(
    State(state): State<AppState>,
    Json(query): Json<ChatQuery>,
) -> AppResult<impl IntoResponse> {
    validate_chat_message(&query.message)?;

    let (answer, source) = state.chat.chat_with_source(&query).await?;

    Ok((
        [(SOURCE_HEADER, source.as_str())],
        Json(ChatReply::from(answer)),
    ))
}
