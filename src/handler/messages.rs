use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::messagedb::MessageExt,
    dtos::messagedtos::SendMessageDto,
    error::HttpError,
    extractors::{AppJson, AppPath},
    middleware::JWTAuthMiddleware,
    AppState,
};

pub fn messages_handler() -> Router {
    Router::new()
        .route("/", post(send_message))
        .route("/:booking_id", get(get_messages))
}

pub async fn send_message(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddleware>,
    AppJson(body): AppJson<SendMessageDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let message = app_state.db_client
        .send_message(body.booking_id, auth.claims.user_id, &body.message)
        .await
        .map_err(|e| HttpError::from_missing_reference(e, "Réservation introuvable"))?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Message envoyé",
            "message_data": message
        })),
    ))
}

// No participation check: any authenticated caller can read a booking's thread.
pub async fn get_messages(
    Extension(app_state): Extension<Arc<AppState>>,
    AppPath(booking_id): AppPath<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let messages = app_state.db_client
        .get_booking_messages(booking_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "messages": messages
    })))
}
