use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::post, Extension, Json, Router};
use validator::Validate;

use crate::{
    db::{bookingdb::BookingExt, reviewdb::ReviewExt},
    dtos::reviewdtos::CreateReviewDto,
    error::HttpError,
    extractors::AppJson,
    middleware::JWTAuthMiddleware,
    models::bookingmodel::BookingStatus,
    AppState,
};

const DUPLICATE_REVIEW: &str = "Un avis existe déjà pour cette réservation";

pub fn reviews_handler() -> Router {
    Router::new().route("/", post(create_review))
}

pub async fn create_review(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddleware>,
    AppJson(body): AppJson<CreateReviewDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let booking = app_state.db_client
        .get_client_booking(body.booking_id, auth.claims.user_id, BookingStatus::Completed)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| {
            HttpError::forbidden("Vous ne pouvez évaluer que vos réservations terminées")
        })?;

    let existing = app_state.db_client
        .get_review_by_booking(booking.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if existing.is_some() {
        return Err(HttpError::bad_request(DUPLICATE_REVIEW));
    }

    let review = app_state.db_client
        .create_review(booking.prestataire_id, &body)
        .await
        .map_err(|e| HttpError::from_unique_violation(e, DUPLICATE_REVIEW))?;

    tracing::info!(
        review_id = %review.id,
        prestataire_id = %booking.prestataire_id,
        note = review.note,
        "review created, provider rating refreshed"
    );

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Avis publié",
            "review": review
        })),
    ))
}
