use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{bookingdb::BookingExt, catalogdb::CatalogExt},
    dtos::bookingdtos::{BookingQueryDto, CreateBookingDto, UpdateBookingStatusDto},
    error::HttpError,
    extractors::{AppJson, AppPath, AppQuery},
    middleware::JWTAuthMiddleware,
    AppState,
};

pub fn bookings_handler() -> Router {
    Router::new()
        .route("/", get(list_bookings).post(create_booking))
        .route("/:id/status", put(update_booking_status))
}

pub async fn create_booking(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddleware>,
    AppJson(body): AppJson<CreateBookingDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    // the service must be one of the chosen provider's
    app_state.db_client
        .get_service(body.service_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .filter(|service| service.prestataire_id == body.prestataire_id)
        .ok_or_else(|| HttpError::not_found("Service introuvable pour ce prestataire"))?;

    let booking = app_state.db_client
        .create_booking(auth.claims.user_id, &body)
        .await
        .map_err(|e| HttpError::from_missing_reference(e, "Client ou service introuvable"))?;

    tracing::info!(booking_id = %booking.id, client_id = %booking.client_id, "booking created");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Réservation créée",
            "booking": booking
        })),
    ))
}

pub async fn list_bookings(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddleware>,
    AppQuery(params): AppQuery<BookingQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    let bookings = app_state.db_client
        .get_user_bookings(auth.claims.user_id, params.statut)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "bookings": bookings
    })))
}

// Any authenticated caller may move any booking to any status.
pub async fn update_booking_status(
    Extension(app_state): Extension<Arc<AppState>>,
    AppPath(booking_id): AppPath<Uuid>,
    AppJson(body): AppJson<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, HttpError> {
    let booking = app_state.db_client
        .update_booking_status(booking_id, body.statut)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Réservation introuvable"))?;

    tracing::info!(booking_id = %booking.id, statut = booking.statut.to_str(), "booking status updated");

    Ok(Json(serde_json::json!({
        "message": "Statut mis à jour",
        "booking": booking
    })))
}
