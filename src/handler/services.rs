use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::{catalogdb::CatalogExt, providerdb::ProviderExt},
    dtos::servicedtos::{CreateServiceDto, ServiceQueryDto},
    error::HttpError,
    extractors::{AppJson, AppQuery},
    middleware::{auth, JWTAuthMiddleware},
    models::usermodel::UserRole,
    AppState,
};

pub fn services_handler() -> Router {
    let protected_routes = Router::new()
        .route("/", post(create_service))
        .layer(middleware::from_fn(auth));

    let public_routes = Router::new()
        .route("/", get(list_services));

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
}

pub async fn create_service(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddleware>,
    AppJson(body): AppJson<CreateServiceDto>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_role(UserRole::Provider)?;

    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let profile = app_state.db_client
        .get_profile_by_user(auth.claims.user_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Profil prestataire introuvable"))?;

    let service = app_state.db_client
        .create_service(profile.id, &body)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Service créé",
            "service": service
        })),
    ))
}

pub async fn list_services(
    Extension(app_state): Extension<Arc<AppState>>,
    AppQuery(params): AppQuery<ServiceQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    let services = app_state.db_client
        .get_services(params.prestataire_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "services": services
    })))
}
