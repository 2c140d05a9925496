use std::sync::Arc;

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{catalogdb::CatalogExt, providerdb::ProviderExt, reviewdb::ReviewExt},
    dtos::providerdtos::{Pagination, ProviderQueryDto, UpdateProfileDto, DETAIL_REVIEW_LIMIT},
    error::HttpError,
    extractors::{AppJson, AppPath, AppQuery},
    middleware::{auth, JWTAuthMiddleware},
    AppState,
};

pub fn providers_handler() -> Router {
    let protected_routes = Router::new()
        .route("/profile", put(update_profile))
        .layer(middleware::from_fn(auth));

    let public_routes = Router::new()
        .route("/", get(list_providers))
        .route("/:id", get(get_provider));

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
}

pub async fn list_providers(
    Extension(app_state): Extension<Arc<AppState>>,
    AppQuery(params): AppQuery<ProviderQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    params.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let ville = params.ville_filter();
    let metier = params.metier_filter();

    let prestataires = app_state.db_client
        .get_providers(ville, metier, params.limit() as i64, params.offset())
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let total = app_state.db_client
        .count_providers(ville, metier)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let pagination = Pagination {
        page: params.page(),
        limit: params.limit(),
        total,
    };

    Ok(Json(serde_json::json!({
        "prestataires": prestataires,
        "pagination": pagination
    })))
}

pub async fn get_provider(
    Extension(app_state): Extension<Arc<AppState>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let prestataire = app_state.db_client
        .get_provider(id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Prestataire introuvable"))?;

    let (services, avis) = match prestataire.profile_id {
        Some(profile_id) => {
            let services = app_state.db_client
                .get_provider_services(profile_id)
                .await
                .map_err(|e| HttpError::server_error(e.to_string()))?;

            let avis = app_state.db_client
                .get_provider_reviews(profile_id, DETAIL_REVIEW_LIMIT)
                .await
                .map_err(|e| HttpError::server_error(e.to_string()))?;

            (services, avis)
        }
        None => (Vec::new(), Vec::new()),
    };

    Ok(Json(serde_json::json!({
        "prestataire": prestataire,
        "services": services,
        "avis": avis
    })))
}

pub async fn update_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddleware>,
    AppJson(body): AppJson<UpdateProfileDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let profile = app_state.db_client
        .update_profile(auth.claims.user_id, &body)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Profil prestataire introuvable"))?;

    Ok(Json(serde_json::json!({
        "message": "Profil mis à jour",
        "profile": profile
    })))
}
