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
    db::userdb::{NewUser, UserExt},
    dtos::userdtos::{FilterUserDto, LoginUserDto, RegisterUserDto, UserAuthResponseDto, UserResponseDto},
    error::{ErrorMessage, HttpError},
    extractors::AppJson,
    middleware::{auth, JWTAuthMiddleware},
    models::usermodel::User,
    utils::{password, token},
    AppState,
};

pub fn auth_handler() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me).layer(middleware::from_fn(auth)))
}

fn issue_token(app_state: &AppState, user: &User) -> Result<String, HttpError> {
    token::create_token(
        user.id,
        &user.email,
        user.role,
        app_state.env.jwt_secret.as_bytes(),
        app_state.env.jwt_maxage,
    )
    .map_err(|e| HttpError::server_error(e.to_string()))
}

pub async fn register(
    Extension(app_state): Extension<Arc<AppState>>,
    AppJson(body): AppJson<RegisterUserDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let existing_user = app_state.db_client
        .get_user(None, Some(&body.email))
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if existing_user.is_some() {
        return Err(HttpError::bad_request(ErrorMessage::EmailExist.to_string()));
    }

    let hashed_password = password::hash(&body.password)
        .map_err(HttpError::from_password_error)?;

    let user = app_state.db_client
        .save_user(NewUser {
            email: body.email,
            password: hashed_password,
            role: body.role,
            full_name: body.full_name,
            phone: body.phone,
            ville: body.ville,
            secteur: body.secteur,
        })
        .await
        .map_err(|e| HttpError::from_unique_violation(e, ErrorMessage::EmailExist.to_string()))?;

    tracing::info!(user_id = %user.id, role = user.role.to_str(), "user registered");

    let token = issue_token(&app_state, &user)?;

    Ok((
        StatusCode::CREATED,
        Json(UserAuthResponseDto {
            message: "Inscription réussie".to_string(),
            token,
            user: FilterUserDto::filter_user(&user),
        }),
    ))
}

pub async fn login(
    Extension(app_state): Extension<Arc<AppState>>,
    AppJson(body): AppJson<LoginUserDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let result = app_state.db_client
        .get_user(None, Some(&body.email))
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let user = result.ok_or_else(|| HttpError::unauthorized(ErrorMessage::WrongCredentials.to_string()))?;

    let password_matched = password::compare(&body.password, &user.password)
        .map_err(|_| HttpError::unauthorized(ErrorMessage::WrongCredentials.to_string()))?;

    if !password_matched {
        return Err(HttpError::unauthorized(ErrorMessage::WrongCredentials.to_string()));
    }

    let token = issue_token(&app_state, &user)?;

    Ok(Json(UserAuthResponseDto {
        message: "Connexion réussie".to_string(),
        token,
        user: FilterUserDto::filter_user(&user),
    }))
}

pub async fn me(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<JWTAuthMiddleware>,
) -> Result<impl IntoResponse, HttpError> {
    let user = app_state.db_client
        .get_user(Some(auth.claims.user_id), None)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::UserNotFound.to_string()))?;

    Ok(Json(UserResponseDto {
        user: FilterUserDto::filter_user(&user),
    }))
}
