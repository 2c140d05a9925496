use std::fmt;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::to_string(&self).map_err(|_| fmt::Error)?)
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ErrorMessage {
    #[error("Le mot de passe ne peut pas être vide")]
    EmptyPassword,
    #[error("Le mot de passe ne doit pas dépasser {0} caractères")]
    ExceededMaxPasswordLength(usize),
    #[error("Format de hash invalide")]
    InvalidHashFormat,
    #[error("Erreur lors du hachage du mot de passe")]
    HashingError,
    #[error("Token invalide ou expiré")]
    InvalidToken,
    #[error("Token manquant")]
    TokenNotProvided,
    #[error("Erreur serveur")]
    ServerError,
    #[error("Identifiants invalides")]
    WrongCredentials,
    #[error("Cet email est déjà utilisé")]
    EmailExist,
    #[error("Utilisateur introuvable")]
    UserNotFound,
    #[error("Accès refusé")]
    PermissionDenied,
}

#[derive(Debug, Clone)]
pub struct HttpError {
    pub message: String,
    pub status: StatusCode,
}

impl HttpError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        HttpError {
            message: message.into(),
            status,
        }
    }

    /// Logs the underlying cause and hides it from the caller.
    pub fn server_error(cause: impl fmt::Display) -> Self {
        tracing::error!("internal error: {}", cause);
        HttpError {
            message: ErrorMessage::ServerError.to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::UNAUTHORIZED,
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::FORBIDDEN,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::NOT_FOUND,
        }
    }

    /// Maps a unique-constraint violation to a 400 with `message`,
    /// anything else to a generic 500.
    pub fn from_unique_violation(err: sqlx::Error, message: impl Into<String>) -> Self {
        if is_unique_violation(&err) {
            HttpError::bad_request(message)
        } else {
            HttpError::server_error(err)
        }
    }

    /// Maps a foreign-key violation (the referenced row is gone) to a 404,
    /// anything else to a generic 500.
    pub fn from_missing_reference(err: sqlx::Error, message: impl Into<String>) -> Self {
        if is_foreign_key_violation(&err) {
            HttpError::not_found(message)
        } else {
            HttpError::server_error(err)
        }
    }

    /// Password shape problems are the caller's fault, hashing failures are not.
    pub fn from_password_error(err: ErrorMessage) -> Self {
        match err {
            ErrorMessage::EmptyPassword | ErrorMessage::ExceededMaxPasswordLength(_) => {
                HttpError::bad_request(err.to_string())
            }
            _ => HttpError::server_error(err),
        }
    }

    pub fn into_http_response(self) -> Response {
        let status = if self.status.is_server_error() { "error" } else { "fail" };
        let json_response = Json(ErrorResponse {
            status: status.to_string(),
            message: self.message.clone(),
        });

        (self.status, json_response).into_response()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HttpError: message: {}, status: {}",
            self.message, self.status
        )
    }
}

impl std::error::Error for HttpError {}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        HttpError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        HttpError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        HttpError::bad_request(rejection.body_text())
    }
}

pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23503"),
        _ => false,
    }
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_hides_cause() {
        let err = HttpError::server_error("connection refused (os error 111)");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Erreur serveur");
    }

    #[test]
    fn constructors_map_to_statuses() {
        assert_eq!(HttpError::bad_request("x").status, StatusCode::BAD_REQUEST);
        assert_eq!(HttpError::unauthorized("x").status, StatusCode::UNAUTHORIZED);
        assert_eq!(HttpError::forbidden("x").status, StatusCode::FORBIDDEN);
        assert_eq!(HttpError::not_found("x").status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn response_body_carries_status_and_message() {
        let response = HttpError::not_found("Réservation introuvable").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, "fail");
        assert_eq!(body.message, "Réservation introuvable");
    }

    #[test]
    fn non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        let err = HttpError::from_unique_violation(sqlx::Error::RowNotFound, "doublon");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_database_errors_are_not_missing_references() {
        assert!(!is_foreign_key_violation(&sqlx::Error::RowNotFound));
        let err = HttpError::from_missing_reference(sqlx::Error::RowNotFound, "introuvable");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn password_shape_errors_are_bad_requests() {
        let err = HttpError::from_password_error(ErrorMessage::ExceededMaxPasswordLength(64));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Le mot de passe ne doit pas dépasser 64 caractères");

        let err = HttpError::from_password_error(ErrorMessage::EmptyPassword);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = HttpError::from_password_error(ErrorMessage::HashingError);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Erreur serveur");
    }
}
