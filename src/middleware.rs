use std::sync::Arc;

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::IntoResponse,
    Extension,
};

use crate::{
    error::{ErrorMessage, HttpError},
    models::usermodel::UserRole,
    utils::token::{self, TokenClaims},
    AppState,
};

/// Decoded bearer claims, attached to the request by [`auth`].
#[derive(Debug, Clone)]
pub struct JWTAuthMiddleware {
    pub claims: TokenClaims,
}

impl JWTAuthMiddleware {
    pub fn require_role(&self, role: UserRole) -> Result<(), HttpError> {
        if self.claims.role != role {
            return Err(HttpError::forbidden(ErrorMessage::PermissionDenied.to_string()));
        }
        Ok(())
    }
}

pub async fn auth(
    Extension(app_state): Extension<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_value| auth_value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned);

    let token = token.ok_or_else(|| {
        HttpError::unauthorized(ErrorMessage::TokenNotProvided.to_string())
    })?;

    let claims = token::decode_token(&token, app_state.env.jwt_secret.as_bytes())
        .map_err(|_| HttpError::forbidden(ErrorMessage::InvalidToken.to_string()))?;

    req.extensions_mut().insert(JWTAuthMiddleware { claims });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use uuid::Uuid;

    fn claims(role: UserRole) -> JWTAuthMiddleware {
        JWTAuthMiddleware {
            claims: TokenClaims {
                user_id: Uuid::new_v4(),
                email: "a@b.com".into(),
                role,
                iat: 0,
                exp: 0,
            },
        }
    }

    #[test]
    fn require_role_forbids_other_roles() {
        assert!(claims(UserRole::Provider).require_role(UserRole::Provider).is_ok());

        let err = claims(UserRole::Client)
            .require_role(UserRole::Provider)
            .unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }
}
