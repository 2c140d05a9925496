use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::usermodel::{User, UserRole};

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserDto {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[validate(
        length(min = 1, message = "Password is required"),
        length(min = 6, max = 64, message = "Password must be between 6 and 64 characters")
    )]
    pub password: String,

    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,

    pub phone: Option<String>,

    pub role: UserRole,

    pub ville: Option<String>,

    pub secteur: Option<String>,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct LoginUserDto {
    #[validate(length(min = 1, message = "Email is required"), email(message = "Email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User as exposed over the API: everything but the password hash.
#[derive(Debug, Serialize, Deserialize)]
pub struct FilterUserDto {
    pub id: String,
    pub email: String,
    pub role: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub is_verified: bool,
    pub is_certified: bool,
    pub ville: Option<String>,
    pub secteur: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl FilterUserDto {
    pub fn filter_user(user: &User) -> Self {
        FilterUserDto {
            id: user.id.to_string(),
            email: user.email.to_owned(),
            role: user.role.to_str().to_string(),
            full_name: user.full_name.to_owned(),
            phone: user.phone.clone(),
            profile_image: user.profile_image.clone(),
            is_verified: user.is_verified,
            is_certified: user.is_certified,
            ville: user.ville.clone(),
            secteur: user.secteur.clone(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserAuthResponseDto {
    pub message: String,
    pub token: String,
    pub user: FilterUserDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponseDto {
    pub user: FilterUserDto,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn register_body() -> RegisterUserDto {
        RegisterUserDto {
            email: "awa@example.com".into(),
            password: "secret123".into(),
            full_name: "Awa Diop".into(),
            phone: Some("+221770000000".into()),
            role: UserRole::Provider,
            ville: Some("Dakar".into()),
            secteur: Some("Plateau".into()),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(register_body().validate().is_ok());
    }

    #[test]
    fn registration_rejects_bad_email_and_short_password() {
        let mut body = register_body();
        body.email = "not-an-email".into();
        assert!(body.validate().is_err());

        let mut body = register_body();
        body.password = "abc".into();
        assert!(body.validate().is_err());
    }

    #[test]
    fn every_accepted_password_can_be_hashed() {
        let mut body = register_body();
        body.password = "é".repeat(64);
        assert!(body.validate().is_ok());
        assert!(crate::utils::password::hash(body.password.clone()).is_ok());

        body.password = "é".repeat(65);
        assert!(body.validate().is_err());
    }

    #[test]
    fn registration_requires_known_role() {
        let raw = r#"{"email":"a@b.com","password":"secret123","full_name":"A","role":"admin"}"#;
        assert!(serde_json::from_str::<RegisterUserDto>(raw).is_err());

        let raw = r#"{"email":"a@b.com","password":"secret123","full_name":"A","role":"client"}"#;
        let body: RegisterUserDto = serde_json::from_str(raw).unwrap();
        assert_eq!(body.role, UserRole::Client);
        assert!(body.ville.is_none());
    }

    #[test]
    fn filtered_user_has_no_password() {
        let user = User {
            id: Uuid::new_v4(),
            email: "awa@example.com".into(),
            password: "$argon2id$hash".into(),
            role: UserRole::Provider,
            full_name: "Awa Diop".into(),
            phone: None,
            profile_image: None,
            is_verified: false,
            is_certified: false,
            ville: Some("Dakar".into()),
            secteur: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(FilterUserDto::filter_user(&user)).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "provider");
        assert_eq!(json["id"], user.id.to_string());
    }
}
