// db/userdb.rs
use async_trait::async_trait;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::{
    providermodel::DEFAULT_METIER,
    usermodel::{User, UserRole},
};

const USER_COLUMNS: &str = r#"
    id, email, password, role, full_name, phone, profile_image,
    is_verified, is_certified, ville, secteur, created_at
"#;

pub struct NewUser {
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub full_name: String,
    pub phone: Option<String>,
    pub ville: Option<String>,
    pub secteur: Option<String>,
}

#[async_trait]
pub trait UserExt {
    async fn get_user(
        &self,
        user_id: Option<Uuid>,
        email: Option<&str>,
    ) -> Result<Option<User>, Error>;

    /// Inserts the user and, for providers, its default profile in one transaction.
    async fn save_user(&self, new_user: NewUser) -> Result<User, Error>;
}

#[async_trait]
impl UserExt for DBClient {
    async fn get_user(
        &self,
        user_id: Option<Uuid>,
        email: Option<&str>,
    ) -> Result<Option<User>, Error> {
        let mut user: Option<User> = None;

        if let Some(user_id) = user_id {
            user = sqlx::query_as::<_, User>(&format!(
                "SELECT {} FROM users WHERE id = $1",
                USER_COLUMNS
            ))
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        } else if let Some(email) = email {
            user = sqlx::query_as::<_, User>(&format!(
                "SELECT {} FROM users WHERE email = $1",
                USER_COLUMNS
            ))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        }

        Ok(user)
    }

    async fn save_user(&self, new_user: NewUser) -> Result<User, Error> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (email, password, role, full_name, phone, ville, secteur)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(new_user.email)
        .bind(new_user.password)
        .bind(new_user.role)
        .bind(new_user.full_name)
        .bind(new_user.phone)
        .bind(new_user.ville)
        .bind(new_user.secteur)
        .fetch_one(&mut *tx)
        .await?;

        if user.role == UserRole::Provider {
            sqlx::query("INSERT INTO provider_profiles (user_id, metier) VALUES ($1, $2)")
                .bind(user.id)
                .bind(DEFAULT_METIER)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(user)
    }
}
