use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Service {
    pub id: Uuid,
    pub prestataire_id: Uuid,
    pub nom_service: String,
    pub description: Option<String>,
    pub prix: Option<f64>,
    pub duree_estimee: Option<i32>,
    pub categorie: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct ServiceWithProvider {
    pub id: Uuid,
    pub prestataire_id: Uuid,
    pub nom_service: String,
    pub description: Option<String>,
    pub prix: Option<f64>,
    pub duree_estimee: Option<i32>,
    pub categorie: Option<String>,
    pub created_at: DateTime<Utc>,
    pub prestataire_name: String,
    pub prestataire_image: Option<String>,
}
