use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Review {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub note: i32,
    pub commentaire: Option<String>,
    pub photos: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct ReviewWithAuthor {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub note: i32,
    pub commentaire: Option<String>,
    pub photos: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub client_name: String,
    pub client_image: Option<String>,
}
