use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Message {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub sender_id: Uuid,
    pub message: String,
    pub lu: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct MessageWithSender {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub sender_id: Uuid,
    pub message: String,
    pub lu: bool,
    pub created_at: DateTime<Utc>,
    pub sender_name: String,
    pub sender_image: Option<String>,
}
