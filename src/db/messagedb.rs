// db/messagedb.rs
use async_trait::async_trait;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::messagemodel::{Message, MessageWithSender};

#[async_trait]
pub trait MessageExt {
    async fn send_message(
        &self,
        booking_id: Uuid,
        sender_id: Uuid,
        content: &str,
    ) -> Result<Message, Error>;

    async fn get_booking_messages(&self, booking_id: Uuid) -> Result<Vec<MessageWithSender>, Error>;
}

#[async_trait]
impl MessageExt for DBClient {
    async fn send_message(
        &self,
        booking_id: Uuid,
        sender_id: Uuid,
        content: &str,
    ) -> Result<Message, Error> {
        sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (booking_id, sender_id, message)
            VALUES ($1, $2, $3)
            RETURNING id, booking_id, sender_id, message, lu, created_at
            "#,
        )
        .bind(booking_id)
        .bind(sender_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_booking_messages(&self, booking_id: Uuid) -> Result<Vec<MessageWithSender>, Error> {
        sqlx::query_as::<_, MessageWithSender>(
            r#"
            SELECT m.id, m.booking_id, m.sender_id, m.message, m.lu, m.created_at,
                   u.full_name AS sender_name, u.profile_image AS sender_image
            FROM messages m
            JOIN users u ON m.sender_id = u.id
            WHERE m.booking_id = $1
            ORDER BY m.created_at ASC
            "#,
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await
    }
}
