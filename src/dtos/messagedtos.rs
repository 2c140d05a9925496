use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessageDto {
    pub booking_id: Uuid,

    #[validate(length(min = 1, max = 5000, message = "message must be between 1 and 5000 characters"))]
    pub message: String,
}
