use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReviewDto {
    pub booking_id: Uuid,

    #[validate(range(min = 1, max = 5, message = "note must be between 1 and 5"))]
    pub note: i32,

    #[validate(length(max = 2000, message = "commentaire must be at most 2000 characters"))]
    pub commentaire: Option<String>,

    pub photos: Option<serde_json::Value>,
}
