use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::bookingmodel::BookingStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingDto {
    pub prestataire_id: Uuid,
    pub service_id: Uuid,
    pub date_reservation: DateTime<Utc>,
    #[validate(length(max = 500, message = "adresse_prestation must be at most 500 characters"))]
    pub adresse_prestation: Option<String>,
    #[validate(length(max = 2000, message = "notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BookingQueryDto {
    pub statut: Option<BookingStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingStatusDto {
    pub statut: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_reservation_date() {
        let raw = format!(
            r#"{{"prestataire_id":"{}","service_id":"{}","date_reservation":"2026-11-02T09:30:00Z","notes":"Sonner deux fois"}}"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let body: CreateBookingDto = serde_json::from_str(&raw).unwrap();
        assert_eq!(body.date_reservation.to_rfc3339(), "2026-11-02T09:30:00+00:00");
        assert!(body.adresse_prestation.is_none());
        assert!(body.validate().is_ok());
    }

    #[test]
    fn status_update_rejects_unknown_status() {
        assert!(serde_json::from_str::<UpdateBookingStatusDto>(r#"{"statut":"done"}"#).is_err());
        let body: UpdateBookingStatusDto =
            serde_json::from_str(r#"{"statut":"completed"}"#).unwrap();
        assert_eq!(body.statut, BookingStatus::Completed);
    }
}
