// db/bookingdb.rs
use async_trait::async_trait;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::{
    dtos::bookingdtos::CreateBookingDto,
    models::bookingmodel::{Booking, BookingDetails, BookingStatus},
};

const BOOKING_COLUMNS: &str = r#"
    id, client_id, prestataire_id, service_id, date_reservation, statut,
    adresse_prestation, prix_final, notes, created_at, updated_at
"#;

#[async_trait]
pub trait BookingExt {
    async fn create_booking(
        &self,
        client_id: Uuid,
        booking: &CreateBookingDto,
    ) -> Result<Booking, Error>;

    /// Bookings where the user is the client or the provider behind the profile.
    async fn get_user_bookings(
        &self,
        user_id: Uuid,
        statut: Option<BookingStatus>,
    ) -> Result<Vec<BookingDetails>, Error>;

    async fn update_booking_status(
        &self,
        booking_id: Uuid,
        statut: BookingStatus,
    ) -> Result<Option<Booking>, Error>;

    async fn get_client_booking(
        &self,
        booking_id: Uuid,
        client_id: Uuid,
        statut: BookingStatus,
    ) -> Result<Option<Booking>, Error>;
}

#[async_trait]
impl BookingExt for DBClient {
    async fn create_booking(
        &self,
        client_id: Uuid,
        booking: &CreateBookingDto,
    ) -> Result<Booking, Error> {
        sqlx::query_as::<_, Booking>(&format!(
            r#"
            INSERT INTO bookings
            (client_id, prestataire_id, service_id, date_reservation, adresse_prestation, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            BOOKING_COLUMNS
        ))
        .bind(client_id)
        .bind(booking.prestataire_id)
        .bind(booking.service_id)
        .bind(booking.date_reservation)
        .bind(booking.adresse_prestation.as_deref())
        .bind(booking.notes.as_deref())
        .fetch_one(&self.pool)
        .await
    }

    async fn get_user_bookings(
        &self,
        user_id: Uuid,
        statut: Option<BookingStatus>,
    ) -> Result<Vec<BookingDetails>, Error> {
        sqlx::query_as::<_, BookingDetails>(
            r#"
            SELECT b.id, b.client_id, b.prestataire_id, b.service_id, b.date_reservation,
                   b.statut, b.adresse_prestation, b.prix_final, b.notes,
                   b.created_at, b.updated_at,
                   c.full_name AS client_name, c.profile_image AS client_image,
                   pu.full_name AS prestataire_name, pu.profile_image AS prestataire_image,
                   s.nom_service, s.prix AS service_prix
            FROM bookings b
            JOIN users c ON b.client_id = c.id
            JOIN provider_profiles p ON b.prestataire_id = p.id
            JOIN users pu ON p.user_id = pu.id
            JOIN services s ON b.service_id = s.id
            WHERE (b.client_id = $1 OR p.user_id = $1)
              AND ($2::booking_status IS NULL OR b.statut = $2)
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(statut)
        .fetch_all(&self.pool)
        .await
    }

    async fn update_booking_status(
        &self,
        booking_id: Uuid,
        statut: BookingStatus,
    ) -> Result<Option<Booking>, Error> {
        sqlx::query_as::<_, Booking>(&format!(
            r#"
            UPDATE bookings
            SET statut = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            BOOKING_COLUMNS
        ))
        .bind(booking_id)
        .bind(statut)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_client_booking(
        &self,
        booking_id: Uuid,
        client_id: Uuid,
        statut: BookingStatus,
    ) -> Result<Option<Booking>, Error> {
        sqlx::query_as::<_, Booking>(&format!(
            "SELECT {} FROM bookings WHERE id = $1 AND client_id = $2 AND statut = $3",
            BOOKING_COLUMNS
        ))
        .bind(booking_id)
        .bind(client_id)
        .bind(statut)
        .fetch_optional(&self.pool)
        .await
    }
}
