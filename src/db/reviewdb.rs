// db/reviewdb.rs
use async_trait::async_trait;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::{
    dtos::reviewdtos::CreateReviewDto,
    models::reviewmodel::{Review, ReviewWithAuthor},
};

#[async_trait]
pub trait ReviewExt {
    async fn get_review_by_booking(&self, booking_id: Uuid) -> Result<Option<Review>, Error>;

    /// Inserts the review and refreshes the provider's rating aggregate atomically.
    async fn create_review(
        &self,
        prestataire_id: Uuid,
        review: &CreateReviewDto,
    ) -> Result<Review, Error>;

    async fn get_provider_reviews(
        &self,
        prestataire_id: Uuid,
        limit: i64,
    ) -> Result<Vec<ReviewWithAuthor>, Error>;
}

#[async_trait]
impl ReviewExt for DBClient {
    async fn get_review_by_booking(&self, booking_id: Uuid) -> Result<Option<Review>, Error> {
        sqlx::query_as::<_, Review>(
            r#"
            SELECT id, booking_id, note, commentaire, photos, created_at
            FROM reviews
            WHERE booking_id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn create_review(
        &self,
        prestataire_id: Uuid,
        review: &CreateReviewDto,
    ) -> Result<Review, Error> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (booking_id, note, commentaire, photos)
            VALUES ($1, $2, $3, $4)
            RETURNING id, booking_id, note, commentaire, photos, created_at
            "#,
        )
        .bind(review.booking_id)
        .bind(review.note)
        .bind(review.commentaire.as_deref())
        .bind(review.photos.clone())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE provider_profiles
            SET note_moyenne = stats.average,
                nombre_avis = stats.total,
                updated_at = NOW()
            FROM (
                SELECT COALESCE(ROUND(AVG(r.note), 2), 0)::DOUBLE PRECISION AS average,
                       COUNT(r.id)::INTEGER AS total
                FROM reviews r
                JOIN bookings b ON r.booking_id = b.id
                WHERE b.prestataire_id = $1
            ) AS stats
            WHERE provider_profiles.id = $1
            "#,
        )
        .bind(prestataire_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_provider_reviews(
        &self,
        prestataire_id: Uuid,
        limit: i64,
    ) -> Result<Vec<ReviewWithAuthor>, Error> {
        sqlx::query_as::<_, ReviewWithAuthor>(
            r#"
            SELECT r.id, r.booking_id, r.note, r.commentaire, r.photos, r.created_at,
                   u.full_name AS client_name, u.profile_image AS client_image
            FROM reviews r
            JOIN bookings b ON r.booking_id = b.id
            JOIN users u ON b.client_id = u.id
            WHERE b.prestataire_id = $1
            ORDER BY r.created_at DESC
            LIMIT $2
            "#,
        )
        .bind(prestataire_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }
}
