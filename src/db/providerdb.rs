// db/providerdb.rs
use async_trait::async_trait;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::{
    dtos::providerdtos::UpdateProfileDto,
    models::providermodel::{ProviderListing, ProviderProfile},
};

const LISTING_COLUMNS: &str = r#"
    u.id, u.email, u.full_name, u.phone, u.profile_image,
    u.is_verified, u.is_certified, u.ville, u.secteur, u.created_at,
    p.id AS profile_id, p.metier, p.description, p.experience_annees,
    p.tarif_horaire, p.zone_intervention, p.adresse, p.portfolio,
    p.disponibilites, p.note_moyenne, p.nombre_avis
"#;

const PROFILE_COLUMNS: &str = r#"
    id, user_id, metier, description, experience_annees, tarif_horaire,
    zone_intervention, adresse, portfolio, disponibilites,
    note_moyenne, nombre_avis, created_at, updated_at
"#;

/// `ILIKE` pattern matching `filter` as a literal substring.
fn contains_pattern(filter: &str) -> String {
    let mut pattern = String::with_capacity(filter.len() + 2);
    pattern.push('%');
    for c in filter.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
pub trait ProviderExt {
    async fn get_providers(
        &self,
        ville: Option<&str>,
        metier: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ProviderListing>, Error>;

    async fn count_providers(
        &self,
        ville: Option<&str>,
        metier: Option<&str>,
    ) -> Result<i64, Error>;

    async fn get_provider(&self, user_id: Uuid) -> Result<Option<ProviderListing>, Error>;

    async fn get_profile_by_user(&self, user_id: Uuid) -> Result<Option<ProviderProfile>, Error>;

    /// Full replace of the editable columns; `None` clears the column.
    async fn update_profile(
        &self,
        user_id: Uuid,
        update: &UpdateProfileDto,
    ) -> Result<Option<ProviderProfile>, Error>;
}

#[async_trait]
impl ProviderExt for DBClient {
    async fn get_providers(
        &self,
        ville: Option<&str>,
        metier: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ProviderListing>, Error> {
        sqlx::query_as::<_, ProviderListing>(&format!(
            r#"
            SELECT {}
            FROM users u
            JOIN provider_profiles p ON p.user_id = u.id
            WHERE u.role = 'provider'
              AND ($1::text IS NULL OR u.ville ILIKE $1 ESCAPE '\')
              AND ($2::text IS NULL OR p.metier ILIKE $2 ESCAPE '\')
            ORDER BY p.note_moyenne DESC, u.created_at DESC
            LIMIT $3 OFFSET $4
            "#,
            LISTING_COLUMNS
        ))
        .bind(ville.map(contains_pattern))
        .bind(metier.map(contains_pattern))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    async fn count_providers(
        &self,
        ville: Option<&str>,
        metier: Option<&str>,
    ) -> Result<i64, Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM users u
            JOIN provider_profiles p ON p.user_id = u.id
            WHERE u.role = 'provider'
              AND ($1::text IS NULL OR u.ville ILIKE $1 ESCAPE '\')
              AND ($2::text IS NULL OR p.metier ILIKE $2 ESCAPE '\')
            "#,
        )
        .bind(ville.map(contains_pattern))
        .bind(metier.map(contains_pattern))
        .fetch_one(&self.pool)
        .await
    }

    async fn get_provider(&self, user_id: Uuid) -> Result<Option<ProviderListing>, Error> {
        sqlx::query_as::<_, ProviderListing>(&format!(
            r#"
            SELECT {}
            FROM users u
            LEFT JOIN provider_profiles p ON p.user_id = u.id
            WHERE u.id = $1 AND u.role = 'provider'
            "#,
            LISTING_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_profile_by_user(&self, user_id: Uuid) -> Result<Option<ProviderProfile>, Error> {
        sqlx::query_as::<_, ProviderProfile>(&format!(
            "SELECT {} FROM provider_profiles WHERE user_id = $1",
            PROFILE_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        update: &UpdateProfileDto,
    ) -> Result<Option<ProviderProfile>, Error> {
        sqlx::query_as::<_, ProviderProfile>(&format!(
            r#"
            UPDATE provider_profiles
            SET metier = $2,
                description = $3,
                experience_annees = $4,
                tarif_horaire = $5,
                zone_intervention = $6,
                adresse = $7,
                portfolio = $8,
                disponibilites = $9,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING {}
            "#,
            PROFILE_COLUMNS
        ))
        .bind(user_id)
        .bind(update.metier.as_deref())
        .bind(update.description.as_deref())
        .bind(update.experience_annees)
        .bind(update.tarif_horaire)
        .bind(update.zone_intervention.as_deref())
        .bind(update.adresse.as_deref())
        .bind(update.portfolio.clone())
        .bind(update.disponibilites.clone())
        .fetch_optional(&self.pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::contains_pattern;

    #[test]
    fn filters_match_wildcards_literally() {
        assert_eq!(contains_pattern("dakar"), "%dakar%");
        assert_eq!(contains_pattern("_"), r"%\_%");
        assert_eq!(contains_pattern("100%"), r"%100\%%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
    }
}
