// db/catalogdb.rs
use async_trait::async_trait;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::{
    dtos::servicedtos::CreateServiceDto,
    models::servicemodel::{Service, ServiceWithProvider},
};

#[async_trait]
pub trait CatalogExt {
    async fn create_service(
        &self,
        prestataire_id: Uuid,
        service: &CreateServiceDto,
    ) -> Result<Service, Error>;

    async fn get_service(&self, service_id: Uuid) -> Result<Option<Service>, Error>;

    async fn get_services(
        &self,
        prestataire_id: Option<Uuid>,
    ) -> Result<Vec<ServiceWithProvider>, Error>;

    async fn get_provider_services(&self, prestataire_id: Uuid) -> Result<Vec<Service>, Error>;
}

#[async_trait]
impl CatalogExt for DBClient {
    async fn create_service(
        &self,
        prestataire_id: Uuid,
        service: &CreateServiceDto,
    ) -> Result<Service, Error> {
        sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services
            (prestataire_id, nom_service, description, prix, duree_estimee, categorie)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, prestataire_id, nom_service, description, prix,
                      duree_estimee, categorie, created_at
            "#,
        )
        .bind(prestataire_id)
        .bind(&service.nom_service)
        .bind(service.description.as_deref())
        .bind(service.prix)
        .bind(service.duree_estimee)
        .bind(service.categorie.as_deref())
        .fetch_one(&self.pool)
        .await
    }

    async fn get_service(&self, service_id: Uuid) -> Result<Option<Service>, Error> {
        sqlx::query_as::<_, Service>(
            r#"
            SELECT id, prestataire_id, nom_service, description, prix,
                   duree_estimee, categorie, created_at
            FROM services
            WHERE id = $1
            "#,
        )
        .bind(service_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_services(
        &self,
        prestataire_id: Option<Uuid>,
    ) -> Result<Vec<ServiceWithProvider>, Error> {
        sqlx::query_as::<_, ServiceWithProvider>(
            r#"
            SELECT s.id, s.prestataire_id, s.nom_service, s.description, s.prix,
                   s.duree_estimee, s.categorie, s.created_at,
                   u.full_name AS prestataire_name,
                   u.profile_image AS prestataire_image
            FROM services s
            JOIN provider_profiles p ON s.prestataire_id = p.id
            JOIN users u ON p.user_id = u.id
            WHERE ($1::uuid IS NULL OR s.prestataire_id = $1)
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(prestataire_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_provider_services(&self, prestataire_id: Uuid) -> Result<Vec<Service>, Error> {
        sqlx::query_as::<_, Service>(
            r#"
            SELECT id, prestataire_id, nom_service, description, prix,
                   duree_estimee, categorie, created_at
            FROM services
            WHERE prestataire_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(prestataire_id)
        .fetch_all(&self.pool)
        .await
    }
}
