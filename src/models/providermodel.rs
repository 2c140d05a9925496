use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_METIER: &str = "General";

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct ProviderProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub metier: Option<String>,
    pub description: Option<String>,
    pub experience_annees: Option<i32>,
    pub tarif_horaire: Option<f64>,
    pub zone_intervention: Option<String>,
    pub adresse: Option<String>,
    pub portfolio: Option<serde_json::Value>,
    pub disponibilites: Option<serde_json::Value>,
    pub note_moyenne: f64,
    pub nombre_avis: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A provider's public card: user columns joined with the profile, minus the password.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct ProviderListing {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub is_verified: bool,
    pub is_certified: bool,
    pub ville: Option<String>,
    pub secteur: Option<String>,
    pub created_at: DateTime<Utc>,
    pub profile_id: Option<Uuid>,
    pub metier: Option<String>,
    pub description: Option<String>,
    pub experience_annees: Option<i32>,
    pub tarif_horaire: Option<f64>,
    pub zone_intervention: Option<String>,
    pub adresse: Option<String>,
    pub portfolio: Option<serde_json::Value>,
    pub disponibilites: Option<serde_json::Value>,
    pub note_moyenne: Option<f64>,
    pub nombre_avis: Option<i32>,
}
