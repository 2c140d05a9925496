use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateServiceDto {
    #[validate(length(min = 1, max = 255, message = "nom_service is required"))]
    pub nom_service: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "prix must be positive"))]
    pub prix: Option<f64>,
    #[validate(range(min = 0, message = "duree_estimee must be positive"))]
    pub duree_estimee: Option<i32>,
    pub categorie: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ServiceQueryDto {
    pub prestataire_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_price_is_rejected() {
        let body = CreateServiceDto {
            nom_service: "Réparation fuite".into(),
            description: None,
            prix: Some(-5.0),
            duree_estimee: Some(60),
            categorie: Some("Plomberie".into()),
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn name_is_required() {
        let body: CreateServiceDto = serde_json::from_str(r#"{"nom_service":""}"#).unwrap();
        assert!(body.validate().is_err());

        let body: CreateServiceDto =
            serde_json::from_str(r#"{"nom_service":"Peinture","prix":15000}"#).unwrap();
        assert!(body.validate().is_ok());
    }
}
