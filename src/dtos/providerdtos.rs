use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const DETAIL_REVIEW_LIMIT: i64 = 20;

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct ProviderQueryDto {
    pub ville: Option<String>,
    pub metier: Option<String>,
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}

impl ProviderQueryDto {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        (self.page() as i64 - 1) * self.limit() as i64
    }

    pub fn ville_filter(&self) -> Option<&str> {
        non_blank(self.ville.as_deref())
    }

    pub fn metier_filter(&self) -> Option<&str> {
        non_blank(self.metier.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
}

/// Profile edit body. Every field is replaced; a missing field clears the column.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileDto {
    #[validate(length(max = 100, message = "metier must be at most 100 characters"))]
    pub metier: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0, max = 80, message = "experience_annees must be between 0 and 80"))]
    pub experience_annees: Option<i32>,
    #[validate(range(min = 0.0, message = "tarif_horaire must be positive"))]
    pub tarif_horaire: Option<f64>,
    pub zone_intervention: Option<String>,
    pub adresse: Option<String>,
    pub portfolio: Option<serde_json::Value>,
    pub disponibilites: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_to_first_page_of_ten() {
        let query = ProviderQueryDto::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 10);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        let query = ProviderQueryDto {
            page: Some(3),
            limit: Some(7),
            ..Default::default()
        };
        assert_eq!(query.offset(), 14);
    }

    #[test]
    fn zero_page_and_oversized_limit_fail_validation() {
        let query = ProviderQueryDto {
            page: Some(0),
            ..Default::default()
        };
        assert!(query.validate().is_err());

        let query = ProviderQueryDto {
            limit: Some(500),
            ..Default::default()
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn blank_filters_are_ignored() {
        let query = ProviderQueryDto {
            ville: Some("  ".into()),
            metier: Some(" plomb ".into()),
            ..Default::default()
        };
        assert_eq!(query.ville_filter(), None);
        assert_eq!(query.metier_filter(), Some("plomb"));
    }

    #[test]
    fn omitted_profile_fields_deserialize_as_none() {
        let body: UpdateProfileDto = serde_json::from_str(r#"{"metier":"Plombier"}"#).unwrap();
        assert_eq!(body.metier.as_deref(), Some("Plombier"));
        assert!(body.description.is_none());
        assert!(body.portfolio.is_none());
        assert!(body.validate().is_ok());
    }
}
