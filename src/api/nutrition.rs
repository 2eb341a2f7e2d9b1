//! Free-text nutrition search (CalorieNinjas-style endpoint).

use super::ApiError;
use serde::Deserialize;
use std::env;
use std::time::Duration;
use tracing::debug;

const NUTRITION_URL: &str = "https://api.calorieninjas.com/v1/nutrition";
const NUTRITION_KEY_ENV: &str = "NUTRITION_API_KEY";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// One nutrient record as returned by the search endpoint. Queries like
/// "100g oats" or "1 boiled egg" resolve serving size on the server side.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NutritionItem {
    pub name: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub serving_size_g: f64,
    #[serde(default)]
    pub fat_total_g: f64,
    #[serde(default)]
    pub fat_saturated_g: f64,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub sodium_mg: f64,
    #[serde(default)]
    pub potassium_mg: f64,
    #[serde(default)]
    pub cholesterol_mg: f64,
    #[serde(default)]
    pub carbohydrates_total_g: f64,
    #[serde(default)]
    pub fiber_g: f64,
    #[serde(default)]
    pub sugar_g: f64,
}

#[derive(Deserialize)]
struct NutritionResponse {
    #[serde(default)]
    items: Vec<NutritionItem>,
}

pub struct NutritionClient {
    client: reqwest::Client,
    api_key: String,
}

impl NutritionClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    pub fn from_env() -> Result<Self, ApiError> {
        let api_key =
            env::var(NUTRITION_KEY_ENV).map_err(|_| ApiError::MissingKey(NUTRITION_KEY_ENV))?;
        Ok(Self::new(api_key))
    }

    /// Searches for nutrient records matching the free-text query. An empty
    /// result list is not an error; the view decides how to present it.
    pub async fn search(&self, query: &str) -> Result<Vec<NutritionItem>, ApiError> {
        debug!(query, "nutrition search");
        let response = self
            .client
            .get(NUTRITION_URL)
            .query(&[("query", query)])
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?
            .error_for_status()?;
        let body: NutritionResponse = response.json().await?;
        Ok(body.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_response() {
        let body = r#"{"items":[{"name":"oats","calories":389.1,"serving_size_g":100.0,
            "fat_total_g":6.9,"fat_saturated_g":1.2,"protein_g":16.9,"sodium_mg":2.0,
            "potassium_mg":429.0,"cholesterol_mg":0.0,"carbohydrates_total_g":66.3,
            "fiber_g":10.6,"sugar_g":0.99}]}"#;
        let parsed: NutritionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.items.len(), 1);
        let item = &parsed.items[0];
        assert_eq!(item.name, "oats");
        assert_eq!(item.calories, 389.1);
        assert_eq!(item.protein_g, 16.9);
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let parsed: NutritionResponse =
            serde_json::from_str(r#"{"items":[{"name":"water"}]}"#).unwrap();
        assert_eq!(parsed.items[0].calories, 0.0);
        assert_eq!(parsed.items[0].serving_size_g, 0.0);
    }

    #[test]
    fn empty_items_is_ok() {
        let parsed: NutritionResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.items.is_empty());
    }
}
