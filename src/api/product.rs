//! Barcode product lookup against the Open Food Facts database.

use super::ApiError;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

const PRODUCT_URL: &str = "https://world.openfoodfacts.org/api/v0/product";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Per-100g nutriment values. Energy is reported in kJ.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Nutriments {
    #[serde(default)]
    pub energy: Option<f64>,
    #[serde(default)]
    pub proteins: Option<f64>,
    #[serde(default)]
    pub carbohydrates: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub fiber: Option<f64>,
    #[serde(default)]
    pub sugars: Option<f64>,
    #[serde(default)]
    pub salt: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub brands: Option<String>,
    #[serde(default)]
    pub serving_size: Option<String>,
    #[serde(default)]
    pub nutriments: Option<Nutriments>,
    /// Labelled micronutrients ("vitamin-a", "calcium", ...), free-form.
    #[serde(default)]
    pub nutrients: Option<HashMap<String, String>>,
    #[serde(default)]
    pub ingredients_text: Option<String>,
    /// Comma-separated tags such as "en:milk,en:gluten".
    #[serde(default)]
    pub allergens: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// NOVA processing-level classification, 1 (unprocessed) to 4.
    #[serde(default)]
    pub nova_group: Option<u8>,
    #[serde(default)]
    pub ecoscore_grade: Option<String>,
}

impl Product {
    /// Calories for the labelled serving, rounded. Energy arrives in kJ.
    pub fn calories(&self) -> Option<u32> {
        let energy = self.nutriments.as_ref()?.energy?;
        Some(kj_to_kcal(energy))
    }
}

#[derive(Deserialize)]
struct ProductResponse {
    #[serde(default)]
    status: i32,
    #[serde(default)]
    product: Option<Product>,
}

/// 1 kcal = 4.184 kJ.
pub fn kj_to_kcal(energy_kj: f64) -> u32 {
    (energy_kj / 4.184).round() as u32
}

/// Splits an allergen tag string, dropping the "en:" language prefix.
pub fn parse_allergens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().trim_start_matches("en:").trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

pub struct ProductClient {
    client: reqwest::Client,
}

impl ProductClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Fetches the product record for a barcode. A `status` of zero from the
    /// API means the barcode is unknown.
    pub async fn fetch(&self, barcode: &str) -> Result<Product, ApiError> {
        debug!(barcode, "product lookup");
        let url = format!("{PRODUCT_URL}/{barcode}.json");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body: ProductResponse = response.json().await?;
        if body.status == 0 {
            return Err(ApiError::ProductNotFound);
        }
        body.product.ok_or(ApiError::ProductNotFound)
    }
}

impl Default for ProductClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kj_to_kcal_rounds() {
        // Oreo-class biscuit: ~2092 kJ/100g.
        assert_eq!(kj_to_kcal(2092.0), 500);
        assert_eq!(kj_to_kcal(0.0), 0);
        assert_eq!(kj_to_kcal(4.184), 1);
    }

    #[test]
    fn allergen_tags_lose_language_prefix() {
        assert_eq!(
            parse_allergens("en:milk,en:gluten, en:soybeans"),
            vec!["milk", "gluten", "soybeans"]
        );
        assert!(parse_allergens("").is_empty());
        assert_eq!(parse_allergens("peanuts"), vec!["peanuts"]);
    }

    #[test]
    fn parses_product_response() {
        let body = r#"{
            "status": 1,
            "product": {
                "product_name": "Oreo",
                "brands": "Mondelez",
                "serving_size": "100g",
                "nutriments": {"energy": 2000.0, "proteins": 5.0, "fat": 20.0},
                "allergens": "en:gluten,en:milk",
                "nova_group": 4,
                "ecoscore_grade": "d"
            }
        }"#;
        let parsed: ProductResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.status, 1);
        let product = parsed.product.unwrap();
        assert_eq!(product.product_name, "Oreo");
        assert_eq!(product.calories(), Some(478));
        assert_eq!(product.nova_group, Some(4));
    }

    #[test]
    fn unknown_barcode_shape() {
        let parsed: ProductResponse =
            serde_json::from_str(r#"{"status": 0, "status_verbose": "product not found"}"#)
                .unwrap();
        assert_eq!(parsed.status, 0);
        assert!(parsed.product.is_none());
    }
}
