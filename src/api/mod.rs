/// HTTP clients for the third-party nutrition data sources.
///
/// Lookup failures surface as dismissible errors in the UI; no call here is
/// fatal to the app.
pub mod nutrition;
pub mod product;

pub use nutrition::{NutritionClient, NutritionItem};
pub use product::{Product, ProductClient, kj_to_kcal, parse_allergens};

/// Common error type for the lookup clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no API key configured: set {0}")]
    MissingKey(&'static str),

    #[error("Product not found in database")]
    ProductNotFound,
}
