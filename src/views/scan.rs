//! Barcode lookup against Open Food Facts, with a recent-scan history and
//! serving-adjusted logging.

use crate::api::product::{Product, ProductClient, parse_allergens};
use crate::store::AppStore;
use crate::types::{LoggedMeal, RecentScan};
use crate::views::shared;
use dioxus::prelude::*;

const DEMO_BARCODE: &str = "7622210449283";

#[component]
pub fn ScanView() -> Element {
    let store = use_context::<AppStore>();
    let mut barcode = use_signal(String::new);
    let busy = use_signal(|| false);
    let error = use_signal(String::new);
    let product = use_signal(|| None::<Product>);
    let recent = use_signal({
        let store = store.clone();
        move || store.recent_scans()
    });

    let lookup = {
        let store = store.clone();
        move |code: String| {
            let mut busy = busy;
            let mut error = error;
            let mut product = product;
            let mut recent = recent;
            let code = code.trim().to_string();
            if busy() || code.is_empty() {
                return;
            }
            busy.set(true);
            error.set(String::new());
            let store = store.clone();
            spawn(async move {
                match ProductClient::new().fetch(&code).await {
                    Ok(found) => {
                        let name = if found.product_name.is_empty() {
                            code.clone()
                        } else {
                            found.product_name.clone()
                        };
                        let scan = RecentScan {
                            id: code,
                            name,
                            calories: found.calories().unwrap_or(0),
                            protein: found
                                .nutriments
                                .as_ref()
                                .and_then(|n| n.proteins)
                                .unwrap_or(0.0),
                            image: found.image_url.clone(),
                            date: shared::current_timestamp(),
                        };
                        recent.set(store.record_scan(scan));
                        product.set(Some(found));
                    }
                    Err(err) => {
                        product.set(None);
                        error.set(err.to_string());
                    }
                }
                busy.set(false);
            });
        }
    };
    let mut manual_lookup = lookup.clone();
    let mut demo_lookup = lookup;

    rsx! {
        div { class: "main-container",
            div { class: "card",
                h2 { "Scan a Product" }
                div { class: "search-row",
                    input {
                        r#type: "text",
                        placeholder: "Enter a barcode",
                        value: "{barcode}",
                        oninput: move |evt| barcode.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: busy(),
                        onclick: move |_| manual_lookup(barcode()),
                        if busy() { "Looking up..." } else { "Look Up" }
                    }
                }
                button {
                    class: "btn",
                    disabled: busy(),
                    onclick: move |_| demo_lookup(DEMO_BARCODE.to_string()),
                    "Try a demo barcode"
                }
            }

            shared::DismissibleAlert { error }

            if let Some(found) = product() {
                ProductDetail { product: found }
            }

            div { class: "card",
                h3 { "Recent Scans" }
                if recent().is_empty() {
                    p { "No scans yet." }
                } else {
                    div { class: "scan-grid",
                        for scan in recent() {
                            div { class: "scan-tile",
                                span { class: "meal-name", "{scan.name}" }
                                span { class: "badge", "{scan.calories} kcal" }
                                span { "{scan.protein:.1}g protein" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProductDetail(product: Product) -> Element {
    let store = use_context::<AppStore>();
    let mut serving_factor = use_signal(|| 1.0f64);
    let mut logged = use_signal(|| false);

    let factor = serving_factor();
    let nutriments = product.nutriments.clone().unwrap_or_default();
    let calories = product
        .calories()
        .map(|kcal| format!("{:.0}", f64::from(kcal) * factor))
        .unwrap_or_else(|| "N/A".to_string());
    let allergens = product
        .allergens
        .as_deref()
        .map(parse_allergens)
        .unwrap_or_default()
        .join(", ");
    let ecoscore = product
        .ecoscore_grade
        .as_deref()
        .map(str::to_uppercase)
        .unwrap_or_default();

    let log_meal = {
        let store = store.clone();
        let product = product.clone();
        move |_| {
            let nutriments = product.nutriments.clone().unwrap_or_default();
            store.log_meal(LoggedMeal {
                date: shared::iso_date(shared::today()),
                name: product.product_name.clone(),
                calories: product.calories().map(f64::from).unwrap_or(0.0) * factor,
                protein_g: nutriments.proteins.unwrap_or(0.0) * factor,
                carbs_g: nutriments.carbohydrates.unwrap_or(0.0) * factor,
                fat_g: nutriments.fat.unwrap_or(0.0) * factor,
            });
            logged.set(true);
        }
    };

    rsx! {
        div { class: "card",
            div { class: "product-header",
                div {
                    h3 { "{product.product_name}" }
                    if let Some(brands) = product.brands.as_deref() {
                        p { "{brands}" }
                    }
                }
                if let Some(image) = product.image_url.as_deref() {
                    img { class: "product-image", src: "{image}", alt: "{product.product_name}" }
                }
            }
            div { class: "badge-row",
                if let Some(nova) = product.nova_group {
                    span { class: "badge", "NOVA {nova}" }
                }
                if !ecoscore.is_empty() {
                    span { class: "badge", "Eco-Score {ecoscore}" }
                }
                if let Some(serving) = product.serving_size.as_deref() {
                    span { class: "badge", "Serving: {serving}" }
                }
            }

            div { class: "form-row",
                label { "Servings: {factor:.1}" }
                input {
                    r#type: "range",
                    min: "0.5",
                    max: "3",
                    step: "0.1",
                    value: "{factor}",
                    oninput: move |evt| {
                        if let Ok(next) = evt.value().parse::<f64>() {
                            serving_factor.set(next);
                        }
                    },
                }
            }

            div { class: "detail-grid",
                DetailCell { label: "Calories", value: "{calories} kcal" }
                DetailCell { label: "Protein", value: scaled(nutriments.proteins, factor, "g") }
                DetailCell { label: "Carbs", value: scaled(nutriments.carbohydrates, factor, "g") }
                DetailCell { label: "Fat", value: scaled(nutriments.fat, factor, "g") }
                DetailCell { label: "Fiber", value: scaled(nutriments.fiber, factor, "g") }
                DetailCell { label: "Sugars", value: scaled(nutriments.sugars, factor, "g") }
                DetailCell { label: "Salt", value: scaled(nutriments.salt, factor, "g") }
            }

            if !allergens.is_empty() {
                div { class: "alert", "Contains: {allergens}" }
            }

            if let Some(ingredients) = product.ingredients_text.as_deref() {
                p { class: "ingredients", "{ingredients}" }
            }

            button {
                class: "btn btn-primary",
                onclick: log_meal,
                if logged() { "Logged!" } else { "Log This Meal" }
            }
        }
    }
}

#[component]
fn DetailCell(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "detail-cell",
            span { class: "detail-label", "{label}" }
            span { class: "detail-value", "{value}" }
        }
    }
}

/// Per-serving value scaled by the serving slider, "N/A" when the label
/// omits the nutrient.
fn scaled(value: Option<f64>, factor: f64, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.1}{unit}", v * factor),
        None => "N/A".to_string(),
    }
}
