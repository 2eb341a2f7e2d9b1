//! Free-text nutrition search and per-meal calorie totals.

use crate::api::nutrition::{NutritionClient, NutritionItem};
use crate::store::AppStore;
use crate::types::LoggedMeal;
use crate::views::shared;
use dioxus::prelude::*;
use std::time::Duration;

const NO_RESULTS: &str = "No results found. Try a different search term.";
const LOGGED_NOTE_DELAY: Duration = Duration::from_secs(2);

/// A search result the user added to the meal being built. The id keeps
/// duplicate ingredients distinct in the list.
#[derive(Clone, Debug, PartialEq)]
struct SelectedIngredient {
    id: String,
    item: NutritionItem,
}

#[component]
pub fn CalculatorView() -> Element {
    let store = use_context::<AppStore>();
    let mut query = use_signal(String::new);
    let results = use_signal(Vec::<NutritionItem>::new);
    let selected = use_signal(Vec::<SelectedIngredient>::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(String::new);
    let mut logged = use_signal(|| false);

    let mut search = move |_| {
        let mut results = results;
        let term = query().trim().to_string();
        if busy() || term.is_empty() {
            return;
        }
        busy.set(true);
        error.set(String::new());
        spawn(async move {
            match NutritionClient::from_env() {
                Ok(client) => match client.search(&term).await {
                    Ok(items) if items.is_empty() => {
                        results.set(Vec::new());
                        error.set(NO_RESULTS.to_string());
                    }
                    Ok(items) => results.set(items),
                    Err(err) => error.set(err.to_string()),
                },
                Err(err) => error.set(err.to_string()),
            }
            busy.set(false);
        });
    };

    let items = selected();
    let total_calories: f64 = items.iter().map(|s| s.item.calories).sum();
    let total_protein: f64 = items.iter().map(|s| s.item.protein_g).sum();
    let total_carbs: f64 = items.iter().map(|s| s.item.carbohydrates_total_g).sum();
    let total_fat: f64 = items.iter().map(|s| s.item.fat_total_g).sum();
    let total_fiber: f64 = items.iter().map(|s| s.item.fiber_g).sum();
    let total_sugar: f64 = items.iter().map(|s| s.item.sugar_g).sum();

    let log_meal = {
        let store = store.clone();
        move |_| {
            let mut selected = selected;
            let items = selected();
            if items.is_empty() {
                return;
            }
            let name = items
                .iter()
                .map(|s| s.item.name.clone())
                .collect::<Vec<_>>()
                .join(", ");
            store.log_meal(LoggedMeal {
                date: shared::iso_date(shared::today()),
                name,
                calories: items.iter().map(|s| s.item.calories).sum(),
                protein_g: items.iter().map(|s| s.item.protein_g).sum(),
                carbs_g: items.iter().map(|s| s.item.carbohydrates_total_g).sum(),
                fat_g: items.iter().map(|s| s.item.fat_total_g).sum(),
            });
            selected.set(Vec::new());
            logged.set(true);
            spawn(async move {
                let mut logged = logged;
                tokio::time::sleep(LOGGED_NOTE_DELAY).await;
                logged.set(false);
            });
        }
    };

    rsx! {
        div { class: "main-container",
            div { class: "card",
                h2 { "Calorie Calculator" }
                p { "Search for an ingredient, like \"100g oats\" or \"1 boiled egg\"." }
                div { class: "search-row",
                    input {
                        r#type: "text",
                        placeholder: "Search ingredients",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                search(());
                            }
                        },
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: busy(),
                        onclick: move |_| search(()),
                        if busy() { "Searching..." } else { "Search" }
                    }
                }
            }

            shared::DismissibleAlert { error }

            if !results().is_empty() {
                div { class: "card",
                    h3 { "Results" }
                    for item in results() {
                        ResultRow { item, query, results, selected }
                    }
                }
            }

            div { class: "card",
                h3 { "This Meal" }
                if items.is_empty() {
                    p { "No ingredients added yet." }
                } else {
                    for ingredient in items {
                        IngredientRow { ingredient, selected }
                    }
                    div { class: "stat-grid totals",
                        TotalBadge { label: "Calories", value: total_calories, unit: "kcal" }
                        TotalBadge { label: "Protein", value: total_protein, unit: "g" }
                        TotalBadge { label: "Carbs", value: total_carbs, unit: "g" }
                        TotalBadge { label: "Fat", value: total_fat, unit: "g" }
                        TotalBadge { label: "Fiber", value: total_fiber, unit: "g" }
                        TotalBadge { label: "Sugar", value: total_sugar, unit: "g" }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: log_meal,
                        "Log This Meal"
                    }
                }
                if logged() {
                    p { class: "saved-note", "Meal logged." }
                }
            }
        }
    }
}

#[component]
fn ResultRow(
    item: NutritionItem,
    query: Signal<String>,
    results: Signal<Vec<NutritionItem>>,
    selected: Signal<Vec<SelectedIngredient>>,
) -> Element {
    let mut query = query;
    let mut results = results;
    let mut selected = selected;
    let display = item.clone();
    rsx! {
        div { class: "list-row",
            div {
                span { class: "meal-name", "{display.name}" }
                span { class: "badge", "{display.calories:.0} kcal / {display.serving_size_g:.0}g" }
            }
            button {
                class: "btn",
                onclick: move |_| {
                    let id = format!("{}-{}", item.name, shared::current_timestamp());
                    selected.with_mut(|list| {
                        list.push(SelectedIngredient {
                            id,
                            item: item.clone(),
                        });
                    });
                    results.set(Vec::new());
                    query.set(String::new());
                },
                "Add"
            }
        }
    }
}

#[component]
fn IngredientRow(
    ingredient: SelectedIngredient,
    selected: Signal<Vec<SelectedIngredient>>,
) -> Element {
    let mut selected = selected;
    let id = ingredient.id.clone();
    rsx! {
        div { class: "list-row",
            div {
                span { class: "meal-name", "{ingredient.item.name}" }
                span { class: "badge", "{ingredient.item.calories:.0} kcal" }
            }
            button {
                class: "btn",
                onclick: move |_| {
                    selected.with_mut(|list| list.retain(|entry| entry.id != id));
                },
                "Remove"
            }
        }
    }
}

#[component]
fn TotalBadge(label: &'static str, value: f64, unit: &'static str) -> Element {
    rsx! {
        div { class: "detail-cell",
            span { class: "detail-label", "{label}" }
            span { class: "detail-value", "{value:.1} {unit}" }
        }
    }
}
