//! Daily overview: logged totals against goals, water counter, today's plan
//! and quick navigation.

use crate::store::{AppStore, PlanStore};
use crate::types::{DAILY_GOALS, MEAL_SLOTS};
use crate::ui::AppTab;
use crate::views::shared;
use dioxus::prelude::*;

#[component]
pub fn DashboardView(active_tab: Signal<AppTab>, plan_store: Signal<PlanStore>) -> Element {
    let store = use_context::<AppStore>();
    let mut active_tab = active_tab;
    let mut water = use_signal({
        let store = store.clone();
        move || store.water_glasses()
    });

    let today = shared::today();
    let today_key = shared::iso_date(today);
    let meals = store.meals_for(&today_key);
    let calories: f64 = meals.iter().map(|m| m.calories).sum();
    let protein: f64 = meals.iter().map(|m| m.protein_g).sum();
    let carbs: f64 = meals.iter().map(|m| m.carbs_g).sum();
    let fat: f64 = meals.iter().map(|m| m.fat_g).sum();

    let plan = plan_store.read().get(&today_key).cloned();
    let has_plan = plan.is_some();
    let plan = plan.unwrap_or_default();

    let water_add = store.clone();
    let water_remove = store.clone();

    rsx! {
        div { class: "main-container",
            div { class: "card",
                h2 { "{shared::long_date(today)}" }
                div { class: "stat-grid",
                    MacroProgress { label: "Calories", value: calories, goal: DAILY_GOALS.calories, unit: "kcal" }
                    MacroProgress { label: "Protein", value: protein, goal: DAILY_GOALS.protein_g, unit: "g" }
                    MacroProgress { label: "Carbs", value: carbs, goal: DAILY_GOALS.carbs_g, unit: "g" }
                    MacroProgress { label: "Fat", value: fat, goal: DAILY_GOALS.fat_g, unit: "g" }
                }
            }

            div { class: "card",
                div { class: "toggle-row",
                    div {
                        h3 { "Water" }
                        p { "{water()} of {DAILY_GOALS.water_glasses} glasses" }
                    }
                    div { class: "water-controls",
                        button {
                            class: "btn btn-icon",
                            disabled: water() == 0,
                            onclick: move |_| {
                                let next = water().saturating_sub(1);
                                water_remove.set_water_glasses(next);
                                water.set(next);
                            },
                            "-"
                        }
                        button {
                            class: "btn btn-icon",
                            onclick: move |_| {
                                let next = water() + 1;
                                water_add.set_water_glasses(next);
                                water.set(next);
                            },
                            "+"
                        }
                    }
                }
                div { class: "progress-track",
                    div {
                        class: "progress-fill",
                        style: format_args!(
                            "width: {}%;",
                            (water() * 100 / DAILY_GOALS.water_glasses).min(100)
                        ),
                    }
                }
            }

            div { class: "card",
                h3 { "Today's Plan" }
                if has_plan {
                    for slot in MEAL_SLOTS {
                        div { class: "list-row",
                            span { class: "meal-slot", "{slot.label()}" }
                            span { "{plan.slot(slot)}" }
                        }
                    }
                } else {
                    p { "Nothing planned for today." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| active_tab.set(AppTab::Planner),
                        "Plan Today"
                    }
                }
            }

            div { class: "card",
                h3 { "Logged Meals" }
                if meals.is_empty() {
                    p { "No meals logged yet today." }
                } else {
                    for meal in meals {
                        div { class: "list-row",
                            span { "{meal.name}" }
                            span { class: "badge", "{meal.calories:.0} kcal" }
                        }
                    }
                }
            }

            div { class: "card",
                h3 { "Quick Actions" }
                div { class: "scan-grid",
                    button {
                        class: "btn",
                        onclick: move |_| active_tab.set(AppTab::Scan),
                        "Scan Product"
                    }
                    button {
                        class: "btn",
                        onclick: move |_| active_tab.set(AppTab::Calculator),
                        "Add Meal"
                    }
                }
            }
        }
    }
}

#[component]
fn MacroProgress(label: &'static str, value: f64, goal: u32, unit: &'static str) -> Element {
    let pct = ((value / f64::from(goal)) * 100.0).clamp(0.0, 100.0);
    rsx! {
        div { class: "progress-row",
            div { class: "progress-label",
                span { "{label}" }
                span { "{value:.0} / {goal} {unit}" }
            }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {pct:.0}%;" }
            }
        }
    }
}
