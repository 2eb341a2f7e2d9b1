//! Weekly meal planner: week strip, preference dialog, AI generation with
//! local fallback, and per-slot swaps.

use crate::ai;
use crate::planner;
use crate::store::PlanStore;
use crate::types::{ALLERGY_OPTIONS, DIET_OPTIONS, MEAL_SLOTS, MealSlot, Preferences};
use crate::views::shared;
use dioxus::prelude::*;
use time::{Date, Duration};

const GENERATION_ERROR: &str = "Failed to generate meal. Using fallback options.";

#[component]
pub fn PlannerView(plan_store: Signal<PlanStore>, preferences: Signal<Preferences>) -> Element {
    let selected_day = use_signal(shared::today);
    let mut week_anchor = use_signal(|| shared::week_start(shared::today()));
    let mut show_prefs = use_signal(|| false);
    let busy = use_signal(|| false);
    let swapping = use_signal(|| None::<MealSlot>);
    let error = use_signal(String::new);

    let generate = move |slot: Option<MealSlot>| {
        let mut plan_store = plan_store;
        let mut busy = busy;
        let mut swapping = swapping;
        let mut error = error;
        if busy() {
            return;
        }
        busy.set(true);
        swapping.set(slot);
        error.set(String::new());
        let prefs = preferences();
        let date = shared::iso_date(selected_day());
        spawn(async move {
            let reply = ai::request_plan(&prefs, slot).await;
            let remote_failed = reply.is_err();
            let outcome =
                planner::resolve_plan(reply, slot, &prefs, &mut rand::thread_rng());
            plan_store.with_mut(|store| store.set(&date, outcome.update));
            if remote_failed {
                error.set(GENERATION_ERROR.to_string());
            }
            swapping.set(None);
            busy.set(false);
        });
    };

    let date_key = shared::iso_date(selected_day());
    let plan = plan_store.read().get(&date_key).cloned();
    let has_plan = plan.is_some();
    let plan = plan.unwrap_or_default();
    let week = shared::week_days(week_anchor());
    let week_label = format!(
        "{} - {}",
        shared::range_date(week[0]),
        shared::range_date(week[6])
    );

    rsx! {
        div { class: "main-container",
            div { class: "card",
                div { class: "week-header",
                    button {
                        class: "btn btn-icon",
                        onclick: move |_| {
                            week_anchor.set(week_anchor() - Duration::days(7));
                        },
                        "\u{2039}"
                    }
                    span { class: "week-label", "{week_label}" }
                    button {
                        class: "btn btn-icon",
                        onclick: move |_| {
                            week_anchor.set(week_anchor() + Duration::days(7));
                        },
                        "\u{203a}"
                    }
                }
                div { class: "week-strip",
                    for day in week {
                        DayButton { day, plan_store, selected_day, show_prefs }
                    }
                }
            }

            shared::DismissibleAlert { error }

            div { class: "planner-header",
                h2 { "{shared::long_date(selected_day())}" }
                button {
                    class: "btn",
                    onclick: move |_| show_prefs.set(true),
                    "Preferences"
                }
            }

            if has_plan {
                for slot in MEAL_SLOTS {
                    MealCard {
                        slot,
                        meal: plan.slot(slot).to_string(),
                        busy: busy(),
                        swapping: swapping() == Some(slot),
                        on_swap: move |_| generate(Some(slot)),
                    }
                }
                button {
                    class: "btn btn-primary",
                    disabled: busy(),
                    onclick: move |_| generate(None),
                    if busy() && swapping().is_none() { "Generating..." } else { "Regenerate Plan" }
                }
            } else {
                div { class: "card empty-state",
                    p { "No meals planned for this day yet." }
                    button {
                        class: "btn btn-primary",
                        disabled: busy(),
                        onclick: move |_| show_prefs.set(true),
                        if busy() { "Generating..." } else { "Plan This Day" }
                    }
                }
            }

            if show_prefs() {
                PreferencesDialog {
                    preferences,
                    show_prefs,
                    on_generate: move |_| generate(None),
                }
            }
        }
    }
}

#[component]
fn DayButton(
    day: Date,
    plan_store: Signal<PlanStore>,
    selected_day: Signal<Date>,
    show_prefs: Signal<bool>,
) -> Element {
    let mut selected_day = selected_day;
    let mut show_prefs = show_prefs;
    let key = shared::iso_date(day);
    let planned = plan_store.read().contains(&key);
    let selected = selected_day() == day;
    let class = format!(
        "day-button{}{}",
        if selected { " selected" } else { "" },
        if planned { " planned" } else { "" },
    );
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                selected_day.set(day);
                if !planned {
                    show_prefs.set(true);
                }
            },
            span { class: "day-name", "{shared::day_name(day)}" }
            span { class: "day-number", "{day.day()}" }
        }
    }
}

#[component]
fn MealCard(
    slot: MealSlot,
    meal: String,
    busy: bool,
    swapping: bool,
    on_swap: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "card meal-card",
            div { class: "meal-info",
                span { class: "meal-slot", "{slot.label()}" }
                span { class: "meal-name", "{meal}" }
            }
            button {
                class: "btn swap-button",
                disabled: busy,
                onclick: move |_| on_swap.call(()),
                if swapping { "Swapping..." } else { "Swap" }
            }
        }
    }
}

#[component]
fn PreferencesDialog(
    preferences: Signal<Preferences>,
    show_prefs: Signal<bool>,
    on_generate: EventHandler<()>,
) -> Element {
    let mut preferences = preferences;
    let mut show_prefs = show_prefs;
    let current = preferences();
    rsx! {
        div { class: "dialog-overlay",
            div { class: "dialog",
                h2 { "Meal Preferences" }
                div { class: "form-row",
                    label { "Dietary preference" }
                    select {
                        onchange: move |evt| preferences.with_mut(|p| p.diet = evt.value()),
                        option { value: "", selected: current.diet.is_empty(), "None" }
                        for diet in DIET_OPTIONS.iter().copied() {
                            option { value: "{diet}", selected: current.diet == diet, "{diet}" }
                        }
                    }
                }
                div { class: "form-row",
                    label { "Allergies" }
                    for allergy in ALLERGY_OPTIONS.iter().copied() {
                        AllergyCheckbox { preferences, allergy }
                    }
                }
                div { class: "dialog-footer",
                    button {
                        class: "btn",
                        onclick: move |_| show_prefs.set(false),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            show_prefs.set(false);
                            on_generate.call(());
                        },
                        "Generate Plan"
                    }
                }
            }
        }
    }
}

#[component]
fn AllergyCheckbox(preferences: Signal<Preferences>, allergy: &'static str) -> Element {
    let mut preferences = preferences;
    let checked = preferences().allergies.iter().any(|a| a == allergy);
    rsx! {
        label { class: "checkbox-row",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |_| {
                    preferences.with_mut(|prefs| {
                        if let Some(pos) = prefs.allergies.iter().position(|a| a == allergy) {
                            prefs.allergies.remove(pos);
                        } else {
                            prefs.allergies.push(allergy.to_string());
                        }
                    });
                },
            }
            "{allergy}"
        }
    }
}
