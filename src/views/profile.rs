//! Profile form, reminder toggles and data reset.

use crate::store::{AppStore, PlanStore};
use crate::types::{DIET_OPTIONS, Reminders, UserProfile};
use dioxus::prelude::*;
use std::time::Duration;

const GENDER_OPTIONS: &[&str] = &["Male", "Female", "Other"];
const GOAL_OPTIONS: &[&str] = &["Lose Weight", "Maintain Weight", "Gain Muscle"];
const SAVED_NOTE_DELAY: Duration = Duration::from_secs(2);

#[component]
pub fn ProfileView(plan_store: Signal<PlanStore>) -> Element {
    let store = use_context::<AppStore>();
    let mut plan_store = plan_store;
    let profile = use_signal({
        let store = store.clone();
        move || store.profile()
    });
    let reminders = use_signal({
        let store = store.clone();
        move || store.reminders()
    });
    let mut saved = use_signal(|| false);

    let save = {
        let store = store.clone();
        move |_| {
            store.set_profile(&profile());
            saved.set(true);
            spawn(async move {
                let mut saved = saved;
                tokio::time::sleep(SAVED_NOTE_DELAY).await;
                saved.set(false);
            });
        }
    };

    let logout = {
        let store = store.clone();
        move |_| {
            let mut profile = profile;
            let mut reminders = reminders;
            store.clear_all();
            profile.set(UserProfile::default());
            reminders.set(Reminders::default());
            saved.set(false);
            plan_store.set(PlanStore::load(store.backend()));
        }
    };

    let current = profile();
    let current_reminders = reminders();

    rsx! {
        div { class: "main-container",
            div { class: "card",
                h2 { "Your Profile" }
                TextField { label: "Name", field: ProfileField::Name, value: current.name.clone(), profile }
                TextField { label: "Age", field: ProfileField::Age, value: current.age.clone(), profile }
                SelectField {
                    label: "Gender",
                    field: ProfileField::Gender,
                    value: current.gender.clone(),
                    options: GENDER_OPTIONS,
                    profile,
                }
                TextField { label: "Height (cm)", field: ProfileField::Height, value: current.height.clone(), profile }
                TextField { label: "Weight (kg)", field: ProfileField::Weight, value: current.weight.clone(), profile }
                SelectField {
                    label: "Goal",
                    field: ProfileField::Goal,
                    value: current.goal.clone(),
                    options: GOAL_OPTIONS,
                    profile,
                }
                SelectField {
                    label: "Diet type",
                    field: ProfileField::DietType,
                    value: current.diet_type.clone(),
                    options: DIET_OPTIONS,
                    profile,
                }
                button { class: "btn btn-primary", onclick: save, "Save Profile" }
                if saved() {
                    p { class: "saved-note", "Profile updated!" }
                }
            }

            div { class: "card",
                h3 { "Reminders" }
                ReminderToggle {
                    label: "Water reminders",
                    checked: current_reminders.water,
                    field: ReminderField::Water,
                    reminders,
                }
                ReminderToggle {
                    label: "Meal logging reminders",
                    checked: current_reminders.logging,
                    field: ReminderField::Logging,
                    reminders,
                }
                ReminderToggle {
                    label: "Weekly reports",
                    checked: current_reminders.weekly_reports,
                    field: ReminderField::WeeklyReports,
                    reminders,
                }
            }

            div { class: "card",
                h3 { "Account" }
                p { "Logging out clears all locally stored data." }
                button { class: "btn btn-danger", onclick: logout, "Log Out" }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileField {
    Name,
    Age,
    Gender,
    Height,
    Weight,
    Goal,
    DietType,
}

fn apply_field(profile: &mut UserProfile, field: ProfileField, value: String) {
    match field {
        ProfileField::Name => profile.name = value,
        ProfileField::Age => profile.age = value,
        ProfileField::Gender => profile.gender = value,
        ProfileField::Height => profile.height = value,
        ProfileField::Weight => profile.weight = value,
        ProfileField::Goal => profile.goal = value,
        ProfileField::DietType => profile.diet_type = value,
    }
}

#[component]
fn TextField(
    label: &'static str,
    field: ProfileField,
    value: String,
    profile: Signal<UserProfile>,
) -> Element {
    let mut profile = profile;
    rsx! {
        div { class: "form-row",
            label { "{label}" }
            input {
                r#type: "text",
                value: "{value}",
                oninput: move |evt| profile.with_mut(|p| apply_field(p, field, evt.value())),
            }
        }
    }
}

#[component]
fn SelectField(
    label: &'static str,
    field: ProfileField,
    value: String,
    options: &'static [&'static str],
    profile: Signal<UserProfile>,
) -> Element {
    let mut profile = profile;
    rsx! {
        div { class: "form-row",
            label { "{label}" }
            select {
                onchange: move |evt| profile.with_mut(|p| apply_field(p, field, evt.value())),
                option { value: "", selected: value.is_empty(), "Not set" }
                for choice in options.iter().copied() {
                    option { value: "{choice}", selected: value == choice, "{choice}" }
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReminderField {
    Water,
    Logging,
    WeeklyReports,
}

#[component]
fn ReminderToggle(
    label: &'static str,
    checked: bool,
    field: ReminderField,
    reminders: Signal<Reminders>,
) -> Element {
    let store = use_context::<AppStore>();
    let mut reminders = reminders;
    rsx! {
        label { class: "toggle-row",
            span { "{label}" }
            input {
                r#type: "checkbox",
                checked,
                onchange: move |evt| {
                    reminders.with_mut(|r| {
                        let enabled = evt.checked();
                        match field {
                            ReminderField::Water => r.water = enabled,
                            ReminderField::Logging => r.logging = enabled,
                            ReminderField::WeeklyReports => r.weekly_reports = enabled,
                        }
                    });
                    store.set_reminders(&reminders());
                },
            }
        }
    }
}
