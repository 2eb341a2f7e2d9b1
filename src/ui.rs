use crate::storage::{FileBackend, StorageBackend};
use crate::store::{AppStore, PlanStore};
use crate::theme::{BASE_CSS, theme_definition};
use crate::types::{Preferences, ThemeMode};
use crate::views::{CalculatorView, DashboardView, PlannerView, ProfileView, ScanView};
use dioxus::prelude::*;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppTab {
    Dashboard,
    Planner,
    Scan,
    Calculator,
    Profile,
}

#[component]
pub fn App() -> Element {
    let app_store = use_context_provider(|| {
        let backend: Arc<dyn StorageBackend> = Arc::new(FileBackend::new());
        AppStore::new(backend)
    });
    let plan_store = use_signal({
        let backend = app_store.backend();
        move || PlanStore::load(backend)
    });
    let preferences = use_signal(Preferences::default);
    let active_tab = use_signal(|| AppTab::Dashboard);
    let theme = use_signal(|| ThemeMode::Dark);

    rsx! {
        ThemeStyles { theme }
        AppHeader { active_tab }
        TabPanels { active_tab, plan_store, preferences }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        style { dangerous_inner_html: "{BASE_CSS}" }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "header",
            div { class: "header-content",
                h1 { class: "wordmark", "NutriTrack" }
                TabNavigation { active_tab }
            }
        }
    }
}

#[component]
fn TabPanels(
    active_tab: Signal<AppTab>,
    plan_store: Signal<PlanStore>,
    preferences: Signal<Preferences>,
) -> Element {
    rsx! {
        div { class: "tab-panels",
            TabPanel {
                active_tab,
                tab: AppTab::Dashboard,
                children: rsx!( DashboardView { active_tab, plan_store } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Planner,
                children: rsx!( PlannerView { plan_store, preferences } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Scan,
                children: rsx!( ScanView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Calculator,
                children: rsx!( CalculatorView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Profile,
                children: rsx!( ProfileView { plan_store } ),
            }
        }
    }
}

#[component]
fn TabPanel(active_tab: Signal<AppTab>, tab: AppTab, children: Element) -> Element {
    let is_active = active_tab() == tab;
    let class_suffix = if is_active { "active" } else { "" };
    rsx! {
        div {
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!is_active).to_string(),
            {children}
        }
    }
}

#[component]
fn TabNavigation(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tabs",
            TabButton { active_tab, tab: AppTab::Dashboard, label: "Home" }
            TabButton { active_tab, tab: AppTab::Planner, label: "Planner" }
            TabButton { active_tab, tab: AppTab::Scan, label: "Scan" }
            TabButton { active_tab, tab: AppTab::Calculator, label: "Calories" }
            TabButton { active_tab, tab: AppTab::Profile, label: "Profile" }
        }
    }
}

#[component]
fn TabButton(active_tab: Signal<AppTab>, tab: AppTab, label: &'static str) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab {
        "tab active"
    } else {
        "tab"
    };
    rsx! {
        h1 {
            class: class,
            onclick: move |_| active_tab.set(tab),
            "{label}"
        }
    }
}
