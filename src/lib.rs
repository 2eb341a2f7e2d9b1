pub mod ai;
pub mod api;
pub mod planner;
pub mod storage;
pub mod store;
pub mod theme;
pub mod types;
#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
