//! Typed stores over the storage backend.
//!
//! `PlanStore` carries the date-keyed meal plans with slot-level merge
//! semantics; `AppStore` covers the independently keyed peripheral records
//! (water counter, reminders, recent scans, profile, meal log). Each store
//! persists synchronously on every mutation and treats unparsable stored
//! JSON as "no data".

use crate::storage::StorageBackend;
use crate::types::{DailyPlan, LoggedMeal, Preferences, RecentScan, Reminders, UserProfile};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

pub const PLANS_KEY: &str = "meals";
pub const WATER_KEY: &str = "waterIntake";
pub const REMINDERS_KEY: &str = "reminders";
pub const RECENT_SCANS_KEY: &str = "recentScans";
pub const PROFILE_KEY: &str = "userProfile";
pub const MEAL_LOG_KEY: &str = "mealLog";

pub const RECENT_SCANS_CAP: usize = 10;

fn load_json<T: DeserializeOwned + Default>(backend: &dyn StorageBackend, key: &str) -> T {
    match backend.get(key) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(key, %err, "ignoring unparsable stored value");
            T::default()
        }),
        None => T::default(),
    }
}

fn save_json<T: Serialize>(backend: &dyn StorageBackend, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => {
            if let Err(err) = backend.set(key, &raw) {
                warn!(key, %err, "failed to persist value");
            }
        }
        Err(err) => warn!(key, %err, "failed to serialize value"),
    }
}

/// A partial or full day to merge into the plan mapping. `None` slots are
/// left untouched; the preferences snapshot is always replaced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanUpdate {
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub dinner: Option<String>,
    pub preferences: Preferences,
}

/// Date-keyed meal plans, persisted as one mapping after every mutation.
#[derive(Clone)]
pub struct PlanStore {
    backend: Arc<dyn StorageBackend>,
    plans: HashMap<String, DailyPlan>,
}

impl PlanStore {
    pub fn load(backend: Arc<dyn StorageBackend>) -> Self {
        let plans = load_json(backend.as_ref(), PLANS_KEY);
        Self { backend, plans }
    }

    pub fn get(&self, date: &str) -> Option<&DailyPlan> {
        self.plans.get(date)
    }

    pub fn contains(&self, date: &str) -> bool {
        self.plans.contains_key(date)
    }

    /// Shallow-merges `update` into the entry for `date` and persists the
    /// whole mapping. Entries are never deleted.
    pub fn set(&mut self, date: &str, update: PlanUpdate) {
        let entry = self.plans.entry(date.to_string()).or_default();
        if let Some(breakfast) = update.breakfast {
            entry.breakfast = breakfast;
        }
        if let Some(lunch) = update.lunch {
            entry.lunch = lunch;
        }
        if let Some(dinner) = update.dinner {
            entry.dinner = dinner;
        }
        entry.preferences = update.preferences;
        save_json(self.backend.as_ref(), PLANS_KEY, &self.plans);
    }
}

impl PartialEq for PlanStore {
    fn eq(&self, other: &Self) -> bool {
        self.plans == other.plans
    }
}

/// Accessors for the peripheral records. Cheap to clone and shared between
/// views through the Dioxus context.
#[derive(Clone)]
pub struct AppStore {
    backend: Arc<dyn StorageBackend>,
}

impl AppStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> Arc<dyn StorageBackend> {
        self.backend.clone()
    }

    pub fn water_glasses(&self) -> u32 {
        load_json(self.backend.as_ref(), WATER_KEY)
    }

    pub fn set_water_glasses(&self, glasses: u32) {
        save_json(self.backend.as_ref(), WATER_KEY, &glasses);
    }

    pub fn reminders(&self) -> Reminders {
        load_json(self.backend.as_ref(), REMINDERS_KEY)
    }

    pub fn set_reminders(&self, reminders: &Reminders) {
        save_json(self.backend.as_ref(), REMINDERS_KEY, reminders);
    }

    pub fn profile(&self) -> UserProfile {
        load_json(self.backend.as_ref(), PROFILE_KEY)
    }

    pub fn set_profile(&self, profile: &UserProfile) {
        save_json(self.backend.as_ref(), PROFILE_KEY, profile);
    }

    pub fn recent_scans(&self) -> Vec<RecentScan> {
        let mut scans: Vec<RecentScan> = load_json(self.backend.as_ref(), RECENT_SCANS_KEY);
        scans.sort_by(|a, b| b.date.cmp(&a.date));
        scans.truncate(RECENT_SCANS_CAP);
        scans
    }

    /// Upserts by barcode id, keeps the list newest-first and capped at ten.
    pub fn record_scan(&self, scan: RecentScan) -> Vec<RecentScan> {
        let mut scans = self.recent_scans();
        if let Some(existing) = scans.iter_mut().find(|existing| existing.id == scan.id) {
            *existing = scan;
            scans.sort_by(|a, b| b.date.cmp(&a.date));
        } else {
            scans.truncate(RECENT_SCANS_CAP - 1);
            scans.insert(0, scan);
        }
        save_json(self.backend.as_ref(), RECENT_SCANS_KEY, &scans);
        scans
    }

    pub fn meal_log(&self) -> Vec<LoggedMeal> {
        load_json(self.backend.as_ref(), MEAL_LOG_KEY)
    }

    pub fn meals_for(&self, date: &str) -> Vec<LoggedMeal> {
        self.meal_log()
            .into_iter()
            .filter(|meal| meal.date == date)
            .collect()
    }

    pub fn log_meal(&self, meal: LoggedMeal) -> Vec<LoggedMeal> {
        let mut log = self.meal_log();
        log.push(meal);
        save_json(self.backend.as_ref(), MEAL_LOG_KEY, &log);
        log
    }

    /// Logout wipes every record, matching the original "clear data" action.
    pub fn clear_all(&self) {
        if let Err(err) = self.backend.clear() {
            warn!(%err, "failed to clear storage");
        }
    }
}
