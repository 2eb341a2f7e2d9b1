//! Integration tests for the storage stack
//!
//! Exercises the file backend and the generation-to-persistence flow the
//! planner drives.

use std::sync::Arc;

use nutritrack::ai::GenerateError;
use nutritrack::planner;
use nutritrack::storage::{FileBackend, MemoryBackend, StorageBackend};
use nutritrack::store::{AppStore, PlanStore, PlanUpdate};
use nutritrack::types::{MealSlot, Preferences};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn temp_backend(tag: &str) -> FileBackend {
    let dir = std::env::temp_dir().join(format!("nutritrack-test-{}-{}", std::process::id(), tag));
    let _ = std::fs::remove_dir_all(&dir);
    FileBackend::with_dir(dir)
}

mod file_backend_tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let backend = temp_backend("set-get");
        backend
            .set("waterIntake", "3")
            .expect("failed to set value");
        assert_eq!(backend.get("waterIntake").as_deref(), Some("3"));

        backend.clear().expect("failed to clear");
    }

    #[test]
    fn test_get_nonexistent() {
        let backend = temp_backend("nonexistent");
        assert_eq!(backend.get("missing"), None);
    }

    #[test]
    fn test_keys_and_clear() {
        let backend = temp_backend("keys");
        backend.set("meals", "{}").expect("failed to set meals");
        backend.set("reminders", "{}").expect("failed to set reminders");

        let keys = backend.keys();
        assert!(keys.contains(&"meals".to_string()));
        assert!(keys.contains(&"reminders".to_string()));

        backend.clear().expect("failed to clear");
        assert!(backend.keys().is_empty());
        assert_eq!(backend.get("meals"), None);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let backend = temp_backend("remove");
        backend.set("userProfile", "{}").expect("failed to set");
        backend.remove("userProfile").expect("failed to remove");
        backend.remove("userProfile").expect("second remove failed");
        assert_eq!(backend.get("userProfile"), None);

        backend.clear().expect("failed to clear");
    }
}

mod generation_tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_gemini_key_is_a_generation_failure() {
        // Env mutation is process-global; nothing else in this binary reads
        // the key.
        unsafe { std::env::remove_var("GEMINI_API_KEY") };
        let result = nutritrack::ai::request_plan(&Preferences::default(), None).await;
        assert!(matches!(result, Err(GenerateError::MissingKey)));
    }
}

mod planner_flow_tests {
    use super::*;

    fn prefs(diet: &str, allergies: &[&str]) -> Preferences {
        Preferences {
            diet: diet.to_string(),
            allergies: allergies.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_failed_generation_still_fills_and_persists_a_full_day() {
        let backend: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::new());
        let mut store = PlanStore::load(backend.clone());
        let preferences = prefs("Vegan", &["Nuts"]);

        let outcome = planner::resolve_plan(
            Err(GenerateError::MissingKey),
            None,
            &preferences,
            &mut StdRng::seed_from_u64(7),
        );
        assert!(outcome.used_fallback);
        store.set("2024-03-04", outcome.update);

        let reloaded = PlanStore::load(backend);
        let plan = reloaded.get("2024-03-04").expect("plan was not persisted");
        assert!(!plan.breakfast.is_empty());
        assert!(!plan.lunch.is_empty());
        assert!(!plan.dinner.is_empty());
        assert_eq!(plan.preferences, preferences);
    }

    #[test]
    fn test_swap_touches_one_slot_and_refreshes_preferences() {
        let backend: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::new());
        let mut store = PlanStore::load(backend.clone());
        store.set(
            "2024-03-04",
            PlanUpdate {
                breakfast: Some("Avocado toast".into()),
                lunch: Some("Quinoa salad".into()),
                dinner: Some("Beef stew".into()),
                preferences: prefs("", &[]),
            },
        );

        let swapped = prefs("Vegetarian", &[]);
        let outcome = planner::resolve_plan(
            Err(GenerateError::MissingKey),
            Some(MealSlot::Dinner),
            &swapped,
            &mut StdRng::seed_from_u64(11),
        );
        assert!(outcome.update.breakfast.is_none());
        assert!(outcome.update.lunch.is_none());
        store.set("2024-03-04", outcome.update);

        let plan = store.get("2024-03-04").expect("plan missing");
        assert_eq!(plan.breakfast, "Avocado toast");
        assert_eq!(plan.lunch, "Quinoa salad");
        assert_ne!(plan.dinner, "Beef stew");
        assert_eq!(plan.preferences, swapped);
    }

    #[test]
    fn test_logout_clears_every_record() {
        let backend: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::new());
        let mut plans = PlanStore::load(backend.clone());
        plans.set(
            "2024-03-04",
            PlanUpdate {
                breakfast: Some("Oatmeal with fruits".into()),
                ..Default::default()
            },
        );

        let app = AppStore::new(backend.clone());
        app.set_water_glasses(4);
        app.clear_all();

        assert_eq!(app.water_glasses(), 0);
        let reloaded = PlanStore::load(backend);
        assert!(!reloaded.contains("2024-03-04"));
    }
}
