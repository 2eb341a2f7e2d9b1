//! Local meal generation and plan resolution.
//!
//! The local generator picks a meal name per slot from a fixed candidate
//! list, filtered by diet and allergy rules, falling back to a per-diet table
//! when filtering eliminates everything. Filtering is a deliberately loose
//! case-insensitive substring match on free text; "Shrimp tacos" is removed
//! for a "Shrimp" allergy, and partial matches are accepted behavior.
//!
//! The RNG is injected so selection is deterministic under test.

use crate::ai::{GenerateError, PlanReply};
use crate::store::PlanUpdate;
use crate::types::{MEAL_SLOTS, MealSlot, Preferences};
use once_cell::sync::Lazy;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;

const BREAKFAST_CANDIDATES: [&str; 5] = [
    "Oatmeal with fruits",
    "Yogurt with granola",
    "Avocado toast",
    "Smoothie bowl",
    "Pancakes with maple syrup",
];

const LUNCH_CANDIDATES: [&str; 5] = [
    "Quinoa salad",
    "Grilled chicken wrap",
    "Vegetable soup",
    "Pasta primavera",
    "Burrito bowl",
];

const DINNER_CANDIDATES: [&str; 5] = [
    "Salmon with vegetables",
    "Stir-fried tofu",
    "Beef stew",
    "Vegetable lasagna",
    "Shrimp tacos",
];

/// Ingredient keywords a diet rules out, matched as case-insensitive
/// substrings against candidate names.
const VEGAN_EXCLUDES: [&str; 5] = ["chicken", "beef", "shrimp", "yogurt", "salmon"];
const VEGETARIAN_EXCLUDES: [&str; 4] = ["chicken", "beef", "shrimp", "salmon"];

/// Fallback row for empty or unknown diet keys.
const DEFAULT_FALLBACK: [&str; 3] =
    ["Oatmeal with fruits", "Mixed greens salad", "Vegetable stir-fry"];

/// Last-resort meals, indexed by normalized diet key.
static FALLBACK_TABLE: Lazy<HashMap<&'static str, [&'static str; 3]>> = Lazy::new(|| {
    HashMap::from([
        (
            "vegan",
            [
                "Chia pudding with berries",
                "Hummus and vegetable wrap",
                "Lentil and vegetable curry",
            ],
        ),
        (
            "vegetarian",
            [
                "Whole grain toast with avocado",
                "Quinoa bowl with roasted vegetables",
                "Eggplant parmesan",
            ],
        ),
        (
            "keto",
            [
                "Avocado and spinach omelet",
                "Cauliflower rice with vegetables",
                "Zucchini noodles with pesto",
            ],
        ),
        (
            "paleo",
            [
                "Mixed fruit bowl with nuts",
                "Sweet potato and vegetable hash",
                "Roasted vegetables with herbs",
            ],
        ),
        (
            "lowcarb",
            [
                "Greek yogurt with berries",
                "Vegetable soup with leafy greens",
                "Cauliflower crust pizza with vegetables",
            ],
        ),
    ])
});

fn candidates(slot: MealSlot) -> &'static [&'static str] {
    match slot {
        MealSlot::Breakfast => &BREAKFAST_CANDIDATES,
        MealSlot::Lunch => &LUNCH_CANDIDATES,
        MealSlot::Dinner => &DINNER_CANDIDATES,
    }
}

fn diet_allows(diet: &str, candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    let excludes: &[&str] = match diet {
        "Vegan" => &VEGAN_EXCLUDES,
        "Vegetarian" => &VEGETARIAN_EXCLUDES,
        _ => return true,
    };
    !excludes.iter().any(|keyword| lower.contains(keyword))
}

fn allergy_allows(allergies: &[String], candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    !allergies
        .iter()
        .any(|allergy| lower.contains(&allergy.to_lowercase()))
}

/// Candidates for `slot` that survive the diet and allergy filters.
pub fn filtered_candidates(slot: MealSlot, prefs: &Preferences) -> Vec<&'static str> {
    candidates(slot)
        .iter()
        .copied()
        .filter(|candidate| diet_allows(&prefs.diet, candidate))
        .filter(|candidate| allergy_allows(&prefs.allergies, candidate))
        .collect()
}

/// Fixed per-diet fallback when filtering leaves no candidate. Unknown diet
/// keys use the default row, so this never fails.
pub fn fallback_meal(slot: MealSlot, prefs: &Preferences) -> &'static str {
    let key = prefs.diet_key();
    let row = FALLBACK_TABLE
        .get(key.as_str())
        .copied()
        .unwrap_or(DEFAULT_FALLBACK);
    match slot {
        MealSlot::Breakfast => row[0],
        MealSlot::Lunch => row[1],
        MealSlot::Dinner => row[2],
    }
}

/// One locally generated meal name for `slot`. Never empty.
pub fn local_meal<R: Rng + ?Sized>(slot: MealSlot, prefs: &Preferences, rng: &mut R) -> String {
    let surviving = filtered_candidates(slot, prefs);
    surviving
        .choose(rng)
        .copied()
        .unwrap_or_else(|| fallback_meal(slot, prefs))
        .to_string()
}

/// Local plan for a whole day, or for a single slot when `slot` is given
/// (the other slots are left untouched in the resulting update).
pub fn local_plan<R: Rng + ?Sized>(
    slot: Option<MealSlot>,
    prefs: &Preferences,
    rng: &mut R,
) -> PlanUpdate {
    let mut update = PlanUpdate {
        preferences: prefs.clone(),
        ..Default::default()
    };
    for candidate in MEAL_SLOTS {
        if slot.is_some_and(|single| single != candidate) {
            continue;
        }
        let meal = Some(local_meal(candidate, prefs, rng));
        match candidate {
            MealSlot::Breakfast => update.breakfast = meal,
            MealSlot::Lunch => update.lunch = meal,
            MealSlot::Dinner => update.dinner = meal,
        }
    }
    update
}

/// Outcome of a generation action, ready to merge into the plan store.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanOutcome {
    pub update: PlanUpdate,
    /// True when any slot came from the local generator instead of the
    /// remote reply.
    pub used_fallback: bool,
}

/// Turns the remote generator's result into a store update.
///
/// A parsed reply contributes its slot values verbatim; any transport/parse
/// failure, or a missing slot key, is filled by the local generator so a
/// generated day never carries an empty slot.
pub fn resolve_plan<R: Rng + ?Sized>(
    reply: Result<PlanReply, GenerateError>,
    slot: Option<MealSlot>,
    prefs: &Preferences,
    rng: &mut R,
) -> PlanOutcome {
    let reply = match reply {
        Ok(reply) => reply,
        Err(_) => {
            return PlanOutcome {
                update: local_plan(slot, prefs, rng),
                used_fallback: true,
            };
        }
    };

    let mut used_fallback = false;
    let mut resolve_slot = |slot: MealSlot| -> Option<String> {
        match reply.slot(slot) {
            Some(meal) if !meal.is_empty() => Some(meal.to_string()),
            _ => {
                used_fallback = true;
                Some(local_meal(slot, prefs, rng))
            }
        }
    };

    let mut update = PlanUpdate {
        preferences: prefs.clone(),
        ..Default::default()
    };
    match slot {
        Some(MealSlot::Breakfast) => update.breakfast = resolve_slot(MealSlot::Breakfast),
        Some(MealSlot::Lunch) => update.lunch = resolve_slot(MealSlot::Lunch),
        Some(MealSlot::Dinner) => update.dinner = resolve_slot(MealSlot::Dinner),
        None => {
            update.breakfast = resolve_slot(MealSlot::Breakfast);
            update.lunch = resolve_slot(MealSlot::Lunch);
            update.dinner = resolve_slot(MealSlot::Dinner);
        }
    }
    PlanOutcome {
        update,
        used_fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn prefs(diet: &str, allergies: &[&str]) -> Preferences {
        Preferences {
            diet: diet.to_string(),
            allergies: allergies.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn vegan_breakfast_excludes_yogurt() {
        let surviving = filtered_candidates(MealSlot::Breakfast, &prefs("Vegan", &["Dairy"]));
        assert_eq!(
            surviving,
            vec![
                "Oatmeal with fruits",
                "Avocado toast",
                "Smoothie bowl",
                "Pancakes with maple syrup",
            ]
        );

        let mut rng = StdRng::seed_from_u64(7);
        let meal = local_meal(MealSlot::Breakfast, &prefs("Vegan", &["Dairy"]), &mut rng);
        assert!(surviving.contains(&meal.as_str()));
    }

    #[test]
    fn vegetarian_keeps_yogurt_but_drops_meat() {
        let surviving = filtered_candidates(MealSlot::Dinner, &prefs("Vegetarian", &[]));
        assert_eq!(surviving, vec!["Stir-fried tofu", "Vegetable lasagna"]);
    }

    #[test]
    fn allergy_match_is_substring_and_case_insensitive() {
        let surviving = filtered_candidates(MealSlot::Dinner, &prefs("", &["shrimp"]));
        assert!(!surviving.contains(&"Shrimp tacos"));
        assert_eq!(surviving.len(), 4);
    }

    #[test]
    fn exhausted_candidates_fall_back_by_diet_key() {
        // Vegan drops the chicken wrap; the free-text "allergies" knock out
        // the remaining four lunch candidates.
        let prefs = prefs("Vegan", &["Salad", "Soup", "Pasta", "Bowl"]);
        assert!(filtered_candidates(MealSlot::Lunch, &prefs).is_empty());

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            local_meal(MealSlot::Lunch, &prefs, &mut rng),
            "Hummus and vegetable wrap"
        );
    }

    #[test]
    fn unknown_diet_uses_default_fallback() {
        let prefs = prefs("Carnivore", &["Salad", "Soup", "Pasta", "Bowl", "Wrap"]);
        assert!(filtered_candidates(MealSlot::Lunch, &prefs).is_empty());

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            local_meal(MealSlot::Lunch, &prefs, &mut rng),
            "Mixed greens salad"
        );
    }

    #[test]
    fn low_carb_diet_key_strips_hyphen() {
        let prefs = prefs("Low-Carb", &[]);
        assert_eq!(prefs.diet_key(), "lowcarb");
        assert_eq!(
            fallback_meal(MealSlot::Dinner, &prefs),
            "Cauliflower crust pizza with vegetables"
        );
    }

    #[test]
    fn local_meal_is_never_empty() {
        let diets = ["", "Vegetarian", "Vegan", "Keto", "Paleo", "Low-Carb"];
        let all_allergies: Vec<&str> = vec!["Dairy", "Gluten", "Nuts", "Shellfish", "Soy", "Eggs"];
        let mut rng = StdRng::seed_from_u64(42);
        for diet in diets {
            for slot in MEAL_SLOTS {
                let meal = local_meal(slot, &prefs(diet, &all_allergies), &mut rng);
                assert!(!meal.is_empty(), "empty meal for diet {diet:?} slot {slot}");
            }
        }
    }

    #[test]
    fn same_seed_same_candidate() {
        let prefs = prefs("Vegan", &["Dairy"]);
        let a = local_meal(MealSlot::Breakfast, &prefs, &mut StdRng::seed_from_u64(99));
        let b = local_meal(MealSlot::Breakfast, &prefs, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn parsed_reply_is_used_verbatim() {
        let reply = PlanReply {
            breakfast: Some("X".into()),
            lunch: Some("Y".into()),
            dinner: Some("Z".into()),
        };
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = resolve_plan(Ok(reply), None, &prefs("", &[]), &mut rng);
        assert!(!outcome.used_fallback);
        assert_eq!(outcome.update.breakfast.as_deref(), Some("X"));
        assert_eq!(outcome.update.lunch.as_deref(), Some("Y"));
        assert_eq!(outcome.update.dinner.as_deref(), Some("Z"));
    }

    #[test]
    fn failed_reply_matches_independent_local_generation() {
        let prefs = prefs("Vegan", &["Dairy"]);
        let outcome = resolve_plan(
            Err(GenerateError::MissingKey),
            Some(MealSlot::Breakfast),
            &prefs,
            &mut StdRng::seed_from_u64(5),
        );
        let expected = local_meal(MealSlot::Breakfast, &prefs, &mut StdRng::seed_from_u64(5));
        assert!(outcome.used_fallback);
        assert_eq!(outcome.update.breakfast.as_deref(), Some(expected.as_str()));
        assert_eq!(outcome.update.lunch, None);
        assert_eq!(outcome.update.dinner, None);
    }

    #[test]
    fn missing_slot_keys_are_filled_locally() {
        let reply = PlanReply {
            breakfast: Some("Remote breakfast".into()),
            lunch: None,
            dinner: Some(String::new()),
        };
        let mut rng = StdRng::seed_from_u64(3);
        let outcome = resolve_plan(Ok(reply), None, &prefs("", &[]), &mut rng);
        assert!(outcome.used_fallback);
        assert_eq!(outcome.update.breakfast.as_deref(), Some("Remote breakfast"));
        assert!(!outcome.update.lunch.as_deref().unwrap_or_default().is_empty());
        assert!(!outcome.update.dinner.as_deref().unwrap_or_default().is_empty());
    }

    #[test]
    fn single_slot_swap_refreshes_preferences_snapshot() {
        let prefs = prefs("Keto", &["Nuts"]);
        let outcome = resolve_plan(
            Ok(PlanReply {
                lunch: Some("New Dish".into()),
                ..Default::default()
            }),
            Some(MealSlot::Lunch),
            &prefs,
            &mut StdRng::seed_from_u64(0),
        );
        assert_eq!(outcome.update.lunch.as_deref(), Some("New Dish"));
        assert_eq!(outcome.update.preferences, prefs);
    }
}
