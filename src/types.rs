use serde::{Deserialize, Serialize};

/// Diet choices offered by the preferences dialog. An empty string means
/// "no diet selected"; unknown strings are accepted and fall through to the
/// default fallback table.
pub const DIET_OPTIONS: &[&str] = &["Vegetarian", "Vegan", "Keto", "Paleo", "Low-Carb"];

/// Allergy tags offered by the preferences dialog. Filtering is a
/// case-insensitive substring match, so free-text tags also work.
pub const ALLERGY_OPTIONS: &[&str] = &["Dairy", "Gluten", "Nuts", "Shellfish", "Soy", "Eggs"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

pub const MEAL_SLOTS: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

impl MealSlot {
    pub fn key(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Diet and allergy selections that drive both generators.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub diet: String,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl Preferences {
    /// Normalized key used to index the fallback tables: lower-cased with
    /// hyphens stripped ("Low-Carb" -> "lowcarb"). Empty diet -> "default".
    pub fn diet_key(&self) -> String {
        if self.diet.is_empty() {
            "default".to_string()
        } else {
            self.diet.to_lowercase().replace('-', "")
        }
    }
}

/// One day's plan. Empty slot strings are shown as "not generated yet" by the
/// UI. The preferences snapshot reflects the most recent generation action
/// for this date, not necessarily the preferences behind every slot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    #[serde(default)]
    pub breakfast: String,
    #[serde(default)]
    pub lunch: String,
    #[serde(default)]
    pub dinner: String,
    #[serde(default)]
    pub preferences: Preferences,
}

impl DailyPlan {
    pub fn slot(&self, slot: MealSlot) -> &str {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }
}

/// A remembered barcode lookup, newest first, capped at ten entries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentScan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub calories: u32,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub image: Option<String>,
    /// Unix timestamp in seconds.
    #[serde(default)]
    pub date: u64,
}

/// A meal the user logged for a given day, summed by the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggedMeal {
    /// ISO date (YYYY-MM-DD) the meal was logged for.
    pub date: String,
    pub name: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub carbs_g: f64,
    #[serde(default)]
    pub fat_g: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reminders {
    pub water: bool,
    pub logging: bool,
    pub weekly_reports: bool,
}

impl Default for Reminders {
    fn default() -> Self {
        Self {
            water: true,
            logging: false,
            weekly_reports: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub diet_type: String,
}

/// Daily targets shown on the dashboard.
pub struct Goals {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
    pub water_glasses: u32,
}

pub const DAILY_GOALS: Goals = Goals {
    calories: 2000,
    protein_g: 120,
    carbs_g: 250,
    fat_g: 65,
    water_glasses: 8,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}
