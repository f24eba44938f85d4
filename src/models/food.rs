use serde::{Deserialize, Serialize};

/// One food item's nutritional record within a meal.
///
/// Numeric fields are optional on the wire; a missing field reads as 0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FoodEntry {
    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_servings: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturated_fat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trans_fat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugars: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iron: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
}

impl FoodEntry {
    #[inline]
    pub fn calories(&self) -> f64 {
        self.calories.unwrap_or(0.0)
    }

    #[inline]
    pub fn protein(&self) -> f64 {
        self.protein.unwrap_or(0.0)
    }

    #[inline]
    pub fn fat(&self) -> f64 {
        self.fat.unwrap_or(0.0)
    }

    #[inline]
    pub fn carbohydrates(&self) -> f64 {
        self.carbohydrates.unwrap_or(0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} cal, P:{} F:{} C:{}",
            self.description,
            self.calories(),
            self.protein(),
            self.fat(),
            self.carbohydrates()
        )
    }
}

/// A meal as handed to the detail screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MealRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foods: Option<Vec<FoodEntry>>,
}

impl MealRecord {
    pub fn new(foods: Vec<FoodEntry>) -> Self {
        Self { foods: Some(foods) }
    }

    /// Foods in order; an absent list reads as empty.
    pub fn foods(&self) -> &[FoodEntry] {
        self.foods.as_deref().unwrap_or(&[])
    }
}
