use crate::models::FoodEntry;

/// Macro totals for a meal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
}

impl Totals {
    /// Add one entry's macros; missing fields count as 0.
    pub fn add(mut self, food: &FoodEntry) -> Self {
        self.calories += food.calories();
        self.protein += food.protein();
        self.fat += food.fat();
        self.carbohydrates += food.carbohydrates();
        self
    }

    pub fn is_zero(&self) -> bool {
        *self == Totals::default()
    }
}

/// Field-wise sum of macros across `foods`. Empty input gives all zeros.
pub fn aggregate<'a, I>(foods: I) -> Totals
where
    I: IntoIterator<Item = &'a FoodEntry>,
{
    foods.into_iter().fold(Totals::default(), Totals::add)
}
