mod food;
mod weight;

pub use food::{FoodEntry, MealRecord};
pub use weight::{LogWeightRequest, RemoveFoodRequest, WeightLog};
