pub mod cli;
pub mod credentials;
pub mod error;
pub mod interface;
pub mod lifecycle;
pub mod meal;
pub mod models;
pub mod remote;
pub mod weight;

pub use error::{Result, TrackerError};
pub use models::{FoodEntry, MealRecord, WeightLog};
