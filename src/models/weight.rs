use serde::{Deserialize, Serialize};

/// A logged body weight as returned by the tracker API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightLog {
    #[serde(default)]
    pub weight: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl WeightLog {
    pub fn new(weight: f64, date: Option<String>) -> Self {
        Self { weight, date }
    }
}

/// Request body for `POST /api/logWeight`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogWeightRequest {
    pub weight: f64,
}

/// Request body for `POST /api/remove`.
#[derive(Debug, Clone, Serialize)]
pub struct RemoveFoodRequest<'a> {
    pub food: &'a crate::models::FoodEntry,
}
