use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::MealRecord;

/// Load the meal handed to the detail screen from a JSON file.
///
/// Accepts either a `{"foods": [...]}` record or a bare array of foods.
pub fn load_meal<P: AsRef<Path>>(path: P) -> Result<MealRecord> {
    let content = fs::read_to_string(path.as_ref())?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    let record = if value.is_array() {
        MealRecord::new(serde_json::from_value(value)?)
    } else {
        serde_json::from_value(value)?
    };

    debug!(
        path = %path.as_ref().display(),
        foods = record.foods().len(),
        "loaded meal"
    );
    Ok(record)
}
