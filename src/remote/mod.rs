mod http;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{FoodEntry, WeightLog};

pub use http::{DEFAULT_API_URL, HttpTrackerApi};

/// The tracker's remote API.
///
/// Screens talk to this trait only, so tests can substitute a recording fake.
#[async_trait]
pub trait TrackerApi: Send + Sync {
    /// `POST /api/remove`. Any non-2xx status is a failure.
    async fn remove_food(&self, food: &FoodEntry) -> Result<()>;

    /// `POST /api/logWeight` with a bearer token. Returns the created record.
    async fn log_weight(&self, token: &str, weight: f64) -> Result<WeightLog>;

    /// `GET /api/retrieveWeight` with a bearer token. Anything but 200 is a failure.
    async fn retrieve_weights(&self, token: &str) -> Result<Vec<WeightLog>>;
}
