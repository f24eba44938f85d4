use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use tracing::{debug, info};

use crate::error::{Result, TrackerError};
use crate::models::{FoodEntry, LogWeightRequest, RemoveFoodRequest, WeightLog};
use crate::remote::TrackerApi;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

const REMOVE_PATH: &str = "/api/remove";
const LOG_WEIGHT_PATH: &str = "/api/logWeight";
const RETRIEVE_WEIGHT_PATH: &str = "/api/retrieveWeight";

/// JSON-over-HTTP client for the tracker API.
///
/// No timeout and no retries: every failure goes back to the caller.
#[derive(Debug, Clone)]
pub struct HttpTrackerApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTrackerApi {
    /// Create a client pointing at the given base URL (e.g. `http://127.0.0.1:5000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client with a custom reqwest client.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn an unsuccessful status into `RemoteRejected`, keeping the body for the log.
async fn reject(resp: Response) -> TrackerError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    TrackerError::RemoteRejected { status, body }
}

#[async_trait]
impl TrackerApi for HttpTrackerApi {
    async fn remove_food(&self, food: &FoodEntry) -> Result<()> {
        let url = self.url(REMOVE_PATH);
        debug!(%url, food = %food.description, "removing food");

        let resp = self
            .client
            .post(&url)
            .json(&RemoveFoodRequest { food })
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(reject(resp).await);
        }
        Ok(())
    }

    async fn log_weight(&self, token: &str, weight: f64) -> Result<WeightLog> {
        let url = self.url(LOG_WEIGHT_PATH);
        debug!(%url, weight, "logging weight");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&LogWeightRequest { weight })
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(reject(resp).await);
        }

        let log: WeightLog = resp.json().await?;
        info!(weight = log.weight, "weight logged");
        Ok(log)
    }

    async fn retrieve_weights(&self, token: &str) -> Result<Vec<WeightLog>> {
        let url = self.url(RETRIEVE_WEIGHT_PATH);
        debug!(%url, "retrieving weights");

        let resp = self.client.get(&url).bearer_auth(token).send().await?;

        if resp.status() != StatusCode::OK {
            return Err(reject(resp).await);
        }

        let logs: Vec<WeightLog> = resp.json().await?;
        debug!(count = logs.len(), "retrieved weights");
        Ok(logs)
    }
}
