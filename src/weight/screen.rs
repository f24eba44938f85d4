use chrono::{Datelike, NaiveDate};
use tracing::{debug, info, warn};

use crate::credentials::CredentialProvider;
use crate::error::{Result, TrackerError};
use crate::lifecycle::MountGuard;
use crate::models::WeightLog;
use crate::remote::TrackerApi;
use crate::weight::buffer::{Key, WeightEntryBuffer};

/// Parse the buffer, look up the token, and log the weight.
///
/// Nothing is sent when the buffer does not parse or no token is present.
/// The buffer is left as is.
pub async fn submit_weight(
    buffer: &WeightEntryBuffer,
    credentials: &dyn CredentialProvider,
    api: &dyn TrackerApi,
) -> Result<WeightLog> {
    let weight = buffer.parse()?;
    let token = credentials.token().ok_or(TrackerError::Unauthenticated)?;
    api.log_weight(&token, weight).await
}

/// Points for the weight history chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub weight: f64,
}

impl ChartData {
    pub fn from_logs(logs: &[WeightLog]) -> Self {
        let points = logs
            .iter()
            .enumerate()
            .map(|(i, log)| ChartPoint {
                label: log.date.clone().unwrap_or_else(|| format!("#{}", i + 1)),
                weight: log.weight,
            })
            .collect();
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn min(&self) -> Option<f64> {
        self.points.iter().map(|p| p.weight).reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.points.iter().map(|p| p.weight).reduce(f64::max)
    }

    pub fn latest(&self) -> Option<f64> {
        self.points.last().map(|p| p.weight)
    }
}

/// Today's date as shown in the weight screen header: `D-M-YYYY`, unpadded.
pub fn header_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.day(), date.month(), date.year())
}

/// State of the weight logging screen.
#[derive(Debug, Clone, Default)]
pub struct WeightScreen {
    buffer: WeightEntryBuffer,
    history: Vec<WeightLog>,
}

impl WeightScreen {
    /// A freshly mounted screen: empty buffer, no history yet.
    pub fn mount() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &WeightEntryBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &[WeightLog] {
        &self.history
    }

    pub fn press(&mut self, key: Key) -> Result<()> {
        key.apply(&mut self.buffer)
    }

    pub fn chart(&self) -> ChartData {
        ChartData::from_logs(&self.history)
    }

    /// Log the typed weight.
    ///
    /// On success the buffer is cleared and the new record joins the chart,
    /// provided the screen is still mounted. On failure the buffer is kept.
    pub async fn submit(
        &mut self,
        credentials: &dyn CredentialProvider,
        api: &dyn TrackerApi,
        guard: &MountGuard,
    ) -> Result<WeightLog> {
        let outcome = submit_weight(&self.buffer, credentials, api).await;
        match outcome {
            Ok(log) => {
                if guard.is_mounted() {
                    self.buffer.clear();
                    self.history.push(log.clone());
                } else {
                    debug!("screen closed before weight log resolved");
                }
                Ok(log)
            }
            Err(e) => {
                warn!(input = %self.buffer, error = %e, "failed to log weight");
                Err(e)
            }
        }
    }

    /// Fetch the weight history for the chart.
    ///
    /// Failures are logged and leave the chart empty; they never fail the
    /// screen. Returns the number of records loaded.
    pub async fn load_history(
        &mut self,
        credentials: &dyn CredentialProvider,
        api: &dyn TrackerApi,
        guard: &MountGuard,
    ) -> usize {
        let Some(token) = credentials.token() else {
            warn!("no token found, skipping weight history");
            return 0;
        };

        match api.retrieve_weights(&token).await {
            Ok(logs) if guard.is_mounted() => {
                info!(count = logs.len(), "retrieved weights");
                self.history = logs;
                self.history.len()
            }
            Ok(_) => {
                debug!("screen closed before weight history resolved");
                0
            }
            Err(e) => {
                warn!(error = %e, "failed to retrieve weights");
                0
            }
        }
    }
}
