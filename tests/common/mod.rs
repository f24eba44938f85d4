#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use macro_log_rs::error::{Result, TrackerError};
use macro_log_rs::lifecycle::MountGuard;
use macro_log_rs::models::{FoodEntry, WeightLog};
use macro_log_rs::remote::TrackerApi;

/// A call the fake API received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Remove(FoodEntry),
    LogWeight { token: String, weight: f64 },
    RetrieveWeights { token: String },
}

/// Recording fake of the tracker API.
pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    reject_with: Option<u16>,
    history: Vec<WeightLog>,
    unmount_on_call: Option<MountGuard>,
}

impl FakeApi {
    /// Accepts every request.
    pub fn ok() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reject_with: None,
            history: Vec::new(),
            unmount_on_call: None,
        }
    }

    /// Answers every request with the given status.
    pub fn rejecting(status: u16) -> Self {
        Self {
            reject_with: Some(status),
            ..Self::ok()
        }
    }

    pub fn with_history(mut self, history: Vec<WeightLog>) -> Self {
        self.history = history;
        self
    }

    /// Simulates the screen closing while the request is in flight.
    pub fn unmounting(mut self, guard: &MountGuard) -> Self {
        self.unmount_on_call = Some(guard.clone());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);

        if let Some(guard) = &self.unmount_on_call {
            guard.unmount();
        }

        match self.reject_with {
            Some(status) => Err(TrackerError::RemoteRejected {
                status,
                body: "rejected".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TrackerApi for FakeApi {
    async fn remove_food(&self, food: &FoodEntry) -> Result<()> {
        self.record(Call::Remove(food.clone()))
    }

    async fn log_weight(&self, token: &str, weight: f64) -> Result<WeightLog> {
        self.record(Call::LogWeight {
            token: token.to_string(),
            weight,
        })?;
        Ok(WeightLog::new(weight, Some("1-1-2025".to_string())))
    }

    async fn retrieve_weights(&self, token: &str) -> Result<Vec<WeightLog>> {
        self.record(Call::RetrieveWeights {
            token: token.to_string(),
        })?;
        Ok(self.history.clone())
    }
}

pub fn food(name: &str, cal: f64, protein: f64, fat: f64, carbs: f64) -> FoodEntry {
    FoodEntry {
        description: name.to_string(),
        selected_servings: Some(1.0),
        calories: Some(cal),
        protein: Some(protein),
        fat: Some(fat),
        carbohydrates: Some(carbs),
        ..Default::default()
    }
}
