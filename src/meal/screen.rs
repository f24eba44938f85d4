use tracing::{debug, info, warn};

use crate::error::{Result, TrackerError};
use crate::lifecycle::MountGuard;
use crate::meal::aggregate::{Totals, aggregate};
use crate::models::{FoodEntry, MealRecord};
use crate::remote::TrackerApi;

/// Identity of a row within one open meal screen.
pub type SlotId = u64;

/// Visual state of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Visible,
    /// Fading out while its removal is awaiting confirmation. The remove
    /// control is disabled in this state.
    Fading,
}

#[derive(Debug, Clone)]
pub struct MealRow {
    pub slot: SlotId,
    pub entry: FoodEntry,
    pub state: RowState,
}

/// A removal that has started fading and still needs the remote verdict.
#[derive(Debug, Clone)]
pub struct PendingRemoval {
    slot: SlotId,
    entry: FoodEntry,
}

impl PendingRemoval {
    pub fn slot(&self) -> SlotId {
        self.slot
    }

    pub fn entry(&self) -> &FoodEntry {
        &self.entry
    }
}

/// State of the meal detail screen.
///
/// Rows carry a slot id assigned at mount so that removing one of two
/// identical entries removes exactly the row that was acted on.
#[derive(Debug, Clone, Default)]
pub struct MealScreen {
    rows: Vec<MealRow>,
}

impl MealScreen {
    /// Mount the screen with the meal handed over by navigation.
    pub fn mount(record: MealRecord) -> Self {
        let rows = record
            .foods
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, entry)| MealRow {
                slot: i as SlotId,
                entry,
                state: RowState::Visible,
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[MealRow] {
        &self.rows
    }

    /// The current foods, in display order.
    pub fn foods(&self) -> impl Iterator<Item = &FoodEntry> {
        self.rows.iter().map(|r| &r.entry)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// An empty or absent list renders the "no data" state.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Totals over the current list, recomputed on every call.
    pub fn totals(&self) -> Totals {
        aggregate(self.foods())
    }

    pub fn row(&self, slot: SlotId) -> Option<&MealRow> {
        self.rows.iter().find(|r| r.slot == slot)
    }

    /// Whether the remove control for `slot` is enabled.
    pub fn can_remove(&self, slot: SlotId) -> bool {
        self.row(slot)
            .map(|r| r.state == RowState::Visible)
            .unwrap_or(false)
    }

    /// Start removing a row: begin the fade and hand back the entry to send.
    pub fn begin_removal(&mut self, slot: SlotId) -> Result<PendingRemoval> {
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.slot == slot)
            .ok_or(TrackerError::EntryNotFound(slot))?;

        if row.state == RowState::Fading {
            return Err(TrackerError::RemovalInFlight(slot));
        }

        row.state = RowState::Fading;
        debug!(slot, food = %row.entry.description, "removal started");

        Ok(PendingRemoval {
            slot,
            entry: row.entry.clone(),
        })
    }

    /// Apply the remote verdict for a pending removal.
    ///
    /// Success drops the row; failure brings it back to `Visible` and leaves
    /// the list untouched.
    pub fn finish_removal(&mut self, pending: PendingRemoval, outcome: &Result<()>) {
        match outcome {
            Ok(()) => {
                self.rows.retain(|r| r.slot != pending.slot());
                info!(
                    slot = pending.slot(),
                    food = %pending.entry.description,
                    remaining = self.rows.len(),
                    "food removed"
                );
            }
            Err(e) => {
                if let Some(row) = self.rows.iter_mut().find(|r| r.slot == pending.slot()) {
                    row.state = RowState::Visible;
                }
                warn!(slot = pending.slot(), error = %e, "food removal failed");
            }
        }
    }

    /// Remove a row after the remote API confirms it.
    ///
    /// If `guard` reports the screen closed by the time the API answers,
    /// the outcome is returned but not applied.
    pub async fn request_removal(
        &mut self,
        slot: SlotId,
        api: &dyn TrackerApi,
        guard: &MountGuard,
    ) -> Result<()> {
        let pending = self.begin_removal(slot)?;
        let outcome = api.remove_food(pending.entry()).await;

        if !guard.is_mounted() {
            match &outcome {
                Ok(()) => debug!(slot, "screen closed before removal resolved"),
                Err(e) => warn!(slot, error = %e, "food removal failed after screen closed"),
            }
            return outcome;
        }

        self.finish_removal(pending, &outcome);
        outcome
    }
}
