use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Not signed in: no user token found")]
    Unauthenticated,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Remote rejected request ({status}): {body}")]
    RemoteRejected { status: u16, body: String },

    #[error("No food entry in slot {0}")]
    EntryNotFound(u64),

    #[error("Removal already in progress for slot {0}")]
    RemovalInFlight(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
