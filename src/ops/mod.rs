//! Operations over the client state: reload, filtering, mutations, and the
//! event dispatcher that ties them together.

pub mod dispatch;
pub mod filter;
pub mod project_ops;
pub mod sync;
pub mod task_ops;

use crate::api::RequestError;

/// Error type for mutation operations
#[derive(Debug, thiserror::Error)]
pub enum OpError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("{field} must be a number, got \"{value}\"")]
    InvalidNumber { field: String, value: String },
    #[error("{field} must be a date (YYYY-MM-DD), got \"{value}\"")]
    InvalidDate { field: String, value: String },
    #[error("could not encode payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: u64 },
}

/// Asks the user to confirm a destructive action
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Result of an operation guarded by confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Declined,
}

/// Coerce a submitted string into an id
pub(crate) fn parse_id(field: &str, value: &str) -> Result<u64, OpError> {
    value.trim().parse().map_err(|_| OpError::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
    })
}
