//! Error types for Worksnap Core

use crate::platform::StatusCode;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Platform session unavailable (client not running or no active account)")]
    SessionInit,

    #[error("Platform rejected catalog query creation")]
    RequestCreation,

    #[error("Platform rejected query submission")]
    Submission,

    #[error("Query failed: status {status}, transport failure: {transport_failed}")]
    QueryFailed {
        status: StatusCode,
        transport_failed: bool,
    },

    #[error("Query completion did not arrive within {0:?}")]
    CompletionTimeout(Duration),

    #[error("Completion handler was dropped without firing")]
    CompletionLost,

    #[error("Snapshot persistence failed: {0}")]
    Persistence(#[source] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
