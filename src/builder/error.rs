//! Errors raised while configuring and building stores.

use thiserror::Error;

/// Errors that can occur when building a store.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("History limit must be at least 1. Use .record_history(false) to disable history")]
    ZeroHistoryLimit,

    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),
}
