//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while encoding, decoding or restoring a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding a checkpoint to JSON or bincode failed
    #[error("Failed to encode checkpoint: {0}")]
    Encode(String),

    /// Decoding a checkpoint from JSON or bincode failed
    #[error("Failed to decode checkpoint: {0}")]
    Decode(String),

    /// Checkpoint was written by an incompatible format version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Newest history entry does not end in the checkpointed state
    #[error("History ends at dispatch {sequence} in a state that differs from the checkpointed state")]
    StateMismatch { sequence: u64 },

    /// History holds more entries than its own bound allows
    #[error("History holds {len} entries but is bounded to {capacity}")]
    CapacityExceeded { len: usize, capacity: usize },

    /// History entries are out of order or newer than the dispatch count
    #[error("History sequence {sequence} is inconsistent with {dispatch_count} recorded dispatches")]
    SequenceMismatch { sequence: u64, dispatch_count: u64 },
}
