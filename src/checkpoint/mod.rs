//! In-memory checkpoints of a store.
//!
//! A checkpoint captures the current state, the retained dispatch history and
//! store metadata. It can be encoded to JSON or a compact bincode form and
//! restored into a store later in the same session. Subscribers are not part
//! of a checkpoint.

use crate::core::{ActionHistory, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Bookkeeping maintained by a store across dispatches
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// When the store was created
    pub created_at: DateTime<Utc>,

    /// Time of the last dispatch or restore
    pub updated_at: DateTime<Utc>,

    /// Total dispatches applied, including ones evicted from history
    pub dispatch_count: u64,

    /// Dispatches per action name (e.g. `"counter/increment"`)
    pub dispatches_by_action: HashMap<String, u64>,
}

impl Default for StoreMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            dispatch_count: 0,
            dispatches_by_action: HashMap::new(),
        }
    }
}

impl StoreMetadata {
    /// Count one dispatch of `action_name`, returning its sequence number.
    pub(crate) fn record(&mut self, action_name: &str, at: DateTime<Utc>) -> u64 {
        self.dispatch_count += 1;
        self.updated_at = at;
        *self
            .dispatches_by_action
            .entry(action_name.to_string())
            .or_insert(0) += 1;
        self.dispatch_count
    }

    /// Number of times `action_name` was dispatched.
    pub fn dispatches_of(&self, action_name: &str) -> u64 {
        self.dispatches_by_action
            .get(action_name)
            .copied()
            .unwrap_or(0)
    }
}

/// Serializable checkpoint of a store.
///
/// # Example
///
/// ```rust
/// use tally::checkpoint::Checkpoint;
/// use tally::core::{AppAction, AppState, CounterAction};
/// use tally::Store;
///
/// let mut store: Store<AppState> = Store::default();
/// store.dispatch(AppAction::Counter(CounterAction::Increment));
///
/// let json = store.checkpoint().to_json().unwrap();
/// let checkpoint = Checkpoint::from_json(&json).unwrap();
///
/// let mut restored: Store<AppState> = Store::default();
/// restored.restore(checkpoint).unwrap();
/// assert_eq!(restored.state().counter.counter, 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// State at checkpoint time
    pub state: S,

    /// Retained dispatch history
    pub history: ActionHistory<S>,

    /// Store metadata
    pub metadata: StoreMetadata,
}

impl<S: State> Checkpoint<S> {
    pub(crate) fn new(state: S, history: ActionHistory<S>, metadata: StoreMetadata) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state,
            history,
            metadata,
        }
    }

    /// Check that the checkpoint is internally consistent.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if let Some(capacity) = self.history.capacity() {
            if self.history.len() > capacity {
                return Err(CheckpointError::CapacityExceeded {
                    len: self.history.len(),
                    capacity,
                });
            }
        }

        let mut previous = 0;
        for dispatch in self.history.iter() {
            if dispatch.sequence <= previous || dispatch.sequence > self.metadata.dispatch_count {
                return Err(CheckpointError::SequenceMismatch {
                    sequence: dispatch.sequence,
                    dispatch_count: self.metadata.dispatch_count,
                });
            }
            previous = dispatch.sequence;
        }

        match self.history.last() {
            Some(last) if last.after != self.state => Err(CheckpointError::StateMismatch {
                sequence: last.sequence,
            }),
            _ => Ok(()),
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    /// Decode and validate a JSON checkpoint.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            serde_json::from_str(json).map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    /// Decode and validate a bincode checkpoint.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            bincode::deserialize(bytes).map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AppAction, AppState, AuthAction, CounterAction, Dispatch};

    fn sample() -> Checkpoint<AppState> {
        let mut metadata = StoreMetadata::default();
        let mut history = ActionHistory::new();
        let mut state = AppState::default();
        for action in [
            AppAction::Counter(CounterAction::Increase { amount: 5 }),
            AppAction::Auth(AuthAction::Login),
        ] {
            let now = Utc::now();
            let sequence = metadata.record(crate::core::Action::name(&action), now);
            let after = state.reduce(&action);
            history.push(Dispatch {
                action,
                before: state,
                after,
                timestamp: now,
                sequence,
            });
            state = after;
        }
        Checkpoint::new(state, history, metadata)
    }

    #[test]
    fn metadata_counts_dispatches() {
        let checkpoint = sample();
        assert_eq!(checkpoint.metadata.dispatch_count, 2);
        assert_eq!(checkpoint.metadata.dispatches_of("counter/increase"), 1);
        assert_eq!(checkpoint.metadata.dispatches_of("counter/toggle"), 0);
    }

    #[test]
    fn new_checkpoint_is_valid() {
        let checkpoint = sample();
        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert!(uuid::Uuid::parse_str(&checkpoint.id).is_ok());
        assert!(checkpoint.validate().is_ok());
    }

    #[test]
    fn json_and_binary_decode_to_same_state() {
        let checkpoint = sample();

        let from_json = Checkpoint::<AppState>::from_json(&checkpoint.to_json().unwrap()).unwrap();
        let from_bytes =
            Checkpoint::<AppState>::from_bytes(&checkpoint.to_bytes().unwrap()).unwrap();

        assert_eq!(from_json.state, checkpoint.state);
        assert_eq!(from_bytes.state, checkpoint.state);
        assert_eq!(from_bytes.history.len(), 2);
        assert_eq!(from_json.metadata, checkpoint.metadata);
    }

    #[test]
    fn rejects_unknown_version() {
        let mut checkpoint = sample();
        checkpoint.version = CHECKPOINT_VERSION + 1;
        let json = checkpoint.to_json().unwrap();

        let result = Checkpoint::<AppState>::from_json(&json);
        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn rejects_state_that_disagrees_with_history() {
        let mut checkpoint = sample();
        checkpoint.state = AppState::default();

        assert!(matches!(
            checkpoint.validate(),
            Err(CheckpointError::StateMismatch { sequence: 2 })
        ));
    }

    #[test]
    fn rejects_history_over_its_bound() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["history"]["capacity"] = serde_json::json!(1);

        let result = Checkpoint::<AppState>::from_json(&value.to_string());
        assert!(matches!(
            result,
            Err(CheckpointError::CapacityExceeded { len: 2, capacity: 1 })
        ));
    }

    #[test]
    fn rejects_sequences_past_dispatch_count() {
        let mut checkpoint = sample();
        checkpoint.metadata.dispatch_count = 1;

        assert!(matches!(
            checkpoint.validate(),
            Err(CheckpointError::SequenceMismatch { sequence: 2, dispatch_count: 1 })
        ));
    }

    #[test]
    fn rejects_garbage_input() {
        assert!(matches!(
            Checkpoint::<AppState>::from_json("{not json"),
            Err(CheckpointError::Decode(_))
        ));
        assert!(matches!(
            Checkpoint::<AppState>::from_bytes(&[1, 2, 3]),
            Err(CheckpointError::Decode(_))
        ));
    }
}
