//! Dispatch history tracking.
//!
//! Records every action a store applied, together with the states before
//! and after it. `record` is pure and returns a new history.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single dispatched action.
///
/// # Example
///
/// ```rust
/// use tally::core::{AppAction, AppState, CounterAction, Dispatch, State};
/// use chrono::Utc;
///
/// let before = AppState::default();
/// let action = AppAction::Counter(CounterAction::Increment);
/// let dispatch = Dispatch {
///     after: before.reduce(&action),
///     action,
///     before,
///     timestamp: Utc::now(),
///     sequence: 1,
/// };
/// assert_eq!(dispatch.after.counter.counter, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Dispatch<S: State> {
    /// The action that was applied
    pub action: S::Action,
    /// State before the action
    pub before: S,
    /// State after the action
    pub after: S,
    /// When the action was applied
    pub timestamp: DateTime<Utc>,
    /// Store-wide dispatch number, starting at 1
    pub sequence: u64,
}

/// Ordered history of dispatches, optionally bounded.
///
/// When a capacity is set, recording past it drops the oldest entries.
///
/// # Example
///
/// ```rust
/// use tally::core::{ActionHistory, AppAction, AppState, CounterAction, Dispatch, State};
/// use chrono::Utc;
///
/// let start = AppState::default();
/// let action = AppAction::Counter(CounterAction::Toggle);
/// let history = ActionHistory::new().record(Dispatch {
///     after: start.reduce(&action),
///     action,
///     before: start,
///     timestamp: Utc::now(),
///     sequence: 1,
/// });
///
/// let path = history.states();
/// assert_eq!(path.len(), 2);
/// assert!(!path[1].counter.show_counter);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ActionHistory<S: State> {
    entries: VecDeque<Dispatch<S>>,
    capacity: Option<usize>,
}

impl<S: State> Default for ActionHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> ActionHistory<S> {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: None,
        }
    }

    /// Create an empty history that keeps at most `capacity` entries.
    ///
    /// Storage grows on demand; `capacity` is only an upper bound.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: Some(capacity),
        }
    }

    /// Empty history with the same bound as `self`.
    pub(crate) fn emptied(&self) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: self.capacity,
        }
    }

    /// Consume the history, yielding retained dispatches oldest first.
    pub(crate) fn into_entries(self) -> impl Iterator<Item = Dispatch<S>> {
        self.entries.into_iter()
    }

    /// Record a dispatch, returning a new history.
    ///
    /// The existing history is left unchanged.
    pub fn record(&self, dispatch: Dispatch<S>) -> Self {
        let mut next = self.clone();
        next.push(dispatch);
        next
    }

    /// Record a dispatch in place.
    pub(crate) fn push(&mut self, dispatch: Dispatch<S>) {
        if self.capacity == Some(0) {
            return;
        }
        self.entries.push_back(dispatch);
        if let Some(capacity) = self.capacity {
            while self.entries.len() > capacity {
                self.entries.pop_front();
            }
        }
    }

    /// Path of states traversed: the `before` of the oldest retained
    /// dispatch, then the `after` of each dispatch.
    pub fn states(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.entries.len() + 1);
        if let Some(first) = self.entries.front() {
            path.push(&first.before);
        }
        path.extend(self.entries.iter().map(|d| &d.after));
        path
    }

    /// Names of the retained actions, oldest first.
    pub fn action_names(&self) -> Vec<&str> {
        use super::state::Action;
        self.entries.iter().map(|d| d.action.name()).collect()
    }

    /// Time between the oldest and newest retained dispatch.
    ///
    /// Returns `None` if the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.front()?, self.entries.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Most recent dispatch, if any.
    pub fn last(&self) -> Option<&Dispatch<S>> {
        self.entries.back()
    }

    /// Iterate over retained dispatches, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Dispatch<S>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}
