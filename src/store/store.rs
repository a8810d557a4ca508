//! Store that owns application state and applies dispatched actions.

use super::subscription::{on_change, Subscribers, SubscriptionId};
use crate::checkpoint::{Checkpoint, CheckpointError, StoreMetadata};
use crate::core::{Action, ActionHistory, Dispatch, State};
use chrono::Utc;
use tracing::{debug, info, trace, warn};

/// Owner of application state.
///
/// A store is created by the application root and handed to consumers by
/// reference. State changes only through [`Store::dispatch`], which applies
/// the pure reducer and then notifies subscribers.
///
/// # Example
///
/// ```rust
/// use tally::core::{AppState, AuthAction, CounterAction};
/// use tally::Store;
///
/// let mut store: Store<AppState> = Store::default();
/// store.dispatch(CounterAction::Increment);
/// store.dispatch(CounterAction::Increase { amount: 5 });
/// store.dispatch(AuthAction::Login);
///
/// assert_eq!(store.state().counter.counter, 6);
/// assert!(store.state().auth.is_authenticated);
/// assert_eq!(store.history().len(), 3);
/// ```
pub struct Store<S: State> {
    state: S,
    history: ActionHistory<S>,
    record_history: bool,
    metadata: StoreMetadata,
    subscribers: Subscribers<S>,
}

impl<S: State> Store<S> {
    /// Create a store with an unbounded history.
    pub fn new(initial: S) -> Self {
        Self::from_parts(initial, ActionHistory::new(), true)
    }

    pub(crate) fn from_parts(initial: S, history: ActionHistory<S>, record_history: bool) -> Self {
        Self {
            state: initial,
            history,
            record_history,
            metadata: StoreMetadata::default(),
            subscribers: Subscribers::new(),
        }
    }

    /// Borrow the current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Clone the current state.
    pub fn snapshot(&self) -> S {
        self.state.clone()
    }

    /// Read part of the state through a selector.
    pub fn select<T>(&self, selector: impl FnOnce(&S) -> T) -> T {
        selector(&self.state)
    }

    /// Apply an action and notify subscribers.
    ///
    /// Returns the new state.
    pub fn dispatch(&mut self, action: impl Into<S::Action>) -> &S {
        let action = action.into();
        let now = Utc::now();
        let next = self.state.reduce(&action);
        let sequence = self.metadata.record(action.name(), now);

        debug!(
            slice = self.state.name(),
            action = action.name(),
            sequence,
            "dispatched action"
        );

        let before = std::mem::replace(&mut self.state, next);
        if self.record_history {
            self.history.push(Dispatch {
                action,
                before,
                after: self.state.clone(),
                timestamp: now,
                sequence,
            });
        }

        self.notify();
        &self.state
    }

    /// Subscribe to every dispatch.
    ///
    /// The callback receives the state after each action is applied.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&S) + Send + 'static,
    {
        let id = self.subscribers.add(Box::new(callback));
        trace!(%id, "added subscriber");
        id
    }

    /// Subscribe to changes in a selected value.
    ///
    /// The callback runs only when `selector` yields a value different from
    /// the previous one.
    ///
    /// ```rust
    /// use std::sync::{Arc, Mutex};
    /// use tally::core::{AppState, AuthAction, CounterAction};
    /// use tally::Store;
    ///
    /// let mut store: Store<AppState> = Store::default();
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = seen.clone();
    /// store.subscribe_to(
    ///     |s| s.auth.is_authenticated,
    ///     move |signed_in| sink.lock().unwrap().push(*signed_in),
    /// );
    ///
    /// store.dispatch(CounterAction::Increment);
    /// store.dispatch(AuthAction::Login);
    /// store.dispatch(AuthAction::Login);
    /// assert_eq!(*seen.lock().unwrap(), vec![true]);
    /// ```
    pub fn subscribe_to<T, Sel, F>(&mut self, selector: Sel, callback: F) -> SubscriptionId
    where
        Sel: Fn(&S) -> T + Send + 'static,
        T: PartialEq + Send + 'static,
        F: FnMut(&T) + Send + 'static,
    {
        let id = self
            .subscribers
            .add(on_change(&self.state, selector, callback));
        trace!(%id, "added selector subscriber");
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.subscribers.remove(id);
        if !removed {
            warn!(%id, "unsubscribe for unknown subscription");
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Dispatch history (empty if recording is disabled).
    pub fn history(&self) -> &ActionHistory<S> {
        &self.history
    }

    pub fn metadata(&self) -> &StoreMetadata {
        &self.metadata
    }

    /// Capture state, history and metadata.
    pub fn checkpoint(&self) -> Checkpoint<S> {
        Checkpoint::new(
            self.state.clone(),
            self.history.clone(),
            self.metadata.clone(),
        )
    }

    /// Replace state, history and metadata from a checkpoint, then notify
    /// subscribers. The store is left untouched if validation fails.
    ///
    /// The store keeps its own history settings: restored entries are
    /// trimmed to its limit, and dropped if recording is disabled.
    pub fn restore(&mut self, checkpoint: Checkpoint<S>) -> Result<(), CheckpointError> {
        checkpoint.validate()?;

        info!(
            checkpoint = %checkpoint.id,
            dispatch_count = checkpoint.metadata.dispatch_count,
            "restoring store from checkpoint"
        );

        let mut history = self.history.emptied();
        if self.record_history {
            for dispatch in checkpoint.history.into_entries() {
                history.push(dispatch);
            }
        }

        self.state = checkpoint.state;
        self.history = history;
        self.metadata = checkpoint.metadata;
        self.metadata.updated_at = Utc::now();

        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        trace!(subscribers = self.subscribers.len(), "notifying subscribers");
        self.subscribers.notify(&self.state);
    }
}

impl<S: State + Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: State> std::fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("history_len", &self.history.len())
            .field("record_history", &self.record_history)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
