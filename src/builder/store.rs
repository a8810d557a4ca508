//! Builder for constructing stores.

use crate::builder::config::StoreConfig;
use crate::builder::error::BuildError;
use crate::core::{ActionHistory, State};
use crate::store::Store;

type Subscriber<S> = Box<dyn FnMut(&S) + Send>;

/// Builder for constructing stores with a fluent API.
///
/// # Example
///
/// ```
/// use tally::builder::StoreBuilder;
/// use tally::core::{AppState, CounterAction};
///
/// let mut store = StoreBuilder::new()
///     .initial(AppState::default())
///     .history_limit(2)
///     .build()
///     .unwrap();
///
/// for _ in 0..5 {
///     store.dispatch(CounterAction::Increment);
/// }
/// assert_eq!(store.state().counter.counter, 5);
/// assert_eq!(store.history().len(), 2);
/// ```
pub struct StoreBuilder<S: State> {
    initial: Option<S>,
    config: StoreConfig,
    subscribers: Vec<Subscriber<S>>,
}

impl<S: State + 'static> StoreBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            config: StoreConfig::default(),
            subscribers: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Replace all settings with a loaded configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable or disable dispatch history.
    pub fn record_history(mut self, record: bool) -> Self {
        self.config.record_history = record;
        self
    }

    /// Keep at most `limit` dispatches in history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    /// Register a subscriber that is attached when the store is built.
    pub fn subscribe<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&S) + Send + 'static,
    {
        self.subscribers.push(Box::new(callback));
        self
    }

    /// Build the store.
    /// Returns an error if required fields are missing or settings are invalid.
    pub fn build(self) -> Result<Store<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        self.config.validate()?;

        let history = match self.config.history_limit {
            Some(limit) => ActionHistory::bounded(limit),
            None => ActionHistory::new(),
        };

        let mut store = Store::from_parts(initial, history, self.config.record_history);
        for subscriber in self.subscribers {
            store.subscribe(subscriber);
        }

        Ok(store)
    }
}

impl<S: State + 'static> Default for StoreBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
