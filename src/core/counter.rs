//! Counter slice: a numeric counter and a visibility flag.

use super::state::{Action, State};
use serde::{Deserialize, Serialize};

/// Counter state.
///
/// Serialized with the camelCase field names the UI reads
/// (`counter`, `showCounter`).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterState {
    /// Current count
    pub counter: i64,
    /// Whether the counter value is displayed
    pub show_counter: bool,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            counter: 0,
            show_counter: true,
        }
    }
}

impl CounterState {
    /// Add one to the counter.
    ///
    /// ```rust
    /// use tally::CounterState;
    ///
    /// let state = CounterState::default().increment();
    /// assert_eq!(state.counter, 1);
    /// ```
    pub fn increment(&self) -> Self {
        self.increase(1)
    }

    /// Subtract one from the counter.
    pub fn decrement(&self) -> Self {
        self.increase(-1)
    }

    /// Add `amount` to the counter. Negative amounts count down.
    ///
    /// Saturates at the bounds of `i64`.
    pub fn increase(&self, amount: i64) -> Self {
        Self {
            counter: self.counter.saturating_add(amount),
            ..*self
        }
    }

    /// Flip counter visibility.
    pub fn toggle(&self) -> Self {
        Self {
            show_counter: !self.show_counter,
            ..*self
        }
    }
}

/// Actions understood by the counter slice.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CounterAction {
    Increment,
    Decrement,
    Increase { amount: i64 },
    Toggle,
}

impl Action for CounterAction {
    fn name(&self) -> &str {
        match self {
            Self::Increment => "counter/increment",
            Self::Decrement => "counter/decrement",
            Self::Increase { .. } => "counter/increase",
            Self::Toggle => "counter/toggle",
        }
    }
}

impl State for CounterState {
    type Action = CounterAction;

    fn name(&self) -> &str {
        "counter"
    }

    fn reduce(&self, action: &CounterAction) -> Self {
        match *action {
            CounterAction::Increment => self.increment(),
            CounterAction::Decrement => self.decrement(),
            CounterAction::Increase { amount } => self.increase(amount),
            CounterAction::Toggle => self.toggle(),
        }
    }
}
