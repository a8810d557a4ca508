//! Root application state combining the counter and auth slices.

use super::auth::{AuthAction, AuthState};
use super::counter::{CounterAction, CounterState};
use super::state::{Action, State};
use serde::{Deserialize, Serialize};

/// Root state owned by the application's store.
///
/// Each slice is reduced independently; an action for one slice leaves the
/// other untouched.
///
/// # Example
///
/// ```rust
/// use tally::core::{AppAction, AppState, CounterAction, State};
///
/// let state = AppState::default();
/// let next = state.reduce(&AppAction::Counter(CounterAction::Increase { amount: 5 }));
/// assert_eq!(next.counter.counter, 5);
/// assert_eq!(next.auth, state.auth);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    pub counter: CounterState,
    pub auth: AuthState,
}

/// Action addressed to one slice of [`AppState`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum AppAction {
    Counter(CounterAction),
    Auth(AuthAction),
}

impl From<CounterAction> for AppAction {
    fn from(action: CounterAction) -> Self {
        Self::Counter(action)
    }
}

impl From<AuthAction> for AppAction {
    fn from(action: AuthAction) -> Self {
        Self::Auth(action)
    }
}

impl Action for AppAction {
    fn name(&self) -> &str {
        match self {
            Self::Counter(action) => action.name(),
            Self::Auth(action) => action.name(),
        }
    }
}

impl State for AppState {
    type Action = AppAction;

    fn name(&self) -> &str {
        "app"
    }

    fn reduce(&self, action: &AppAction) -> Self {
        match action {
            AppAction::Counter(action) => Self {
                counter: self.counter.reduce(action),
                ..*self
            },
            AppAction::Auth(action) => Self {
                auth: self.auth.reduce(action),
                ..*self
            },
        }
    }
}
