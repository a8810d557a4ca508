//! Core state types and pure reducers.
//!
//! This module contains the pure functional core of the store:
//! - `State` and `Action` traits
//! - The counter and auth slices and the root `AppState`
//! - Guard predicates for conditional rendering
//! - Immutable dispatch history
//!
//! Nothing in this module performs side effects.

mod app;
mod auth;
mod counter;
mod guard;
mod history;
mod state;

pub use app::{AppAction, AppState};
pub use auth::{AuthAction, AuthState};
pub use counter::{CounterAction, CounterState};
pub use guard::Guard;
pub use history::{ActionHistory, Dispatch};
pub use state::{Action, State};
