//! Tally: a pure functional reducer store for UI state
//!
//! Tally follows a "pure core, imperative shell" layout. State slices and
//! their reducers are pure functions with no side effects; the [`Store`]
//! owns the state, applies actions through those reducers and notifies
//! subscribers.
//!
//! # Core Concepts
//!
//! - **State**: a reducible slice via the `State` trait (`CounterState`, `AuthState`, `AppState`)
//! - **Action**: a named transition (`"counter/increment"`, `"auth/login"`)
//! - **Store**: explicit owner of the state, created by the application root
//! - **History**: record of every dispatch, optionally bounded
//! - **View**: which components render for a given state
//!
//! # Example
//!
//! ```rust
//! use tally::core::{AppState, CounterAction};
//! use tally::view::{ComponentTree, Event, Rendered};
//! use tally::Store;
//!
//! let mut store: Store<AppState> = Store::default();
//! let tree = ComponentTree::new();
//!
//! store.dispatch(CounterAction::Increment);
//! store.dispatch(CounterAction::Increase { amount: 5 });
//! assert_eq!(store.state().counter.counter, 6);
//!
//! store.dispatch(Event::ToggleClicked);
//! let frame = tree.render(store.state());
//! assert!(frame.contains(&Rendered::Counter { value: None }));
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use builder::{BuildError, StoreBuilder, StoreConfig};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use crate::core::{
    Action, AppAction, AppState, AuthAction, AuthState, CounterAction, CounterState, State,
};
pub use store::{Store, SubscriptionId};
