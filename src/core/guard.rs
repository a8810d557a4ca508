//! Guard predicates for conditional rendering.
//!
//! Guards are pure boolean functions over a state. The view layer uses them
//! to decide whether a component is rendered.

use super::state::State;
use std::marker::PhantomData;

/// Pure predicate over a state.
///
/// # Example
///
/// ```rust
/// use tally::core::{AppAction, AppState, AuthAction, Guard, State};
///
/// let signed_in = Guard::new(|state: &AppState| state.auth.is_authenticated);
///
/// let state = AppState::default();
/// assert!(!signed_in.check(&state));
/// assert!(signed_in.check(&state.reduce(&AppAction::Auth(AuthAction::Login))));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that always passes.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Check the predicate against a state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> std::fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
