//! Core `State` and `Action` traits.
//!
//! A state is a reducible slice of application data. Reduction is pure:
//! it borrows the current state and the action and returns the next state.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A named, serializable action that a reducer understands.
///
/// Names follow the `"<slice>/<action>"` convention, e.g. `"counter/increment"`.
pub trait Action:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the action's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for reducible state slices.
///
/// All methods are pure - no side effects. `reduce` never mutates `self`;
/// it returns the state that results from applying `action`.
///
/// # Required Traits
///
/// - `Clone`: states are cloned into history and snapshots
/// - `PartialEq`: selectors compare states to detect changes
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for checkpoints
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum LampAction {
///     Flip,
/// }
///
/// impl Action for LampAction {
///     fn name(&self) -> &str {
///         "lamp/flip"
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Lamp {
///     on: bool,
/// }
///
/// impl State for Lamp {
///     type Action = LampAction;
///
///     fn name(&self) -> &str {
///         "lamp"
///     }
///
///     fn reduce(&self, action: &LampAction) -> Self {
///         match action {
///             LampAction::Flip => Lamp { on: !self.on },
///         }
///     }
/// }
///
/// let lamp = Lamp { on: false };
/// assert!(lamp.reduce(&LampAction::Flip).on);
/// assert!(!lamp.on);
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Actions this state can be reduced by.
    type Action: Action;

    /// Get the slice name for display/logging.
    fn name(&self) -> &str;

    /// Apply an action, returning the next state.
    fn reduce(&self, action: &Self::Action) -> Self;
}
