//! Component tree of the counter page.
//!
//! Rendering is modelled as data: [`ComponentTree::render`] decides which
//! components appear for a given [`AppState`] and what each one shows.
//! User interaction is described by [`Event`], which maps onto actions.

use crate::core::{AppAction, AppState, AuthAction, CounterAction, Guard};
use serde::{Deserialize, Serialize};

/// Components of the page, in render order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Component {
    UserProfile,
    Header,
    Auth,
    Counter,
}

/// What a rendered component displays.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Rendered {
    /// Profile of the signed-in user
    UserProfile,
    /// Header; navigation and logout appear once signed in
    Header { show_navigation: bool },
    /// Sign-in form while signed out
    Auth { show_login: bool },
    /// Counter panel; `value` is hidden when visibility is toggled off
    Counter { value: Option<i64> },
}

impl Rendered {
    pub fn component(&self) -> Component {
        match self {
            Self::UserProfile => Component::UserProfile,
            Self::Header { .. } => Component::Header,
            Self::Auth { .. } => Component::Auth,
            Self::Counter { .. } => Component::Counter,
        }
    }
}

/// User interactions the page reacts to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Event {
    IncrementClicked,
    DecrementClicked,
    IncreaseClicked { amount: i64 },
    ToggleClicked,
    LoginClicked,
    LogoutClicked,
}

impl From<Event> for AppAction {
    fn from(event: Event) -> Self {
        match event {
            Event::IncrementClicked => CounterAction::Increment.into(),
            Event::DecrementClicked => CounterAction::Decrement.into(),
            Event::IncreaseClicked { amount } => CounterAction::Increase { amount }.into(),
            Event::ToggleClicked => CounterAction::Toggle.into(),
            Event::LoginClicked => AuthAction::Login.into(),
            Event::LogoutClicked => AuthAction::Logout.into(),
        }
    }
}

/// The page's components, each gated by a guard.
///
/// # Example
///
/// ```
/// use tally::core::{AppAction, AppState, AuthAction, State};
/// use tally::view::{Component, ComponentTree};
///
/// let tree = ComponentTree::new();
/// let state = AppState::default();
/// assert!(!tree.is_rendered(Component::UserProfile, &state));
///
/// let state = state.reduce(&AppAction::Auth(AuthAction::Login));
/// assert!(tree.is_rendered(Component::UserProfile, &state));
/// ```
#[derive(Debug)]
pub struct ComponentTree {
    components: Vec<(Component, Guard<AppState>)>,
}

impl ComponentTree {
    pub fn new() -> Self {
        Self {
            components: vec![
                (
                    Component::UserProfile,
                    Guard::new(|s: &AppState| s.auth.is_authenticated),
                ),
                (Component::Header, Guard::always()),
                (Component::Auth, Guard::always()),
                (Component::Counter, Guard::always()),
            ],
        }
    }

    /// Whether `component` appears for `state`.
    pub fn is_rendered(&self, component: Component, state: &AppState) -> bool {
        self.components
            .iter()
            .any(|(c, guard)| *c == component && guard.check(state))
    }

    /// Render every visible component, in order.
    pub fn render(&self, state: &AppState) -> Vec<Rendered> {
        self.components
            .iter()
            .filter(|(_, guard)| guard.check(state))
            .map(|(component, _)| render_component(*component, state))
            .collect()
    }
}

impl Default for ComponentTree {
    fn default() -> Self {
        Self::new()
    }
}

fn render_component(component: Component, state: &AppState) -> Rendered {
    let signed_in = state.auth.is_authenticated;
    match component {
        Component::UserProfile => Rendered::UserProfile,
        Component::Header => Rendered::Header {
            show_navigation: signed_in,
        },
        Component::Auth => Rendered::Auth {
            show_login: !signed_in,
        },
        Component::Counter => Rendered::Counter {
            value: state
                .counter
                .show_counter
                .then_some(state.counter.counter),
        },
    }
}
