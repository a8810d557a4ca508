//! Auth slice: a single authenticated flag.

use super::state::{Action, State};
use serde::{Deserialize, Serialize};

/// Authentication state. Starts unauthenticated.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum AuthAction {
    Login,
    Logout,
}

impl Action for AuthAction {
    fn name(&self) -> &str {
        match self {
            Self::Login => "auth/login",
            Self::Logout => "auth/logout",
        }
    }
}

impl State for AuthState {
    type Action = AuthAction;

    fn name(&self) -> &str {
        "auth"
    }

    fn reduce(&self, action: &AuthAction) -> Self {
        Self {
            is_authenticated: matches!(action, AuthAction::Login),
        }
    }
}
