//! Session context shared by the navbar, the home page and the auth forms
//!
//! Holds the page-lifetime sign-in state. Nothing is persisted and no credentials
//! are verified; a reload signs the user out.

use leptos::prelude::*;

use crate::core::{Account, SessionState};

/// Session context providing the sign-in state and actions
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current session state
    pub state: RwSignal<SessionState>,
}

impl SessionContext {
    /// Check if a user is signed in
    pub fn is_signed_in(&self) -> bool {
        self.state.with(SessionState::is_signed_in)
    }

    /// Name shown in the navbar (if signed in)
    pub fn display_name(&self) -> Option<String> {
        self.state.with(SessionState::display_name)
    }

    pub fn sign_in(&self, account: Account) {
        leptos::logging::log!("signing in as {}", account.display_name());
        self.state.update(|state| state.sign_in(account));
    }

    pub fn sign_out(&self) {
        self.state.update(|state| {
            state.sign_out();
        });
    }
}

/// Provide session context to the component tree
pub fn provide_session_context() -> SessionContext {
    let ctx = SessionContext {
        state: RwSignal::new(SessionState::default()),
    };
    provide_context(ctx);
    ctx
}

/// Get session context from the component tree
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
