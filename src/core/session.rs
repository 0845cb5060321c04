//! Page-lifetime sign-in state shared by the navbar and the auth forms.
//!
//! Nothing here checks credentials; signing in only records who the user said they are.

use serde::{Deserialize, Serialize};

/// Account details entered on the sign-in or sign-up form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    pub username: Option<String>,
}

impl Account {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            username: None,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Username if set, otherwise the local part of the email
    pub fn display_name(&self) -> String {
        match &self.username {
            Some(name) if !name.is_empty() => name.clone(),
            _ => self
                .email
                .split('@')
                .next()
                .unwrap_or(&self.email)
                .to_string(),
        }
    }
}

/// Session state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    SignedOut,
    SignedIn(Account),
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn(_))
    }

    pub fn account(&self) -> Option<&Account> {
        match self {
            SessionState::SignedIn(account) => Some(account),
            SessionState::SignedOut => None,
        }
    }

    pub fn display_name(&self) -> Option<String> {
        self.account().map(Account::display_name)
    }

    pub fn sign_in(&mut self, account: Account) {
        tracing::debug!("Signed in as {}", account.display_name());
        *self = SessionState::SignedIn(account);
    }

    /// Returns whether someone was signed in
    pub fn sign_out(&mut self) -> bool {
        let was_signed_in = self.is_signed_in();
        *self = SessionState::SignedOut;
        was_signed_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_signed_out() {
        let state = SessionState::default();
        assert!(!state.is_signed_in());
        assert_eq!(state.display_name(), None);
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut state = SessionState::default();
        state.sign_in(Account::new("ada@example.com"));
        assert!(state.is_signed_in());
        assert_eq!(state.display_name().as_deref(), Some("ada"));

        assert!(state.sign_out());
        assert!(!state.is_signed_in());
        assert!(!state.sign_out());
    }

    #[test]
    fn test_display_name_prefers_username() {
        let account = Account::new("ada@example.com").with_username("lovelace");
        assert_eq!(account.display_name(), "lovelace");

        let account = Account::new("ada@example.com").with_username("");
        assert_eq!(account.display_name(), "ada");
    }
}
