//! Two-state admin gate.
//!
//! `Anonymous -> Admin` when a submitted password verifies,
//! `Admin -> Anonymous` on logout. A failed attempt leaves the gate anonymous
//! and clears the password field.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::error::AuthError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GateState {
    #[default]
    Anonymous,
    Admin,
}

#[derive(Deserialize, Debug)]
pub struct LoginForm {
    pub password: SecretString,
}

impl LoginForm {
    pub fn new(password: impl Into<String>) -> Self {
        LoginForm {
            password: SecretString::from(password.into()),
        }
    }
}

#[derive(Debug, Default)]
pub struct AdminGate {
    state: GateState,
}

impl AdminGate {
    /// Gate for a request that already carries a verified, unrevoked session.
    pub fn signed_in() -> Self {
        AdminGate {
            state: GateState::Admin,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Runs `verify` against the submitted password.
    pub fn submit<F>(&mut self, form: &mut LoginForm, verify: F) -> Result<(), AuthError>
    where
        F: FnOnce(&SecretString) -> bool,
    {
        if verify(&form.password) {
            self.state = GateState::Admin;
            return Ok(());
        }

        form.password = SecretString::from(String::new());
        Err(AuthError::IncorrectCredential)
    }

    pub fn logout(&mut self) {
        self.state = GateState::Anonymous;
    }
}
