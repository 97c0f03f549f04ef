//! Login and registration view models

use std::time::Duration;

use fitlink_core::{IdentityProvider, SessionStore, UserRole};

/// Login screen form buffer. Errors are surfaced inline, never propagated.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub error: String,
    pub submitting: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form through the identity provider under the given
    /// deadline. Returns whether a session was established.
    pub async fn submit<P: IdentityProvider>(
        &mut self,
        store: &mut SessionStore,
        provider: &P,
        timeout: Duration,
    ) -> bool {
        self.error.clear();

        if self.email.trim().is_empty() || self.password.is_empty() {
            self.error = "Email and password are required".to_string();
            return false;
        }

        self.submitting = true;
        let outcome = store
            .sign_in(provider, self.email.trim(), &self.password, timeout)
            .await;
        self.submitting = false;

        match outcome {
            Ok(()) => {
                self.password.clear();
                true
            }
            Err(e) => {
                self.error = e.to_string();
                false
            }
        }
    }
}

/// Registration screen form buffer.
#[derive(Debug)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub error: String,
    pub submitting: bool,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            role: UserRole::Client,
            error: String::new(),
            submitting: false,
        }
    }
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn validate(&self) -> Option<String> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Some("Enter a valid email address".to_string());
        }
        if self.password.len() < 6 {
            return Some("Password must be at least 6 characters".to_string());
        }
        None
    }

    pub async fn submit<P: IdentityProvider>(
        &mut self,
        store: &mut SessionStore,
        provider: &P,
        timeout: Duration,
    ) -> bool {
        self.error.clear();

        if let Some(problem) = self.validate() {
            self.error = problem;
            return false;
        }

        self.submitting = true;
        let outcome = store
            .sign_up(provider, self.email.trim(), &self.password, self.role, timeout)
            .await;
        self.submitting = false;

        match outcome {
            Ok(()) => {
                self.password.clear();
                true
            }
            Err(e) => {
                self.error = e.to_string();
                false
            }
        }
    }
}
