//! Identity provider interface and mock
//!
//! Contract: given credentials, resolve to a `User` or fail with an auth
//! error. The mock never fails and never checks the password; a real
//! deployment replaces it behind the same trait.

use std::future::Future;
use std::time::Duration;

use crate::error::Result;
use crate::models::{User, UserRole};

pub trait IdentityProvider {
    fn sign_in(&self, email: &str, password: &str) -> impl Future<Output = Result<User>> + Send;

    fn sign_up(
        &self,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> impl Future<Output = Result<User>> + Send;
}

/// Mock identity provider. Fabricates accounts after a fixed artificial
/// delay: sign-in always yields a client, sign-up honors the supplied role.
#[derive(Debug, Clone, Default)]
pub struct MockIdentityProvider {
    latency: Duration,
}

impl MockIdentityProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    fn fabricate(&self, email: &str, role: UserRole) -> User {
        let full_name = display_name_from_email(email);
        User::new(email.to_string(), role, full_name)
    }
}

impl IdentityProvider for MockIdentityProvider {
    async fn sign_in(&self, email: &str, _password: &str) -> Result<User> {
        tokio::time::sleep(self.latency).await;
        Ok(self.fabricate(email, UserRole::Client))
    }

    async fn sign_up(&self, email: &str, _password: &str, role: UserRole) -> Result<User> {
        tokio::time::sleep(self.latency).await;
        Ok(self.fabricate(email, role))
    }
}

/// Placeholder display name derived from the address local part.
fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    if local.is_empty() {
        "Member".to_string()
    } else {
        local.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sign_in_fabricates_client() {
        let provider = MockIdentityProvider::default();
        let user = provider.sign_in("jane@example.com", "anything").await.unwrap();
        assert_eq!(user.role, UserRole::Client);
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.full_name, "jane");
    }

    #[tokio::test]
    async fn sign_up_honors_role() {
        let provider = MockIdentityProvider::default();
        let user = provider
            .sign_up("c@example.com", "pw", UserRole::Coach)
            .await
            .unwrap();
        assert_eq!(user.role, UserRole::Coach);
    }
}
