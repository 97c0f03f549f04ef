//! External-service interfaces
//!
//! Identity and payment are external collaborators behind trait seams. The
//! mock implementations simulate them with a configurable artificial delay;
//! timeouts are applied by the caller, never inside the providers.

mod identity;
mod payment;

use std::future::Future;
use std::time::Duration;

pub use identity::{IdentityProvider, MockIdentityProvider};
pub use payment::{MockPaymentProcessor, PaymentCard, PaymentProcessor, PaymentReceipt};

use crate::error::{Error, Result};

/// Run an external-service call under a caller-controlled deadline.
pub async fn with_timeout<T>(
    limit: Duration,
    call: impl Future<Output = Result<T>>,
) -> Result<T> {
    match tokio::time::timeout(limit, call).await {
        Ok(outcome) => outcome,
        Err(_) => Err(Error::Timeout(limit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn with_timeout_passes_through_fast_calls() {
        let result = with_timeout(Duration::from_secs(1), async { Ok(7u32) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn with_timeout_fails_slow_calls() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(0u32)
        };
        let result = with_timeout(Duration::from_millis(50), slow).await;
        assert!(matches!(result, Err(Error::Timeout(_))));
    }
}
