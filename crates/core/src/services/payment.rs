//! Payment processor interface and mock

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Card details entered on the payment screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCard {
    pub cardholder: String,
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

impl PaymentCard {
    /// Normalize a card number input: digits only, grouped in fours, capped
    /// at 16 digits.
    pub fn format_card_number(raw: &str) -> String {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(16).collect();
        digits
            .as_bytes()
            .chunks(4)
            .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Normalize an expiry input into "MM/YY".
    pub fn format_expiry(raw: &str) -> String {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(4).collect();
        if digits.len() <= 2 {
            digits
        } else {
            format!("{}/{}", &digits[..2], &digits[2..])
        }
    }

    /// Clamp a CVV input to at most four digits.
    pub fn clamp_cvv(raw: &str) -> String {
        raw.chars().filter(|c| c.is_ascii_digit()).take(4).collect()
    }

    /// Field-level validation surfaced inline on the payment screen.
    pub fn validate(&self) -> Result<()> {
        if self.cardholder.trim().is_empty() {
            return Err(Error::Validation("Cardholder name is required".to_string()));
        }

        let digits: String = self.number.chars().filter(|c| c.is_ascii_digit()).collect();
        if !(13..=16).contains(&digits.len()) {
            return Err(Error::Validation("Card number is invalid".to_string()));
        }

        let month_ok = self
            .expiry
            .split_once('/')
            .and_then(|(m, y)| {
                let month: u32 = m.parse().ok()?;
                let _year: u32 = y.parse().ok()?;
                Some((1..=12).contains(&month) && m.len() == 2 && y.len() == 2)
            })
            .unwrap_or(false);
        if !month_ok {
            return Err(Error::Validation("Expiry must be MM/YY".to_string()));
        }

        if !(3..=4).contains(&self.cvv.len()) || !self.cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::Validation("CVV is invalid".to_string()));
        }

        Ok(())
    }
}

/// Acknowledgement of a successful charge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub id: Uuid,
    pub amount_cents: u32,
    pub processed_at: DateTime<Utc>,
}

pub trait PaymentProcessor {
    /// Charge the card. Fails with `Error::PaymentDeclined` when the
    /// processor rejects it.
    fn charge(
        &self,
        card: &PaymentCard,
        amount_cents: u32,
    ) -> impl Future<Output = Result<PaymentReceipt>> + Send;
}

/// Mock processor: approves every charge after a fixed artificial delay.
#[derive(Debug, Clone, Default)]
pub struct MockPaymentProcessor {
    latency: Duration,
}

impl MockPaymentProcessor {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl PaymentProcessor for MockPaymentProcessor {
    async fn charge(&self, _card: &PaymentCard, amount_cents: u32) -> Result<PaymentReceipt> {
        tokio::time::sleep(self.latency).await;
        let receipt = PaymentReceipt {
            id: Uuid::new_v4(),
            amount_cents,
            processed_at: Utc::now(),
        };
        tracing::info!(receipt_id = %receipt.id, amount_cents, "payment approved");
        Ok(receipt)
    }
}
