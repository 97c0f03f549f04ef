//! Payment screen view model
//!
//! Field inputs are normalized as they are typed, the charge runs under the
//! caller-supplied deadline, and a successful charge creates the
//! subscription for the checked-out coach.

use std::time::Duration;

use fitlink_core::{
    with_timeout, PaymentCard, PaymentProcessor, PaymentReceipt, SessionStore, Subscription,
};

use super::directory::PendingCheckout;

#[derive(Debug, Default)]
pub struct PaymentForm {
    pub cardholder: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub processing: bool,
    pub error: String,
}

impl PaymentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cardholder(&mut self, raw: &str) {
        self.cardholder = raw.to_string();
    }

    pub fn set_card_number(&mut self, raw: &str) {
        self.card_number = PaymentCard::format_card_number(raw);
    }

    pub fn set_expiry(&mut self, raw: &str) {
        self.expiry = PaymentCard::format_expiry(raw);
    }

    pub fn set_cvv(&mut self, raw: &str) {
        self.cvv = PaymentCard::clamp_cvv(raw);
    }

    fn card(&self) -> PaymentCard {
        PaymentCard {
            cardholder: self.cardholder.clone(),
            number: self.card_number.clone(),
            expiry: self.expiry.clone(),
            cvv: self.cvv.clone(),
        }
    }

    /// Charge the card for the pending checkout. On success the client's
    /// subscription to the coach is created (30-day active window) and the
    /// receipt returned; failures land in `error` and leave the store
    /// untouched.
    pub async fn submit<P: PaymentProcessor>(
        &mut self,
        store: &mut SessionStore,
        processor: &P,
        checkout: &PendingCheckout,
        timeout: Duration,
    ) -> Option<PaymentReceipt> {
        self.error.clear();

        let card = self.card();
        if let Err(e) = card.validate() {
            self.error = e.to_string();
            return None;
        }

        self.processing = true;
        let outcome = with_timeout(
            timeout,
            processor.charge(&card, checkout.monthly_price_cents),
        )
        .await;
        self.processing = false;

        match outcome {
            Ok(receipt) => {
                store.add_subscription(Subscription::monthly(checkout.coach_id));
                tracing::info!(
                    coach_id = %checkout.coach_id,
                    receipt_id = %receipt.id,
                    "subscription created after successful payment"
                );
                Some(receipt)
            }
            Err(e) => {
                self.error = e.to_string();
                None
            }
        }
    }
}
