//! Subscription model

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Expired,
    Cancelled,
}

impl SubscriptionStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::Expired => "Expired",
            SubscriptionStatus::Cancelled => "Cancelled",
        }
    }
}

/// A client's link to a coach with a validity window.
///
/// Status is whatever the creator supplied; it is not recomputed from the
/// window dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub coach_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub status: SubscriptionStatus,
}

impl Subscription {
    pub fn new(
        coach_id: Uuid,
        started_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        status: SubscriptionStatus,
    ) -> Self {
        Self {
            coach_id,
            started_at,
            ends_at,
            status,
        }
    }

    /// A 30-day active subscription starting now. Created after a successful
    /// checkout.
    pub fn monthly(coach_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            coach_id,
            started_at: now,
            ends_at: now + Duration::days(30),
            status: SubscriptionStatus::Active,
        }
    }
}
