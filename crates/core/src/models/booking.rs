//! Session booking request model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A request to book a coaching session. There is no backend; requests are
/// acknowledged locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub notes: Option<String>,
    pub requested_at: DateTime<Utc>,
}

impl BookingRequest {
    pub fn new(date: NaiveDate, time: NaiveTime, notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            time,
            notes,
            requested_at: Utc::now(),
        }
    }
}
