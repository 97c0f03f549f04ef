//! Session booking view model

use chrono::{NaiveDate, NaiveTime};
use fitlink_core::BookingRequest;

/// Booking screen buffer. No backend exists; a valid submission is
/// acknowledged locally.
#[derive(Debug, Default)]
pub struct BookingForm {
    pub date: String,
    pub time: String,
    pub notes: String,
    pub booked: bool,
    pub error: String,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and produce the booking request. Date is `YYYY-MM-DD`, time
    /// is `HH:MM`, matching the form inputs.
    pub fn submit(&mut self) -> Option<BookingRequest> {
        self.error.clear();

        let Ok(date) = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") else {
            self.error = "Enter a date as YYYY-MM-DD".to_string();
            return None;
        };
        let Ok(time) = NaiveTime::parse_from_str(self.time.trim(), "%H:%M") else {
            self.error = "Enter a time as HH:MM".to_string();
            return None;
        };

        let notes = {
            let trimmed = self.notes.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        let request = BookingRequest::new(date, time, notes);
        tracing::info!(booking_id = %request.id, date = %date, "session booked");
        self.booked = true;
        Some(request)
    }
}
