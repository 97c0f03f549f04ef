//! Profile editor view models
//!
//! Edit buffers are screen-local; the session store only changes on an
//! explicit save. Numeric fields are kept as text buffers and parsed on
//! save, mirroring form inputs.

use fitlink_core::{ProfileUpdate, SessionStore, User};

/// Coach profile editor.
#[derive(Debug, Default)]
pub struct CoachProfileForm {
    pub full_name: String,
    pub specialization: String,
    pub experience_years: String,
    pub bio: String,
    pub hourly_rate: String,
    pub error: String,
}

impl CoachProfileForm {
    pub fn from_user(user: &User) -> Self {
        let coach = user.coach_profile.clone().unwrap_or_default();
        Self {
            full_name: user.full_name.clone(),
            specialization: coach.specialization,
            experience_years: coach.experience_years.to_string(),
            bio: coach.bio,
            hourly_rate: format_cents(coach.hourly_rate_cents),
            error: String::new(),
        }
    }

    /// Merge the buffer into the store. Returns false (with an inline error)
    /// when a numeric field does not parse.
    pub fn save(&mut self, store: &mut SessionStore) -> bool {
        self.error.clear();

        let Ok(years) = self.experience_years.trim().parse::<u32>() else {
            self.error = "Experience must be a whole number of years".to_string();
            return false;
        };
        let Some(rate_cents) = parse_dollars(&self.hourly_rate) else {
            self.error = "Hourly rate must be an amount like 49.99".to_string();
            return false;
        };

        store.update_profile(&ProfileUpdate {
            full_name: Some(self.full_name.trim().to_string()),
            specialization: Some(self.specialization.trim().to_string()),
            experience_years: Some(years),
            bio: Some(self.bio.trim().to_string()),
            hourly_rate_cents: Some(rate_cents),
            ..Default::default()
        });
        true
    }
}

/// Client profile editor. Goals and conditions are comma-separated buffers.
#[derive(Debug, Default)]
pub struct ClientProfileForm {
    pub full_name: String,
    pub goals: String,
    pub fitness_level: String,
    pub weight_kg: String,
    pub height_cm: String,
    pub medical_conditions: String,
    pub error: String,
}

impl ClientProfileForm {
    pub fn from_user(user: &User) -> Self {
        let client = user.client_profile.clone().unwrap_or_default();
        Self {
            full_name: user.full_name.clone(),
            goals: client.goals.join(", "),
            fitness_level: client.fitness_level,
            weight_kg: client.weight_kg.map(|w| w.to_string()).unwrap_or_default(),
            height_cm: client.height_cm.map(|h| h.to_string()).unwrap_or_default(),
            medical_conditions: client.medical_conditions.join(", "),
            error: String::new(),
        }
    }

    pub fn save(&mut self, store: &mut SessionStore) -> bool {
        self.error.clear();

        let weight = match parse_optional_f32(&self.weight_kg) {
            Ok(value) => value,
            Err(()) => {
                self.error = "Weight must be a number".to_string();
                return false;
            }
        };
        let height = match parse_optional_f32(&self.height_cm) {
            Ok(value) => value,
            Err(()) => {
                self.error = "Height must be a number".to_string();
                return false;
            }
        };

        store.update_profile(&ProfileUpdate {
            full_name: Some(self.full_name.trim().to_string()),
            goals: Some(split_list(&self.goals)),
            fitness_level: Some(self.fitness_level.trim().to_string()),
            weight_kg: weight,
            height_cm: height,
            medical_conditions: Some(split_list(&self.medical_conditions)),
            ..Default::default()
        });
        true
    }
}

fn split_list(buffer: &str) -> Vec<String> {
    buffer
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_optional_f32(buffer: &str) -> Result<Option<f32>, ()> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<f32>().map(Some).map_err(|_| ())
}

fn parse_dollars(buffer: &str) -> Option<u32> {
    let trimmed = buffer.trim().trim_start_matches('$');
    let amount: f64 = trimmed.parse().ok()?;
    if !(0.0..=1_000_000.0).contains(&amount) {
        return None;
    }
    Some((amount * 100.0).round() as u32)
}

fn format_cents(cents: u32) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
