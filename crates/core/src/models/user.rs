//! User model and profile records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account roles. Role is fixed at account creation; no mutator changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Client,
    Coach,
    Admin,
}

impl UserRole {
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Client => "Client",
            UserRole::Coach => "Coach",
            UserRole::Admin => "Admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A marketplace account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub coach_profile: Option<CoachProfile>,
    pub client_profile: Option<ClientProfile>,
}

impl User {
    pub fn new(email: String, role: UserRole, full_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            role,
            full_name,
            avatar_url: None,
            created_at: Utc::now(),
            coach_profile: None,
            client_profile: None,
        }
    }
}

/// Coach-specific profile fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoachProfile {
    pub specialization: String,
    pub experience_years: u32,
    pub bio: String,
    pub hourly_rate_cents: u32,
}

/// Client-specific profile fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientProfile {
    pub goals: Vec<String>,
    pub fitness_level: String,
    pub weight_kg: Option<f32>,
    pub height_cm: Option<f32>,
    pub medical_conditions: Vec<String>,
}

/// Partial profile record applied as a shallow merge.
///
/// Fields left as `None` keep their current value. Coach and client fields
/// are merged regardless of the account's role; the store does not check
/// role applicability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,

    // Coach fields
    pub specialization: Option<String>,
    pub experience_years: Option<u32>,
    pub bio: Option<String>,
    pub hourly_rate_cents: Option<u32>,

    // Client fields
    pub goals: Option<Vec<String>>,
    pub fitness_level: Option<String>,
    pub weight_kg: Option<f32>,
    pub height_cm: Option<f32>,
    pub medical_conditions: Option<Vec<String>>,
}

impl ProfileUpdate {
    /// Apply this partial record to a user, field by field.
    pub fn apply(&self, user: &mut User) {
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(full_name) = &self.full_name {
            user.full_name = full_name.clone();
        }
        if let Some(avatar_url) = &self.avatar_url {
            user.avatar_url = Some(avatar_url.clone());
        }

        if self.has_coach_fields() {
            let coach = user.coach_profile.get_or_insert_with(CoachProfile::default);
            if let Some(specialization) = &self.specialization {
                coach.specialization = specialization.clone();
            }
            if let Some(years) = self.experience_years {
                coach.experience_years = years;
            }
            if let Some(bio) = &self.bio {
                coach.bio = bio.clone();
            }
            if let Some(rate) = self.hourly_rate_cents {
                coach.hourly_rate_cents = rate;
            }
        }

        if self.has_client_fields() {
            let client = user
                .client_profile
                .get_or_insert_with(ClientProfile::default);
            if let Some(goals) = &self.goals {
                client.goals = goals.clone();
            }
            if let Some(level) = &self.fitness_level {
                client.fitness_level = level.clone();
            }
            if let Some(weight) = self.weight_kg {
                client.weight_kg = Some(weight);
            }
            if let Some(height) = self.height_cm {
                client.height_cm = Some(height);
            }
            if let Some(conditions) = &self.medical_conditions {
                client.medical_conditions = conditions.clone();
            }
        }
    }

    fn has_coach_fields(&self) -> bool {
        self.specialization.is_some()
            || self.experience_years.is_some()
            || self.bio.is_some()
            || self.hourly_rate_cents.is_some()
    }

    fn has_client_fields(&self) -> bool {
        self.goals.is_some()
            || self.fitness_level.is_some()
            || self.weight_kg.is_some()
            || self.height_cm.is_some()
            || self.medical_conditions.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_merges_only_given_fields() {
        let mut user = User::new(
            "a@b.com".to_string(),
            UserRole::Coach,
            "Ada".to_string(),
        );
        let update = ProfileUpdate {
            full_name: Some("Ada Lovelace".to_string()),
            bio: Some("Strength coach".to_string()),
            ..Default::default()
        };
        update.apply(&mut user);

        assert_eq!(user.full_name, "Ada Lovelace");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.coach_profile.as_ref().unwrap().bio, "Strength coach");
    }

    #[test]
    fn client_fields_merge_onto_coach_unchecked() {
        // The merge does not validate role applicability.
        let mut user = User::new(
            "c@d.com".to_string(),
            UserRole::Coach,
            "Cy".to_string(),
        );
        let update = ProfileUpdate {
            weight_kg: Some(80.0),
            ..Default::default()
        };
        update.apply(&mut user);

        assert_eq!(user.role, UserRole::Coach);
        assert_eq!(user.client_profile.as_ref().unwrap().weight_kg, Some(80.0));
    }
}
