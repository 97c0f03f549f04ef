//! Workout plan models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl PlanLevel {
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanLevel::Beginner => "Beginner",
            PlanLevel::Intermediate => "Intermediate",
            PlanLevel::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for PlanLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One exercise inside a plan. Reps and rest are free-form ("8-10", "90 sec").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub sets: u32,
    pub reps: String,
    pub rest: String,
    pub notes: String,
}

impl Exercise {
    pub fn new(name: String, sets: u32, reps: String, rest: String, notes: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            sets,
            reps,
            rest,
            notes,
        }
    }
}

/// A workout plan authored by a coach, optionally assigned to a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: Uuid,
    pub coach_id: Uuid,
    pub client_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub frequency: String,
    pub level: PlanLevel,
    pub exercises: Vec<Exercise>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkoutPlan {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        coach_id: Uuid,
        title: String,
        description: String,
        duration: String,
        frequency: String,
        level: PlanLevel,
        exercises: Vec<Exercise>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            coach_id,
            client_id: None,
            title,
            description,
            duration,
            frequency,
            level,
            exercises,
            created_at: now,
            updated_at: now,
        }
    }
}
