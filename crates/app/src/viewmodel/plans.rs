//! Workout plan catalog and editor view models

use fitlink_core::{Exercise, PlanLevel, SessionStore, UserRole, WorkoutPlan};
use uuid::Uuid;

/// In-memory plan catalog. Volatile like everything else; a real build would
/// put a persistent store behind this.
#[derive(Debug, Default)]
pub struct PlanCatalog {
    plans: Vec<WorkoutPlan>,
}

impl PlanCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, plan: WorkoutPlan) -> Uuid {
        let id = plan.id;
        tracing::info!(plan_id = %id, title = %plan.title, "plan added");
        self.plans.push(plan);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<&WorkoutPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn all(&self) -> &[WorkoutPlan] {
        &self.plans
    }

    pub fn for_coach(&self, coach_id: Uuid) -> Vec<&WorkoutPlan> {
        self.plans.iter().filter(|p| p.coach_id == coach_id).collect()
    }

    pub fn assigned_to(&self, client_id: Uuid) -> Vec<&WorkoutPlan> {
        self.plans
            .iter()
            .filter(|p| p.client_id == Some(client_id))
            .collect()
    }

    /// Assign a plan to a client. Returns false when the plan is unknown.
    pub fn assign(&mut self, plan_id: Uuid, client_id: Uuid) -> bool {
        match self.plans.iter_mut().find(|p| p.id == plan_id) {
            Some(plan) => {
                plan.client_id = Some(client_id);
                plan.updated_at = chrono::Utc::now();
                true
            }
            None => false,
        }
    }
}

/// One exercise row in the editor. Sets is a text buffer parsed on save.
#[derive(Debug, Clone)]
pub struct ExerciseDraft {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub rest: String,
    pub notes: String,
}

impl Default for ExerciseDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            sets: "3".to_string(),
            reps: String::new(),
            rest: String::new(),
            notes: String::new(),
        }
    }
}

/// Plan creation screen buffer. Coach-only on save.
#[derive(Debug)]
pub struct PlanEditor {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub frequency: String,
    pub level: PlanLevel,
    pub exercises: Vec<ExerciseDraft>,
    pub error: String,
}

impl Default for PlanEditor {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            duration: String::new(),
            frequency: String::new(),
            level: PlanLevel::Beginner,
            exercises: Vec::new(),
            error: String::new(),
        }
    }
}

impl PlanEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_exercise(&mut self) {
        self.exercises.push(ExerciseDraft::default());
    }

    pub fn remove_exercise(&mut self, index: usize) {
        if index < self.exercises.len() {
            self.exercises.remove(index);
        }
    }

    /// The submit button is disabled until at least one exercise exists.
    pub fn can_submit(&self) -> bool {
        !self.exercises.is_empty()
    }

    /// Validate and add the plan to the catalog. Only a signed-in coach may
    /// save; everything else is an inline error.
    pub fn save(&mut self, store: &SessionStore, catalog: &mut PlanCatalog) -> Option<Uuid> {
        self.error.clear();

        let coach_id = match store.user() {
            Some(user) if user.role == UserRole::Coach => user.id,
            _ => {
                self.error = "Only coaches can create workout plans".to_string();
                return None;
            }
        };

        for (label, value) in [
            ("Title", &self.title),
            ("Description", &self.description),
            ("Duration", &self.duration),
            ("Frequency", &self.frequency),
        ] {
            if value.trim().is_empty() {
                self.error = format!("{label} is required");
                return None;
            }
        }

        if !self.can_submit() {
            self.error = "Add at least one exercise".to_string();
            return None;
        }

        let mut exercises = Vec::with_capacity(self.exercises.len());
        for draft in &self.exercises {
            if draft.name.trim().is_empty() {
                self.error = "Every exercise needs a name".to_string();
                return None;
            }
            let sets = match draft.sets.trim().parse::<u32>() {
                Ok(sets) if sets >= 1 => sets,
                _ => {
                    self.error = format!("Sets for '{}' must be at least 1", draft.name.trim());
                    return None;
                }
            };
            exercises.push(Exercise::new(
                draft.name.trim().to_string(),
                sets,
                draft.reps.trim().to_string(),
                draft.rest.trim().to_string(),
                draft.notes.trim().to_string(),
            ));
        }

        let plan = WorkoutPlan::new(
            coach_id,
            self.title.trim().to_string(),
            self.description.trim().to_string(),
            self.duration.trim().to_string(),
            self.frequency.trim().to_string(),
            self.level,
            exercises,
        );
        Some(catalog.add(plan))
    }
}
