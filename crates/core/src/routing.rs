//! Route guard
//!
//! Navigable routes, the declarative route → required-access table, and one
//! pure guard function. Unauthenticated or wrong-role access is a silent
//! redirect, not an error.

use uuid::Uuid;

use crate::models::{User, UserRole};

/// Navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    About,
    Booking,
    Dashboard,
    WorkoutPlans,
    WorkoutPlanDetail(Uuid),
    CreateWorkoutPlan,
    CoachProfile,
    ClientProfile,
    FindCoach,
    Payment,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::About => "/about-us".to_string(),
            Route::Booking => "/book-session".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::WorkoutPlans => "/workout-plans".to_string(),
            Route::WorkoutPlanDetail(id) => format!("/workout-plans/{id}"),
            Route::CreateWorkoutPlan => "/workout-plans/create".to_string(),
            Route::CoachProfile => "/profile/coach".to_string(),
            Route::ClientProfile => "/profile/client".to_string(),
            Route::FindCoach => "/find-coach".to_string(),
            Route::Payment => "/payment".to_string(),
        }
    }

    /// The access table. One place, no per-route guard duplication.
    pub fn required_access(&self) -> Access {
        match self {
            Route::Home | Route::Login | Route::Register | Route::About | Route::Booking => {
                Access::Public
            }
            Route::Dashboard | Route::WorkoutPlans | Route::WorkoutPlanDetail(_) => {
                Access::Authenticated
            }
            Route::CreateWorkoutPlan | Route::CoachProfile => Access::Role(UserRole::Coach),
            Route::ClientProfile | Route::FindCoach | Route::Payment => {
                Access::Role(UserRole::Client)
            }
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// What a route requires of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Role(UserRole),
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    Redirect(Route),
}

/// Pure guard: (session user, target route) → render or redirect.
///
/// Anonymous hits on any gated route go to the login screen; an
/// authenticated user with the wrong role goes to their dashboard.
pub fn resolve(user: Option<&User>, route: Route) -> RouteDecision {
    match route.required_access() {
        Access::Public => RouteDecision::Render(route),
        Access::Authenticated => match user {
            Some(_) => RouteDecision::Render(route),
            None => RouteDecision::Redirect(Route::Login),
        },
        Access::Role(required) => match user {
            None => RouteDecision::Redirect(Route::Login),
            Some(u) if u.role == required => RouteDecision::Render(route),
            Some(_) => RouteDecision::Redirect(Route::Dashboard),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> User {
        User::new("t@example.com".to_string(), role, "Test".to_string())
    }

    #[test]
    fn anonymous_dashboard_redirects_to_login() {
        assert_eq!(
            resolve(None, Route::Dashboard),
            RouteDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn client_on_coach_route_redirects_to_dashboard() {
        let client = user(UserRole::Client);
        assert_eq!(
            resolve(Some(&client), Route::CreateWorkoutPlan),
            RouteDecision::Redirect(Route::Dashboard)
        );
    }

    #[test]
    fn coach_on_coach_route_renders() {
        let coach = user(UserRole::Coach);
        assert_eq!(
            resolve(Some(&coach), Route::CreateWorkoutPlan),
            RouteDecision::Render(Route::CreateWorkoutPlan)
        );
    }

    #[test]
    fn coach_on_client_route_redirects_to_dashboard() {
        let coach = user(UserRole::Coach);
        assert_eq!(
            resolve(Some(&coach), Route::FindCoach),
            RouteDecision::Redirect(Route::Dashboard)
        );
    }

    #[test]
    fn public_routes_render_for_anyone() {
        assert_eq!(resolve(None, Route::Home), RouteDecision::Render(Route::Home));
        assert_eq!(
            resolve(None, Route::Booking),
            RouteDecision::Render(Route::Booking)
        );
        let client = user(UserRole::Client);
        assert_eq!(
            resolve(Some(&client), Route::About),
            RouteDecision::Render(Route::About)
        );
    }

    #[test]
    fn authenticated_routes_render_for_any_role() {
        let coach = user(UserRole::Coach);
        assert_eq!(
            resolve(Some(&coach), Route::WorkoutPlans),
            RouteDecision::Render(Route::WorkoutPlans)
        );
    }

    #[test]
    fn detail_path_embeds_id() {
        let id = uuid::Uuid::from_u128(5);
        assert_eq!(
            Route::WorkoutPlanDetail(id).path(),
            format!("/workout-plans/{id}")
        );
    }
}
