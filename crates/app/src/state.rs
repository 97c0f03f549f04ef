//! Application state management

use std::sync::{Arc, Mutex as StdMutex};

use fitlink_core::{fixtures, resolve, AppConfig, Route, RouteDecision, SessionStore, UserRole};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Main application state
///
/// The session store is the only shared mutable resource; it sits behind one
/// lock and every mutation is a single synchronous transition.
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<Mutex<SessionStore>>,
    current_route: StdMutex<Route>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let store = if config.seed_demo_data {
            fixtures::demo_store()
        } else {
            SessionStore::new()
        };

        Self {
            config,
            store: Arc::new(Mutex::new(store)),
            current_route: StdMutex::new(Route::Home),
        }
    }

    pub fn current_route(&self) -> Route {
        *self.current_route.lock().unwrap()
    }

    /// Run the route guard against the current session and record where the
    /// user ended up. Redirects are logged, not errors.
    pub async fn navigate(&self, route: Route) -> RouteDecision {
        let store = self.store.lock().await;
        let decision = resolve(store.user(), route);
        drop(store);

        match decision {
            RouteDecision::Render(target) => {
                *self.current_route.lock().unwrap() = target;
                tracing::debug!(route = %target, "navigated");
            }
            RouteDecision::Redirect(target) => {
                *self.current_route.lock().unwrap() = target;
                tracing::info!(from = %route, to = %target, "redirected");
            }
        }

        decision
    }

    pub async fn current_user_id(&self) -> Option<Uuid> {
        self.store.lock().await.user().map(|u| u.id)
    }

    pub async fn current_role(&self) -> Option<UserRole> {
        self.store.lock().await.role()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anonymous_state() -> AppState {
        let config = AppConfig {
            seed_demo_data: false,
            ..Default::default()
        };
        AppState::new(config)
    }

    #[tokio::test]
    async fn navigation_records_redirect_target() {
        let state = anonymous_state();
        let decision = state.navigate(Route::Dashboard).await;
        assert_eq!(decision, RouteDecision::Redirect(Route::Login));
        assert_eq!(state.current_route(), Route::Login);
    }

    #[tokio::test]
    async fn seeded_state_boots_with_client_session() {
        let state = AppState::new(AppConfig::default());
        assert_eq!(state.current_role().await, Some(UserRole::Client));

        let decision = state.navigate(Route::FindCoach).await;
        assert_eq!(decision, RouteDecision::Render(Route::FindCoach));
    }
}
