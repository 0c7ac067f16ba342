use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use cineradar_api::{ApiError, SessionService};
use cineradar_core::models::{Session, User};

/// Result of a login or signup attempt. Application failures are values, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success(User),
    Failure { message: String },
}

/// Shared session context: who is logged in, and whether that is known yet.
pub struct SessionStore<S> {
    service: Arc<S>,
    state: Arc<RwLock<Session>>,
    /// Bumped by every logout and successful login, so a slow logout
    /// cannot clear a user who signed in after it started.
    generation: Arc<AtomicU64>,
}

impl<S> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            state: Arc::clone(&self.state),
            generation: Arc::clone(&self.generation),
        }
    }
}

impl<S: SessionService> SessionStore<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            state: Arc::new(RwLock::new(Session::loading())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn snapshot(&self) -> Session {
        self.state.read().await.clone()
    }

    /// Ask the backend who the session cookie belongs to.
    ///
    /// Always leaves the store resolved; a failed check means logged out.
    pub async fn check_session(&self) -> Session {
        let user = match self.service.check_session().await {
            Ok(user) => user,
            Err(e) if e.status() == Some(401) => {
                tracing::debug!("no session cookie accepted");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "session check failed");
                None
            }
        };

        let mut state = self.state.write().await;
        state.user = user;
        state.is_loading = false;
        tracing::info!(authenticated = state.user.is_some(), "session resolved");
        state.clone()
    }

    pub async fn login(&self, username: &str, password: &str) -> AuthOutcome {
        let result = self.service.login(username, password).await;
        self.apply("login", result, "Login failed").await
    }

    pub async fn signup(&self, username: &str, email: &str, password: &str) -> AuthOutcome {
        let result = self.service.signup(username, email, password).await;
        self.apply("signup", result, "Signup failed").await
    }

    /// Log out remotely if possible; the local user is cleared either way,
    /// unless someone logged in again while the request was out.
    pub async fn logout(&self) -> Session {
        let started = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Err(e) = self.service.logout().await {
            tracing::warn!(error = %e, "logout request failed, clearing local session anyway");
        }
        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) == started {
            state.user = None;
            state.is_loading = false;
        } else {
            tracing::debug!("newer login during logout, keeping it");
        }
        state.clone()
    }

    async fn apply(
        &self,
        action: &str,
        result: Result<User, ApiError>,
        fallback: &str,
    ) -> AuthOutcome {
        match result {
            Ok(user) => {
                tracing::info!(username = %user.username, "{action} succeeded");
                let mut state = self.state.write().await;
                self.generation.fetch_add(1, Ordering::SeqCst);
                state.user = Some(user.clone());
                state.is_loading = false;
                AuthOutcome::Success(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "{action} failed");
                AuthOutcome::Failure {
                    message: e.user_message(fallback),
                }
            }
        }
    }
}
