//! In-memory session provider for tests and token-based tooling.

use async_trait::async_trait;
use chrono::Duration;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::{
    domain::{AccessToken, AuthenticatedUser, Credentials, UserId},
    ports::{AuthError, AuthResult, SessionProvider},
};

const SESSION_HOURS: i64 = 1;

/// Thread-safe in-memory session provider.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionProvider {
    state: Arc<RwLock<SessionState>>,
}

#[derive(Debug, Default)]
struct SessionState {
    accounts: HashMap<String, Account>,
    current: Option<AuthenticatedUser>,
}

#[derive(Debug, Clone)]
struct Account {
    user_id: UserId,
    password: String,
}

impl InMemorySessionProvider {
    /// Creates a provider with no accounts and no session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider already holding `session`.
    #[must_use]
    pub fn with_session(session: AuthenticatedUser) -> Self {
        let state = SessionState {
            accounts: HashMap::new(),
            current: Some(session),
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    fn open_session(user_id: UserId, email: &str) -> AuthenticatedUser {
        let issued_at = DefaultClock.utc();
        AuthenticatedUser::new(
            user_id,
            email,
            AccessToken::new(format!("local-{}", uuid::Uuid::new_v4())),
            issued_at + Duration::hours(SESSION_HOURS),
        )
    }
}

fn poisoned(err: impl std::fmt::Display) -> AuthError {
    AuthError::Provider(err.to_string())
}

#[async_trait]
impl SessionProvider for InMemorySessionProvider {
    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<AuthenticatedUser> {
        let mut state = self.state.write().map_err(poisoned)?;
        let account = state
            .accounts
            .get(&credentials.email)
            .filter(|account| account.password == credentials.password)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;
        let session = Self::open_session(account.user_id, &credentials.email);
        state.current = Some(session.clone());
        Ok(session)
    }

    async fn sign_up(&self, credentials: &Credentials) -> AuthResult<AuthenticatedUser> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.accounts.contains_key(&credentials.email) {
            return Err(AuthError::EmailTaken(credentials.email.clone()));
        }
        let user_id = UserId::new();
        state.accounts.insert(
            credentials.email.clone(),
            Account {
                user_id,
                password: credentials.password.clone(),
            },
        );
        let session = Self::open_session(user_id, &credentials.email);
        state.current = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> AuthResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.current = None;
        Ok(())
    }

    async fn current_user(&self) -> AuthResult<Option<AuthenticatedUser>> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state
            .current
            .as_ref()
            .is_some_and(|session| session.is_expired(&DefaultClock))
        {
            state.current = None;
        }
        Ok(state.current.clone())
    }
}
