//! Session model and the current-user accessor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sessions are created and expired by the external authentication provider.
//! This module only reads them: through [`SessionSource`] for HTTP requests,
//! or through [`SessionWatch`] for consumers that follow session changes.
//!
//! DESIGN
//! ======
//! The session is always passed in explicitly. A missing session is a normal
//! `None`, never an error, so callers branch on presence instead of handling
//! failures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use time::OffsetDateTime;
use tokio::sync::{RwLock, watch};

// =============================================================================
// MODEL
// =============================================================================

/// Identity attached to an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Identifier assigned by the authentication provider.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Authenticated browsing context. Opaque apart from the optional user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub user: Option<SessionUser>,
    /// `None` means the provider did not report an expiry.
    pub expires_at: Option<OffsetDateTime>,
}

impl Session {
    #[must_use]
    pub fn for_user(user: SessionUser) -> Self {
        Self { user: Some(user), expires_at: None }
    }

    /// True once `now` has reached the expiry instant.
    #[must_use]
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Session as seen by a consumer while the provider resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Provider has not answered yet.
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(Session),
}

impl SessionState {
    /// Current user, or `None` while loading or signed out.
    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            Self::Authenticated(session) => current_user(Some(session)),
            Self::Loading | Self::Unauthenticated => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Project the user out of a session, if there is one.
#[must_use]
pub fn current_user(session: Option<&Session>) -> Option<&SessionUser> {
    session.and_then(|s| s.user.as_ref())
}

// =============================================================================
// REACTIVE ACCESS
// =============================================================================

/// Read handle over session state published by the authentication provider.
#[derive(Debug, Clone)]
pub struct SessionWatch {
    rx: watch::Receiver<SessionState>,
}

impl SessionWatch {
    /// Create a channel starting in [`SessionState::Loading`]. The sender
    /// belongs to whoever resolves sessions.
    #[must_use]
    pub fn channel() -> (watch::Sender<SessionState>, Self) {
        let (tx, rx) = watch::channel(SessionState::Loading);
        (tx, Self { rx })
    }

    #[must_use]
    pub fn new(rx: watch::Receiver<SessionState>) -> Self {
        Self { rx }
    }

    /// Snapshot of the latest published state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.rx.borrow().clone()
    }

    /// User from the latest published state. Never waits.
    #[must_use]
    pub fn current_user(&self) -> Option<SessionUser> {
        self.rx.borrow().user().cloned()
    }

    /// Wait for the provider to publish a new state.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider dropped its sender.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.rx.changed().await
    }
}

// =============================================================================
// SESSION SOURCES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Lookup of a session by its cookie token.
#[async_trait::async_trait]
pub trait SessionSource: Send + Sync {
    /// Resolve `token` to a live session. Unknown and expired tokens are `Ok(None)`.
    async fn load(&self, token: &str) -> Result<Option<Session>, SessionError>;
}

/// In-process sessions keyed by token.
#[derive(Debug, Default)]
pub struct MemorySessionSource {
    sessions: RwLock<HashMap<String, Session>>,
}

impl MemorySessionSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, token: impl Into<String>, session: Session) {
        self.sessions.write().await.insert(token.into(), session);
    }

    pub async fn remove(&self, token: &str) -> Option<Session> {
        self.sessions.write().await.remove(token)
    }
}

#[async_trait::async_trait]
impl SessionSource for MemorySessionSource {
    async fn load(&self, token: &str) -> Result<Option<Session>, SessionError> {
        let now = OffsetDateTime::now_utc();
        let sessions = self.sessions.read().await;
        Ok(sessions.get(token).filter(|s| !s.is_expired_at(now)).cloned())
    }
}

/// Read-only view of the provider's `sessions` and `users` tables.
#[derive(Debug, Clone)]
pub struct PgSessionSource {
    pool: PgPool,
}

impl PgSessionSource {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl SessionSource for PgSessionSource {
    async fn load(&self, token: &str) -> Result<Option<Session>, SessionError> {
        let row = sqlx::query(
            r"SELECT
                  u.id::text AS id,
                  u.name,
                  u.email,
                  u.avatar_url,
                  s.expires_at
              FROM sessions s
              JOIN users u ON u.id = s.user_id
              WHERE s.token = $1 AND s.expires_at > now()",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        // The provider owns this schema, so a bad value is an error, not a panic.
        let Some(r) = row else {
            return Ok(None);
        };
        Ok(Some(Session {
            user: Some(SessionUser {
                id: r.try_get("id")?,
                name: r.try_get("name")?,
                email: r.try_get("email")?,
                avatar_url: r.try_get("avatar_url")?,
            }),
            expires_at: r.try_get("expires_at")?,
        }))
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
