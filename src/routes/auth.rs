//! Current-user route and the session extractor behind it.

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::session::{Session, SessionUser, current_user};
use crate::state::AppState;

// =============================================================================
// SESSION EXTRACTOR
// =============================================================================

/// Session resolved from the request cookie, or `None` when signed out.
///
/// Never rejects: a lookup failure is logged and treated as no session.
pub struct CurrentSession(pub Option<Session>);

impl<S> FromRequestParts<S> for CurrentSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(&app_state.config.session_cookie_name)
            .map(Cookie::value)
            .unwrap_or_default();
        if token.is_empty() {
            return Ok(Self(None));
        }

        match app_state.sessions.load(token).await {
            Ok(session) => Ok(Self(session)),
            Err(e) => {
                tracing::warn!(error = %e, "session lookup failed; treating request as signed out");
                Ok(Self(None))
            }
        }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me` — current user, or `null` when signed out.
pub async fn me(CurrentSession(session): CurrentSession) -> Json<Option<SessionUser>> {
    Json(current_user(session.as_ref()).cloned())
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
