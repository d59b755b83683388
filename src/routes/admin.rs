//! Admin entry point.
//!
//! The admin root never renders anything itself; it always hands the client
//! on to the dashboard.

use axum::response::Redirect;

use crate::navigation::{HttpNavigator, Navigator};
use crate::paths;

/// Send the client to the admin dashboard.
#[must_use]
pub fn enter_admin<N: Navigator>(nav: &N) -> N::Output {
    nav.redirect_to(paths::ADMIN_DASHBOARD)
}

/// `GET /admin` — redirect to the dashboard.
pub async fn admin_root() -> Redirect {
    tracing::debug!(location = paths::ADMIN_DASHBOARD, "admin entry redirect");
    enter_admin(&HttpNavigator)
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
