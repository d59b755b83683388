//! Named route paths shared by the router and redirect targets.

/// Admin root. Requests here are always sent on to [`ADMIN_DASHBOARD`].
pub const ADMIN_ROOT: &str = "/admin";

/// Admin dashboard location.
pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";

/// Current-user lookup for browser clients.
pub const AUTH_ME: &str = "/api/auth/me";

pub const HEALTHZ: &str = "/healthz";

#[cfg(test)]
#[path = "paths_test.rs"]
mod tests;
