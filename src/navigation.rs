//! Navigation capability used by entry-point handlers.
//!
//! DESIGN
//! ======
//! Handlers that only ever redirect are written against [`Navigator`] so
//! their target can be asserted without standing up a router. The HTTP
//! implementation turns the target into an axum `Redirect`.

use axum::response::Redirect;

/// Something that can send the client to another path.
pub trait Navigator {
    type Output;

    fn redirect_to(&self, path: &str) -> Self::Output;
}

/// Issues `307 Temporary Redirect` responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpNavigator;

impl Navigator for HttpNavigator {
    type Output = Redirect;

    fn redirect_to(&self, path: &str) -> Redirect {
        Redirect::temporary(path)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;
