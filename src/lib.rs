//! Admin back-office edge service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts the admin entry redirect and exposes the signed-in user from the
//! session owned by the external authentication provider. Sessions are read,
//! never written, from this crate.

pub mod config;
pub mod db;
pub mod navigation;
pub mod paths;
pub mod routes;
pub mod session;
pub mod state;
