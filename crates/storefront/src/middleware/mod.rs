//! HTTP middleware for the storefront.
//!
//! The stack is assembled in `lib.rs`. A request passes through Sentry
//! coverage, the `TraceLayer` span, request id tagging and the session
//! layer before it reaches a handler; the auth extractors here then read
//! what the session layer deposited.

pub mod auth;
pub mod request_id;
pub mod session;

pub use auth::{OptionalAdmin, RequireAdmin, clear_current_admin, set_current_admin};
