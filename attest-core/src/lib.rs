//! Schema layer for the attest session-intake and authenticity-check API.
//!
//! Defines the typed request/response records exchanged over the HTTP
//! surface, with their field-level validation rules attached. Validation is
//! pure and runs eagerly at the service boundary, so handlers never observe
//! out-of-bounds input.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod check;
pub mod session;

pub use check::{AuthCheckRequest, AuthCheckResult, RiskPolicy};
pub use session::{SessionCreated, SessionRequest};
