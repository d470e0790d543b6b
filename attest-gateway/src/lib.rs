//! HTTP gateway for the attest session-intake and authenticity-check API.
//!
//! Exposes the service status, session creation, and authenticity check
//! endpoints. The POST routes are gated on an `X-API-Key` header and every
//! payload is validated before its handler runs.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod auth;
pub mod cors;
pub mod error;
pub mod extract;
pub mod routes;
