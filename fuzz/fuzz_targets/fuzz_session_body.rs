//! Fuzz target: JSON deserialization and validation of `SessionRequest`.
//!
//! Verifies that arbitrary byte sequences fed through the intake path
//! never cause panics, UB, or unbounded resource consumption.

#![no_main]

use attest_core::SessionRequest;
use libfuzzer_sys::fuzz_target;
use validator::Validate;

fuzz_target!(|data: &[u8]| {
    // Errors are expected and fine; only panics are bugs.
    if let Ok(body) = serde_json::from_slice::<SessionRequest>(data) {
        let _ = body.validate();
    }
});
