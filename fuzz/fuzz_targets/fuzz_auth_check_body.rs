//! Fuzz target: JSON deserialization and validation of `AuthCheckRequest`.
//!
//! Exercises the nested policy record as well; the validation error tree
//! for arbitrary inputs must always build without panicking.

#![no_main]

use attest_core::AuthCheckRequest;
use libfuzzer_sys::fuzz_target;
use validator::Validate;

fuzz_target!(|data: &[u8]| {
    // Errors are expected and fine; only panics are bugs.
    if let Ok(body) = serde_json::from_slice::<AuthCheckRequest>(data) {
        let _ = body.validate();
    }
});
