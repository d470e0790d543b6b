//! Validated JSON intake for request bodies.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::GatewayError;

/// JSON extractor that parses the body and runs schema validation before
/// the handler executes.
///
/// Parse failures (bad syntax, missing body, wrong content type) and
/// constraint violations both surface as a 422 whose `detail` message names
/// the offending field(s).
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| GatewayError::Validation(rejection.body_text()))?;
        value
            .validate()
            .map_err(|violations| GatewayError::Validation(detail_message(&violations)))?;
        Ok(Self(value))
    }
}

/// Flatten a validation error tree into one deterministic message.
///
/// Violations are sorted by field path so the same invalid body always
/// produces the same `detail` string.
pub fn detail_message(violations: &ValidationErrors) -> String {
    let mut lines = Vec::new();
    collect(None, violations, &mut lines);
    lines.sort();
    lines.join("; ")
}

fn collect(prefix: Option<&str>, violations: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in violations.errors() {
        let path = match prefix {
            Some(p) => format!("{p}.{field}"),
            None => field.to_string(),
        };
        match kind {
            ValidationErrorsKind::Field(errors) => {
                for error in errors {
                    let reason = error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string);
                    out.push(format!("{path}: {reason}"));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(Some(&path), nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(Some(&format!("{path}[{index}]")), nested, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_core::{AuthCheckRequest, RiskPolicy, SessionRequest};

    fn violations_of<T: Validate>(value: &T) -> ValidationErrors {
        match value.validate() {
            Err(v) => v,
            Ok(()) => panic!("value unexpectedly validated"),
        }
    }

    #[test]
    fn detail_message_names_the_violated_field() {
        let req = SessionRequest {
            timestamp: 0,
            ip: "10.20.30.40".to_owned(),
            url: "www.hello.com".to_owned(),
            group_id: String::new(),
            user_id: String::new(),
            branch_id: String::new(),
        };
        let detail = detail_message(&violations_of(&req));
        assert!(
            detail.contains("timestamp: must be between 1 and 9999999999999"),
            "unexpected detail: {detail}"
        );
    }

    #[test]
    fn detail_message_uses_dotted_paths_for_nested_fields() {
        let req = AuthCheckRequest {
            session_id: 5,
            user_id: String::new(),
            policy: RiskPolicy { risk: Some(-1), ..RiskPolicy::default() },
        };
        let detail = detail_message(&violations_of(&req));
        assert!(
            detail.contains("policy.risk: must be between 1 and 100"),
            "unexpected detail: {detail}"
        );
    }

    #[test]
    fn detail_message_lists_every_violation_in_sorted_order() {
        let req = SessionRequest {
            timestamp: 0,
            ip: "1".repeat(46),
            url: "www.hello.com".to_owned(),
            group_id: String::new(),
            user_id: String::new(),
            branch_id: String::new(),
        };
        let detail = detail_message(&violations_of(&req));
        let ip_at = match detail.find("ip:") {
            Some(i) => i,
            None => panic!("detail must mention ip: {detail}"),
        };
        let ts_at = match detail.find("timestamp:") {
            Some(i) => i,
            None => panic!("detail must mention timestamp: {detail}"),
        };
        assert!(ip_at < ts_at, "violations must be sorted by field path: {detail}");
    }
}
