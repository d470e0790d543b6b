use serde::{Deserialize, Serialize};
use validator::Validate;

/// Smallest accepted session timestamp, in milliseconds since the Unix epoch.
pub const TIMESTAMP_MIN: i64 = 1;

/// Largest accepted session timestamp (13 decimal digits).
pub const TIMESTAMP_MAX: i64 = 9_999_999_999_999;

/// Maximum length of the `ip` field, sized for a full IPv6 textual form.
pub const IP_MAX_LEN: u64 = 45;

/// Maximum length of the `url` field.
pub const URL_MAX_LEN: u64 = 2048;

/// Maximum length of the group/user/branch identifier fields.
pub const IDENT_MAX_LEN: u64 = 64;

/// A client-reported browsing event submitted for session creation.
///
/// String fields are bounded by maximum length only. There is no minimum and
/// no format check, so an empty `ip` passes the schema layer even though it
/// is semantically meaningless; that looseness is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SessionRequest {
    /// Client clock at session start, in milliseconds since the Unix epoch.
    #[validate(range(
        min = TIMESTAMP_MIN,
        max = TIMESTAMP_MAX,
        message = "must be between 1 and 9999999999999"
    ))]
    pub timestamp: i64,

    /// Address the session originated from.
    #[validate(length(max = IP_MAX_LEN, message = "must be at most 45 characters"))]
    pub ip: String,

    /// Page the session started on.
    #[validate(length(max = URL_MAX_LEN, message = "must be at most 2048 characters"))]
    pub url: String,

    /// Grouping identifier supplied by the client. Defaults to empty.
    #[serde(default)]
    #[validate(length(max = IDENT_MAX_LEN, message = "must be at most 64 characters"))]
    pub group_id: String,

    /// User identifier supplied by the client. Defaults to empty.
    #[serde(default)]
    #[validate(length(max = IDENT_MAX_LEN, message = "must be at most 64 characters"))]
    pub user_id: String,

    /// Branch identifier supplied by the client. Defaults to empty.
    #[serde(default)]
    #[validate(length(max = IDENT_MAX_LEN, message = "must be at most 64 characters"))]
    pub branch_id: String,
}

/// Declared response record for session creation: the assigned session ID
/// (a positive 63-bit integer) plus an echo of the accepted request.
///
/// The current service stubs session creation and answers with a canned
/// string instead of this record; the type documents the declared contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCreated {
    pub id: i64,
    pub request: SessionRequest,
}
