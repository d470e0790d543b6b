use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::session::IDENT_MAX_LEN;

/// Smallest accepted risk sub-score.
pub const SCORE_MIN: i64 = 1;

/// Largest accepted risk sub-score.
pub const SCORE_MAX: i64 = 100;

/// Smallest accepted session ID. The upper bound is `i64::MAX`.
pub const SESSION_ID_MIN: i64 = 1;

/// Named risk sub-scores, each an integer percentage in `[1, 100]`.
///
/// Every field is optional; an absent score means the caller does not want
/// that signal evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RiskPolicy {
    /// Overall risk.
    #[validate(range(min = SCORE_MIN, max = SCORE_MAX, message = "must be between 1 and 100"))]
    pub risk: Option<i64>,

    /// Account-takeover risk.
    #[validate(range(min = SCORE_MIN, max = SCORE_MAX, message = "must be between 1 and 100"))]
    pub authenticity: Option<i64>,

    /// Web-bot attack risk.
    #[validate(range(min = SCORE_MIN, max = SCORE_MAX, message = "must be between 1 and 100"))]
    pub web_bot: Option<i64>,

    /// Insider-threat risk.
    #[validate(range(min = SCORE_MIN, max = SCORE_MAX, message = "must be between 1 and 100"))]
    pub insider_threat: Option<i64>,

    /// Blacklisted-profile risk.
    #[validate(range(min = SCORE_MIN, max = SCORE_MAX, message = "must be between 1 and 100"))]
    pub blacklist: Option<i64>,
}

/// A request to evaluate risk/authenticity signals for an existing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AuthCheckRequest {
    /// Session to check, as returned by session creation.
    #[validate(range(min = SESSION_ID_MIN, message = "must be at least 1"))]
    pub session_id: i64,

    /// User identifier supplied by the client. Defaults to empty.
    #[serde(default)]
    #[validate(length(max = IDENT_MAX_LEN, message = "must be at most 64 characters"))]
    pub user_id: String,

    /// Which signals to evaluate, and their thresholds.
    #[validate(nested)]
    pub policy: RiskPolicy,
}

/// Declared response record for the authenticity check: the verdict, the
/// computed sub-scores, and an echo of the accepted request.
///
/// The current service stubs scoring and answers with a canned string
/// instead of this record; the type documents the declared contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCheckResult {
    pub is_auth: bool,
    pub score: RiskPolicy,
    pub request: AuthCheckRequest,
}
