use thiserror::Error;

/// Possible error types while working with the rule-engine endpoint.
///
/// Only caller mistakes and transport-level breakage surface here.
/// An HTTP error status or a nonzero iRODS status code is *not* an error
/// in this sense: those come back inside an [`OperationResult`] so the
/// caller can inspect both status layers themselves.
///
/// [`OperationResult`]: crate::rules::OperationResult
#[derive(Debug, Error)]
pub enum RuleError {
    /// The base URL handed to the client couldn't be parsed.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An authenticated operation was invoked before `set_token` was called.
    #[error("no token set; call set_token() before making authenticated requests")]
    TokenNotSet,

    /// Delay rule ids are assigned by the catalog and are never negative.
    #[error("rule id must be greater than or equal to 0, got {0}")]
    InvalidRuleId(i64),

    /// The request never completed (connection refused, timeout, and friends).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response carried a body that wasn't JSON.
    /// The gateway promises JSON on success, so we don't paper over this.
    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),
}
