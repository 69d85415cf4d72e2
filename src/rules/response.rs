use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RuleError;

/// The normalized outcome of a rule-engine operation.
///
/// Two status layers are in play: the HTTP status from the gateway itself,
/// and the iRODS status code nested within the JSON body (under
/// `irods_response.status_code`). We hand both back untouched — the payload
/// is kept as opaque JSON rather than typed out field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResult {
    /// The HTTP status code of the response.
    pub status_code: u16,
    /// The parsed response body, or `None` when there was no body to parse
    /// (or an error body that wasn't valid JSON).
    pub data: Option<Value>,
}

/// Shapes an HTTP response into an [`OperationResult`].
///
/// Every operation funnels through here, so the contract lives in one place:
/// - 2xx: the body is parsed as JSON (the gateway always sends JSON on
///   success, so a parse failure is surfaced as an error). A nonzero iRODS
///   status code gets logged as a remote-side failure but is *not* escalated;
///   the caller still receives the full body.
/// - anything else: the body is parsed on a best-effort basis for diagnostics
///   and handed back as-is. An empty body stays `None` — we never try to
///   parse an empty string.
pub(crate) async fn normalize_response(
    response: reqwest::Response,
    success_line: &str,
    failure_line: &str,
) -> Result<OperationResult, RuleError> {
    // Grab the status up front; reading the body consumes the response.
    let status = response.status();
    let status_code = status.as_u16();
    let body = response.text().await?;

    if status.is_success() {
        let data: Value = serde_json::from_str(&body)?;

        match irods_status_code(&data) {
            0 => tracing::info!("{success_line}"),
            code => tracing::error!("{failure_line}: iRODS status code {code}"),
        }

        return Ok(OperationResult {
            status_code,
            data: Some(data),
        });
    }

    // HTTP-level failure. The gateway usually still sends a JSON body with
    // the iRODS response detail, but nothing guarantees it.
    let data = if body.is_empty() {
        None
    } else {
        serde_json::from_str(&body).ok()
    };

    match data.as_ref().and_then(|body: &Value| body.get("irods_response")) {
        Some(detail) => tracing::error!("Error <{status_code}>: iRODS response {detail}"),
        None => tracing::error!("Error <{status_code}>"),
    }

    Ok(OperationResult { status_code, data })
}

/// Digs `irods_response.status_code` out of a response body.
/// A missing or non-numeric field reads as zero (success).
fn irods_status_code(data: &Value) -> i64 {
    data.get("irods_response")
        .and_then(|response| response.get("status_code"))
        .and_then(Value::as_i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_code_is_extracted_from_nested_response() {
        let body = json!({"irods_response": {"status_code": -169_000}});
        assert_eq!(irods_status_code(&body), -169_000);
    }

    #[test]
    fn missing_irods_response_reads_as_success() {
        assert_eq!(irods_status_code(&json!({})), 0);
        assert_eq!(irods_status_code(&json!({"irods_response": {}})), 0);
    }

    #[test]
    fn non_numeric_status_code_reads_as_success() {
        let body = json!({"irods_response": {"status_code": "oops"}});
        assert_eq!(irods_status_code(&body), 0);
    }
}
