use url::Url;

use super::response::normalize_response;
use super::{OperationResult, RuleError};

/// Every rule-engine operation goes through this single endpoint;
/// the `op` parameter selects the behavior.
const RULES_PATH: &str = "/rules";

/// A client for the rule-engine operations of the iRODS HTTP API.
///
/// The client itself is stateless beyond its configuration: a base URL fixed
/// at construction, and a bearer token supplied afterwards via [`set_token`].
/// Whoever owns the authentication flow owns the token's lifecycle — we only
/// attach it to requests.
///
/// [`set_token`]: RuleEngineClient::set_token
#[derive(Debug)]
pub struct RuleEngineClient {
    /// Base URL of the iRODS HTTP API, e.g. `http://localhost:9001/irods-http-api/0.3.0`.
    base_url: Url,
    /// The bearer token attached to every request. Starts unset.
    token: Option<String>,
    /// Shared across all requests so connection pooling actually happens.
    http: reqwest::Client,
}

impl RuleEngineClient {
    /// Creates a new client around the given base URL.
    /// The token starts unset; call [`set_token`](Self::set_token) before
    /// making any request.
    pub fn new(base_url: &str) -> Result<Self, RuleError> {
        let base_url = Url::parse(base_url)?;

        Ok(Self {
            base_url,
            token: None,
            http: reqwest::Client::new(),
        })
    }

    /// Updates the bearer token used for all subsequent requests.
    ///
    /// Not synchronized — mutate from one thread at a time. Callers that
    /// share the client across tasks should set the token before sharing.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Lists the available rule engine plugin instances.
    ///
    /// Returns the HTTP status code alongside the parsed gateway response.
    /// The iRODS response within is only meaningful if the HTTP exchange
    /// itself succeeded.
    pub async fn list_rule_engines(&self) -> Result<OperationResult, RuleError> {
        let token = self.bearer_token()?;

        let response = self
            .http
            .get(self.rules_endpoint())
            .bearer_auth(token)
            .query(&[("op", "list_rule_engines")])
            .send()
            .await?;

        normalize_response(
            response,
            "Rule engine list retrieved successfully",
            "Failed to retrieve rule engine list",
        )
        .await
    }

    /// Executes rule code on the server.
    ///
    /// `rep_instance` names the rule engine plugin instance to run the rule
    /// against. Pass an empty string to let the server pick its default:
    /// the parameter is then left out of the request body entirely.
    pub async fn execute(
        &self,
        rule_text: &str,
        rep_instance: &str,
    ) -> Result<OperationResult, RuleError> {
        let token = self.bearer_token()?;

        let mut form = vec![("op", "execute"), ("rule-text", rule_text)];
        if !rep_instance.is_empty() {
            form.push(("rep-instance", rep_instance));
        }

        let response = self
            .http
            .post(self.rules_endpoint())
            .bearer_auth(token)
            .form(&form)
            .send()
            .await?;

        normalize_response(response, "Rule executed successfully", "Failed to execute rule").await
    }

    /// Removes a delay rule from the catalog.
    ///
    /// `rule_id` must be non-negative; the catalog never hands out negative
    /// ids, so a negative value is a caller bug and is rejected before any
    /// request goes out.
    pub async fn remove_delay_rule(&self, rule_id: i64) -> Result<OperationResult, RuleError> {
        let token = self.bearer_token()?;
        if rule_id < 0 {
            return Err(RuleError::InvalidRuleId(rule_id));
        }

        let rule_id = rule_id.to_string();
        let form = [("op", "remove_delay_rule"), ("rule-id", rule_id.as_str())];

        let response = self
            .http
            .post(self.rules_endpoint())
            .bearer_auth(token)
            .form(&form)
            .send()
            .await?;

        normalize_response(
            response,
            "Delay rule removed successfully",
            "Failed to remove delay rule",
        )
        .await
    }

    /// The token, or a fail-fast error when it was never set.
    fn bearer_token(&self) -> Result<&str, RuleError> {
        self.token.as_deref().ok_or(RuleError::TokenNotSet)
    }

    /// Builds the full `/rules` endpoint URL.
    /// Plain concatenation rather than `Url::join`, which would swallow any
    /// path component of the base URL (the API version lives there).
    fn rules_endpoint(&self) -> String {
        format!(
            "{}{RULES_PATH}",
            self.base_url.as_str().trim_end_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_preserves_base_url_path() {
        let client = RuleEngineClient::new("http://localhost:9001/irods-http-api/0.3.0").unwrap();
        assert_eq!(
            client.rules_endpoint(),
            "http://localhost:9001/irods-http-api/0.3.0/rules"
        );
    }

    #[test]
    fn endpoint_handles_trailing_slash() {
        let client = RuleEngineClient::new("http://localhost:9001/").unwrap();
        assert_eq!(client.rules_endpoint(), "http://localhost:9001/rules");
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        assert!(matches!(
            RuleEngineClient::new("not a url"),
            Err(RuleError::InvalidUrl(_))
        ));
    }
}
