use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::FlowClient;
use crate::connector::FlowSettings;
use crate::domain::{FlowError, Turn};

/// One round-trip is allowed to take up to two minutes; no retries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
/// How much of the raw response body goes into the diagnostic log.
const BODY_LOG_LIMIT: usize = 500;

const OUTPUT_TYPE: &str = "chat";
const INPUT_TYPE: &str = "chat";

/// Request payload for the Langflow run endpoint.
///
/// `history` is skipped entirely when absent, which is the stateless
/// single-turn variant of the call.
#[derive(serde::Serialize)]
struct RunRequest<'a> {
    input_value: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    history: Option<&'a [Turn]>,
    output_type: &'a str,
    input_type: &'a str,
}

/// HTTP client for a hosted Langflow run endpoint.
///
/// Implements [`FlowClient`] so higher-level components stay decoupled from
/// transport and serialization details. Each call issues exactly one POST
/// with a 120-second timeout and classifies the outcome before touching
/// payload semantics:
///
/// 1. transport failure (refused / DNS / TLS / timeout)
/// 2. HTTP 401, HTTP 504, then any other non-200 status
/// 3. 200 with a body that is not JSON
/// 4. 200 with JSON missing `outputs[0].outputs[0].results.message.text`
/// 5. otherwise the resolved text, verbatim
///
/// Every call, success or not, emits one diagnostic record with the HTTP
/// status (or `"none"` when no response arrived) and a ≤500-character prefix
/// of the raw body.
pub struct LangflowClient {
    client: reqwest::Client,
    url: String,
    token: String,
}

impl LangflowClient {
    pub fn new(settings: &FlowSettings) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            url: settings.run_url(),
            // An absent token is sent as an empty bearer credential; the
            // service answers 401 and that is what the user sees.
            token: settings.token.clone().unwrap_or_default(),
        }
    }

    /// Map an HTTP outcome to a reply or a classified failure.
    ///
    /// Status checks come first so that, say, a 504 with an HTML error page
    /// reports the timeout rather than a JSON parse failure.
    fn interpret(status: StatusCode, body: &str) -> Result<String, FlowError> {
        if status == StatusCode::UNAUTHORIZED {
            return Err(FlowError::Authorization);
        }
        if status == StatusCode::GATEWAY_TIMEOUT {
            return Err(FlowError::GatewayTimeout);
        }
        if status != StatusCode::OK {
            return Err(FlowError::RequestFailed(status.as_u16()));
        }

        let data: Value = serde_json::from_str(body).map_err(|_| FlowError::MalformedResponse)?;

        Self::extract_message_text(&data)
            .map(str::to_string)
            .ok_or(FlowError::UnexpectedFormat)
    }

    /// Walk the fixed extraction path through the response tree.
    ///
    /// A missing key, an out-of-range index, or a wrong type at any step
    /// breaks the chain and yields `None`; the caller decides what that
    /// means. No placeholder text lives here.
    fn extract_message_text(data: &Value) -> Option<&str> {
        data.get("outputs")?
            .get(0)?
            .get("outputs")?
            .get(0)?
            .get("results")?
            .get("message")?
            .get("text")?
            .as_str()
    }

    /// Prefix of `body` for the diagnostic log, cut on a char boundary.
    fn log_prefix(body: &str) -> &str {
        match body.char_indices().nth(BODY_LOG_LIMIT) {
            Some((idx, _)) => &body[..idx],
            None => body,
        }
    }
}

#[async_trait]
impl FlowClient for LangflowClient {
    async fn run(&self, message: &str, history: Option<&[Turn]>) -> Result<String, FlowError> {
        let request = RunRequest {
            input_value: message,
            history,
            output_type: OUTPUT_TYPE,
            input_type: INPUT_TYPE,
        };

        let response = match self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                debug!(status = "none", "flow call got no response: {e}");
                return Err(FlowError::transport(e.to_string()));
            }
        };

        let status = response.status();
        // Reading the body can still hit the timeout or a dropped connection.
        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                debug!(status = %status, "failed reading flow response body: {e}");
                return Err(FlowError::transport(e.to_string()));
            }
        };

        debug!(status = %status.as_u16(), body = %Self::log_prefix(&body), "flow response");
        if status != StatusCode::OK {
            warn!("flow call returned {status}");
        }

        Self::interpret(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_BODY: &str =
        r#"{"outputs":[{"outputs":[{"results":{"message":{"text":"hello"}}}]}]}"#;

    #[test]
    fn interpret_returns_resolved_text_verbatim() {
        let reply = LangflowClient::interpret(StatusCode::OK, GOOD_BODY).unwrap();
        assert_eq!(reply, "hello");
    }

    #[test]
    fn interpret_classifies_401_regardless_of_body() {
        let err = LangflowClient::interpret(StatusCode::UNAUTHORIZED, GOOD_BODY).unwrap_err();
        assert!(matches!(err, FlowError::Authorization));
    }

    #[test]
    fn interpret_classifies_504_before_parsing() {
        let err =
            LangflowClient::interpret(StatusCode::GATEWAY_TIMEOUT, "<html>bad gateway</html>")
                .unwrap_err();
        assert!(matches!(err, FlowError::GatewayTimeout));
    }

    #[test]
    fn interpret_reports_other_statuses_with_their_code() {
        let err = LangflowClient::interpret(StatusCode::IM_A_TEAPOT, "").unwrap_err();
        assert!(matches!(err, FlowError::RequestFailed(418)));
    }

    #[test]
    fn interpret_flags_non_json_body() {
        let err = LangflowClient::interpret(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, FlowError::MalformedResponse));
    }

    #[test]
    fn empty_outputs_array_is_a_format_error_not_a_panic() {
        let err = LangflowClient::interpret(StatusCode::OK, r#"{"outputs":[]}"#).unwrap_err();
        assert!(matches!(err, FlowError::UnexpectedFormat));
    }

    #[test]
    fn path_broken_at_inner_levels_is_a_format_error() {
        let bodies = [
            r#"{}"#,
            r#"{"outputs":"not an array"}"#,
            r#"{"outputs":[{"outputs":[]}]}"#,
            r#"{"outputs":[{"outputs":[{"results":{}}]}]}"#,
            r#"{"outputs":[{"outputs":[{"results":{"message":{}}}]}]}"#,
            r#"{"outputs":[{"outputs":[{"results":{"message":{"text":42}}}]}]}"#,
        ];

        for body in bodies {
            let err = LangflowClient::interpret(StatusCode::OK, body).unwrap_err();
            assert!(matches!(err, FlowError::UnexpectedFormat), "body: {body}");
        }
    }

    #[test]
    fn request_omits_history_when_none() {
        let request = RunRequest {
            input_value: "hi",
            history: None,
            output_type: OUTPUT_TYPE,
            input_type: INPUT_TYPE,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("history").is_none());
        assert_eq!(json["input_value"], "hi");
        assert_eq!(json["output_type"], "chat");
        assert_eq!(json["input_type"], "chat");
    }

    #[test]
    fn request_serializes_history_in_original_order() {
        let turns = vec![Turn::new("first", "one"), Turn::new("second", "two")];
        let request = RunRequest {
            input_value: "third",
            history: Some(&turns),
            output_type: OUTPUT_TYPE,
            input_type: INPUT_TYPE,
        };
        let json = serde_json::to_value(&request).unwrap();
        let history = json["history"].as_array().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0]["user"], "first");
        assert_eq!(history[0]["bot"], "one");
        assert_eq!(history[1]["user"], "second");
    }

    #[test]
    fn log_prefix_caps_long_bodies() {
        let body = "x".repeat(BODY_LOG_LIMIT * 2);
        assert_eq!(LangflowClient::log_prefix(&body).chars().count(), BODY_LOG_LIMIT);
    }

    #[test]
    fn log_prefix_respects_char_boundaries() {
        let body = "é".repeat(BODY_LOG_LIMIT + 10);
        let prefix = LangflowClient::log_prefix(&body);
        assert_eq!(prefix.chars().count(), BODY_LOG_LIMIT);
    }

    #[test]
    fn log_prefix_leaves_short_bodies_alone() {
        assert_eq!(LangflowClient::log_prefix("short"), "short");
    }
}
