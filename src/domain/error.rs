use thiserror::Error;

/// Everything that can go wrong on one round-trip to the flow service.
///
/// None of these are fatal: every variant is recovered at the application
/// boundary and rendered as user-facing text in the reply position. The
/// `Display` wording is exactly what the user sees after the warning prefix.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Network-level failure before any HTTP status was received:
    /// connection refused, DNS, TLS, or the 120 s timeout.
    #[error("Request failed - {0}")]
    Transport(String),

    /// HTTP 401 from the service.
    #[error("Unauthorized request. Check your API token.")]
    Authorization,

    /// HTTP 504 from the service. Retryable in principle; no retry is
    /// performed here.
    #[error("API timeout. Please try again later.")]
    GatewayTimeout,

    /// Any other non-200 status.
    #[error("API request failed with status {0}")]
    RequestFailed(u16),

    /// 200 status but the body was not valid JSON.
    #[error("Received an invalid JSON response from the API.")]
    MalformedResponse,

    /// Valid JSON that does not contain the expected
    /// `outputs[0].outputs[0].results.message.text` path.
    #[error("Unexpected API response format.")]
    UnexpectedFormat,

    /// No token found in the environment at startup. Reported once as a
    /// warning banner; the call is still attempted and will typically
    /// resolve to [`FlowError::Authorization`].
    #[error("Missing API token. Set APPLICATION_TOKEN in the environment.")]
    MissingCredential,
}

impl FlowError {
    pub fn transport(cause: impl Into<String>) -> Self {
        Self::Transport(cause.into())
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Authorization)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_embeds_the_cause() {
        let err = FlowError::transport("connection refused");
        assert_eq!(err.to_string(), "Request failed - connection refused");
    }

    #[test]
    fn status_variants_have_distinct_wording() {
        assert_ne!(
            FlowError::Authorization.to_string(),
            FlowError::GatewayTimeout.to_string()
        );
        assert_eq!(
            FlowError::RequestFailed(503).to_string(),
            "API request failed with status 503"
        );
    }
}
