/// Default target: the hosted Langflow instance on Astra.
pub const DEFAULT_BASE_URL: &str = "https://api.langflow.astra.datastax.com";
const DEFAULT_WORKSPACE_ID: &str = "daaa6830-a230-4c5d-89bb-fa0c261dbdc0";
const DEFAULT_FLOW_ID: &str = "48c2495a-bc13-4ac4-869b-ea99c998b6f7";

/// Where the flow lives and how to authenticate against it.
///
/// Read once at startup and handed to the adapter; nothing re-reads the
/// environment after that.
#[derive(Debug, Clone)]
pub struct FlowSettings {
    pub base_url: String,
    pub workspace_id: String,
    pub flow_id: String,
    /// Bearer token. `None` is reported as a startup warning, not an error:
    /// the request is still attempted and the service's 401 is surfaced.
    pub token: Option<String>,
}

impl FlowSettings {
    /// Read settings from environment variables with hosted defaults:
    ///
    /// | Variable                | Default                                  |
    /// |-------------------------|------------------------------------------|
    /// | `LANGFLOW_BASE_URL`     | `https://api.langflow.astra.datastax.com`|
    /// | `LANGFLOW_WORKSPACE_ID` | built-in workspace id                    |
    /// | `LANGFLOW_FLOW_ID`      | built-in flow id                         |
    /// | `APPLICATION_TOKEN`     | none (warn at startup)                   |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("LANGFLOW_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            workspace_id: std::env::var("LANGFLOW_WORKSPACE_ID")
                .unwrap_or_else(|_| DEFAULT_WORKSPACE_ID.to_string()),
            flow_id: std::env::var("LANGFLOW_FLOW_ID")
                .unwrap_or_else(|_| DEFAULT_FLOW_ID.to_string()),
            token: std::env::var("APPLICATION_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Full run-endpoint URL: `<base>/lf/<workspace-id>/api/v1/run/<flow-id>`.
    pub fn run_url(&self) -> String {
        format!(
            "{}/lf/{}/api/v1/run/{}",
            self.base_url.trim_end_matches('/'),
            self.workspace_id,
            self.flow_id
        )
    }
}
