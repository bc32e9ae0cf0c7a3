use std::sync::Arc;

use tracing::warn;

use crate::application::FlowClient;
use crate::domain::{FlowError, Turn};

/// Prefix applied to every error rendered in the reply position.
const WARNING_PREFIX: &str = "⚠️ Error: ";

/// Runs one chat turn and guarantees a displayable reply.
///
/// This is the total boundary of the system: whatever the [`FlowClient`]
/// reports — transport failure, bad status, malformed payload — is converted
/// here into warning-prefixed plain text so the caller can always render the
/// result in the reply position. Nothing propagates as an error, and the
/// returned string is never empty.
///
/// The use case holds no state of its own; the caller owns the
/// [`Conversation`](crate::domain::Conversation) and decides what slice of
/// it to pass as context.
pub struct SendMessageUseCase {
    client: Arc<dyn FlowClient>,
}

impl SendMessageUseCase {
    pub fn new(client: Arc<dyn FlowClient>) -> Self {
        Self { client }
    }

    /// Send `message` with the given context and return the text to display.
    ///
    /// `history: None` selects the stateless variant (no history field on the
    /// wire); `Some` sends the turns in their original order.
    pub async fn send(&self, message: &str, history: Option<&[Turn]>) -> String {
        match self.client.run(message, history).await {
            // An empty reply would break the non-empty-display guarantee,
            // so it is treated the same as a broken extraction path.
            Ok(text) if text.is_empty() => {
                warn!("flow returned an empty reply, reporting format error");
                Self::render_error(&FlowError::UnexpectedFormat)
            }
            Ok(text) => text,
            Err(e) => Self::render_error(&e),
        }
    }

    fn render_error(error: &crate::domain::FlowError) -> String {
        format!("{WARNING_PREFIX}{error}")
    }
}
