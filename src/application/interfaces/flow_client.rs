use async_trait::async_trait;

use crate::domain::{FlowError, Turn};

/// An interface for running one turn against a hosted conversational flow.
///
/// Implementors encapsulate transport, serialization, and service-specific
/// API details. Consumers (e.g. [`super::super::SendMessageUseCase`]) remain
/// decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait FlowClient: Send + Sync {
    /// Send `message` to the flow, with `history` as conversational context,
    /// and return the assistant's reply text.
    ///
    /// `None` history produces the stateless request variant: the field is
    /// omitted from the wire payload entirely. `Some` history is serialized
    /// in its original order, empty or not.
    async fn run(&self, message: &str, history: Option<&[Turn]>) -> Result<String, FlowError>;
}
