pub mod application;
pub mod connector;
pub mod domain;

pub use application::{FlowClient, SendMessageUseCase};

pub use connector::{FlowSettings, LangflowClient};

pub use domain::{Conversation, FlowError, Turn};
