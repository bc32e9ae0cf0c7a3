mod flow_settings;
mod langflow_client;

pub use flow_settings::*;
pub use langflow_client::*;
