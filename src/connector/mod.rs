//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - The HTTP adapter for the hosted Langflow run endpoint
//! - Environment-sourced settings for that endpoint

pub mod adapter;

pub use adapter::*;
