//! synapse-core: Connection settings and error handling for the Synapse clients.
//!
//! This crate provides the pieces shared by every Synapse client crate:
//! - Connection settings read once from the process environment
//! - The workspace-level error type

pub mod config;
pub mod error;

pub use config::{ClientSettings, Neo4jSettings, OpenAiSettings};
pub use error::SynapseError;
