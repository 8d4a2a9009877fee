use thiserror::Error;

/// Top-level error type for the Synapse bootstrap layer.
#[derive(Error, Debug)]
pub enum SynapseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Graph client error: {0}")]
    Graph(String),

    #[error("AI client error: {0}")]
    Ai(String),
}
