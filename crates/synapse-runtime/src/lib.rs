//! Synapse Runtime — builds the two shared client handles.
//!
//! Consumers construct [`Clients`] once at startup and pass it (or cheap
//! clones) to whatever needs a handle. There is no ambient global state:
//! initialization order and testability stay explicit.

use synapse_ai::AiClient;
use synapse_core::config::ClientSettings;
use synapse_core::SynapseError;
use synapse_graph::GraphClient;

/// The two long-lived client handles, built once per process.
///
/// Clone shares the underlying driver and connection pool, so every clone
/// observes the identical handles.
#[derive(Clone, Debug)]
pub struct Clients {
    pub graph: GraphClient,
    pub ai: AiClient,
}

impl Clients {
    /// Read settings from the environment and construct both handles.
    pub async fn connect() -> Result<Self, SynapseError> {
        let settings = ClientSettings::from_env()?;
        Self::with_settings(&settings).await
    }

    /// Construct both handles from settings the caller already holds.
    ///
    /// The graph handle is built first, then the AI handle; both take the
    /// settings verbatim, absent values included. Failures propagate from
    /// the underlying drivers unmodified.
    pub async fn with_settings(settings: &ClientSettings) -> Result<Self, SynapseError> {
        let graph = GraphClient::connect(&settings.neo4j)
            .await
            .map_err(|e| SynapseError::Graph(e.to_string()))?;
        let ai = AiClient::new(&settings.openai);

        tracing::debug!("Client handles initialized");
        Ok(Self { graph, ai })
    }
}
