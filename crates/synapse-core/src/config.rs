//! Connection settings for the Synapse client handles.
//!
//! Settings are loaded from (in priority order):
//! 1. Environment variables (`NEO4J_URI`, `NEO4J_USERNAME`, `NEO4J_PASSWORD`,
//!    `OPENAI_API_KEY`)
//! 2. Config file (`synapse.toml`, `[neo4j]` and `[openai]` sections)
//!
//! There are no defaults and no validation: a value that is absent from both
//! sources stays `None` and is handed to the client constructors untouched.
//! Whatever the underlying drivers make of an absent credential is their
//! business.

use serde::Deserialize;

use crate::error::SynapseError;

/// Connection parameters for the Neo4j driver.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Neo4jSettings {
    /// Connection endpoint, e.g. `bolt://localhost:7687`.
    #[serde(default)]
    pub uri: Option<String>,

    /// Auth username.
    #[serde(default)]
    pub username: Option<String>,

    /// Auth password.
    #[serde(default)]
    pub password: Option<String>,
}

/// Connection parameters for the OpenAI client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenAiSettings {
    /// API credential.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// All connection parameters, read once at bootstrap and immutable for the
/// process lifetime.
#[derive(Debug, Clone, Default)]
pub struct ClientSettings {
    pub neo4j: Neo4jSettings,
    pub openai: OpenAiSettings,
}

impl ClientSettings {
    /// Load settings from `synapse.toml` (if present) and the process
    /// environment, environment winning.
    pub fn from_env() -> Result<Self, SynapseError> {
        Self::load("synapse")
    }

    /// Load settings with a custom config file prefix.
    pub fn load(file_prefix: &str) -> Result<Self, SynapseError> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(config::Environment::default())
            .build()
            .map_err(|e| SynapseError::Config(e.to_string()))?;

        let mut neo4j: Neo4jSettings = cfg.get("neo4j").unwrap_or_default();
        let mut openai: OpenAiSettings = cfg.get("openai").unwrap_or_default();

        // Environment variables land as flat lowercased keys and override
        // the file sections.
        if let Ok(v) = cfg.get_string("neo4j_uri") {
            neo4j.uri = Some(v);
        }
        if let Ok(v) = cfg.get_string("neo4j_username") {
            neo4j.username = Some(v);
        }
        if let Ok(v) = cfg.get_string("neo4j_password") {
            neo4j.password = Some(v);
        }
        if let Ok(v) = cfg.get_string("openai_api_key") {
            openai.api_key = Some(v);
        }

        let settings = Self { neo4j, openai };
        tracing::debug!(
            neo4j_uri = settings.neo4j.uri.is_some(),
            neo4j_username = settings.neo4j.username.is_some(),
            neo4j_password = settings.neo4j.password.is_some(),
            openai_api_key = settings.openai.api_key.is_some(),
            "Loaded client settings"
        );
        Ok(settings)
    }
}
