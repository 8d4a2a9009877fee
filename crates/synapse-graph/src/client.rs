//! Neo4j connection management and shared graph client.

use neo4rs::{ConfigBuilder, Graph, Query};

use synapse_core::config::Neo4jSettings;

/// Errors from graph handle construction and query pass-throughs.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),
}

/// Thread-safe Neo4j graph client with connection pooling.
///
/// Constructed once at bootstrap. Clone is cheap (inner Arc) and every clone
/// shares the same driver.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl std::fmt::Debug for GraphClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphClient").finish_non_exhaustive()
    }
}

impl GraphClient {
    /// Connect with whatever values the settings carry.
    ///
    /// Absent values are forwarded as empty strings, uninspected; any failure
    /// (malformed URI, unreachable server, bad auth) is whatever neo4rs
    /// raises. Whether the connection is established here or at first query
    /// is the driver's choice.
    pub async fn connect(settings: &Neo4jSettings) -> Result<Self, GraphError> {
        let neo_config = ConfigBuilder::default()
            .uri(settings.uri.as_deref().unwrap_or_default())
            .user(settings.username.as_deref().unwrap_or_default())
            .password(settings.password.as_deref().unwrap_or_default())
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        tracing::info!(
            uri = settings.uri.as_deref().unwrap_or_default(),
            "Connected to Neo4j"
        );
        Ok(Self { graph })
    }

    /// Get a reference to the underlying neo4rs Graph for direct operations.
    pub fn inner(&self) -> &Graph {
        &self.graph
    }

    /// Execute a write-only query (CREATE, MERGE, DELETE, SET).
    pub async fn run(&self, query: Query) -> Result<(), GraphError> {
        self.graph.run(query).await?;
        Ok(())
    }

    /// Execute a read query and collect all rows.
    pub async fn query_rows(&self, query: Query) -> Result<Vec<neo4rs::Row>, GraphError> {
        let mut stream = self.graph.execute(query).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a read query and return the first row, if any.
    pub async fn query_one(&self, query: Query) -> Result<Option<neo4rs::Row>, GraphError> {
        let mut stream = self.graph.execute(query).await?;
        Ok(stream.next().await?)
    }

    /// Begin a transaction.
    pub async fn start_txn(&self) -> Result<neo4rs::Txn, GraphError> {
        Ok(self.graph.start_txn().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_settings_fail_inside_the_driver() {
        // No validation on our side: empty settings reach neo4rs untouched
        // and the error comes back from the driver.
        let err = GraphClient::connect(&Neo4jSettings::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GraphError::Connection(_)));
    }

    #[tokio::test]
    async fn malformed_uri_fails_inside_the_driver() {
        let settings = Neo4jSettings {
            uri: Some("not a uri".to_string()),
            username: Some("neo4j".to_string()),
            password: Some("test".to_string()),
        };
        let err = GraphClient::connect(&settings).await.unwrap_err();
        assert!(matches!(err, GraphError::Connection(_)));
    }
}
