//! Bootstrap integration test against a live Neo4j instance.
//!
//! Run with: cargo test --package synapse-runtime --test bootstrap -- --ignored
//!
//! Skipped automatically if Neo4j is not available.

use synapse_core::config::{ClientSettings, Neo4jSettings, OpenAiSettings};
use synapse_runtime::Clients;

fn local_settings() -> ClientSettings {
    ClientSettings {
        neo4j: Neo4jSettings {
            uri: Some("bolt://localhost:7687".to_string()),
            username: Some("neo4j".to_string()),
            password: Some("test".to_string()),
        },
        openai: OpenAiSettings {
            api_key: Some("sk-test".to_string()),
        },
    }
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn bootstrap_with_explicit_settings() {
    let clients = match Clients::with_settings(&local_settings()).await {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Skipping integration test (Neo4j not available): {e}");
            return;
        }
    };

    // Graph handle answers queries.
    let row = clients
        .graph
        .query_one(neo4rs::query("RETURN 1 AS n"))
        .await
        .unwrap();
    assert!(row.is_some());

    // AI handle is present and carries the configured key untouched; the key
    // itself is only exercised at first request, by the remote API.
    let _ai = clients.ai.clone();
}
