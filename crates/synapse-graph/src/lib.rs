//! Synapse Graph — the shared Neo4j client handle.
//!
//! This crate constructs the process-wide Neo4j driver handle from the
//! connection settings. It owns no query logic of its own; consumers get the
//! handle and speak Cypher through it.

pub mod client;

pub use client::{GraphClient, GraphError};
