//! Synapse AI — the shared OpenAI client handle.
//!
//! Construction never touches the network and never fails; a missing or
//! invalid key surfaces at the first request, as whatever error the API
//! returns.

pub mod client;

pub use client::{AiClient, AiError};
