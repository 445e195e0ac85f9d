//! Builders
//!
//! Fluent builder patterns for verifier configuration.

pub mod config;

pub use config::{verifier_config, VerifierConfigBuilder};
