//! Observability for HealthAI.
//! `tracing` crate with `EnvFilter`, optional JSON output, named spans.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
