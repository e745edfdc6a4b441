//! Photo Gallery
//!
//! Bootstrap layer: loads configuration, initializes tracing and wires the
//! photo session to its infrastructure adapters.

pub mod bootstrap;

pub use bootstrap::{init_tracing_subscriber, load_config, wire_session};
