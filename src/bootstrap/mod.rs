pub mod config;
pub mod tracing;
pub mod wiring;

pub use self::config::{apply_env_overrides, load_config};
pub use self::tracing::init_tracing_subscriber;
pub use self::wiring::{resolve_settings, wire_session, ResolvedSettings, WiringError};
