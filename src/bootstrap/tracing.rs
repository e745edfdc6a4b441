//! Tracing configuration for the photo gallery
//!
//! Registers a `tracing-subscriber` fmt layer filtered by `RUST_LOG`, with
//! build-dependent defaults.

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug level for the gallery crates
/// - **Production**: info level
/// - HTTP internals (`hyper`, `reqwest`) stay at warn
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        "hyper=warn".to_string(),
        "hyper_util=warn".to_string(),
        "reqwest=warn".to_string(),
        format!("gallery_app={}", level),
        format!("gallery_infra={}", level),
    ]
}

/// Initialize the tracing subscriber
///
/// Call once at startup, before anything logs. `RUST_LOG` takes precedence
/// over the built-in directives.
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stdout);

    registry().with(env_filter).with(stdout_layer).try_init()?;

    Ok(())
}
