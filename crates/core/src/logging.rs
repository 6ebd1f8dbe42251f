//! Logging setup
//!
//! Structured logging via tracing, with text or JSON formatting selected at
//! runtime through environment variables or a CLI flag. All log output goes
//! to stderr so stdout carries nothing but the rendered banner; the width
//! and color warnings emitted during banner construction land here.

use anyhow::Result;
use std::{io, sync::Once};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the logging system with an optional format specification
///
/// Sets up tracing-subscriber with either JSON or text formatting. Safe to
/// call multiple times; subsequent calls are no-ops.
///
/// ## Arguments
///
/// * `format` - `None` or `"text"` for human-readable output, `"json"` for
///   structured JSON
///
/// ## Environment Variables
///
/// * `PROEM_LOG_FORMAT` - log output format when no explicit format is given
///   ("json" for JSON, any other value for text)
/// * `PROEM_LOG` - logging filter specification
/// * `RUST_LOG` - standard fallback filter variable
pub fn init(format: Option<&str>) -> Result<()> {
    INIT.call_once(|| {
        let filter = create_env_filter();

        let env_format = std::env::var("PROEM_LOG_FORMAT").ok();
        let effective_format = format.or(env_format.as_deref()).unwrap_or("text");

        match effective_format {
            "json" => {
                tracing_subscriber::registry()
                    .with(fmt::layer().json().with_target(true).with_writer(io::stderr))
                    .with(filter)
                    .init();
            }
            _ => {
                // Default to text format (including None, "text", or any other value)
                tracing_subscriber::registry()
                    .with(fmt::layer().with_target(true).with_writer(io::stderr))
                    .with(filter)
                    .init();
            }
        }

        tracing::debug!("Logging initialized with format: {}", effective_format);
    });

    Ok(())
}

/// Create an EnvFilter based on environment variables
fn create_env_filter() -> EnvFilter {
    if let Ok(proem_log) = std::env::var("PROEM_LOG") {
        EnvFilter::try_new(&proem_log).unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid PROEM_LOG specification '{}', using default 'info'",
                proem_log
            );
            EnvFilter::new("info")
        })
    } else {
        // Fall back to standard RUST_LOG or default (info)
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Check if logging has been initialized
///
/// Primarily useful for testing scenarios where you need to know whether
/// the logging system has already been set up.
pub fn is_initialized() -> bool {
    INIT.is_completed()
}
