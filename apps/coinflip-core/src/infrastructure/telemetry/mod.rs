//! Tracing Setup
//!
//! Configures the tracing subscriber (env-filter + console formatting) for
//! the host process. The core only emits `tracing` events; installing a
//! subscriber is the host's choice, which is why initialization is a
//! fallible, explicit call rather than a side effect of using the library.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: standard env-filter directives, layered on top of the
//!   default `coinflip_core=info`.
//!
//! # Usage
//!
//! ```ignore
//! use coinflip_core::infrastructure::telemetry;
//!
//! telemetry::init().expect("install tracing subscriber");
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Default filter directive for the core's own events.
const DEFAULT_DIRECTIVE: &str = "coinflip_core=info";

/// Error type for telemetry setup.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// A filter directive failed to parse.
    #[error("invalid filter directive '{directive}': {message}")]
    InvalidDirective {
        /// The directive that failed.
        directive: String,
        /// Parser error detail.
        message: String,
    },
    /// A global subscriber is already installed.
    #[error("failed to initialize tracing subscriber: {0}")]
    InitFailed(String),
}

/// Install the tracing subscriber with the default filter.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init() -> Result<(), TelemetryError> {
    init_with_directive(DEFAULT_DIRECTIVE)
}

/// Install the tracing subscriber with a custom base directive.
///
/// `RUST_LOG` directives layer on top of `directive`.
///
/// # Errors
///
/// Returns an error if the directive fails to parse or a global subscriber
/// is already installed.
pub fn init_with_directive(directive: &str) -> Result<(), TelemetryError> {
    let parsed = directive
        .parse()
        .map_err(|e: tracing_subscriber::filter::ParseError| TelemetryError::InvalidDirective {
            directive: directive.to_string(),
            message: e.to_string(),
        })?;

    let env_filter = EnvFilter::from_default_env().add_directive(parsed);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TelemetryError::InitFailed(e.to_string()))
}
