//! Structured logging setup for the dendra CLI.
//!
//! Installs a process-global `tracing` subscriber writing to stderr, with the
//! `log` facade bridged so dependencies using either API surface in one
//! stream. The filter comes from `RUST_LOG` (default `info`) and the output
//! format from `DENDRA_LOG_FORMAT`.

use std::{env, io, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const FORMAT_ENV: &str = "DENDRA_LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Output format of the CLI's diagnostic stream.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-oriented single-line output.
    #[default]
    Human,
    /// Newline-delimited JSON events.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnsupportedFormat {
                provided: raw.trim().to_owned(),
            }),
        }
    }
}

/// Errors raised while setting up structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `DENDRA_LOG_FORMAT` held something other than `human` or `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// An environment variable held invalid UTF-8.
    #[error("environment variable `{name}` is not valid UTF-8")]
    NonUnicodeEnv {
        /// Name of the offending environment variable.
        name: &'static str,
    },
}

/// Installs the global subscriber once; later calls are no-ops.
///
/// Diagnostics go to stderr so command payloads on stdout stay machine
/// readable. When another subscriber already owns the global slot (embedding
/// test harnesses do this), the existing configuration is kept.
///
/// # Errors
/// Returns [`LoggingError`] when `DENDRA_LOG_FORMAT` is unreadable or names
/// an unsupported format.
pub fn init_logging() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }
    let format = format_from_env()?;

    // Best-effort on both global slots: a pre-existing owner wins.
    let _ = LogTracer::init();
    let _ = tracing_subscriber::registry()
        .with(filter_from_env())
        .with(fmt_layer(format))
        .try_init();

    let _ = INSTALLED.set(());
    Ok(())
}

fn format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(FORMAT_ENV) {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(env::VarError::NotUnicode(_)) => {
            Err(LoggingError::NonUnicodeEnv { name: FORMAT_ENV })
        }
    }
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn fmt_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::FULL)
        .with_writer(io::stderr);
    match format {
        LogFormat::Human => layer.boxed(),
        LogFormat::Json => layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    }
}
