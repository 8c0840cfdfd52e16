//! Logging initialization: human-readable or JSON lines to stdout, optionally teed to a file.

use std::fmt;
use std::fs::OpenOptions;
use std::io;
use std::str::FromStr;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::{FmtSpan, Writer},
    fmt::time::FormatTime,
    fmt::writer::{BoxMakeWriter, MakeWriterExt},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::error::CoreError;

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// `YYYY-MM-DD HH:MM:SS LEVEL target: message key=value ...`
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CoreError::UnknownLogFormat(other.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Local time in `YYYY-MM-DD HH:MM:SS` for human-readable log lines.
struct ChronoLocal;

impl FormatTime for ChronoLocal {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let t = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        write!(w, "{} ", t)
    }
}

/// Initializes the global tracing subscriber.
///
/// Lines go to stdout and, when `log_file_path` is given, are appended to that file as well.
/// No ANSI codes so the log file stays plain text.
/// Log level from `RUST_LOG` (e.g. `info`, `debug`); default `info`. Load `.env` before calling.
pub fn init_tracing(format: LogFormat, log_file_path: Option<&str>) -> Result<(), CoreError> {
    let writer = match log_file_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(io::stdout.and(Arc::new(file)))
        }
        None => BoxMakeWriter::new(io::stdout),
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (text_layer, json_layer) = match format {
        LogFormat::Text => {
            let event_format = tracing_subscriber::fmt::format()
                .with_timer(ChronoLocal)
                .with_level(true)
                .with_target(true)
                .with_thread_ids(false);

            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .event_format(event_format)
                .with_span_events(FmtSpan::NONE)
                .with_ansi(false);
            (Some(layer), None)
        }
        LogFormat::Json => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_current_span(false)
                .with_span_list(false)
                .with_ansi(false);
            (None, Some(layer))
        }
    };

    Registry::default()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .try_init()
        .map_err(|e| CoreError::Logging(format!("Failed to set global subscriber: {}", e)))?;

    Ok(())
}
