//! Tracing subscriber setup for `-v` and the `RECOTEM_LOG*` variables.

use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const ENV_LOG: &str = "RECOTEM_LOG";
const ENV_LOG_FORMAT: &str = "RECOTEM_LOG_FORMAT";
const ENV_LOG_FILE: &str = "RECOTEM_LOG_FILE";
const DEFAULT_LEVEL: &str = "error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Resolved logging options for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub filter: String,
    pub format: LogFormat,
    pub file: Option<String>,
}

impl LogSettings {
    /// `-v` wins over `RECOTEM_LOG`; an unknown format falls back to text.
    #[must_use]
    pub fn resolve(
        verbosity: u8,
        level: Option<String>,
        format: Option<&str>,
        file: Option<String>,
    ) -> Self {
        let filter = match verbosity {
            0 => level.unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        };
        let format = match format.map(str::to_ascii_lowercase).as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Self {
            filter,
            format,
            file: file.filter(|path| !path.is_empty()),
        }
    }

    fn from_env(verbosity: u8) -> Self {
        let format = std::env::var(ENV_LOG_FORMAT).ok();
        if let Some(value) = format.as_deref() {
            if !value.eq_ignore_ascii_case("json") && !value.eq_ignore_ascii_case("text") {
                // The subscriber does not exist yet.
                eprintln!(
                    "Warning: Unrecognized {ENV_LOG_FORMAT} '{value}'. Valid values: 'json', 'text'. Using 'text'."
                );
            }
        }
        Self::resolve(
            verbosity,
            std::env::var(ENV_LOG).ok(),
            format.as_deref(),
            std::env::var(ENV_LOG_FILE).ok(),
        )
    }
}

/// Log sink: the `RECOTEM_LOG_FILE` file when it could be opened, else stderr.
struct LogSink {
    file: Option<Mutex<File>>,
}

impl LogSink {
    fn open(path: Option<&str>) -> Self {
        let file = path.and_then(|path| {
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => Some(Mutex::new(file)),
                Err(e) => {
                    eprintln!("Warning: Could not open log file '{path}': {e}. Using stderr.");
                    None
                }
            }
        });
        Self { file }
    }
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = Box<dyn std::io::Write + 'a>;

    fn make_writer(&'a self) -> Self::Writer {
        let cloned = self
            .file
            .as_ref()
            .and_then(|file| file.lock().ok())
            .and_then(|file| file.try_clone().ok());
        match cloned {
            Some(file) => Box::new(file),
            None => Box::new(std::io::stderr()),
        }
    }
}

/// Install the global subscriber. Called once from `main`.
pub fn init_tracing(verbosity: u8) {
    let settings = LogSettings::from_env(verbosity);
    let filter = EnvFilter::try_new(&settings.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let sink = LogSink::open(settings.file.as_deref());

    match settings.format {
        LogFormat::Json => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_span_list(false)
                .with_target(true)
                .with_line_number(true)
                .with_writer(sink);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        LogFormat::Text => {
            let layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_writer(sink);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_overrides_env_level() {
        let settings = LogSettings::resolve(1, Some("warn".to_string()), None, None);
        assert_eq!(settings.filter, "debug");
        let settings = LogSettings::resolve(3, None, None, None);
        assert_eq!(settings.filter, "trace");
    }

    #[test]
    fn test_env_level_and_default() {
        let settings = LogSettings::resolve(0, Some("recotem=info".to_string()), None, None);
        assert_eq!(settings.filter, "recotem=info");
        assert_eq!(LogSettings::resolve(0, None, None, None).filter, "error");
    }

    #[test]
    fn test_format_and_file() {
        let settings = LogSettings::resolve(0, None, Some("JSON"), Some("/tmp/r.log".to_string()));
        assert_eq!(settings.format, LogFormat::Json);
        assert_eq!(settings.file.as_deref(), Some("/tmp/r.log"));

        let settings = LogSettings::resolve(0, None, Some("xml"), Some(String::new()));
        assert_eq!(settings.format, LogFormat::Text);
        assert_eq!(settings.file, None);
    }
}
