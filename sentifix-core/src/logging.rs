use std::path::PathBuf;
use std::fmt;
use tracing_subscriber::{
    EnvFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
    fmt::{format::Writer, FormatEvent, FormatFields},
    registry::LookupSpan,
};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing::{Event, Subscriber};

/// Log targets emitted by the library.
pub const TARGETS: [&str; 5] = [
    "fixer::rewrite",
    "fixer::analyze",
    "fixer::resources",
    "fixer::wordnet",
    "fixer::tagger",
];

/// Colors each target differently, other crates are dimmed
struct ColoredFormatter;

impl ColoredFormatter {
    fn target_colors(target: &str) -> (&'static str, &'static str) {
        match target {
            "fixer::rewrite" => ("\x1b[38;5;213m", ""), // pink
            "fixer::analyze" => ("\x1b[38;5;51m", ""),  // cyan
            "fixer::resources" => ("\x1b[38;5;226m", ""), // yellow
            "fixer::wordnet" => ("\x1b[38;5;82m", ""),  // lime
            "fixer::tagger" => ("\x1b[38;5;208m", ""),  // orange
            _ => ("\x1b[2m", "\x1b[2m"),
        }
    }
}

impl<S, N> FormatEvent<S, N> for ColoredFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        let (target_color, message_color) = Self::target_colors(metadata.target());

        let level_color = match *metadata.level() {
            tracing::Level::ERROR => "\x1b[31m",
            tracing::Level::WARN => "\x1b[33m",
            tracing::Level::INFO => "\x1b[32m",
            tracing::Level::DEBUG => "\x1b[34m",
            tracing::Level::TRACE => "\x1b[35m",
        };

        // [timestamp] [level] [target] message
        write!(writer, "{} ", chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"))?;
        write!(writer, "{}{:5}\x1b[0m ", level_color, metadata.level())?;
        write!(writer, "{}[{}]\x1b[0m ", target_color, metadata.target())?;
        write!(writer, "{}", message_color)?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer, "\x1b[0m")?;

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "debug", "info", "warn", "error")
    pub level: String,
    /// Optional file path for log output. If None, logs to stderr
    pub file_path: Option<PathBuf>,
    /// Whether to include spans in logs
    pub include_spans: bool,
    /// JSON format instead of human-readable
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "off".to_string(),
            file_path: None,
            include_spans: false,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Create config from `SENTIFIX_LOG_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            level: lookup("SENTIFIX_LOG_LEVEL").unwrap_or_else(|| "off".to_string()),
            file_path: lookup("SENTIFIX_LOG_FILE").map(PathBuf::from),
            include_spans: lookup("SENTIFIX_LOG_SPANS").map(|v| v == "true").unwrap_or(false),
            json_format: lookup("SENTIFIX_LOG_JSON").map(|v| v == "true").unwrap_or(false),
        }
    }

    /// Set log level
    pub fn level<S: Into<String>>(mut self, level: S) -> Self {
        self.level = level.into();
        self
    }

    /// Set log file path
    pub fn file_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Enable span logging
    pub fn with_spans(mut self, enable: bool) -> Self {
        self.include_spans = enable;
        self
    }

    /// Enable JSON format
    pub fn json_format(mut self, enable: bool) -> Self {
        self.json_format = enable;
        self
    }

    pub(crate) fn filter(&self) -> Result<EnvFilter, Box<dyn std::error::Error + Send + Sync>> {
        // third-party crates stay at warn, or fully silent when logging is off
        let base = if self.level.eq_ignore_ascii_case("off") { "off" } else { "warn" };
        let mut filter = EnvFilter::from_default_env()
            .add_directive(base.parse()?)
            .add_directive(format!("sentifix_core={}", self.level).parse()?);
        for target in TARGETS {
            filter = filter.add_directive(format!("{}={}", target, self.level).parse()?);
        }
        Ok(filter)
    }

    /// Initialize the global tracing subscriber (safe for multiple calls)
    pub fn init(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let filter = self.filter()?;

        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.file_path {
            Some(path) => {
                let file_appender = RollingFileAppender::new(Rotation::DAILY,
                    path.parent().unwrap_or_else(|| std::path::Path::new(".")),
                    path.file_name().unwrap_or_else(|| std::ffi::OsStr::new("sentifix.log"))
                );

                if self.json_format {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(file_appender)
                            .with_span_events(span_events)
                        )
                        .try_init()
                        .map_err(|_| "Failed to initialize subscriber (already set)")?;
                } else {
                    // no colors in files
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(tracing_subscriber::fmt::layer()
                            .with_writer(file_appender)
                            .with_span_events(span_events)
                            .with_ansi(false)
                        )
                        .try_init()
                        .map_err(|_| "Failed to initialize subscriber (already set)")?;
                }
            }
            None => {
                // stdout belongs to the terminal UI and headless output
                if self.json_format {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(std::io::stderr)
                            .with_span_events(span_events)
                        )
                        .try_init()
                        .map_err(|_| "Failed to initialize subscriber (already set)")?;
                } else {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(tracing_subscriber::fmt::layer()
                            .event_format(ColoredFormatter)
                            .with_writer(std::io::stderr)
                            .with_ansi(true)
                        )
                        .try_init()
                        .map_err(|_| "Failed to initialize subscriber (already set)")?;
                }
            }
        }

        Ok(())
    }
}
