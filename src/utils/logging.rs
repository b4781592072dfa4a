use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("tracing subscriber already installed: {0}")]
    Tracing(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Parse a configured level, falling back to `debug` when it is not recognised
pub fn parse_level_filter(log_level_str: &str) -> log::LevelFilter {
    log_level_str
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Debug)
}

/// Same fallback as [`parse_level_filter`], for the request tracing side
pub fn parse_tracing_filter(log_level_str: &str) -> LevelFilter {
    log_level_str
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::DEBUG)
}

/// Initialize the logger with the specified log level and output file
pub fn initialize_logger<P: AsRef<Path>>(
    log_path: P,
    log_level_str: &str,
) -> Result<(), LoggingError> {
    let log_level = parse_level_filter(log_level_str);

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let log_file = Mutex::new(log_file);

    let logger = env_logger::Builder::new()
        .format(move |buf, record| {
            let line = format_line(&Utc::now().to_rfc3339(), record.level(), record.args());

            // Write to log file
            if let Ok(mut file) = log_file.lock() {
                let _ = writeln!(file, "{line}");
            }

            // Also write to stderr (console)
            writeln!(buf, "{line}")
        })
        .filter_level(log_level)
        .build();

    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(log_level);

    Ok(())
}

/// Install the subscriber that renders per-request spans from the HTTP trace layer
pub fn initialize_request_tracing(log_level_str: &str) -> Result<(), LoggingError> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(parse_tracing_filter(log_level_str))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn format_line(timestamp: &str, level: log::Level, args: &std::fmt::Arguments<'_>) -> String {
    format!("{timestamp} [{level}] - {args}")
}
