use crate::dir::FitrackDirectory;
use std::{error::Error, fs::File, str::FromStr, sync::Arc};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
    util::TryInitError,
};

const GUI_LOG_FILE_NAME: &str = "fitrack-gui.log";

// Targets whose events only add noise to our logs.
const IGNORED_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "mio",
    "cosmic_text",
    "polling",
    "calloop",
    "async_io",
    "rustls",
    "hyper",
    "hyper_util",
    "reqwest",
    "tokio",
];

#[derive(Debug)]
pub enum LoggerError {
    Io(std::io::Error),
    Init(TryInitError),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to open log file: {}", e),
            Self::Init(e) => write!(f, "Failed to install logger: {}", e),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<std::io::Error> for LoggerError {
    fn from(e: std::io::Error) -> LoggerError {
        LoggerError::Io(e)
    }
}

impl From<TryInitError> for LoggerError {
    fn from(e: TryInitError) -> LoggerError {
        LoggerError::Init(e)
    }
}

pub fn setup_logger(
    log_level: filter::LevelFilter,
    datadir: &FitrackDirectory,
) -> Result<(), LoggerError> {
    let log_path = datadir.path().join(GUI_LOG_FILE_NAME);

    let file = File::create(log_path)?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                // Rejects events of both layers whose target starts with an ignored prefix.
                .with_filter(filter::filter_fn(|metadata| {
                    !IGNORED_TARGETS
                        .iter()
                        .any(|prefix| metadata.target().starts_with(prefix))
                })),
        )
        .try_init()?;

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, Box<dyn Error>> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}
