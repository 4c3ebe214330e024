//! Tracing setup for binaries embedding the wizard

use std::path::PathBuf;

use crate::config::WizardConfig;

const LOG_FILE_PREFIX: &str = "wizardry.log";

/// Where rotated log files are written
///
/// - macOS: ~/Library/Application Support/Wizardry/logs/
/// - Windows: %APPDATA%/Wizardry/logs/
/// - Linux: ~/.config/Wizardry/logs/
pub fn log_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("Wizardry").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Initialize tracing with file rotation
///
/// `RUST_LOG` wins over the configured filter. Debug builds also log to the
/// console; release builds log to the daily-rotated file only.
pub fn init_tracing(config: &WizardConfig) {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = log_dir();

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    // Files named: wizardry.log.YYYY-MM-DD
    let file_appender = rolling::daily(&log_dir, LOG_FILE_PREFIX);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    }

    tracing::info!("Log directory: {}", log_dir.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir() {
        let dir = log_dir();
        assert!(dir.ends_with("logs"));
    }
}
