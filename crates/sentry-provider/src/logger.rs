use crate::error::{ProviderError, Result as ProviderResult};

use std::path::Path;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use sentry_config::LoggingConfig;

/// Install the global logger for the provider process.
///
/// Output goes to `config.file` when set (plain, appended), otherwise to
/// stdout, colored when `config.colored` is true. Fails if a logger is
/// already installed.
pub fn initialize(config: &LoggingConfig) -> ProviderResult<()> {
    dispatch(config)?
        .apply()
        .map_err(|e| ProviderError::Logging {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match config.file.as_deref() {
        Some(path) => info!("Logger initialized: level={}, file={}", config.level, path),
        None => info!("Logger initialized: level={}, stdout", config.level),
    }

    Ok(())
}

/// Build the dispatch without installing it.
pub fn dispatch(config: &LoggingConfig) -> ProviderResult<Dispatch> {
    let base_dispatch = Dispatch::new().level(config.level.into());

    let output = if let Some(ref log_path) = config.file {
        plain_format().chain(open_log_file(Path::new(log_path))?)
    } else if config.colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = colors.color(record.level()),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(std::io::stdout())
    } else {
        plain_format().chain(std::io::stdout())
    };

    Ok(base_dispatch.chain(output))
}

fn plain_format() -> Dispatch {
    Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "[{date} - {level}] {message} [{file}:{line}]",
            date = humantime::format_rfc3339(SystemTime::now()),
            level = record.level(),
            message = message,
            file = record.file().unwrap_or("unknown"),
            line = record.line().unwrap_or(0),
        ))
    })
}

fn open_log_file(path: &Path) -> ProviderResult<std::fs::File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ProviderError::Logging {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}
