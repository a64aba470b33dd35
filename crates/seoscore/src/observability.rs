//! Logging setup for the CLI.
//!
//! Two layers share one registry:
//! - a human-readable console layer on stderr, quiet unless `-v` is given
//! - a JSON-lines file layer at the configured log level, when a log
//!   location can be resolved and created
//!
//! `RUST_LOG` overrides both filters when set.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const ENV_LOG_PATH: &str = "SEOSCORE_LOG_PATH";
const ENV_LOG_DIR: &str = "SEOSCORE_LOG_DIR";
const LOG_FILE_PREFIX: &str = "seoscore";
const LOG_FILE_SUFFIX: &str = "jsonl";

/// Where file logs go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact file to append to; never rotated.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve log locations from the environment, then `config_log_dir`,
    /// then the platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(ENV_LOG_PATH)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let log_dir = std::env::var_os(ENV_LOG_DIR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(|| {
                seoscore_core::config::user_data_dir().map(|dir| dir.join("logs").into_std_path_buf())
            });
        Self { log_path, log_dir }
    }

    fn appender(&self) -> anyhow::Result<Option<RollingFileAppender>> {
        if let Some(ref path) = self.log_path {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let dir = dir.unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .with_context(|| format!("log path has no usable file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name)
                .build(dir)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            return Ok(Some(appender));
        }

        let Some(ref dir) = self.log_dir else {
            return Ok(None);
        };
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix(LOG_FILE_SUFFIX)
            .build(dir)
            .with_context(|| format!("failed to open log file in {}", dir.display()))?;
        Ok(Some(appender))
    }
}

/// Filters for the console and file layers.
#[derive(Debug)]
pub struct LogFilters {
    console: EnvFilter,
    file: EnvFilter,
}

/// Build filters from CLI flags and the configured level.
///
/// The console shows warnings by default; each `-v` adds a level. `-q`
/// limits both layers to errors.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> LogFilters {
    let console_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let file_level = if quiet {
        "error"
    } else if verbose >= 2 {
        console_level
    } else {
        config_level
    };

    LogFilters {
        console: from_env_or(console_level),
        file: from_env_or(file_level),
    }
}

fn from_env_or(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Keeps the background log writer alive; drop it last.
#[derive(Debug)]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// A log location that cannot be created falls back to console-only output
/// with a warning.
pub fn init_observability(
    cfg: &ObservabilityConfig,
    filters: LogFilters,
) -> anyhow::Result<ObservabilityGuard> {
    let (appender, file_error) = match cfg.appender() {
        Ok(appender) => (appender, None),
        Err(err) => (None, Some(err)),
    };
    let (writer, guard) = match appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filters.console);
    let file_layer = writer.map(|writer| {
        fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(filters.file)
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    if let Some(err) = file_error {
        tracing::warn!(error = %format!("{err:#}"), "file logging disabled");
    }

    Ok(ObservabilityGuard { _file: guard })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn explicit_dir_override_is_used() {
        let cfg = ObservabilityConfig::from_env_with_overrides(Some(PathBuf::from("/tmp/x")));
        if std::env::var_os(ENV_LOG_DIR).is_none() {
            assert_eq!(cfg.log_dir, Some(PathBuf::from("/tmp/x")));
        }
    }

    #[test]
    fn quiet_wins_over_verbose() {
        let filters = env_filter(true, 3, "debug");
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(filters.console.max_level_hint(), Some(LevelFilter::ERROR));
            assert_eq!(filters.file.max_level_hint(), Some(LevelFilter::ERROR));
        }
    }

    #[test]
    fn file_level_follows_config_until_very_verbose() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filters = env_filter(false, 0, "info");
        assert_eq!(filters.console.max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(filters.file.max_level_hint(), Some(LevelFilter::INFO));

        let filters = env_filter(false, 2, "info");
        assert_eq!(filters.console.max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(filters.file.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn appender_creates_log_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("logs");
        let cfg = ObservabilityConfig {
            log_path: None,
            log_dir: Some(dir.clone()),
        };
        assert!(cfg.appender().unwrap().is_some());
        assert!(dir.is_dir());
    }

    #[test]
    fn log_path_writes_to_exact_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("run.jsonl");
        let cfg = ObservabilityConfig {
            log_path: Some(path.clone()),
            log_dir: None,
        };
        assert!(cfg.appender().unwrap().is_some());
        assert!(path.is_file());
    }

    #[test]
    fn log_path_naming_a_directory_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let cfg = ObservabilityConfig {
            log_path: Some(tmp.path().to_path_buf()),
            log_dir: None,
        };
        let err = cfg.appender().unwrap_err();
        assert!(format!("{err:#}").contains("failed to open log file"));
    }

    #[test]
    fn no_location_means_no_appender() {
        let cfg = ObservabilityConfig::default();
        assert!(cfg.appender().unwrap().is_none());
    }
}
