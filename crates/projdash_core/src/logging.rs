//! Logging bootstrap for the dashboard core.
//!
//! # Responsibility
//! - Start the rolling file logger once per process.
//! - Capture panics as sanitized, length-capped log events.
//!
//! # Invariants
//! - Repeated init with the same level and directory is a no-op.
//! - Re-init with a different level or directory is rejected.
//! - Init never panics.
//! - Library code logs `key=value` metadata only, never user-entered text.

use crate::config::DashboardConfig;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "projdash";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    level: &'static str,
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

/// Starts file logging at `level` under `log_dir`.
///
/// # Errors
/// - `level` is not one of `trace|debug|info|warn|error`.
/// - `log_dir` is blank, relative, or cannot be created.
/// - Logging is already active with another level or directory.
/// - The logger backend fails to start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = normalize_level(level)?;
    let log_dir = normalize_log_dir(log_dir)?;

    let active = LOGGER.get_or_try_init(|| start_logger(level, &log_dir))?;
    ensure_same_config(active, level, &log_dir)
}

/// Starts logging from `config` when it names a log directory.
///
/// Returns `Ok(false)` when no directory is configured.
pub fn init_from_config(config: &DashboardConfig) -> Result<bool, String> {
    match config.log_dir.as_deref() {
        Some(dir) => init_logging(&config.log_level, dir).map(|()| true),
        None => Ok(false),
    }
}

/// `(level, log_dir)` of the active logger, `None` before init.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGER
        .get()
        .map(|active| (active.level, active.log_dir.clone()))
}

/// `debug` in debug builds, `info` in release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

pub(crate) fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

fn start_logger(level: &'static str, log_dir: &Path) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook_once();
    info!(
        "event=logging_init module=core status=ok level={} version={} build_mode={}",
        level,
        env!("CARGO_PKG_VERSION"),
        if cfg!(debug_assertions) { "debug" } else { "release" }
    );

    Ok(ActiveLogger {
        level,
        log_dir: log_dir.to_path_buf(),
        _handle: handle,
    })
}

fn ensure_same_config(active: &ActiveLogger, level: &str, log_dir: &Path) -> Result<(), String> {
    if active.log_dir != log_dir {
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            active.log_dir.display(),
            log_dir.display()
        ));
    }
    if active.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            active.level, level
        ));
    }
    Ok(())
}

fn install_panic_hook_once() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = panic_info.payload().downcast_ref::<String>() {
            message.clone()
        } else {
            "non-string panic payload".to_string()
        };
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location,
            sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
        );
        previous_hook(panic_info);
    }));
}

fn sanitize_message(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    let mut truncated = flattened.chars().take(max_chars).collect::<String>();
    if flattened.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::{
        init_from_config, init_logging, logging_status, normalize_level, normalize_log_dir,
        sanitize_message,
    };
    use crate::config::DashboardConfig;

    #[test]
    fn normalize_level_accepts_aliases_and_case() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert!(normalize_level("verbose").is_err());
    }

    #[test]
    fn relative_log_dir_is_rejected() {
        let error = normalize_log_dir("logs/dev").unwrap_err();
        assert!(error.contains("absolute"));
        assert!(normalize_log_dir("  ").is_err());
    }

    #[test]
    fn sanitize_flattens_newlines_and_truncates() {
        let sanitized = sanitize_message("line1\nline2\rline3", 8);
        assert!(!sanitized.contains('\n'));
        assert!(!sanitized.contains('\r'));
        assert!(sanitized.ends_with("..."));
        assert_eq!(sanitize_message("short", 8), "short");
    }

    #[test]
    fn config_without_log_dir_skips_init() {
        assert!(!init_from_config(&DashboardConfig::default()).unwrap());
    }

    #[test]
    fn init_is_idempotent_and_rejects_conflicts() {
        let first = tempfile::tempdir().expect("temp dir should be created");
        let second = tempfile::tempdir().expect("temp dir should be created");
        let first_dir = first.path().to_str().expect("utf-8 temp path").to_string();
        let second_dir = second.path().to_str().expect("utf-8 temp path").to_string();

        init_logging("info", &first_dir).expect("first init should succeed");
        init_logging("INFO", &first_dir).expect("same config should be idempotent");

        let level_error = init_logging("debug", &first_dir).unwrap_err();
        assert!(level_error.contains("refusing to switch"));
        let dir_error = init_logging("info", &second_dir).unwrap_err();
        assert!(dir_error.contains("refusing to switch"));

        let (level, dir) = logging_status().expect("logging should be active");
        assert_eq!(level, "info");
        assert_eq!(dir, first.path());
    }
}
