//! Logging bootstrap for the kinship engine.
//!
//! # Responsibility
//! - Start file-based rolling logs once per process.
//! - Capture panics as sanitized log events.
//!
//! # Invariants
//! - Init is idempotent for the same level and directory.
//! - Init never panics.
//! - Reconfiguration with another level or directory is rejected.
//! - Log lines carry metadata only (`event=... module=... status=...`),
//!   never whole relation chains.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info, Level};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "kinship";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;
const BUILD_PROFILE: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "release"
};

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

/// Validated `init_logging` arguments.
#[derive(Debug, PartialEq, Eq)]
struct LogSettings {
    level: &'static str,
    log_dir: PathBuf,
}

impl LogSettings {
    fn parse(level: &str, log_dir: &str) -> Result<Self, String> {
        Ok(Self {
            level: parse_level(level)?,
            log_dir: parse_log_dir(log_dir)?,
        })
    }
}

struct LoggingState {
    settings: LogSettings,
    _logger: LoggerHandle,
}

impl LoggingState {
    fn ensure_same(&self, requested: &LogSettings) -> Result<(), String> {
        let active = &self.settings;
        if active.log_dir != requested.log_dir {
            return Err(format!(
                "logging already initialized at `{}`; refusing to switch to `{}`",
                active.log_dir.display(),
                requested.log_dir.display()
            ));
        }
        if active.level != requested.level {
            return Err(format!(
                "logging already initialized with level `{}`; refusing to switch to `{}`",
                active.level, requested.level
            ));
        }
        Ok(())
    }
}

/// Initializes logging with a level and an absolute log directory.
///
/// # Errors
/// - Unsupported `level`.
/// - Empty or relative `log_dir`, or a directory that cannot be created.
/// - Logger backend start failure.
/// - A previous successful init used another level or directory.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let requested = LogSettings::parse(level, log_dir)?;

    if let Some(state) = LOGGING_STATE.get() {
        return state.ensure_same(&requested);
    }

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(&requested))?;
    state.ensure_same(&requested)
}

fn start_logger(settings: &LogSettings) -> Result<LoggingState, String> {
    let LogSettings { level, log_dir } = settings;
    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let logger = Logger::try_with_str(level)
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
        "event=app_start module=kinship status=ok platform={} build_mode={BUILD_PROFILE} version={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );
    info!(
        "event=logging_init module=kinship status=ok level={level} log_dir={}",
        log_dir.display()
    );

    Ok(LoggingState {
        settings: LogSettings {
            level: *level,
            log_dir: log_dir.clone(),
        },
        _logger: logger,
    })
}

/// Returns `(level, log_dir)` once logging is active.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.settings.level, state.settings.log_dir.clone()))
}

/// `debug` in debug builds, `info` in release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Maps a case-insensitive level name onto the spelling `flexi_logger` expects.
///
/// `warning` is accepted as an alias of `warn`.
fn parse_level(level: &str) -> Result<&'static str, String> {
    let trimmed = level.trim();
    let parsed = if trimmed.eq_ignore_ascii_case("warning") {
        Ok(Level::Warn)
    } else {
        trimmed.parse::<Level>()
    };
    match parsed {
        Ok(Level::Trace) => Ok("trace"),
        Ok(Level::Debug) => Ok("debug"),
        Ok(Level::Info) => Ok("info"),
        Ok(Level::Warn) => Ok("warn"),
        Ok(Level::Error) => Ok("error"),
        Err(_) => Err(format!(
            "unsupported log level `{trimmed}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn parse_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    match log_dir.trim() {
        "" => Err("log_dir cannot be empty".to_string()),
        dir if Path::new(dir).is_absolute() => Ok(PathBuf::from(dir)),
        dir => Err(format!("log_dir must be an absolute path, got `{dir}`")),
    }
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        // Payloads may echo caller input.
        let payload = single_line(payload_text(panic_info.payload()), MAX_PANIC_PAYLOAD_CHARS);
        error!(
            "event=panic_captured module=kinship status=error location={location} payload={payload}"
        );
        previous_hook(panic_info);
    }));
}

fn payload_text(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

/// Replaces line breaks with spaces and keeps at most `max_chars` characters.
fn single_line(value: &str, max_chars: usize) -> String {
    let mut out: String = value
        .chars()
        .take(max_chars)
        .map(|ch| if matches!(ch, '\n' | '\r') { ' ' } else { ch })
        .collect();
    if value.chars().nth(max_chars).is_some() {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{
        default_log_level, init_logging, logging_status, parse_level, payload_text, single_line,
        LogSettings,
    };
    use std::path::PathBuf;

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(parse_level("INFO").expect("INFO parses"), "info");
        assert_eq!(parse_level(" warning ").expect("warning parses"), "warn");
        assert_eq!(parse_level("Trace").expect("Trace parses"), "trace");
        let error = parse_level("verbose").expect_err("verbose is not a level");
        assert!(error.contains("`verbose`"));
    }

    #[test]
    fn settings_require_an_absolute_directory() {
        assert!(LogSettings::parse("info", "  ").is_err());
        let error = LogSettings::parse("info", "logs/dev").expect_err("relative dir rejected");
        assert!(error.contains("absolute"));

        let settings = LogSettings::parse("ERROR", " /tmp/kinship ").expect("valid settings");
        assert_eq!(settings.level, "error");
        assert_eq!(settings.log_dir, PathBuf::from("/tmp/kinship"));
    }

    #[test]
    fn panic_payloads_become_single_capped_lines() {
        assert_eq!(single_line("舅舅\n的\r儿子和女儿", 5), "舅舅 的 ...");
        assert_eq!(single_line("外婆", 5), "外婆");

        let borrowed: Box<dyn std::any::Any + Send> = Box::new("rule table");
        assert_eq!(payload_text(borrowed.as_ref()), "rule table");
        let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        assert_eq!(payload_text(owned.as_ref()), "owned");
        let other: Box<dyn std::any::Any + Send> = Box::new(7_u8);
        assert_eq!(payload_text(other.as_ref()), "non-string panic payload");
    }

    #[test]
    fn default_level_is_supported() {
        assert!(parse_level(default_log_level()).is_ok());
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_conflicts() {
        let first = tempfile::tempdir().expect("temp dir");
        let second = tempfile::tempdir().expect("temp dir");
        let first_dir = first.path().to_str().expect("utf-8 temp dir").to_string();
        let second_dir = second.path().to_str().expect("utf-8 temp dir").to_string();

        init_logging("info", &first_dir).expect("first init succeeds");
        init_logging("INFO", &first_dir).expect("same config is idempotent");

        let level_error = init_logging("debug", &first_dir).expect_err("level conflict fails");
        assert!(level_error.contains("refusing to switch"));
        let dir_error = init_logging("info", &second_dir).expect_err("dir conflict fails");
        assert!(dir_error.contains("refusing to switch"));

        let (level, dir) = logging_status().expect("logging is active");
        assert_eq!(level, "info");
        assert_eq!(dir, first.path());
    }
}
