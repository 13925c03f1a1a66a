//! Log bridge for font-previewer.
//!
//! Routes every `log::info!()` / `log::debug!()` etc. to a debug log file so
//! preview output on stdout stays clean:
//! - `/tmp/font_previewer_debug.log` on Unix/macOS
//! - `%TEMP%\font_previewer_debug.log` on Windows
//!
//! When `RUST_LOG` is set, records are mirrored to stderr as well.
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG`, then the config
//! file's `log_level`, then off.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use font_previewer_config::LogLevel;
use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;

const LOG_FILE_NAME: &str = "font_previewer_debug.log";

/// Location of the debug log file.
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    let path = PathBuf::from("/tmp").join(LOG_FILE_NAME);
    #[cfg(not(unix))]
    let path = std::env::temp_dir().join(LOG_FILE_NAME);
    path
}

struct LogBridge {
    level: LevelFilter,
    file: Option<Mutex<File>>,
    mirror_to_stderr: bool,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        if let Some(file) = &self.file {
            let mut file = file.lock();
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_to_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            let _ = file.lock().flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Level named by a `RUST_LOG` value.
///
/// Accepts a bare level (`debug`) or directives (`font_previewer=trace`); the
/// last directive's level wins. Anything unrecognised means `info`.
fn level_from_rust_log(value: &str) -> LogLevel {
    value
        .split(',')
        .filter_map(|directive| {
            let level = directive.rsplit('=').next().unwrap_or(directive);
            LogLevel::from_name(level)
        })
        .last()
        .unwrap_or(LogLevel::Info)
}

/// Pick the effective level from the three sources, highest precedence first.
pub fn resolve_level(
    cli_level: Option<LogLevel>,
    rust_log: Option<&str>,
    config_level: Option<LogLevel>,
) -> LevelFilter {
    cli_level
        .or_else(|| rust_log.map(level_from_rust_log))
        .or(config_level)
        .unwrap_or_default()
        .to_level_filter()
}

/// Install the log bridge. Later calls are no-ops.
pub fn init_log_bridge(cli_level: Option<LogLevel>, config_level: Option<LogLevel>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let level = resolve_level(cli_level, rust_log.as_deref(), config_level);

    let bridge = BRIDGE.get_or_init(|| {
        let file = if level == LevelFilter::Off {
            None
        } else {
            // A log file that cannot be opened only disables file output.
            OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(log_path())
                .ok()
                .map(Mutex::new)
        };
        LogBridge {
            level,
            file,
            mirror_to_stderr: rust_log.is_some() && level != LevelFilter::Off,
        }
    });

    if log::set_logger(bridge).is_ok() {
        log::set_max_level(bridge.level);
        log::info!(
            "font-previewer {} debug session started (level={})",
            crate::VERSION,
            bridge.level
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_wins() {
        let level = resolve_level(Some(LogLevel::Trace), Some("error"), Some(LogLevel::Warn));
        assert_eq!(level, LevelFilter::Trace);
    }

    #[test]
    fn test_rust_log_beats_config() {
        assert_eq!(
            resolve_level(None, Some("debug"), Some(LogLevel::Warn)),
            LevelFilter::Debug
        );
        assert_eq!(
            resolve_level(None, Some("font_previewer=warn,zip=error"), None),
            LevelFilter::Error
        );
        assert_eq!(resolve_level(None, Some("???"), None), LevelFilter::Info);
    }

    #[test]
    fn test_config_then_off() {
        assert_eq!(
            resolve_level(None, None, Some(LogLevel::Info)),
            LevelFilter::Info
        );
        assert_eq!(resolve_level(None, None, None), LevelFilter::Off);
    }

    #[test]
    fn test_log_path_file_name() {
        assert!(log_path().ends_with(LOG_FILE_NAME));
    }
}
