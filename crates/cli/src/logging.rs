use mdqmd_core::config::ResolvedConfig;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static LOG_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> =
    Mutex::new(None);

/// Install the stderr layer and, when `[logging].file` is set, a file layer.
///
/// `verbose` lifts the stderr level to at least `debug`.
pub fn init(cfg: &ResolvedConfig, verbose: bool) {
    let configured = parse_level(&cfg.logging.level).unwrap_or(LevelFilter::INFO);
    let stderr_level = if verbose { configured.max(LevelFilter::DEBUG) } else { configured };

    let stderr_filter =
        EnvFilter::builder().with_default_directive(stderr_level.into()).from_env_lossy();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_filter(stderr_filter);

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let Some(path) = cfg.logging.file.as_ref() else {
        registry.init();
        return;
    };

    let file_level = cfg
        .logging
        .file_level
        .as_deref()
        .and_then(parse_level)
        .unwrap_or(stderr_level);

    let file_filter =
        EnvFilter::builder().with_default_directive(file_level.into()).from_env_lossy();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Failed to create log directory {}: {}", parent.display(), e);
            std::process::exit(1);
        }
    }

    let file = File::create(path).unwrap_or_else(|e| {
        eprintln!("Failed to create log file {}: {}", path.display(), e);
        std::process::exit(1);
    });

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    if let Ok(mut g) = LOG_GUARD.lock() {
        *g = Some(guard);
    }

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(file_filter);

    registry.with(file_layer).init();
}

/// Drop the file writer guard so buffered lines reach the log file.
pub fn flush() {
    if let Ok(mut g) = LOG_GUARD.lock() {
        g.take();
    }
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("error"), Some(LevelFilter::ERROR));
        assert_eq!(parse_level("WARN"), Some(LevelFilter::WARN));
        assert_eq!(parse_level("Info"), Some(LevelFilter::INFO));
        assert_eq!(parse_level("debug"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level("trace"), Some(LevelFilter::TRACE));
        assert_eq!(parse_level("off"), Some(LevelFilter::OFF));
        assert_eq!(parse_level("loud"), None);
        assert_eq!(parse_level(""), None);
    }

    #[test]
    fn verbose_never_lowers_a_finer_level() {
        assert_eq!(LevelFilter::TRACE.max(LevelFilter::DEBUG), LevelFilter::TRACE);
        assert_eq!(LevelFilter::WARN.max(LevelFilter::DEBUG), LevelFilter::DEBUG);
    }
}
