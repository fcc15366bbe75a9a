/// Logging: stderr by default, or a daily rolling file when a log directory
/// is configured. stdout is reserved for JSON output.
///
/// `RUST_LOG` overrides the configured filter.
use crate::config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_PREFIX: &str = "churn.log";

/// Build the filter from `RUST_LOG` if set, else from config. A bad config
/// directive falls back to the default rather than disabling logging.
pub fn build_filter(cfg: &LoggingConfig) -> EnvFilter {
    if let Ok(env) = EnvFilter::try_from_default_env() {
        return env;
    }
    EnvFilter::try_new(&cfg.filter).unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{}': {}, using defaults", cfg.filter, e);
        EnvFilter::new("churn_risk_lib=info")
    })
}

/// Install the global subscriber. The returned guard must be held for the
/// life of the process when logging to a file; dropping it flushes.
pub fn init(cfg: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = build_filter(cfg);

    match &cfg.directory {
        Some(dir) => {
            if let Err(e) = std::fs::create_dir_all(dir) {
                eprintln!("Could not create log directory {}: {}, logging to stderr", dir.display(), e);
                init_stderr(filter);
                return None;
            }
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(non_blocking)
                .with_ansi(false) // log files should not contain ANSI colour codes
                .try_init();
            install_panic_hook();
            Some(guard)
        }
        None => {
            init_stderr(filter);
            None
        }
    }
}

fn init_stderr(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    install_panic_hook();
}

/// Log panics through tracing before the process dies.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());
        let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        tracing::error!("PANIC at {}: {}", location, message);
        default_hook(info);
    }));
}
