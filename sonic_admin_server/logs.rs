use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Config;

pub const LOG_FILE_PREFIX: &str = "sonic-admin.log";

/// Console plus daily file output, filtered by `RUST_LOG` or else `config.log_filter`.
fn preview_subscriber(config: &Config) -> (impl Subscriber + Send + Sync + 'static, WorkerGuard) {
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|err| {
            eprintln!("invalid log filter {:?}: {err}", config.log_filter);
            EnvFilter::new("info")
        });

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(fmt::layer().with_writer(std::io::stdout).with_target(true));

    (subscriber, guard)
}

/// Installs the global subscriber.
///
/// Buffered file lines are flushed while the returned guard is alive; keep it until shutdown.
pub fn setup_logging(config: &Config) -> WorkerGuard {
    let (subscriber, guard) = preview_subscriber(config);
    subscriber.init();
    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_events_reach_the_configured_log_dir() {
        let dir = std::env::temp_dir().join(format!("sonic-admin-logs-{}", Uuid::new_v4()));
        let config = Config {
            log_dir: dir.clone(),
            log_filter: "error".to_string(),
            ..Default::default()
        };

        let (subscriber, guard) = preview_subscriber(&config);
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(page = "dashboard", "fixture decode failed");
        });
        drop(guard);

        let log_file = std::fs::read_dir(&dir)
            .unwrap()
            .filter_map(Result::ok)
            .find(|entry| entry.file_name().to_string_lossy().starts_with(LOG_FILE_PREFIX))
            .unwrap();
        let contents = std::fs::read_to_string(log_file.path()).unwrap();
        assert!(contents.contains("fixture decode failed"));
        assert!(contents.contains("page=\"dashboard\""));
        assert!(!contents.contains("\u{1b}["));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
