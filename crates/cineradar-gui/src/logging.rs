use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cineradar_core::config::AppConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `verbose`. With `to_file`, a daily-rotated copy is
/// written to the data directory; keep the returned guard alive until exit.
pub fn init(verbose: bool, to_file: bool) -> Option<WorkerGuard> {
    let default = if verbose {
        "cineradar=debug,cineradar_core=debug,cineradar_api=debug,cineradar_runtime=debug"
    } else {
        "cineradar=info,cineradar_core=info,cineradar_api=info,cineradar_runtime=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer());

    if !to_file {
        registry.init();
        return None;
    }

    let dir = AppConfig::data_dir().join("logs");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        registry.init();
        tracing::warn!(error = %e, dir = %dir.display(), "log directory unavailable, logging to stderr only");
        return None;
    }

    let appender = RollingFileAppender::new(Rotation::DAILY, &dir, "cineradar.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    registry
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();
    Some(guard)
}
