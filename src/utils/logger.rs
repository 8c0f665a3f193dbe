use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::LogConfig;

/// Installs the global subscriber.
///
/// Console logs go to stderr: stdout carries the migration transcript the
/// operator copies from. `RUST_LOG` takes precedence over the configured levels.
pub fn init_logging(log_config: &LogConfig) {
    let file_layer = if log_config.file_enabled {
        log_config.dir.as_ref().map(|dir| {
            let file_appender = tracing_appender::rolling::daily(dir, "migcat.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Flushing happens on drop; the subscriber lives until exit
            std::mem::forget(guard);

            fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .boxed()
        })
    } else {
        None
    };

    let console_layer = match log_config.console_format.as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed(),
        _ => fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
            .boxed(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_config.filter_directives()));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();
}
