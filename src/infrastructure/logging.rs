use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LogFormat;

pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl From<&crate::config::LoggingConfig> for LoggingConfig {
    fn from(config: &crate::config::LoggingConfig) -> Self {
        Self {
            level: config.level.clone(),
            format: config.format.clone(),
        }
    }
}

/// Install the global subscriber; `RUST_LOG` takes precedence over the configured level
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init(),
    };

    if result.is_ok() {
        tracing::info!("Logging initialized with level: {}", config.level);
    }
}
