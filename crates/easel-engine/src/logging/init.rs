use std::sync::Once;

use log::LevelFilter;

/// Logger configuration for hosts that drive sketches.
///
/// `filter` uses the `env_logger` directive syntax, for example
/// `"easel_sketch=trace,easel_engine=debug"`. Sketch hosts usually print
/// scene dumps on stdout, so timestamps are off unless asked for.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    /// Level used when neither `filter` nor `RUST_LOG` is set.
    pub default_level: LevelFilter,
    pub timestamps: bool,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            default_level: LevelFilter::Info,
            timestamps: false,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Config with explicit directives, ignoring `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { filter: Some(filter.into()), ..Self::default() }
    }

    pub fn with_timestamps(mut self, on: bool) -> Self {
        self.timestamps = on;
        self
    }
}

/// Where the active filter came from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterSource {
    Directives(String),
    Level(LevelFilter),
}

/// Precedence: explicit config, then `RUST_LOG`, then the default level.
fn resolve_filter(config: &LoggingConfig, env: Option<String>) -> FilterSource {
    config
        .filter
        .clone()
        .or(env)
        .filter(|d| !d.trim().is_empty())
        .map_or(FilterSource::Level(config.default_level), FilterSource::Directives)
}

static INIT: Once = Once::new();

/// Installs the `env_logger` backend once. Later calls are ignored, and a
/// logger installed by someone else is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match resolve_filter(&config, std::env::var("RUST_LOG").ok()) {
            FilterSource::Directives(d) => builder.parse_filters(&d),
            FilterSource::Level(level) => builder.filter_level(level),
        };

        if !config.timestamps {
            builder.format_timestamp(None);
        }
        builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
