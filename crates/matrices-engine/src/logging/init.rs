use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` provides one.
///
/// wgpu is chatty at `info`; keep its internals at `warn`.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "debug",
/// "matrices_engine=debug,wgpu=warn").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Resolves the effective filter: explicit config, then `RUST_LOG`, then [`DEFAULT_FILTER`].
    pub fn resolve_filter(&self, rust_log: Option<String>) -> String {
        let non_blank = |f: &String| !f.trim().is_empty();
        self.env_filter
            .clone()
            .filter(non_blank)
            .or_else(|| rust_log.filter(non_blank))
            .unwrap_or_else(|| DEFAULT_FILTER.to_string())
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; later calls are ignored. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter(std::env::var("RUST_LOG").ok());

        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .format_timestamp_millis()
            .init();

        log::debug!("logging initialized ({filter})");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let cfg = LoggingConfig {
            env_filter: Some("trace".into()),
            ..LoggingConfig::default()
        };
        assert_eq!(cfg.resolve_filter(Some("warn".into())), "trace");
    }

    #[test]
    fn rust_log_used_when_unset() {
        let cfg = LoggingConfig::default();
        assert_eq!(cfg.resolve_filter(Some("warn".into())), "warn");
    }

    #[test]
    fn blank_explicit_filter_defers_to_rust_log() {
        let cfg = LoggingConfig {
            env_filter: Some(String::new()),
            ..LoggingConfig::default()
        };
        assert_eq!(cfg.resolve_filter(Some("warn".into())), "warn");
    }

    #[test]
    fn blank_falls_back_to_default() {
        let cfg = LoggingConfig::default();
        assert_eq!(cfg.resolve_filter(None), DEFAULT_FILTER);
        assert_eq!(cfg.resolve_filter(Some("  ".into())), DEFAULT_FILTER);
    }
}
