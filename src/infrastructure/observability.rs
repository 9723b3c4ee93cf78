//! Log filter construction for the server binary.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Builds the filter from `RUST_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    env_filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok())
}

/// A global level in `directives` (e.g. `debug`) is honoured as is; an
/// empty or unparseable value falls back to [`DEFAULT_LOG_DIRECTIVE`].
pub fn env_filter_from(directives: Option<String>) -> EnvFilter {
    match directives.filter(|raw| !raw.trim().is_empty()) {
        // The subscriber is not installed yet, so report straight to stderr
        Some(raw) => EnvFilter::try_new(&raw).unwrap_or_else(|e| {
            eprintln!("Ignoring invalid log filter '{}': {}", raw, e);
            EnvFilter::new(DEFAULT_LOG_DIRECTIVE)
        }),
        None => EnvFilter::new(DEFAULT_LOG_DIRECTIVE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_global_debug_is_not_capped_at_info() {
        let filter = env_filter_from(Some("debug".to_string()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_missing_or_blank_filter_defaults_to_info() {
        assert_eq!(env_filter_from(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            env_filter_from(Some("  ".to_string())).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn test_target_scoped_filter_is_kept() {
        let filter = env_filter_from(Some("warn,artisan_pricing=trace".to_string()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}
