//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info,tower_http=info";

/// Build the log filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    filter_or_default(std::env::var(EnvFilter::DEFAULT_ENV).ok())
}

fn filter_or_default(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Returns `false` if one was already set.
pub fn try_init() -> bool {
    // JSON logs + timestamps, configurable via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let _ = try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn init_twice_is_a_no_op() {
        init();
        assert!(!try_init(), "a second install must be refused, not panic");
        init();
        ::tracing::info!("still logging after a second init");
    }

    #[test]
    fn missing_directives_fall_back_to_default() {
        assert_eq!(filter_or_default(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            filter_or_default(None).to_string(),
            EnvFilter::new(DEFAULT_FILTER).to_string()
        );
    }

    #[test]
    fn directives_override_default_unless_unparsable() {
        assert_eq!(
            filter_or_default(Some("debug".to_string())).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            filter_or_default(Some("cellar=loud".to_string())).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}
