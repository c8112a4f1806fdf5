//! Tracing conventions for gridflow.
//!
//! Names the target prefix, standard span names, and standard structured
//! field names used across the pipeline, so consumers can filter and query
//! gridflow logs consistently. Subscriber setup is left to the consumer.

use tracing::Level;

/// Target prefix used by all gridflow tracing spans and events.
///
/// Consumers can use this to filter gridflow logs:
/// ```text
/// RUST_LOG=gridflow=debug
/// ```
pub const TARGET_PREFIX: &str = "gridflow";

/// Standard tracing span names used across the pipeline.
pub mod span_names {
    /// Root span for one table initialization attempt.
    pub const INITIALIZE: &str = "gridflow::initialize";
    /// Execution submission round-trip.
    pub const EXECUTE: &str = "gridflow::execute";
    /// First-page window read.
    pub const READ_WINDOW: &str = "gridflow::read_window";
    /// Result export round-trip.
    pub const EXPORT: &str = "gridflow::export";
}

/// Standard structured field names used in tracing events.
pub mod field_names {
    pub const FINGERPRINT: &str = "fingerprint";
    pub const PAGE_SIZE: &str = "page_size";
    pub const ROW_COUNT: &str = "row_count";
    pub const COL_COUNT: &str = "col_count";
    pub const ELAPSED_MS: &str = "elapsed_ms";
    pub const OUTCOME: &str = "outcome";
}

/// Parse a log level string (case-insensitive).
///
/// Recognized values: `trace`, `debug`, `info`, `warn`, `error`.
/// Returns `None` for unrecognized strings.
#[must_use]
pub fn parse_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Returns the recommended `tracing::Level` for the given environment.
///
/// Checks `GRIDFLOW_LOG_LEVEL` first, then falls back to the provided
/// default.
#[must_use]
pub fn level_from_env(default: Level) -> Level {
    std::env::var("GRIDFLOW_LOG_LEVEL")
        .ok()
        .and_then(|s| parse_level(&s))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_prefix_is_gridflow() {
        assert_eq!(TARGET_PREFIX, "gridflow");
    }

    #[test]
    fn span_names_are_consistent() {
        assert!(span_names::INITIALIZE.starts_with("gridflow::"));
        assert!(span_names::EXECUTE.starts_with("gridflow::"));
        assert!(span_names::READ_WINDOW.starts_with("gridflow::"));
        assert!(span_names::EXPORT.starts_with("gridflow::"));
    }

    #[test]
    fn parse_level_recognizes_valid_levels() {
        assert_eq!(parse_level("trace"), Some(Level::TRACE));
        assert_eq!(parse_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_level("info"), Some(Level::INFO));
        assert_eq!(parse_level("warn"), Some(Level::WARN));
        assert_eq!(parse_level("error"), Some(Level::ERROR));
    }

    #[test]
    fn parse_level_case_insensitive() {
        assert_eq!(parse_level("TRACE"), Some(Level::TRACE));
        assert_eq!(parse_level("Warn"), Some(Level::WARN));
    }

    #[test]
    fn parse_level_returns_none_for_invalid() {
        assert_eq!(parse_level("verbose"), None);
        assert_eq!(parse_level(""), None);
    }

    #[test]
    fn level_from_env_falls_back_to_default() {
        // GRIDFLOW_LOG_LEVEL is not set in the test environment.
        assert_eq!(level_from_env(Level::INFO), Level::INFO);
    }
}
