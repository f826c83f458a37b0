//! Global logging module for the token filter
//!
//! Thread-safe global logging with level gating, structured JSON output, and
//! a clean macro interface. Filtering itself never fails because of logging;
//! every entry point degrades to a no-op or stderr fallback when the global
//! service is absent.

pub mod codes;
pub mod events;
pub mod macros;
pub mod service;

use std::env;
use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Initialize the global logging service from the environment
pub fn init_global_logging() -> Result<(), String> {
    let service = Arc::new(LoggingService::with_config());
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

/// Initialize with a custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to the global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Minimum log level from `CPD_LOG_LEVEL` (defaults to warnings)
pub fn min_log_level() -> LogLevel {
    env::var("CPD_LOG_LEVEL")
        .ok()
        .and_then(|v| LogLevel::from_str(&v))
        .unwrap_or(LogLevel::Warning)
}

/// Whether JSON output is requested via `CPD_LOG_JSON`
pub fn use_structured_logging() -> bool {
    env::var("CPD_LOG_JSON")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn dispatch(event: LogEvent) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    } else if event.is_error() {
        eprintln!("[ERROR] FALLBACK: {}", event.format());
    }
}

fn build_event(mut event: LogEvent, context: Vec<(&str, &str)>) -> LogEvent {
    for (key, value) in context {
        event = event.with_context(key, value);
    }
    event
}

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    dispatch(build_event(LogEvent::error(code, message), context));
}

/// Log warning with context (used by log_warning! macro)
pub fn log_warning_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    dispatch(build_event(LogEvent::warning(code, message), context));
}

/// Log info with context (used by log_info! macro)
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    let event = LogEvent::info(Code::new("I000"), message);
    dispatch(build_event(event, context));
}

/// Log debug with context (used by log_debug! macro)
pub fn log_debug_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    dispatch(build_event(LogEvent::debug(code, message), context));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_level_default() {
        // Without CPD_LOG_LEVEL set the default gate is warnings
        if env::var("CPD_LOG_LEVEL").is_err() {
            assert_eq!(min_log_level(), LogLevel::Warning);
        }
    }

    #[test]
    fn test_dispatch_without_initialization_does_not_panic() {
        log_debug_with_context(
            codes::filtering::SUPPRESSION_ENABLED,
            "no logger installed",
            vec![("line", "3")],
        );
    }

    #[test]
    fn test_global_initialization_is_idempotent_failure() {
        let memory = Arc::new(MemoryLogger::new());
        let service = Arc::new(LoggingService::new(memory, LogLevel::Debug));
        // First initialization may race with other tests; either way a second
        // attempt must report the conflict rather than replace the service.
        let _ = init_global_logging_with_service(service.clone());
        assert!(is_initialized());
        assert!(init_global_logging_with_service(service).is_err());
    }
}
