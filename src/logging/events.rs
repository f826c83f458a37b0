//! Event structures for filter logging

use super::codes::Code;
use std::collections::HashMap;
use std::time::SystemTime;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ERROR" => Some(LogLevel::Error),
            "WARN" | "WARNING" => Some(LogLevel::Warning),
            "INFO" => Some(LogLevel::Info),
            "DEBUG" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

/// Core log event structure
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: SystemTime,
    pub level: LogLevel,
    pub code: Code,
    pub message: String,
    pub context: HashMap<String, String>,
}

impl LogEvent {
    fn with_level(level: LogLevel, code: Code, message: &str) -> Self {
        Self {
            timestamp: SystemTime::now(),
            level,
            code,
            message: message.to_string(),
            context: HashMap::new(),
        }
    }

    /// Create a new error event
    pub fn error(code: Code, message: &str) -> Self {
        Self::with_level(LogLevel::Error, code, message)
    }

    /// Create a new warning event
    pub fn warning(code: Code, message: &str) -> Self {
        Self::with_level(LogLevel::Warning, code, message)
    }

    /// Create a new info event
    pub fn info(code: Code, message: &str) -> Self {
        Self::with_level(LogLevel::Info, code, message)
    }

    /// Create a new debug event
    pub fn debug(code: Code, message: &str) -> Self {
        Self::with_level(LogLevel::Debug, code, message)
    }

    /// Add context data
    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.insert(key.to_string(), value.to_string());
        self
    }

    /// Check if this is an error event
    pub fn is_error(&self) -> bool {
        self.level == LogLevel::Error
    }

    /// Get the registered description for this event's code
    pub fn description(&self) -> &'static str {
        super::codes::get_description(self.code.as_str())
    }

    /// Format for display
    pub fn format(&self) -> String {
        let mut output = format!(
            "[{}] {} - {}",
            self.level.as_str(),
            self.code.as_str(),
            self.message
        );
        if !self.context.is_empty() {
            let mut pairs: Vec<_> = self
                .context
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            pairs.sort();
            output.push_str(&format!(" ({})", pairs.join(", ")));
        }
        output
    }

    /// Format as JSON for structured logging
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        let timestamp = self
            .timestamp
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let mut json = serde_json::json!({
            "timestamp": timestamp,
            "level": self.level.as_str(),
            "code": self.code.as_str(),
            "message": self.message,
            "description": self.description(),
        });

        if !self.context.is_empty() {
            json["context"] = serde_json::Value::Object(
                self.context
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            );
        }

        serde_json::to_string(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    #[test]
    fn test_error_event_creation() {
        let event = LogEvent::error(codes::system::INTERNAL_ERROR, "boom");
        assert!(event.is_error());
        assert_eq!(event.code.as_str(), "S001");
        assert_eq!(event.message, "boom");
    }

    #[test]
    fn test_event_with_context() {
        let event = LogEvent::debug(codes::filtering::SUPPRESSION_ENABLED, "toggled")
            .with_context("line", "14");
        assert_eq!(event.context.get("line"), Some(&"14".to_string()));
    }

    #[test]
    fn test_event_formatting() {
        let event = LogEvent::warning(
            codes::filtering::COMMENT_CHAIN_BOUND_EXCEEDED,
            "chain too long",
        )
        .with_context("walked", "1000");
        let formatted = event.format();
        assert!(formatted.contains("[WARN]"));
        assert!(formatted.contains("F003"));
        assert!(formatted.contains("walked=1000"));
    }

    #[test]
    fn test_json_formatting() {
        let event = LogEvent::info(codes::configuration::PROPERTIES_LOADED, "loaded")
            .with_context("path", "cpd.toml");
        let json = event.format_json().expect("json");
        assert!(json.contains("\"level\":\"INFO\""));
        assert!(json.contains("\"code\":\"C001\""));
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!(LogLevel::from_str("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_str("WARNING"), Some(LogLevel::Warning));
        assert_eq!(LogLevel::from_str("loud"), None);
        assert!(LogLevel::Error < LogLevel::Debug);
    }
}
