//! Consolidated event codes for the filtering layer
//!
//! Single source of truth for event codes and their descriptions.

/// Universal code wrapper for error, warning, and informational codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Filtering event codes
pub mod filtering {
    use super::Code;

    pub const SUPPRESSION_ENABLED: Code = Code::new("F001");
    pub const SUPPRESSION_DISABLED: Code = Code::new("F002");
    pub const COMMENT_CHAIN_BOUND_EXCEEDED: Code = Code::new("F003");
    pub const STREAM_COMPLETE: Code = Code::new("F004");
}

/// Configuration event codes
pub mod configuration {
    use super::Code;

    pub const PROPERTIES_LOADED: Code = Code::new("C001");
    pub const PROPERTIES_INVALID: Code = Code::new("C002");
}

/// System event codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("S001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("S002");
}

/// Get description for a code
pub fn get_description(code: &str) -> &'static str {
    match code {
        "F001" => "Suppression comment disabled duplicate analysis",
        "F002" => "Suppression comment re-enabled duplicate analysis",
        "F003" => "Comment chain exceeded the defensive walk bound",
        "F004" => "Token stream fully filtered",
        "C001" => "Filter properties file loaded",
        "C002" => "Filter properties file rejected",
        "S001" => "Internal error",
        "S002" => "Logging initialization failed",
        "I000" => "General information",
        _ => "Unknown event",
    }
}
