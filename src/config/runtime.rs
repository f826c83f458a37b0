// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// User-facing filtering preferences.
///
/// Values come from the environment by default and may be overridden by a
/// properties file, mirroring the property surface the duplicate detector's
/// CLI exposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterPreferences {
    /// Whether using/import directives are excluded from duplicate matching
    pub ignore_usings: bool,

    /// Whether suppression state changes are logged as they are applied
    pub log_suppression_changes: bool,

    /// Whether pull/buffer statistics are logged at end of stream
    pub track_pull_statistics: bool,
}

impl Default for FilterPreferences {
    fn default() -> Self {
        Self {
            ignore_usings: env::var("CPD_IGNORE_USINGS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_suppression_changes: env::var("CPD_LOG_SUPPRESSION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            track_pull_statistics: env::var("CPD_TRACK_PULL_STATS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

/// Optional overlay parsed from a properties file. Absent keys fall back to
/// the environment-derived defaults.
#[derive(Debug, Default, Deserialize)]
struct PropertiesOverlay {
    ignore_usings: Option<bool>,
    log_suppression_changes: Option<bool>,
    track_pull_statistics: Option<bool>,
}

impl PropertiesOverlay {
    fn apply(self, mut preferences: FilterPreferences) -> FilterPreferences {
        if let Some(value) = self.ignore_usings {
            preferences.ignore_usings = value;
        }
        if let Some(value) = self.log_suppression_changes {
            preferences.log_suppression_changes = value;
        }
        if let Some(value) = self.track_pull_statistics {
            preferences.track_pull_statistics = value;
        }
        preferences
    }
}

/// Properties loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read properties file '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid properties file '{path}'")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Load preferences from a TOML properties file, layered over the defaults.
pub fn load_properties(path: &Path) -> Result<FilterPreferences, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let overlay: PropertiesOverlay =
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    let preferences = overlay.apply(FilterPreferences::default());
    crate::log_info!("Filter properties loaded",
        "path" => path.display(),
        "ignore_usings" => preferences.ignore_usings
    );
    Ok(preferences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_defaults_without_environment() {
        // Env vars are not set under the test harness unless exported
        let preferences = FilterPreferences::default();
        assert!(!preferences.ignore_usings);
        assert!(!preferences.log_suppression_changes);
        assert!(!preferences.track_pull_statistics);
    }

    #[test]
    fn test_load_properties_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "ignore_usings = true").expect("write");
        writeln!(file, "track_pull_statistics = true").expect("write");

        let preferences = load_properties(file.path()).expect("load");
        assert!(preferences.ignore_usings);
        assert!(preferences.track_pull_statistics);
        assert!(!preferences.log_suppression_changes);
    }

    #[test]
    fn test_load_properties_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "log_suppression_changes = true").expect("write");

        let preferences = load_properties(file.path()).expect("load");
        assert!(!preferences.ignore_usings);
        assert!(preferences.log_suppression_changes);
    }

    #[test]
    fn test_load_properties_missing_file() {
        let result = load_properties(Path::new("/nonexistent/cpd.properties"));
        assert_matches!(result, Err(ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_properties_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "ignore_usings = maybe").expect("write");

        let result = load_properties(file.path());
        assert_matches!(result, Err(ConfigError::Parse { .. }));
    }
}
