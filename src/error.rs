//! Error types for the check-in badge engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the collaborator-facing operations (config loading, roster import,
//! audit logging). The classification engine and badge renderer themselves
//! are total functions and never return an error.

use thiserror::Error;

/// The main error type for the check-in badge engine.
///
/// Only collaborator-level operations (loading configuration, importing a
/// roster, appending to the access log) can fail; the pure core never does.
///
/// # Example
///
/// ```
/// use checkin_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/events.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/events.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Roster file was not found at the specified path.
    #[error("Roster file not found: {path}")]
    RosterNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Roster file could not be read as delimited rows.
    #[error("Failed to parse roster file '{path}': {message}")]
    RosterParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An access-log record could not be appended.
    #[error("Failed to write access log '{path}': {message}")]
    LogWriteError {
        /// The path to the log file.
        path: String,
        /// A description of the write failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/events.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/events.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_roster_not_found_displays_path() {
        let error = EngineError::RosterNotFound {
            path: "/data/missing.csv".to_string(),
        };
        assert_eq!(error.to_string(), "Roster file not found: /data/missing.csv");
    }

    #[test]
    fn test_roster_parse_error_displays_path_and_message() {
        let error = EngineError::RosterParseError {
            path: "/data/roster.csv".to_string(),
            message: "unequal row lengths".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse roster file '/data/roster.csv': unequal row lengths"
        );
    }

    #[test]
    fn test_log_write_error_displays_path_and_message() {
        let error = EngineError::LogWriteError {
            path: "/var/log/accesses.csv".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to write access log '/var/log/accesses.csv': permission denied"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
