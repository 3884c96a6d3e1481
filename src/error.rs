//! Error types for KSD Personnel
//!
//! Provides structured error handling with:
//! - Numeric error codes for machine parsing
//! - User-friendly messages with suggestions
//! - Field-level validation failures for the personnel model
//! - Exit codes for CLI

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for personnel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Numeric error codes for machine parsing and documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ErrorCode {
    // Configuration errors (1xx)
    ConfigNotFound = 100,
    ConfigParseError = 101,
    ConfigValidation = 102,

    // IO errors (2xx)
    IoRead = 200,
    IoWrite = 201,

    // Validation errors (3xx)
    FieldValidation = 300,
    EmptyProjectList = 301,

    // Roster errors (4xx)
    RosterParse = 400,
    UnknownProject = 401,

    // Internal errors (9xx)
    InternalError = 900,
}

impl ErrorCode {
    /// Get the string code (e.g., "E100")
    pub fn as_str(&self) -> String {
        format!("E{}", *self as u16)
    }

    /// Get the exit code for CLI (maps to 1-125 range)
    pub fn exit_code(&self) -> i32 {
        match *self as u16 {
            100..=199 => 10, // Config errors
            200..=299 => 20, // IO errors
            300..=399 => 30, // Validation errors
            400..=499 => 40, // Roster errors
            900..=999 => 90, // Internal errors
            _ => 1,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for the personnel crate
#[derive(Error, Debug)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration parse error
    #[error("Failed to parse configuration: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<toml::de::Error>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {}", field_prefixed(.field, .message))]
    ConfigValidation { message: String, field: Option<String> },

    // ─────────────────────────────────────────────────────────────
    // IO Errors
    // ─────────────────────────────────────────────────────────────

    /// File read error
    #[error("Failed to read file: {path}")]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File write error
    #[error("Failed to write file: {path}")]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Validation Errors
    // ─────────────────────────────────────────────────────────────

    /// A single field failed validation
    #[error("Invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// A general manager was constructed without any project
    #[error("GeneralManager must be associated with at least one project")]
    EmptyProjectList,

    // ─────────────────────────────────────────────────────────────
    // Roster Errors
    // ─────────────────────────────────────────────────────────────

    /// Roster document could not be parsed
    #[error("Failed to parse roster {path}: {message}")]
    RosterParse { path: String, message: String },

    /// Roster employee references a project that was never declared
    #[error("Employee {employee_id} references unknown project '{project}'")]
    UnknownProject { employee_id: String, project: String },

    /// A roster entry failed to build
    #[error("Roster entry {employee_id}: {source}")]
    RosterEntry {
        employee_id: String,
        #[source]
        source: Box<Error>,
    },

    // ─────────────────────────────────────────────────────────────
    // Internal Errors
    // ─────────────────────────────────────────────────────────────

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    // ─────────────────────────────────────────────────────────────
    // Error Classification
    // ─────────────────────────────────────────────────────────────

    /// Get the numeric error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::ConfigNotFound { .. } => ErrorCode::ConfigNotFound,
            Error::ConfigParse { .. } => ErrorCode::ConfigParseError,
            Error::ConfigValidation { .. } => ErrorCode::ConfigValidation,

            Error::IoRead { .. } => ErrorCode::IoRead,
            Error::IoWrite { .. } => ErrorCode::IoWrite,
            Error::Toml(_) => ErrorCode::ConfigParseError,
            Error::Json(_) => ErrorCode::InternalError,

            Error::Validation { .. } => ErrorCode::FieldValidation,
            Error::EmptyProjectList => ErrorCode::EmptyProjectList,

            Error::RosterParse { .. } => ErrorCode::RosterParse,
            Error::UnknownProject { .. } => ErrorCode::UnknownProject,
            Error::RosterEntry { source, .. } => source.code(),

            Error::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Check if the error is a local validation failure of the personnel model
    pub fn is_validation(&self) -> bool {
        match self {
            Error::Validation { .. } | Error::EmptyProjectList => true,
            Error::RosterEntry { source, .. } => source.is_validation(),
            _ => false,
        }
    }

    /// Name of the offending field, for field validation failures
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Validation { field, .. } => Some(*field),
            Error::EmptyProjectList => Some("projects"),
            Error::ConfigValidation { field, .. } => field.as_deref(),
            Error::RosterEntry { source, .. } => source.field(),
            _ => None,
        }
    }

    /// Get the exit code for CLI
    pub fn exit_code(&self) -> i32 {
        self.code().exit_code()
    }

    // ─────────────────────────────────────────────────────────────
    // User-Friendly Messages
    // ─────────────────────────────────────────────────────────────

    /// Get a user-friendly suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Error::ConfigNotFound { .. } => Some(
                "Run 'ksd-personnel config init' to create a default configuration file."
            ),
            Error::ConfigParse { .. } => Some(
                "Check your configuration file syntax. Run 'ksd-personnel config validate' to see details."
            ),
            Error::ConfigValidation { .. } => Some(
                "Review the configuration file and fix the invalid values."
            ),
            Error::Validation { .. } => Some(
                "Correct the named field in the roster and run the report again."
            ),
            Error::EmptyProjectList => Some(
                "List at least one project under 'projects' for every general manager."
            ),
            Error::RosterParse { .. } => Some(
                "Each [[employees]] entry needs a 'role' of general-manager, project-manager, programmer or staff."
            ),
            Error::UnknownProject { .. } => Some(
                "Declare the project in a [[projects]] table with its revenue before referencing it."
            ),
            Error::RosterEntry { source, .. } => source.suggestion(),
            _ => None,
        }
    }

    /// Format the error for terminal display with colors
    pub fn format_for_terminal(&self) -> String {
        let code = self.code();
        let suggestion = self.suggestion();

        let mut output = format!(
            "\x1b[31mError [{}]\x1b[0m: {}\n",
            code.as_str(),
            self
        );

        if let Some(hint) = suggestion {
            output.push_str(&format!("\n\x1b[33mHint\x1b[0m: {}\n", hint));
        }

        output
    }

    /// Format the error for logging (no colors)
    pub fn format_for_log(&self) -> String {
        let code = self.code();
        format!("[{}] {}", code.as_str(), self)
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Constructors (for ergonomic error creation)
// ─────────────────────────────────────────────────────────────────

impl Error {
    /// Create a field validation error
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Error::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Error::ConfigNotFound {
            path: path.into(),
            source: None,
        }
    }

    /// Create a config parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Error::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create a config validation error with field name
    pub fn config_field_invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ConfigValidation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a roster parse error
    pub fn roster_parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Error::RosterParse {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// "<field>: <message>" when the field is known
fn field_prefixed(field: &Option<String>, message: &str) -> String {
    match field {
        Some(field) => format!("{}: {}", field, message),
        None => message.to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_format() {
        assert_eq!(ErrorCode::ConfigNotFound.as_str(), "E100");
        assert_eq!(ErrorCode::FieldValidation.as_str(), "E300");
        assert_eq!(ErrorCode::UnknownProject.as_str(), "E401");
        assert_eq!(ErrorCode::InternalError.as_str(), "E900");
    }

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(ErrorCode::ConfigNotFound.exit_code(), 10);
        assert_eq!(ErrorCode::IoRead.exit_code(), 20);
        assert_eq!(ErrorCode::EmptyProjectList.exit_code(), 30);
        assert_eq!(ErrorCode::RosterParse.exit_code(), 40);
        assert_eq!(ErrorCode::InternalError.exit_code(), 90);
    }

    #[test]
    fn test_validation_display_names_field() {
        let err = Error::validation("first_name", "cannot be empty");
        assert_eq!(err.to_string(), "Invalid first_name: cannot be empty");
        assert_eq!(err.field(), Some("first_name"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_empty_project_list_is_structural_validation() {
        let err = Error::EmptyProjectList;
        assert_eq!(err.code(), ErrorCode::EmptyProjectList);
        assert_eq!(err.field(), Some("projects"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_error_codes() {
        let err = Error::config_not_found("/test");
        assert_eq!(err.code(), ErrorCode::ConfigNotFound);
        assert!(!err.is_validation());

        let err = Error::UnknownProject {
            employee_id: "PM101".into(),
            project: "Ghost".into(),
        };
        assert_eq!(err.code(), ErrorCode::UnknownProject);
        assert!(err.to_string().contains("Ghost"));
    }

    #[test]
    fn test_roster_entry_delegates_to_source() {
        let err = Error::RosterEntry {
            employee_id: "ST501".into(),
            source: Box::new(Error::validation("base_salary", "cannot be negative")),
        };
        assert_eq!(err.code(), ErrorCode::FieldValidation);
        assert_eq!(err.field(), Some("base_salary"));
        assert!(err.is_validation());
        assert!(err.to_string().starts_with("Roster entry ST501: Invalid base_salary"));
    }

    #[test]
    fn test_error_suggestions() {
        let err = Error::config_not_found("/test");
        assert!(err.suggestion().unwrap().contains("config init"));

        let err = Error::EmptyProjectList;
        assert!(err.suggestion().unwrap().contains("at least one project"));

        assert!(Error::Internal("boom".into()).suggestion().is_none());
    }

    #[test]
    fn test_format_for_terminal() {
        let err = Error::config_not_found("/test/config.toml");
        let formatted = err.format_for_terminal();

        assert!(formatted.contains("E100"));
        assert!(formatted.contains("\x1b[31m"));
        assert!(formatted.contains("Hint"));
    }

    #[test]
    fn test_format_for_log() {
        let err = Error::validation("base_salary", "cannot be negative");
        let formatted = err.format_for_log();

        assert!(formatted.contains("[E300]"));
        assert!(!formatted.contains("\x1b["));
    }

    #[test]
    fn test_io_read_code() {
        let err = Error::IoRead {
            path: PathBuf::from("/missing/roster.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(err.code(), ErrorCode::IoRead);
        assert_eq!(err.exit_code(), 20);
    }

    #[test]
    fn test_config_validation_display_names_field() {
        let err = Error::config_field_invalid("report.format", "Invalid report format 'xml'");
        assert_eq!(
            err.to_string(),
            "Configuration validation failed: report.format: Invalid report format 'xml'"
        );
        assert_eq!(err.field(), Some("report.format"));

        let err = Error::ConfigValidation {
            message: "Configuration file already exists".into(),
            field: None,
        };
        assert_eq!(
            err.to_string(),
            "Configuration validation failed: Configuration file already exists"
        );
    }
}
