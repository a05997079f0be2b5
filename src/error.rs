//! Error types for config loading
//!
//! Every variant is fatal to the load that raised it. The display text is part
//! of the public contract, so callers may match on it.

use thiserror::Error;

/// Result type alias for tagconf operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading a config document
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Path is empty or does not name an existing file
    #[error("Invalid file path: {path}")]
    InvalidFilePath { path: String },

    /// A key-value line appeared before any `[section]`
    #[error("Key-value pair must be part of a section")]
    KeyValueOutsideSection,

    /// The same section name was declared twice
    #[error("Duplicate section: {name}")]
    DuplicateSection { name: String },

    #[error("Section name may not contain whitespace: {name}")]
    WhitespaceInSectionName { name: String },

    /// Empty key, or an empty/unmatched `<tag>`. Carries the whole line.
    #[error("Invalid key: {line}")]
    InvalidKey { line: String },

    /// Line is neither blank, a section header, nor an assignment
    #[error("Malformed config file: {line}")]
    MalformedLine { line: String },

    /// IO error while streaming the input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_file_path() {
        let err = ConfigError::InvalidFilePath { path: "missing.conf".to_string() };
        assert_eq!(err.to_string(), "Invalid file path: missing.conf");
    }

    #[test]
    fn test_error_display_outside_section() {
        assert_eq!(
            ConfigError::KeyValueOutsideSection.to_string(),
            "Key-value pair must be part of a section"
        );
    }

    #[test]
    fn test_error_display_duplicate_section() {
        let err = ConfigError::DuplicateSection { name: "common".to_string() };
        assert_eq!(err.to_string(), "Duplicate section: common");
    }

    #[test]
    fn test_error_display_whitespace_in_section() {
        let err = ConfigError::WhitespaceInSectionName { name: "my section".to_string() };
        assert_eq!(err.to_string(), "Section name may not contain whitespace: my section");
    }

    #[test]
    fn test_error_display_invalid_key_keeps_full_line() {
        let err = ConfigError::InvalidKey { line: "path<> = /x".to_string() };
        assert_eq!(err.to_string(), "Invalid key: path<> = /x");
    }

    #[test]
    fn test_error_display_malformed() {
        let err = ConfigError::MalformedLine { line: "just words".to_string() };
        assert_eq!(err.to_string(), "Malformed config file: just words");
    }
}
