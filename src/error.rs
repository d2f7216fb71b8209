//! Unified error types for expand-template

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for template expansion
#[derive(Error, Debug)]
pub enum Error {
    // Config errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config validation failed: {0}")]
    ConfigValidation(String),

    // Template errors
    #[error("Failed to read template '{path}': {source}")]
    TemplateRead { path: PathBuf, source: io::Error },

    #[error("Bad line {line_number}:\n{line}")]
    MalformedDirective { line_number: usize, line: String },

    // Resolver errors
    #[error("Invalid source name '{0}'")]
    InvalidName(String),

    #[error("Failed to read source '{path}': {source}")]
    SourceRead { path: PathBuf, source: io::Error },

    // Generated file errors
    #[error("Failed to read generated file '{path}': {source}")]
    GeneratedRead { path: PathBuf, source: io::Error },

    #[error("Failed to write generated file '{path}': {source}")]
    GeneratedWrite { path: PathBuf, source: io::Error },
}

/// Result type alias for expand-template operations
pub type Result<T> = std::result::Result<T, Error>;
