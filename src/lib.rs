//! Capsid - a Project Zomboid mod development tool.
//!
//! This library provides the core functionality for the `capsid` CLI tool:
//! resolving local environment configuration (game and IDE install paths),
//! scaffolding a mod's directory structure, generating IntelliJ IDEA
//! run configurations, and driving the external Lua annotator.

pub mod cli;
pub mod commands;
pub mod config;
pub mod idea;
pub mod project;
pub mod zdoc;


/// Library-level error type for Capsid operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required local property resolved to nothing.
    ///
    /// Retrying without changing the local setup cannot succeed, so this is
    /// surfaced immediately with the list of sources that were consulted.
    #[error("unable to find local project property '{name}' (checked {sources})")]
    MissingProperty {
        /// Name of the property as it appears in `local.properties`.
        name: String,
        /// Human-readable summary of the sources that were checked.
        sources: String,
    },

    /// A source supplied a raw value that could not be coerced to the
    /// property's declared kind. Never falls through to the next source.
    #[error("malformed value for local property '{name}': {reason}")]
    MalformedProperty { name: String, reason: String },

    /// Asked to resolve a property name that is not in the registry.
    #[error("unknown local property: {0}")]
    UnknownProperty(String),

    /// A `-P key=value` override flag that does not parse.
    #[error("invalid property override '{0}': expected key=value")]
    InvalidOverride(String),

    /// A resolved path does not point at an existing directory.
    #[error("the {label} path '{path}' does not point to an existing directory")]
    InvalidDirectory { label: String, path: String },

    /// The external annotator tool failed or could not be launched.
    #[error("annotator error: {0}")]
    Annotator(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Capsid operations.
pub type Result<T> = std::result::Result<T, Error>;
