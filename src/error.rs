use miette::Diagnostic;
use thiserror::Error;

/// Main error type for imageset-gen operations.
///
/// Catalog collection and code generation never produce these; filesystem and
/// metadata problems there degrade to an empty tree or a fallback flag. Only the
/// outer layers (manifest loading, argument checks, writing output) fail.
#[derive(Error, Diagnostic, Debug)]
pub enum GenError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(imageset::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(imageset::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(imageset::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, GenError>;
