//! CLI error types with exit code handling
//!
//! Maps core errors to diagnostics with appropriate exit codes.

use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

use crdslim_core::StripError;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// Input stream is not well-formed YAML
    #[error("Parse error: {message}")]
    #[diagnostic(code(crdslim::cli::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A CRD document lacks the expected structure
    #[error("Manifest error: {message}")]
    #[diagnostic(code(crdslim::cli::manifest))]
    Manifest {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// IO error (file not found, permissions, etc.)
    #[error("IO error: {message}")]
    #[diagnostic(code(crdslim::cli::io))]
    Io { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse { .. } => exit_codes::PARSE_ERROR,
            CliError::Manifest { .. } => exit_codes::MANIFEST_ERROR,
            CliError::Io { .. } => exit_codes::IO_ERROR,
        }
    }

    /// Create an IO error carrying the offending path
    pub fn io_at(path: &Path, err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{}: {}", path.display(), err),
        }
    }
}

impl From<StripError> for CliError {
    fn from(err: StripError) -> Self {
        match err {
            StripError::Parse(inner) => CliError::Parse {
                message: inner.to_string(),
                help: Some("crdslim expects a stream of YAML documents".to_string()),
            },
            missing @ StripError::MissingField { .. } => CliError::Manifest {
                message: missing.to_string(),
                help: Some(
                    "every CustomResourceDefinition must carry a spec.versions list".to_string(),
                ),
            },
            StripError::Io(inner) => CliError::Io {
                message: inner.to_string(),
            },
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
        }
    }
}
