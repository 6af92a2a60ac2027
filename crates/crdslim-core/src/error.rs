//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripError {
    #[error("Failed to parse YAML stream: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("CustomResourceDefinition {name} is missing {field}")]
    MissingField { name: String, field: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StripError>;
