//! Crdslim Core - CRD description stripping for the crdslim CLI
//!
//! This crate provides the document transformation behind `crdslim`:
//! - `filter`: recursive removal of `description` fields from a YAML tree
//! - `crd`: storage-version handling for CustomResourceDefinition documents
//! - `stream`: the multi-document stream driver

pub mod crd;
pub mod error;
pub mod filter;
pub mod stream;

pub use crd::{is_custom_resource_definition, strip_non_storage_versions};
pub use error::{Result, StripError};
pub use filter::strip_descriptions;
pub use stream::{StripSummary, strip_stream};
