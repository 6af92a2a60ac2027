//! Multi-document stream driver
//!
//! Reads a multi-document YAML stream, strips every CustomResourceDefinition
//! document, and writes the stream back out. Documents are parsed and
//! written one at a time, so the first error aborts the run and leaves any
//! already-written documents on the output.

use std::io::{Read, Write};

use serde::Deserialize;
use serde_yaml::Value;

use crate::crd::{is_custom_resource_definition, strip_non_storage_versions};
use crate::error::Result;

/// Separator line written after every output document
const DOCUMENT_SEPARATOR: &[u8] = b"---\n";

/// Counters for one stream run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripSummary {
    /// Documents read from the input and written to the output
    pub documents: usize,
    /// Documents that were CRDs and had their versions stripped
    pub stripped: usize,
}

/// Strip every CustomResourceDefinition document in a YAML stream.
///
/// Each input document is parsed, stripped when its `kind` is
/// `CustomResourceDefinition`, then serialized followed by a line containing
/// exactly `---` (the last document included). Document order and count are
/// preserved; non-CRD documents pass through unmodified. An empty input
/// stream produces empty output.
pub fn strip_stream<R: Read, W: Write>(mut input: R, mut output: W) -> Result<StripSummary> {
    let mut source = String::new();
    input.read_to_string(&mut source)?;

    let mut summary = StripSummary::default();

    // An input with no content has no documents and gets no separator.
    if source.trim().is_empty() {
        return Ok(summary);
    }

    for document in serde_yaml::Deserializer::from_str(&source) {
        let mut doc = Value::deserialize(document)?;

        if is_custom_resource_definition(&doc) {
            strip_non_storage_versions(&mut doc)?;
            summary.stripped += 1;
        }

        serde_yaml::to_writer(&mut output, &doc)?;
        output.write_all(DOCUMENT_SEPARATOR)?;
        summary.documents += 1;
    }

    Ok(summary)
}
