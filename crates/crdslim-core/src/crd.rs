//! Storage-version handling for CustomResourceDefinition documents

use serde_yaml::Value;

use crate::error::{Result, StripError};
use crate::filter::strip_descriptions;

/// Document kind targeted by the stripper
pub const CRD_KIND: &str = "CustomResourceDefinition";

/// Check whether a document declares kind `CustomResourceDefinition`.
///
/// A missing or non-string `kind` is treated as the empty string.
pub fn is_custom_resource_definition(doc: &Value) -> bool {
    doc.get("kind").and_then(Value::as_str).unwrap_or_default() == CRD_KIND
}

/// Remove redundant descriptions from the version entries of a CRD.
///
/// Each entry of `spec.versions` is rewritten in place, preserving entry
/// order and count. The entry whose `storage` field is `true` keeps its
/// descriptions (podTemplate subtrees excepted); every other entry loses
/// them entirely. A CRD without a `spec.versions` sequence is an error.
pub fn strip_non_storage_versions(doc: &mut Value) -> Result<()> {
    let name = crd_name(doc);

    let versions = doc
        .get_mut("spec")
        .and_then(|spec| spec.get_mut("versions"))
        .and_then(Value::as_sequence_mut)
        .ok_or(StripError::MissingField {
            name,
            field: "spec.versions",
        })?;

    for entry in versions.iter_mut() {
        let storage = entry
            .get("storage")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let version = std::mem::take(entry);
        *entry = strip_descriptions(version, storage, None);
    }

    Ok(())
}

/// Extract `metadata.name` for error reporting
fn crd_name(doc: &Value) -> String {
    doc.get("metadata")
        .and_then(|metadata| metadata.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CRD: &str = r#"
apiVersion: apiextensions.k8s.io/v1
kind: CustomResourceDefinition
metadata:
  name: certificates.cert-manager.io
spec:
  group: cert-manager.io
  names:
    kind: Certificate
    plural: certificates
  versions:
    - name: v1
      storage: false
      schema:
        description: old
        podTemplate:
          description: pt
    - name: v2
      storage: true
      schema:
        description: new
        podTemplate:
          description: pt2
"#;

    fn yaml(input: &str) -> Value {
        serde_yaml::from_str(input).unwrap()
    }

    /// True if any `description` key exists anywhere under `node`
    fn has_description(node: &Value) -> bool {
        match node {
            Value::Mapping(mapping) => mapping.iter().any(|(key, value)| {
                key.as_str() == Some("description") || has_description(value)
            }),
            Value::Sequence(items) => items.iter().any(has_description),
            _ => false,
        }
    }

    #[test]
    fn test_detects_crd_kind() {
        assert!(is_custom_resource_definition(&yaml(
            "kind: CustomResourceDefinition"
        )));
        assert!(!is_custom_resource_definition(&yaml("kind: ConfigMap")));
        assert!(!is_custom_resource_definition(&yaml("metadata: {}")));
        assert!(!is_custom_resource_definition(&yaml("kind: 42")));
    }

    #[test]
    fn test_storage_version_keeps_descriptions() {
        let mut doc = yaml(SAMPLE_CRD);
        strip_non_storage_versions(&mut doc).unwrap();

        let versions = doc["spec"]["versions"].as_sequence().unwrap();
        assert_eq!(versions.len(), 2);

        // v1 is not the storage version: no descriptions anywhere
        assert!(!has_description(&versions[0]));
        assert_eq!(versions[0]["name"], yaml("v1"));

        // v2 is the storage version: schema description survives, but the
        // podTemplate one is always dropped
        assert_eq!(versions[1]["schema"]["description"], yaml("new"));
        assert!(
            versions[1]["schema"]["podTemplate"]
                .get("description")
                .is_none()
        );
    }

    #[test]
    fn test_missing_storage_field_treated_as_false() {
        let mut doc = yaml(
            r#"
kind: CustomResourceDefinition
metadata:
  name: widgets.example.com
spec:
  versions:
    - name: v1alpha1
      schema:
        description: dropped
"#,
        );
        strip_non_storage_versions(&mut doc).unwrap();

        assert!(!has_description(&doc["spec"]["versions"][0]));
    }

    #[test]
    fn test_errors_without_spec_versions() {
        let mut doc = yaml(
            r#"
kind: CustomResourceDefinition
metadata:
  name: widgets.example.com
spec:
  group: example.com
"#,
        );

        let err = strip_non_storage_versions(&mut doc).unwrap_err();
        match err {
            StripError::MissingField { name, field } => {
                assert_eq!(name, "widgets.example.com");
                assert_eq!(field, "spec.versions");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_errors_when_versions_is_not_a_sequence() {
        let mut doc = yaml(
            r#"
kind: CustomResourceDefinition
metadata:
  name: widgets.example.com
spec:
  versions: not-a-list
"#,
        );

        let err = strip_non_storage_versions(&mut doc).unwrap_err();
        assert!(matches!(err, StripError::MissingField { .. }));
    }

    #[test]
    fn test_stripping_is_idempotent() {
        let mut once = yaml(SAMPLE_CRD);
        strip_non_storage_versions(&mut once).unwrap();

        let mut twice = once.clone();
        strip_non_storage_versions(&mut twice).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_preserves_version_order_and_unrelated_fields() {
        let mut doc = yaml(SAMPLE_CRD);
        strip_non_storage_versions(&mut doc).unwrap();

        assert_eq!(doc["kind"], yaml("CustomResourceDefinition"));
        assert_eq!(doc["metadata"]["name"], yaml("certificates.cert-manager.io"));
        assert_eq!(doc["spec"]["group"], yaml("cert-manager.io"));

        let names: Vec<&str> = doc["spec"]["versions"]
            .as_sequence()
            .unwrap()
            .iter()
            .map(|version| version["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["v1", "v2"]);
    }
}
