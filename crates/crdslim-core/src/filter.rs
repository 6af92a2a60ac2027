//! Recursive description filter over YAML trees
//!
//! Implements the field filter that decides which `description` fields of a
//! CRD version survive. The `keep` flag is threaded through the recursion
//! explicitly; reaching a node through a field named `podTemplate` forces it
//! off for the whole subtree, wherever in the tree that field occurs.

use serde_yaml::{Mapping, Value};

/// Field name removed from subtrees that are not kept
const DESCRIPTION: &str = "description";

/// Field name that forces descriptions beneath it to be dropped
const POD_TEMPLATE: &str = "podTemplate";

/// Recursively remove `description` fields from a YAML tree.
///
/// `keep` controls whether descriptions under the current node are retained;
/// `context` is the field name under which `node` was reached (`None` at the
/// root and for sequence elements). Mappings keep their remaining keys in
/// original order; sequences keep element order and count; scalars are
/// returned unchanged.
pub fn strip_descriptions(node: Value, keep: bool, context: Option<&str>) -> Value {
    let keep = keep && context != Some(POD_TEMPLATE);

    match node {
        Value::Mapping(mapping) => {
            let mut filtered = Mapping::with_capacity(mapping.len());
            for (key, value) in mapping {
                if !keep && key.as_str() == Some(DESCRIPTION) {
                    continue;
                }
                let child = strip_descriptions(value, keep, key.as_str());
                filtered.insert(key, child);
            }
            Value::Mapping(filtered)
        }
        Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(|item| strip_descriptions(item, keep, None))
                .collect(),
        ),
        other => other,
    }
}
