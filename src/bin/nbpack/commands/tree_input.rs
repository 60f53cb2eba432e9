//! JSON dependency tree input.
//!
//! The `libraries` and `modules` commands operate on a dependency tree
//! produced by the surrounding build system, described as nested JSON:
//!
//! ```json
//! {
//!   "id": "org.example:app:1.0",
//!   "children": [
//!     { "id": "org.example:lib:2.1", "scope": "runtime", "file": "lib.jar" }
//!   ]
//! }
//! ```
//!
//! `scope` defaults to compile. `file` points at the artifact's manifest
//! file or exploded directory; artifacts without one are classified as
//! plain jars.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use nbpack::core::artifact::{split_dependency_string, Artifact, Scope};
use nbpack::core::graph::DependencyNode;
use nbpack::manifest::{ClassificationCache, ManifestClassification};

#[derive(Debug, Deserialize)]
pub struct TreeNode {
    pub id: String,
    #[serde(default)]
    pub scope: Scope,
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

/// A parsed tree plus everything the visitors need alongside it.
pub struct TreeInput {
    pub root: DependencyNode,
    pub runtime: Vec<Artifact>,
    pub cache: ClassificationCache,
}

/// Read and convert a JSON tree description.
pub fn load_tree(path: &Path) -> Result<TreeInput> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dependency tree: {}", path.display()))?;
    let spec: TreeNode = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse dependency tree: {}", path.display()))?;

    let mut runtime = Vec::new();
    let mut cache = ClassificationCache::new();
    let root = convert(&spec, true, &mut runtime, &mut cache)?;
    Ok(TreeInput {
        root,
        runtime,
        cache,
    })
}

fn convert(
    spec: &TreeNode,
    is_root: bool,
    runtime: &mut Vec<Artifact>,
    cache: &mut ClassificationCache,
) -> Result<DependencyNode> {
    let coordinate = split_dependency_string(&spec.id)
        .with_context(|| format!("bad artifact id in dependency tree: {}", spec.id))?;
    let mut artifact = coordinate.to_artifact();
    match &spec.file {
        Some(file) => artifact = artifact.with_file(file),
        // nothing to examine later, classify up front
        None => cache.insert(&artifact, ManifestClassification::non_module()),
    }
    if !is_root {
        runtime.push(artifact.clone());
    }

    let children = spec
        .children
        .iter()
        .map(|child| convert(child, false, runtime, cache))
        .collect::<Result<Vec<_>>>()?;
    Ok(DependencyNode::new(artifact, spec.scope).with_children(children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_a_nested_tree() {
        let tmp = TempDir::new().unwrap();
        let tree_path = tmp.path().join("tree.json");
        std::fs::write(
            &tree_path,
            r#"{
  "id": "org.example:app:1.0",
  "children": [
    { "id": "org.example:lib:2.1", "scope": "runtime" },
    { "id": "org.example:dep:0.5", "children": [
      { "id": "org.example:nested:0.1" }
    ]}
  ]
}"#,
        )
        .unwrap();

        let input = load_tree(&tree_path).unwrap();
        assert_eq!(input.root.children().len(), 2);
        assert_eq!(input.runtime.len(), 3);
        assert_eq!(input.root.children()[0].scope(), Scope::Runtime);
    }

    #[test]
    fn bad_ids_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let tree_path = tmp.path().join("tree.json");
        std::fs::write(&tree_path, r#"{ "id": "not-a-coordinate" }"#).unwrap();
        assert!(load_tree(&tree_path).is_err());
    }
}
