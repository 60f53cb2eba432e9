//! Project-level library partitioning.
//!
//! Walks the resolved dependency tree and collects the artifacts to bundle
//! on the module's class path. Collection order is traversal order and
//! becomes the class-path order, so it must stay stable.

use std::collections::{HashMap, HashSet};

use crate::core::artifact::Artifact;
use crate::core::graph::{DependencyNode, DependencyVisitor};
use crate::manifest::{ClassificationCache, ManifestError, ManifestSource};
use crate::resolver::matches_library;
use crate::util::Symbol;

/// Visitor that collects class-path libraries from one dependency tree.
///
/// Non-runtime nodes prune their whole subtree; modules and bundles are
/// dependencies, not libraries, and their transitive closure is out of
/// scope here; a library pulls its own children in as libraries too.
pub struct LibraryVisitor<'a> {
    runtime: HashMap<Symbol, Artifact>,
    explicit_libraries: Vec<String>,
    cache: &'a mut ClassificationCache,
    source: &'a dyn ManifestSource,
    use_osgi_dependencies: bool,
    nodes: Vec<Artifact>,
    includes: HashSet<Symbol>,
    depth: usize,
}

impl<'a> LibraryVisitor<'a> {
    /// Create a visitor for one traversal.
    ///
    /// `runtime_artifacts` is the resolved runtime set the tree nodes are
    /// matched against by versionless identity; `explicit_libraries` are
    /// `group:artifact` ids the user forces to be libraries.
    pub fn new(
        explicit_libraries: Vec<String>,
        runtime_artifacts: &[Artifact],
        cache: &'a mut ClassificationCache,
        source: &'a dyn ManifestSource,
        use_osgi_dependencies: bool,
    ) -> Self {
        let runtime = runtime_artifacts
            .iter()
            .map(|artifact| (artifact.conflict_id(), artifact.clone()))
            .collect();
        LibraryVisitor {
            runtime,
            explicit_libraries,
            cache,
            source,
            use_osgi_dependencies,
            nodes: Vec::new(),
            includes: HashSet::new(),
            depth: 0,
        }
    }

    /// The collected libraries, in traversal order.
    pub fn into_artifacts(self) -> Vec<Artifact> {
        self.nodes
    }
}

impl DependencyVisitor for LibraryVisitor<'_> {
    type Error = ManifestError;

    fn enter(&mut self, node: &DependencyNode) -> Result<bool, ManifestError> {
        self.depth += 1;
        if self.depth == 1 {
            // the root is the project itself, no decision to make
            return Ok(true);
        }

        let Some(artifact) = self.runtime.get(&node.artifact().conflict_id()) else {
            // ignore non-runtime stuff, subtree included
            return Ok(false);
        };
        // the tree node's own reference may be only partially resolved
        let artifact = artifact.clone();

        let classification = self.cache.examine(&artifact, self.source, false)?;
        let matched = matches_library(
            &artifact,
            node.scope(),
            &mut self.explicit_libraries,
            classification,
            self.use_osgi_dependencies,
        );
        if !matched {
            // not a library, nothing to collect underneath either
            return Ok(false);
        }

        if classification.is_netbeans_module() {
            tracing::warn!(
                "using a NetBeans module as a library (classpath extension): {artifact}"
            );
        }
        if self.includes.insert(artifact.conflict_id()) {
            self.nodes.push(artifact);
        }
        // a library pulls its children in as libraries too
        Ok(true)
    }

    fn leave(&mut self, _node: &DependencyNode) -> Result<(), ManifestError> {
        if self.depth == 1 && !self.nodes.is_empty() {
            tracing::info!("adding on module's Class-Path:");
            for artifact in &self.nodes {
                tracing::info!("    {artifact}");
            }
        }
        self.depth -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::artifact::{ArtifactKind, Scope};
    use crate::core::graph::walk;
    use crate::manifest::ManifestClassification;

    const MODULE_MANIFEST: &[u8] = b"OpenIDE-Module: org.example\n";

    struct FailingSource;

    impl ManifestSource for FailingSource {
        fn examine(
            &self,
            artifact: &Artifact,
            _populate: bool,
        ) -> Result<ManifestClassification, ManifestError> {
            Err(ManifestError::NoFile(artifact.coordinate()))
        }
    }

    /// Fixture builder mirroring how the build system hands us a tree: a
    /// node per dependency, the runtime set listing resolved artifacts,
    /// and the cache pre-seeded with classifications.
    struct Fixture {
        runtime: Vec<Artifact>,
        cache: ClassificationCache,
    }

    impl Fixture {
        fn new() -> Self {
            Fixture {
                runtime: Vec::new(),
                cache: ClassificationCache::new(),
            }
        }

        fn node(&mut self, group: &str, name: &str, scope: Scope, is_module: bool) -> DependencyNode {
            let artifact = Artifact::new(group, name, "1.0", ArtifactKind::Jar);
            self.runtime.push(artifact.clone());
            let classification = if is_module {
                ManifestClassification::from_bytes(MODULE_MANIFEST, false).unwrap()
            } else {
                ManifestClassification::non_module()
            };
            self.cache.insert(&artifact, classification);
            DependencyNode::new(artifact, scope)
        }

        fn root() -> DependencyNode {
            DependencyNode::new(
                Artifact::new("root", "root", "1.0", ArtifactKind::Jar),
                Scope::Compile,
            )
        }

        fn collect(&mut self, root: &DependencyNode) -> Vec<Artifact> {
            let mut visitor = LibraryVisitor::new(
                Vec::new(),
                &self.runtime,
                &mut self.cache,
                &FailingSource,
                false,
            );
            walk(root, &mut visitor).unwrap();
            visitor.into_artifacts()
        }
    }

    #[test]
    fn module_is_not_a_library() {
        let mut fx = Fixture::new();
        let module = fx.node("gr1", "ar1", Scope::Compile, true);
        let root = Fixture::root().with_children(vec![module]);

        assert!(fx.collect(&root).is_empty());
    }

    #[test]
    fn direct_dependency_is_a_library() {
        let mut fx = Fixture::new();
        let library = fx.node("gr1", "ar1", Scope::Compile, false);
        let root = Fixture::root().with_children(vec![library]);

        let result = fx.collect(&root);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id().as_str(), "gr1:ar1");
    }

    #[test]
    fn transitive_dependency_of_a_library_is_included() {
        let mut fx = Fixture::new();
        let translibrary = fx.node("gr2", "ar2", Scope::Runtime, false);
        let library = fx
            .node("gr1", "ar1", Scope::Compile, false)
            .with_children(vec![translibrary]);
        let root = Fixture::root().with_children(vec![library]);

        let result = fx.collect(&root);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id().as_str(), "gr1:ar1");
        assert_eq!(result[1].id().as_str(), "gr2:ar2");
    }

    #[test]
    fn transitive_dependency_of_a_module_is_not_a_library() {
        let mut fx = Fixture::new();
        let translibrary = fx.node("gr2", "ar2", Scope::Runtime, false);
        let module = fx
            .node("gr1", "ar1", Scope::Compile, true)
            .with_children(vec![translibrary]);
        let root = Fixture::root().with_children(vec![module]);

        assert!(fx.collect(&root).is_empty());
    }

    #[test]
    fn duplicate_under_module_is_attributed_to_the_library_path() {
        let mut fx = Fixture::new();
        let translibrary = fx.node("gr2", "ar2", Scope::Runtime, false);
        let module = fx
            .node("gr1", "ar1", Scope::Compile, true)
            .with_children(vec![translibrary]);

        let translibrary2 = fx.node("gr4", "ar4", Scope::Runtime, false);
        let library = fx
            .node("gr3", "ar3", Scope::Compile, false)
            .with_children(vec![translibrary2]);
        let root = Fixture::root().with_children(vec![module, library]);

        let result = fx.collect(&root);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id().as_str(), "gr3:ar3");
        assert_eq!(result[1].id().as_str(), "gr4:ar4");
    }

    #[test]
    fn non_runtime_nodes_prune_their_subtree() {
        let mut fx = Fixture::new();
        // child is in the runtime set, but its parent is not
        let child = fx.node("gr2", "ar2", Scope::Runtime, false);
        let orphan = DependencyNode::new(
            Artifact::new("gr1", "ar1", "1.0", ArtifactKind::Jar),
            Scope::Compile,
        )
        .with_children(vec![child]);
        let root = Fixture::root().with_children(vec![orphan]);

        assert!(fx.collect(&root).is_empty());
    }

    #[test]
    fn same_library_reachable_twice_is_collected_once() {
        let mut fx = Fixture::new();
        let shared_a = fx.node("gr2", "shared", Scope::Runtime, false);
        // same coordinate, separate node instance
        let shared_b = DependencyNode::new(shared_a.artifact().clone(), Scope::Runtime);
        let lib1 = fx
            .node("gr1", "ar1", Scope::Compile, false)
            .with_children(vec![shared_a]);
        let lib2 = fx
            .node("gr3", "ar3", Scope::Compile, false)
            .with_children(vec![shared_b]);
        let root = Fixture::root().with_children(vec![lib1, lib2]);

        let result = fx.collect(&root);
        let ids: Vec<&str> = result.iter().map(|a| a.id().as_str()).collect();
        assert_eq!(ids, ["gr1:ar1", "gr2:shared", "gr3:ar3"]);
    }

    #[test]
    fn classification_failure_aborts_the_traversal() {
        let mut fx = Fixture::new();
        let library = fx.node("gr1", "ar1", Scope::Compile, false);
        // present in the runtime set but absent from the cache, so the
        // (failing) source gets consulted
        let unreadable = Artifact::new("gr2", "broken", "1.0", ArtifactKind::Jar);
        fx.runtime.push(unreadable.clone());
        let root = Fixture::root().with_children(vec![
            DependencyNode::new(unreadable, Scope::Compile),
            library,
        ]);

        let mut visitor = LibraryVisitor::new(
            Vec::new(),
            &fx.runtime,
            &mut fx.cache,
            &FailingSource,
            false,
        );
        let err = walk(&root, &mut visitor).unwrap_err();
        assert!(matches!(err, ManifestError::NoFile(_)));
    }

    #[test]
    fn explicit_library_overrides_module_exclusion() {
        let mut fx = Fixture::new();
        let module = fx.node("gr1", "ar1", Scope::Compile, true);
        let root = Fixture::root().with_children(vec![module]);

        let mut visitor = LibraryVisitor::new(
            vec!["gr1:ar1".to_string()],
            &fx.runtime,
            &mut fx.cache,
            &FailingSource,
            false,
        );
        walk(&root, &mut visitor).unwrap();
        let result = visitor.into_artifacts();
        assert_eq!(result.len(), 1);
    }
}
