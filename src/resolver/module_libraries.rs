//! Per-module library attribution.
//!
//! Walks the dependency tree and records, for every module or bundle found
//! in it, the libraries that belong on that module's class path. Modules
//! reached straight from the project are "declared"; modules nested under
//! another module or under a plain library subtree are "transitive".

use std::collections::HashMap;

use crate::core::artifact::Artifact;
use crate::core::graph::{DependencyNode, DependencyVisitor};
use crate::manifest::{ClassificationCache, ManifestError, ManifestSource};
use crate::resolver::matches_library;
use crate::util::Symbol;

/// Result of a [`ModuleLibraryVisitor`] traversal.
///
/// Both maps are keyed by the module's versionless conflict id. Each value
/// starts with the module artifact itself, followed by its owned libraries
/// in traversal order.
pub struct ModuleLibraryPartition {
    pub declared: HashMap<Symbol, Vec<Artifact>>,
    pub transitive: HashMap<Symbol, Vec<Artifact>>,
}

/// Marks what the current subtree is rooted under while walking.
///
/// A library-rooted entry keeps modules found beneath a plain library
/// classified as transitive, without attributing the library's own
/// children to any module.
enum StackEntry {
    Module(Symbol),
    LibraryRoot(Symbol),
}

impl StackEntry {
    fn matches(&self, id: Symbol) -> bool {
        match self {
            StackEntry::Module(m) => *m == id,
            StackEntry::LibraryRoot(l) => *l == id,
        }
    }
}

/// Visitor that attributes libraries to the module that owns them.
pub struct ModuleLibraryVisitor<'a> {
    runtime: HashMap<Symbol, Artifact>,
    cache: &'a mut ClassificationCache,
    source: &'a dyn ManifestSource,
    use_osgi_dependencies: bool,
    declared: HashMap<Symbol, Vec<Artifact>>,
    transitive: HashMap<Symbol, Vec<Artifact>>,
    stack: Vec<StackEntry>,
    depth: usize,
}

impl<'a> ModuleLibraryVisitor<'a> {
    pub fn new(
        runtime_artifacts: &[Artifact],
        cache: &'a mut ClassificationCache,
        source: &'a dyn ManifestSource,
        use_osgi_dependencies: bool,
    ) -> Self {
        let runtime = runtime_artifacts
            .iter()
            .map(|artifact| (artifact.conflict_id(), artifact.clone()))
            .collect();
        ModuleLibraryVisitor {
            runtime,
            cache,
            source,
            use_osgi_dependencies,
            declared: HashMap::new(),
            transitive: HashMap::new(),
            stack: Vec::new(),
            depth: 0,
        }
    }

    /// The declared/transitive split collected by the walk.
    pub fn into_partition(self) -> ModuleLibraryPartition {
        ModuleLibraryPartition {
            declared: self.declared,
            transitive: self.transitive,
        }
    }
}

impl DependencyVisitor for ModuleLibraryVisitor<'_> {
    type Error = ManifestError;

    fn enter(&mut self, node: &DependencyNode) -> Result<bool, ManifestError> {
        self.depth += 1;
        if self.depth == 1 {
            return Ok(true);
        }

        let Some(artifact) = self.runtime.get(&node.artifact().conflict_id()) else {
            // ignore non-runtime stuff, subtree included
            return Ok(false);
        };
        let artifact = artifact.clone();

        let classification = self.cache.examine(&artifact, self.source, false)?;
        let is_module = classification.is_netbeans_module()
            || (self.use_osgi_dependencies && classification.is_osgi_bundle());
        if is_module {
            let id = artifact.conflict_id();
            self.stack.push(StackEntry::Module(id));
            let bucket = if self.stack.len() == 1 {
                &mut self.declared
            } else {
                &mut self.transitive
            };
            // the module itself leads its own list
            bucket.insert(id, vec![artifact]);
            return Ok(true);
        }

        match self.stack.last() {
            Some(StackEntry::Module(owner)) => {
                let owner = *owner;
                // only module-owned libraries are of interest here
                let mut no_explicit = Vec::new();
                if matches_library(
                    &artifact,
                    node.scope(),
                    &mut no_explicit,
                    classification,
                    self.use_osgi_dependencies,
                ) {
                    let bucket = if self.stack.len() == 1 {
                        &mut self.declared
                    } else {
                        &mut self.transitive
                    };
                    if let Some(list) = bucket.get_mut(&owner) {
                        list.push(artifact);
                    }
                }
            }
            Some(StackEntry::LibraryRoot(_)) => {}
            None => {
                // a plain library at top level: mark the subtree so that
                // any module found underneath counts as transitive
                self.stack
                    .push(StackEntry::LibraryRoot(artifact.conflict_id()));
            }
        }
        Ok(true)
    }

    fn leave(&mut self, node: &DependencyNode) -> Result<(), ManifestError> {
        if let Some(top) = self.stack.last() {
            if top.matches(node.artifact().conflict_id()) {
                self.stack.pop();
            }
        }
        self.depth -= 1;
        Ok(())
    }
}
