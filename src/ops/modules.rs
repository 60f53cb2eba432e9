//! Module dependency resolution operations.

use crate::core::artifact::{Artifact, Scope};
use crate::core::dependency::Dependency;
use crate::core::graph::{walk, DependencyNode};
use crate::manifest::{ClassificationCache, ManifestError, ManifestSource};
use crate::resolver::{
    collect_module_dependencies, ModuleLibraryPartition, ModuleLibraryVisitor, ModuleWrapper,
};

/// Resolve the project's direct dependencies into module dependencies.
///
/// `library_artifacts` must already be collected; anything on the class
/// path cannot also be a module dependency.
pub fn get_module_dependency_artifacts(
    direct_dependencies: &[(Artifact, Scope)],
    declared: &[Dependency],
    library_artifacts: &[Artifact],
    cache: &mut ClassificationCache,
    source: &dyn ManifestSource,
    use_osgi_dependencies: bool,
) -> Result<Vec<ModuleWrapper>, ManifestError> {
    collect_module_dependencies(
        direct_dependencies,
        declared,
        library_artifacts,
        cache,
        source,
        use_osgi_dependencies,
    )
}

/// Partition the dependency tree into per-module library lists.
pub fn collect_module_libraries(
    tree: &DependencyNode,
    runtime_artifacts: &[Artifact],
    cache: &mut ClassificationCache,
    source: &dyn ManifestSource,
    use_osgi_dependencies: bool,
) -> Result<ModuleLibraryPartition, ManifestError> {
    let mut visitor = ModuleLibraryVisitor::new(
        runtime_artifacts,
        cache,
        source,
        use_osgi_dependencies,
    );
    walk(tree, &mut visitor)?;
    Ok(visitor.into_partition())
}
