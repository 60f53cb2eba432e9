//! Class-path library collection for a single module project.

use crate::core::artifact::Artifact;
use crate::core::graph::{walk, DependencyNode};
use crate::manifest::{ClassificationCache, ManifestError, ManifestSource};
use crate::resolver::LibraryVisitor;

/// Collect the artifacts to bundle on the module's class path.
///
/// `explicit_libraries` are `group:artifact` ids from configuration that
/// are forced to be libraries regardless of what their manifests say.
pub fn get_library_artifacts(
    tree: &DependencyNode,
    explicit_libraries: &[String],
    runtime_artifacts: &[Artifact],
    cache: &mut ClassificationCache,
    source: &dyn ManifestSource,
    use_osgi_dependencies: bool,
) -> Result<Vec<Artifact>, ManifestError> {
    tracing::debug!("initializing dependency tree walk for library collection");
    let mut visitor = LibraryVisitor::new(
        explicit_libraries.to_vec(),
        runtime_artifacts,
        cache,
        source,
        use_osgi_dependencies,
    );
    walk(tree, &mut visitor)?;
    Ok(visitor.into_artifacts())
}
