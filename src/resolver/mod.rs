//! Dependency classification and tree partitioning.
//!
//! Everything here answers one question from two directions: given a
//! resolved dependency tree and the manifest classifications of its
//! artifacts, which artifacts are module dependencies (satisfied by the
//! platform) and which are class-path libraries (bundled next to the
//! module)?

pub mod libraries;
pub mod module_libraries;
pub mod netbeans;

pub use libraries::LibraryVisitor;
pub use module_libraries::{ModuleLibraryPartition, ModuleLibraryVisitor};
pub use netbeans::{collect_module_dependencies, resolve_netbeans_dependency, ModuleWrapper};

use crate::core::artifact::{Artifact, Scope};
use crate::manifest::ManifestClassification;

/// Decide whether an artifact is a class-path library.
///
/// Filter order is load-bearing:
/// 1. explicitly listed libraries always match, each list entry at most
///    once (the entry is consumed);
/// 2. provided/system scope never matches;
/// 3. nbm packaging never matches;
/// 4. NetBeans modules never match, nor OSGi bundles when OSGi
///    dependencies are enabled;
/// 5. whatever survives all of the above is a library.
pub fn matches_library(
    artifact: &Artifact,
    scope: Scope,
    explicit_libraries: &mut Vec<String>,
    classification: &ManifestClassification,
    use_osgi_dependencies: bool,
) -> bool {
    let id = artifact.id();
    if let Some(position) = explicit_libraries.iter().position(|lib| lib == id.as_str()) {
        explicit_libraries.remove(position);
        tracing::debug!("{id} included as module library, explicitly declared in module descriptor");
        return true;
    }
    if scope == Scope::Provided || scope == Scope::System {
        tracing::debug!("{id} omitted as module library, has scope 'provided/system'");
        return false;
    }
    if artifact.is_nbm() {
        return false;
    }
    if classification.is_netbeans_module()
        || (use_osgi_dependencies && classification.is_osgi_bundle())
    {
        // modules and bundles are dependencies, not libraries
        return false;
    }
    tracing::debug!("{id} included as module library, squeezed through all the filters");
    true
}
