//! Module dependency resolution for direct project dependencies.

use std::collections::HashMap;

use crate::core::artifact::{Artifact, Scope};
use crate::core::dependency::Dependency;
use crate::manifest::{ClassificationCache, ManifestClassification, ManifestError, ManifestSource};
use crate::util::Symbol;

/// Decide how a candidate artifact relates to the module being built.
///
/// Precedence, in order: an entry declared in the descriptor wins as-is
/// when the manifest confirms module status, or when the user attached an
/// explicit version clause; `nbm` packaging alone is sufficient even
/// without manifest evidence; a NetBeans manifest is sufficient on its
/// own; anything else is not a module dependency (the caller may still
/// check the OSGi fallback).
pub fn resolve_netbeans_dependency(
    artifact: &Artifact,
    declared: &[Dependency],
    classification: &ManifestClassification,
) -> Option<Dependency> {
    let id = artifact.id();
    for dep in declared {
        if dep.id() == id {
            if classification.is_netbeans_module() {
                return Some(dep.clone());
            }
            if dep.explicit_value().is_some() {
                return Some(dep.clone());
            }
            tracing::warn!(
                "{id} declared as module dependency in descriptor, but not a NetBeans module"
            );
            return None;
        }
    }
    if artifact.is_nbm() {
        tracing::debug!("adding nbm module dependency - {id}");
        return Some(Dependency::spec(id));
    }
    if classification.is_netbeans_module() {
        tracing::debug!("adding direct NetBeans module dependency - {id}");
        return Some(Dependency::spec(id));
    }
    None
}

/// One resolved module dependency with how it was found.
#[derive(Debug, Clone)]
pub struct ModuleWrapper {
    pub dependency: Dependency,
    pub artifact: Artifact,
    pub transitive: bool,
    pub osgi: bool,
}

/// Resolve the direct dependencies of the project into module wrappers.
///
/// Only compile/provided/system direct dependencies are considered (the
/// runtime closure has already been partitioned into libraries), and
/// artifacts already claimed as libraries are skipped. When OSGi
/// dependencies are enabled, a bundle that failed NetBeans resolution is
/// still accepted as an OSGi dependency, reusing a declared entry by id
/// if one exists.
pub fn collect_module_dependencies(
    direct_dependencies: &[(Artifact, Scope)],
    declared: &[Dependency],
    library_artifacts: &[Artifact],
    cache: &mut ClassificationCache,
    source: &dyn ManifestSource,
    use_osgi_dependencies: bool,
) -> Result<Vec<ModuleWrapper>, ManifestError> {
    let libraries: HashMap<Symbol, ()> = library_artifacts
        .iter()
        .map(|artifact| (artifact.conflict_id(), ()))
        .collect();

    let mut wrappers = Vec::new();
    for (artifact, scope) in direct_dependencies {
        if !matches!(scope, Scope::Compile | Scope::Provided | Scope::System) {
            continue;
        }
        if libraries.contains_key(&artifact.conflict_id()) {
            continue;
        }

        let classification = cache.examine(artifact, source, false)?;
        if let Some(dependency) = resolve_netbeans_dependency(artifact, declared, classification) {
            wrappers.push(ModuleWrapper {
                dependency,
                artifact: artifact.clone(),
                transitive: false,
                osgi: false,
            });
        } else if use_osgi_dependencies && classification.is_osgi_bundle() {
            let id = artifact.id();
            let dependency = match declared.iter().find(|dep| dep.id() == id) {
                Some(dep) => dep.clone(),
                None => {
                    tracing::info!("adding OSGi bundle dependency - {id}");
                    Dependency::spec(id)
                }
            };
            wrappers.push(ModuleWrapper {
                dependency,
                artifact: artifact.clone(),
                transitive: false,
                osgi: true,
            });
        }
    }
    Ok(wrappers)
}
