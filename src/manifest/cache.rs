//! Classification cache and manifest access seam.
//!
//! The cache is an explicit per-invocation map handed by reference to
//! everything that might classify an artifact, never a process-wide
//! singleton, so traversals stay independently testable. Resolved
//! artifacts are immutable within a run, so entries are never
//! invalidated.

use std::collections::HashMap;
use std::fs;

use crate::core::Artifact;
use crate::manifest::{ManifestClassification, ManifestError};
use crate::util::Symbol;

/// Where manifest bytes for an artifact come from.
///
/// Archive extraction is the caller's business; implementations here only
/// see exploded directories and standalone manifest files. A build system
/// that keeps artifacts zipped provides its own impl over its archive
/// reader.
pub trait ManifestSource {
    /// Obtain and classify the manifest for an artifact.
    fn examine(
        &self,
        artifact: &Artifact,
        populate_dependencies: bool,
    ) -> Result<ManifestClassification, ManifestError>;
}

/// Filesystem-backed manifest source.
///
/// A directory artifact is an exploded jar: its `META-INF/MANIFEST.MF` is
/// read, and a missing manifest file is a valid non-module state. A file
/// artifact is read as manifest text directly; handing a zipped jar here
/// fails parsing, which is the wanted hard stop.
#[derive(Debug, Default)]
pub struct FsManifestSource;

impl ManifestSource for FsManifestSource {
    fn examine(
        &self,
        artifact: &Artifact,
        populate_dependencies: bool,
    ) -> Result<ManifestClassification, ManifestError> {
        let path = artifact
            .file()
            .ok_or_else(|| ManifestError::NoFile(artifact.coordinate()))?;

        if path.is_dir() {
            let manifest = path.join("META-INF").join("MANIFEST.MF");
            if !manifest.is_file() {
                // e.g. target/classes of a plain jar project
                tracing::debug!("no manifest to examine under {}", path.display());
                return Ok(ManifestClassification::non_module());
            }
            let bytes = fs::read(&manifest).map_err(|source| ManifestError::Io {
                path: manifest.clone(),
                source,
            })?;
            ManifestClassification::from_bytes(&bytes, populate_dependencies)
        } else {
            let bytes = fs::read(path).map_err(|source| ManifestError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            ManifestClassification::from_bytes(&bytes, populate_dependencies)
        }
    }
}

/// Per-invocation map from artifact identity to classification.
#[derive(Debug, Default)]
pub struct ClassificationCache {
    entries: HashMap<Symbol, ManifestClassification>,
}

fn cache_key(artifact: &Artifact) -> Symbol {
    Symbol::new(format!("{}:{}", artifact.conflict_id(), artifact.version()))
}

impl ClassificationCache {
    pub fn new() -> Self {
        ClassificationCache::default()
    }

    /// Pre-seed a classification, e.g. one derived while converting the
    /// artifact earlier in the same build step.
    pub fn insert(&mut self, artifact: &Artifact, classification: ManifestClassification) {
        self.entries.insert(cache_key(artifact), classification);
    }

    pub fn get(&self, artifact: &Artifact) -> Option<&ManifestClassification> {
        self.entries.get(&cache_key(artifact))
    }

    /// Look up the classification, examining the artifact on a miss.
    pub fn examine(
        &mut self,
        artifact: &Artifact,
        source: &dyn ManifestSource,
        populate_dependencies: bool,
    ) -> Result<&ManifestClassification, ManifestError> {
        let key = cache_key(artifact);
        if !self.entries.contains_key(&key) {
            let classification = source.examine(artifact, populate_dependencies)?;
            self.entries.insert(key, classification);
        }
        Ok(&self.entries[&key])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
