//! Manifest classification of a file or exploded directory.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::manifest::ManifestClassification;

/// Classify a manifest on disk.
///
/// A directory is treated as an exploded jar and its
/// `META-INF/MANIFEST.MF` is read; a missing manifest there means a
/// plain non-module jar. A file path is read as manifest text directly.
pub fn classify_path(path: &Path, populate_dependencies: bool) -> Result<ManifestClassification> {
    let manifest_path = if path.is_dir() {
        let candidate = path.join("META-INF").join("MANIFEST.MF");
        if !candidate.is_file() {
            tracing::debug!("no manifest in {}", path.display());
            return Ok(ManifestClassification::non_module());
        }
        candidate
    } else {
        path.to_path_buf()
    };

    let bytes = std::fs::read(&manifest_path)
        .with_context(|| format!("failed to read manifest: {}", manifest_path.display()))?;
    ManifestClassification::from_bytes(&bytes, populate_dependencies)
        .with_context(|| format!("failed to parse manifest: {}", manifest_path.display()))
}

/// Serializable view of a classification, for report output.
#[derive(Debug, Serialize)]
pub struct ClassificationReport {
    pub netbeans_module: bool,
    pub osgi_bundle: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_name_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specification_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation_version: Option<String>,
    pub public_packages: bool,
    pub friend_packages: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub friends: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provides: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub osgi_imports: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub osgi_exports: Vec<String>,
    pub autoload: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub classpath: String,
}

impl ClassificationReport {
    pub fn from_classification(classification: &ManifestClassification) -> Self {
        ClassificationReport {
            netbeans_module: classification.is_netbeans_module(),
            osgi_bundle: classification.is_osgi_bundle(),
            code_name_base: classification.code_name_base(),
            module: classification.module_with_release().map(str::to_string),
            specification_version: classification.spec_version().map(str::to_string),
            implementation_version: classification.impl_version().map(str::to_string),
            public_packages: classification.has_public_packages(),
            friend_packages: classification.has_friend_packages(),
            friends: classification.friends().to_vec(),
            packages: classification.packages().to_vec(),
            dependencies: classification.dependency_tokens().to_vec(),
            requires: classification.requires_tokens().to_vec(),
            provides: classification.provides_tokens().to_vec(),
            osgi_imports: classification.osgi_imports().iter().cloned().collect(),
            osgi_exports: classification.osgi_exports().iter().cloned().collect(),
            autoload: classification.is_bundle_autoload(),
            classpath: classification.classpath().to_string(),
        }
    }
}
