//! Cluster naming and membership planning.
//!
//! Clusters are the installation-level grouping of NetBeans modules
//! (`platform`, `ide`, `extra`, ...). This module normalizes versioned
//! cluster directory names, extracts a module's target cluster from its
//! packaging descriptor, and groups modules into a cluster plan. Writing
//! the cluster layout to disk is left to the packaging step.

pub mod version;

pub use version::{adapt_version, VersionKind};

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::core::artifact::Artifact;

/// Cluster directory names carry an optional version tail, e.g.
/// `platform9` or `nb6.9`.
static CLUSTER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z]+)[0-9.]*$").unwrap()
});

/// `targetcluster="..."` attribute inside an NBM `Info/info.xml`.
static TARGET_CLUSTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"targetcluster="([a-zA-Z0-9_.\-]+)""#).unwrap()
});

/// Cluster the modules with no usable target cluster end up in.
pub const DEFAULT_CLUSTER: &str = "extra";

#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("no targetcluster attribute in descriptor for {0}")]
    MissingTargetCluster(String),
}

/// Drop the version tail from a cluster directory name.
///
/// `platform9` and `platform11` both normalize to `platform`; names that
/// do not follow the letters-then-digits shape pass through unchanged.
pub fn strip_cluster_name(name: &str) -> &str {
    match CLUSTER_NAME.captures(name) {
        Some(caps) => match caps.get(1) {
            Some(m) => m.as_str(),
            None => name,
        },
        None => name,
    }
}

/// Extract the target cluster from the text of an NBM packaging
/// descriptor (`Info/info.xml`).
pub fn find_target_cluster<'a>(
    descriptor: &'a str,
    module: &str,
) -> Result<&'a str, ClusterError> {
    TARGET_CLUSTER
        .captures(descriptor)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ClusterError::MissingTargetCluster(module.to_string()))
}

/// Cluster membership for an application assembly.
///
/// Keys are normalized cluster names; iteration order is stable so the
/// generated cluster list is reproducible.
#[derive(Debug, Default)]
pub struct ClusterPlan {
    clusters: BTreeMap<String, Vec<Artifact>>,
}

impl ClusterPlan {
    pub fn new() -> Self {
        ClusterPlan::default()
    }

    /// Place a module in a cluster. The cluster name is normalized first.
    pub fn add(&mut self, cluster: &str, module: Artifact) {
        self.clusters
            .entry(strip_cluster_name(cluster).to_string())
            .or_default()
            .push(module);
    }

    pub fn modules(&self, cluster: &str) -> &[Artifact] {
        self.clusters
            .get(cluster)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Cluster names to enable in the application config, sorted.
    pub fn enabled_clusters(&self) -> Vec<&str> {
        self.clusters.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Artifact])> {
        self.clusters
            .iter()
            .map(|(name, modules)| (name.as_str(), modules.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::artifact::ArtifactKind;

    #[test]
    fn versioned_cluster_names_are_normalized() {
        assert_eq!(strip_cluster_name("platform9"), "platform");
        assert_eq!(strip_cluster_name("platform11"), "platform");
        assert_eq!(strip_cluster_name("nb6.9"), "nb");
        assert_eq!(strip_cluster_name("extra"), "extra");
    }

    #[test]
    fn odd_cluster_names_pass_through() {
        assert_eq!(strip_cluster_name("java-ee"), "java-ee");
        assert_eq!(strip_cluster_name("9platform"), "9platform");
        assert_eq!(strip_cluster_name(""), "");
    }

    #[test]
    fn target_cluster_is_read_from_the_descriptor() {
        let descriptor = r#"<?xml version="1.0"?>
<module codenamebase="org.example.module">
  <manifest targetcluster="platform" OpenIDE-Module="org.example.module"/>
</module>"#;
        let cluster = find_target_cluster(descriptor, "org.example.module").unwrap();
        assert_eq!(cluster, "platform");
    }

    #[test]
    fn missing_target_cluster_is_an_error() {
        let err = find_target_cluster("<module/>", "org.example.module").unwrap_err();
        assert!(matches!(err, ClusterError::MissingTargetCluster(_)));
        assert!(err.to_string().contains("org.example.module"));
    }

    #[test]
    fn plan_groups_by_normalized_name() {
        let mut plan = ClusterPlan::new();
        plan.add(
            "platform11",
            Artifact::new("g", "a", "1.0", ArtifactKind::Nbm),
        );
        plan.add(
            "platform9",
            Artifact::new("g", "b", "1.0", ArtifactKind::Nbm),
        );
        plan.add("extra", Artifact::new("g", "c", "1.0", ArtifactKind::Nbm));

        assert_eq!(plan.enabled_clusters(), ["extra", "platform"]);
        assert_eq!(plan.modules("platform").len(), 2);
        assert_eq!(plan.modules("extra").len(), 1);
        assert!(plan.modules("ide").is_empty());
    }
}
