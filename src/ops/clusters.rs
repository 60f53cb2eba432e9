//! Cluster planning for application assembly.

use crate::cluster::{find_target_cluster, ClusterPlan, DEFAULT_CLUSTER};
use crate::core::artifact::Artifact;

/// Group modules into clusters by their packaging descriptors.
///
/// Each entry pairs a module artifact with the text of its
/// `Info/info.xml`. Modules whose descriptor names no target cluster go
/// into `default_cluster` (or `extra` when none is configured).
pub fn plan_clusters(
    modules: &[(Artifact, String)],
    default_cluster: Option<&str>,
) -> ClusterPlan {
    let fallback = default_cluster.unwrap_or(DEFAULT_CLUSTER);
    let mut plan = ClusterPlan::new();
    for (module, descriptor) in modules {
        let cluster = match find_target_cluster(descriptor, &module.coordinate()) {
            Ok(cluster) => cluster,
            Err(e) => {
                tracing::error!("{e}, assuming {fallback}");
                fallback
            }
        };
        plan.add(cluster, module.clone());
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::artifact::ArtifactKind;

    fn descriptor(cluster: &str) -> String {
        format!(r#"<module><manifest targetcluster="{cluster}"/></module>"#)
    }

    #[test]
    fn groups_modules_by_target_cluster() {
        let modules = vec![
            (
                Artifact::new("g", "a", "1.0", ArtifactKind::Nbm),
                descriptor("platform11"),
            ),
            (
                Artifact::new("g", "b", "1.0", ArtifactKind::Nbm),
                descriptor("ide"),
            ),
            (
                Artifact::new("g", "c", "1.0", ArtifactKind::Nbm),
                "<module/>".to_string(),
            ),
        ];

        let plan = plan_clusters(&modules, None);
        assert_eq!(plan.enabled_clusters(), ["extra", "ide", "platform"]);
        assert_eq!(plan.modules("platform")[0].id().as_str(), "g:a");
        assert_eq!(plan.modules("extra")[0].id().as_str(), "g:c");
    }

    #[test]
    fn configured_default_cluster_wins() {
        let modules = vec![(
            Artifact::new("g", "a", "1.0", ArtifactKind::Nbm),
            "<module/>".to_string(),
        )];
        let plan = plan_clusters(&modules, Some("devel"));
        assert_eq!(plan.enabled_clusters(), ["devel"]);
    }
}
