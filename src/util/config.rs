//! Configuration file support.
//!
//! Settings live in `nbpack.toml` at the project root, with an optional
//! user-wide file supplying defaults. The project file takes precedence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::dependency::DependencySpecEntry;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Module dependency resolution settings
    pub modules: ModulesConfig,

    /// Cluster assembly settings
    pub cluster: ClusterConfig,

    /// Repository identification settings
    pub repository: RepositoryConfig,
}

/// Module dependency resolution settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesConfig {
    /// Treat OSGi bundles as module dependencies
    pub use_osgi_dependencies: bool,

    /// `group:artifact` ids forced onto the class path as libraries
    #[serde(default)]
    pub libraries: Vec<String>,

    /// Explicitly configured module dependencies
    #[serde(default)]
    pub dependencies: Vec<DependencySpecEntry>,
}

/// Cluster assembly settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Cluster for modules whose descriptor names none
    pub default_cluster: Option<String>,

    /// Clusters to enable in the application config; empty means all
    /// clusters found in the plan
    #[serde(default)]
    pub enabled: Vec<String>,
}

/// Repository identification settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// `sha1;group:artifact:version` list used to match bundled jars to
    /// repository coordinates
    pub externals_list: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.modules.use_osgi_dependencies {
            self.modules.use_osgi_dependencies = true;
        }
        if !other.modules.libraries.is_empty() {
            self.modules.libraries = other.modules.libraries;
        }
        if !other.modules.dependencies.is_empty() {
            self.modules.dependencies = other.modules.dependencies;
        }
        if other.cluster.default_cluster.is_some() {
            self.cluster.default_cluster = other.cluster.default_cluster;
        }
        if !other.cluster.enabled.is_empty() {
            self.cluster.enabled = other.cluster.enabled;
        }
        if other.repository.externals_list.is_some() {
            self.repository.externals_list = other.repository.externals_list;
        }
    }
}

/// Project config path (`<root>/nbpack.toml`).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join("nbpack.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.modules.use_osgi_dependencies);
        assert!(config.modules.libraries.is_empty());
        assert!(config.cluster.default_cluster.is_none());
        assert!(config.repository.externals_list.is_none());
    }

    #[test]
    fn test_config_load() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("nbpack.toml");

        std::fs::write(
            &config_path,
            r#"
[modules]
use_osgi_dependencies = true
libraries = ["org.example:some-lib"]

[[modules.dependencies]]
id = "org.netbeans.api:org-openide-util"
kind = "impl"

[cluster]
default_cluster = "extra"

[repository]
externals_list = "externals.txt"
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();
        assert!(config.modules.use_osgi_dependencies);
        assert_eq!(config.modules.libraries, ["org.example:some-lib"]);
        assert_eq!(config.modules.dependencies.len(), 1);
        assert_eq!(config.cluster.default_cluster.as_deref(), Some("extra"));
        assert_eq!(
            config.repository.externals_list,
            Some(PathBuf::from("externals.txt"))
        );
    }

    #[test]
    fn test_config_load_missing_falls_back() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_or_default(&tmp.path().join("absent.toml"));
        assert!(!config.modules.use_osgi_dependencies);
    }

    #[test]
    fn test_config_merge() {
        let mut base = Config::default();
        base.modules.libraries = vec!["g:a".to_string()];
        base.cluster.default_cluster = Some("platform".to_string());

        let mut overlay = Config::default();
        overlay.modules.use_osgi_dependencies = true;
        overlay.cluster.default_cluster = Some("extra".to_string());

        base.merge(overlay);

        assert!(base.modules.use_osgi_dependencies);
        assert_eq!(base.cluster.default_cluster.as_deref(), Some("extra"));
        // not overridden
        assert_eq!(base.modules.libraries, ["g:a"]);
    }
}
