//! nbpack - Manifest classification and dependency partitioning for
//! NetBeans platform module packaging.
//!
//! This crate provides the core library functionality for nbpack:
//! examining jar manifests for NetBeans module and OSGi bundle metadata,
//! splitting a Maven-style dependency tree into module dependencies and
//! class-path libraries, and planning cluster membership for application
//! assembly.

pub mod cluster;
pub mod core;
pub mod manifest;
pub mod ops;
pub mod resolver;
pub mod util;

pub use crate::core::{
    artifact::{Artifact, ArtifactKind, Scope},
    dependency::{Dependency, DependencyKind},
    graph::{walk, DependencyNode, DependencyVisitor},
};

pub use manifest::{ClassificationCache, FsManifestSource, ManifestClassification, ManifestSource};
pub use resolver::{matches_library, resolve_netbeans_dependency};
pub use util::{Config, Symbol};
