//! Core data structures.
//!
//! Foundational types shared by the classification and partitioning
//! logic: artifact coordinates and identity keys, module dependency
//! records, and the resolved dependency tree with its visitor traversal.

pub mod artifact;
pub mod dependency;
pub mod graph;

pub use artifact::{
    split_dependency_string, Artifact, ArtifactKind, CoordinateError, MavenCoordinate, Scope,
};
pub use dependency::{
    merge_descriptor_dependencies, Dependency, DependencyIdError, DependencyKind,
    DependencySpecEntry,
};
pub use graph::{walk, DependencyNode, DependencyVisitor};
