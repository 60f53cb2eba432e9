//! High-level operations.
//!
//! This module ties the classification, resolution and cluster pieces
//! together the way the command line uses them.

pub mod classify;
pub mod clusters;
pub mod libraries;
pub mod modules;

pub use classify::{classify_path, ClassificationReport};
pub use clusters::plan_clusters;
pub use libraries::get_library_artifacts;
pub use modules::{collect_module_libraries, get_module_dependency_artifacts};
