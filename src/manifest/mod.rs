//! Manifest reading and classification.
//!
//! This is the front half of the packaging core: raw JAR manifest parsing
//! plus the classification state machine that turns manifest attributes
//! into a typed record (NetBeans module, OSGi bundle, or plain jar), and
//! the per-invocation cache that keeps each artifact from being examined
//! twice.

pub mod cache;
pub mod examine;
pub mod raw;

use std::path::PathBuf;

use thiserror::Error;

pub use cache::{ClassificationCache, FsManifestSource, ManifestSource};
pub use examine::ManifestClassification;
pub use raw::RawManifest;

/// A manifest that could not be read or parsed.
///
/// Always fatal for the enclosing build step; classification never
/// returns a partial result for a manifest that exists but is broken.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("could not read manifest at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest: {0}")]
    Malformed(String),

    #[error("artifact has no file to examine: {0}")]
    NoFile(String),
}
