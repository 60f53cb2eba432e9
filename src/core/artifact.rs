//! Artifact coordinates and identity.
//!
//! An Artifact is one resolved build input: Maven-style coordinates, the
//! packaging kind the build system reported for it, and optionally the
//! file it was resolved to. Identity keys come in two flavors: the plain
//! `group:artifact` id used in descriptors and allowlists, and the
//! versionless conflict id used to match tree nodes against the runtime
//! artifact set.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::Symbol;

/// Packaging kind of an artifact, as reported by the surrounding build.
///
/// The `nbm` kind is trusted input: an artifact packaged as nbm is a
/// NetBeans module even without manifest evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Jar,
    Nbm,
    Pom,
    Other(Symbol),
}

impl ArtifactKind {
    pub fn as_str(&self) -> &str {
        match self {
            ArtifactKind::Jar => "jar",
            ArtifactKind::Nbm => "nbm",
            ArtifactKind::Pom => "pom",
            ArtifactKind::Other(s) => s.as_str(),
        }
    }
}

impl FromStr for ArtifactKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "jar" => ArtifactKind::Jar,
            "nbm" => ArtifactKind::Nbm,
            "pom" => ArtifactKind::Pom,
            other => ArtifactKind::Other(Symbol::new(other)),
        })
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dependency scope declared on a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Compile,
    Provided,
    Runtime,
    System,
    Test,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Compile => "compile",
            Scope::Provided => "provided",
            Scope::Runtime => "runtime",
            Scope::System => "system",
            Scope::Test => "test",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown dependency scope `{0}`")]
pub struct UnknownScope(String);

impl FromStr for Scope {
    type Err = UnknownScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compile" => Ok(Scope::Compile),
            "provided" => Ok(Scope::Provided),
            "runtime" => Ok(Scope::Runtime),
            "system" => Ok(Scope::System),
            "test" => Ok(Scope::Test),
            other => Err(UnknownScope(other.to_string())),
        }
    }
}

/// A resolved artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    group: Symbol,
    artifact: Symbol,
    version: Symbol,
    classifier: Option<Symbol>,
    kind: ArtifactKind,
    file: Option<PathBuf>,
}

impl Artifact {
    /// Create a new artifact from coordinates.
    pub fn new(
        group: impl Into<Symbol>,
        artifact: impl Into<Symbol>,
        version: impl Into<Symbol>,
        kind: ArtifactKind,
    ) -> Self {
        Artifact {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            classifier: None,
            kind,
            file: None,
        }
    }

    /// Set the classifier.
    pub fn with_classifier(mut self, classifier: impl Into<Symbol>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// Set the resolved file.
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn group(&self) -> Symbol {
        self.group
    }

    pub fn artifact(&self) -> Symbol {
        self.artifact
    }

    pub fn version(&self) -> Symbol {
        self.version
    }

    pub fn classifier(&self) -> Option<Symbol> {
        self.classifier
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// The resolved file, if the build system supplied one.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Whether this artifact is packaged as an nbm.
    pub fn is_nbm(&self) -> bool {
        self.kind == ArtifactKind::Nbm
    }

    /// Descriptor identity: `group:artifact`.
    pub fn id(&self) -> Symbol {
        Symbol::new(format!("{}:{}", self.group, self.artifact))
    }

    /// Versionless identity used to match tree nodes against the runtime
    /// set: `group:artifact:kind[:classifier]`.
    pub fn conflict_id(&self) -> Symbol {
        match self.classifier {
            Some(cls) => Symbol::new(format!(
                "{}:{}:{}:{}",
                self.group, self.artifact, self.kind, cls
            )),
            None => Symbol::new(format!("{}:{}:{}", self.group, self.artifact, self.kind)),
        }
    }

    /// Full coordinate: `group:artifact:version`.
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact, self.version)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// A full Maven coordinate as found in externals lists and configuration:
/// `group:artifact:version[:classifier[@type]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MavenCoordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub classifier: String,
    pub kind: String,
}

/// A coordinate string that does not follow
/// `group:artifact:version[:classifier[@type]]`.
#[derive(Debug, Error)]
#[error("malformed artifact coordinate `{0}`: expected group:artifact:version[:classifier[@type]]")]
pub struct CoordinateError(pub String);

/// Split a dependency coordinate string into its parts.
///
/// The fourth segment, when present, is `classifier` or `classifier@type`;
/// type defaults to `jar` and classifier to the empty string.
pub fn split_dependency_string(input: &str) -> Result<MavenCoordinate, CoordinateError> {
    let splits: Vec<&str> = input.split(':').collect();
    if splits.len() < 3 || splits[..3].iter().any(|s| s.is_empty()) {
        return Err(CoordinateError(input.to_string()));
    }

    let mut coordinate = MavenCoordinate {
        group: splits[0].to_string(),
        artifact: splits[1].to_string(),
        version: splits[2].to_string(),
        classifier: String::new(),
        kind: "jar".to_string(),
    };

    if splits.len() > 3 {
        let qualifier: Vec<&str> = splits[3].split('@').collect();
        if qualifier.len() > 1 {
            coordinate.classifier = qualifier[0].to_string();
            coordinate.kind = qualifier[1].to_string();
        } else {
            coordinate.classifier = splits[3].to_string();
        }
    }

    Ok(coordinate)
}

impl FromStr for MavenCoordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, CoordinateError> {
        split_dependency_string(s)
    }
}

impl fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)?;
        if !self.classifier.is_empty() {
            write!(f, ":{}", self.classifier)?;
            if self.kind != "jar" {
                write!(f, "@{}", self.kind)?;
            }
        }
        Ok(())
    }
}

impl MavenCoordinate {
    /// Turn the coordinate into an (unresolved) artifact.
    pub fn to_artifact(&self) -> Artifact {
        let kind = self.kind.parse().unwrap_or(ArtifactKind::Jar);
        let artifact = Artifact::new(&self.group, &self.artifact, &self.version, kind);
        if self.classifier.is_empty() {
            artifact
        } else {
            artifact.with_classifier(&self.classifier)
        }
    }
}
