//! Module dependency records.
//!
//! A Dependency is one declared (or inferred) module-dependency entry as it
//! will appear in the generated descriptor: the `group:artifact` id, the
//! spec/impl kind, and an optional explicit version clause that overrides
//! whatever would be derived from the manifest.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::Symbol;

/// Kind of a module dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// Specification dependency (the default, loose by spec version).
    #[default]
    Spec,
    /// Implementation dependency (exact impl version).
    Impl,
}

impl DependencyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyKind::Spec => "spec",
            DependencyKind::Impl => "impl",
        }
    }
}

/// A declared module dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    id: Symbol,
    kind: DependencyKind,
    explicit_value: Option<String>,
}

impl Dependency {
    /// Create a spec dependency on `group:artifact`.
    pub fn spec(id: impl Into<Symbol>) -> Self {
        Dependency {
            id: id.into(),
            kind: DependencyKind::Spec,
            explicit_value: None,
        }
    }

    /// Create a dependency of the given kind.
    pub fn new(id: impl Into<Symbol>, kind: DependencyKind) -> Self {
        Dependency {
            id: id.into(),
            kind,
            explicit_value: None,
        }
    }

    /// Attach an explicit version clause, e.g. `org.openide.util > 8.0`.
    pub fn with_explicit_value(mut self, value: impl Into<String>) -> Self {
        self.explicit_value = Some(value.into());
        self
    }

    /// The `group:artifact` id.
    pub fn id(&self) -> Symbol {
        self.id
    }

    pub fn kind(&self) -> DependencyKind {
        self.kind
    }

    /// The explicit version clause, if the user declared one.
    pub fn explicit_value(&self) -> Option<&str> {
        self.explicit_value.as_deref()
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.kind.as_str())?;
        if let Some(value) = &self.explicit_value {
            write!(f, " = {value}")?;
        }
        Ok(())
    }
}

/// A dependency id that is not of the form `group:artifact`.
#[derive(Debug, Error)]
#[error("malformed dependency id `{0}`: expected group:artifact")]
pub struct DependencyIdError(pub String);

/// Dependency override as it appears in configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencySpecEntry {
    /// `group:artifact` of the dependency
    pub id: String,

    /// spec or impl
    pub kind: DependencyKind,

    /// Explicit version clause overriding the derived one
    pub explicit_value: Option<String>,
}

impl DependencySpecEntry {
    /// Convert to a Dependency, validating the id syntax.
    ///
    /// Fails before any traversal begins; a malformed override is a
    /// configuration error, not something to warn and limp past.
    pub fn to_dependency(&self) -> Result<Dependency, DependencyIdError> {
        let mut parts = self.id.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(group), Some(artifact), None) if !group.is_empty() && !artifact.is_empty() => {}
            _ => return Err(DependencyIdError(self.id.clone())),
        }

        let mut dep = Dependency::new(self.id.as_str(), self.kind);
        if let Some(value) = &self.explicit_value {
            dep = dep.with_explicit_value(value);
        }
        Ok(dep)
    }
}

/// Merge descriptor-declared dependencies over the configured list.
///
/// Descriptor entries win by id, matching how other descriptor settings
/// override plugin configuration. Declaring dependencies in the module
/// descriptor is deprecated in favor of configuration, so a non-empty
/// descriptor list draws a warning.
pub fn merge_descriptor_dependencies(
    configured: &[Dependency],
    descriptor: &[Dependency],
) -> Vec<Dependency> {
    let mut deps: Vec<Dependency> = configured.to_vec();
    if descriptor.is_empty() {
        return deps;
    }

    tracing::warn!(
        "dependencies in module descriptor are deprecated, use the moduleDependencies configuration"
    );
    for dep in descriptor {
        deps.retain(|existing| existing.id() != dep.id());
        deps.push(dep.clone());
    }
    deps
}
