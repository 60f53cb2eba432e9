//! Manifest classification.
//!
//! Examines a module's manifest attributes and derives what kind of thing
//! the artifact is. Precedence is fixed: `OpenIDE-Module` makes it a
//! NetBeans module and OSGi headers are ignored; otherwise
//! `Bundle-SymbolicName` makes it an OSGi bundle; otherwise it is a plain
//! jar. The record is immutable once built and cached per artifact by the
//! callers.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::manifest::{ManifestError, RawManifest};

/// Trailing `/<digits>` release version on a code name.
static RELEASE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\d+$").unwrap());

/// `;`-separated directives on an OSGi symbolic name.
static SYMBOLIC_NAME_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" *;.+").unwrap());

/// `;`-separated directives on one OSGi header token.
static OSGI_TOKEN_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r";.+").unwrap());

/// Strip a trailing `/<digits>` release suffix from a code name.
///
/// Idempotent: a stripped name has no suffix left to strip.
pub fn strip_release(code_name: &str) -> String {
    RELEASE_SUFFIX.replace(code_name, "").into_owned()
}

/// Split a comma-separated OSGi header list on commas that are not inside
/// a balanced pair of double quotes.
///
/// This reproduces the documented behavior of the original header split,
/// including its fragility with unbalanced or escaped quotes; divergence
/// there is a characteristic, not a bug to correct.
fn split_outside_quotes(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quotes = 0usize;
    for (index, ch) in value.char_indices() {
        match ch {
            '"' => quotes += 1,
            ',' if quotes % 2 == 0 => {
                parts.push(&value[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&value[start..]);
    parts
}

fn split_trim(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip spec (`>`) or impl (`=`) qualifiers and a `/release` suffix from
/// one declared module-dependency token, keeping only the code name base.
fn strip_dependency_token(token: &str) -> String {
    let mut token = token;
    if let Some(pos) = token.find('>').filter(|&p| p > 0) {
        token = &token[..pos];
    } else if let Some(pos) = token.find('=').filter(|&p| p > 0) {
        token = &token[..pos];
    }
    if let Some(pos) = token.find('/').filter(|&p| p > 0) {
        token = &token[..pos];
    }
    token.trim().to_string()
}

fn strip_osgi_qualifier(token: &str) -> String {
    OSGI_TOKEN_QUALIFIER.replace(token, "").trim().to_string()
}

/// Typed classification of one artifact's manifest.
#[derive(Debug, Clone)]
pub struct ManifestClassification {
    netbeans_module: bool,
    osgi_bundle: bool,
    module: Option<String>,
    localized: bool,
    locale_bundle: Option<String>,
    spec_version: Option<String>,
    impl_version: Option<String>,
    classpath: String,
    public_packages: bool,
    friend_packages: bool,
    friends: Vec<String>,
    packages: Vec<String>,
    dependency_tokens: Vec<String>,
    osgi_imports: BTreeSet<String>,
    osgi_exports: BTreeSet<String>,
    requires_tokens: Vec<String>,
    provides_tokens: Vec<String>,
    bundle_autoload: bool,
}

impl Default for ManifestClassification {
    fn default() -> Self {
        ManifestClassification {
            netbeans_module: false,
            osgi_bundle: false,
            module: None,
            localized: false,
            locale_bundle: None,
            spec_version: None,
            impl_version: None,
            classpath: String::new(),
            public_packages: false,
            friend_packages: false,
            friends: Vec::new(),
            packages: Vec::new(),
            dependency_tokens: Vec::new(),
            osgi_imports: BTreeSet::new(),
            osgi_exports: BTreeSet::new(),
            requires_tokens: Vec::new(),
            provides_tokens: Vec::new(),
            // default behaviour without the special manifest entry
            bundle_autoload: true,
        }
    }
}

impl ManifestClassification {
    /// The classification of an artifact with no manifest at all.
    ///
    /// Absence is a valid state for plain jars, not an error.
    pub fn non_module() -> Self {
        ManifestClassification::default()
    }

    /// Classify raw manifest bytes.
    ///
    /// `populate_dependencies` controls whether declared dependency and
    /// capability tokens are parsed too; most callers only need the kind.
    pub fn from_bytes(
        bytes: &[u8],
        populate_dependencies: bool,
    ) -> Result<Self, ManifestError> {
        let raw = RawManifest::parse(bytes)?;
        Ok(Self::from_raw(&raw, populate_dependencies))
    }

    /// Classify an already-parsed manifest.
    pub fn from_raw(raw: &RawManifest, populate_dependencies: bool) -> Self {
        let mut c = ManifestClassification::default();

        if let Some(module) = raw.main_attr("OpenIDE-Module") {
            c.netbeans_module = true;
            c.module = Some(module.to_string());
            c.locale_bundle = raw
                .main_attr("OpenIDE-Module-Localizing-Bundle")
                .map(str::to_string);
            c.localized = c.locale_bundle.is_some();
            c.spec_version = raw
                .main_attr("OpenIDE-Module-Specification-Version")
                .map(str::to_string);
            c.impl_version = raw
                .main_attr("OpenIDE-Module-Implementation-Version")
                .map(str::to_string);
            c.classpath = raw.main_attr("Class-Path").unwrap_or_default().to_string();

            let public = raw.main_attr("OpenIDE-Module-Public-Packages");
            let friends = raw.main_attr("OpenIDE-Module-Friends");
            match public {
                None => {}
                Some(value) if value.trim() == "-" => {}
                Some(value) => {
                    if let Some(friend_list) = friends {
                        // Friends restriction wins over plain public marking
                        c.friend_packages = true;
                        c.friends = split_trim(friend_list);
                    } else {
                        c.public_packages = true;
                    }
                    c.packages = split_trim(value);
                }
            }

            if populate_dependencies {
                if let Some(deps) = raw.main_attr("OpenIDE-Module-Module-Dependencies") {
                    c.dependency_tokens = deps
                        .split(',')
                        .map(strip_dependency_token)
                        .filter(|token| !token.is_empty())
                        .collect();
                }
                if let Some(provides) = raw.main_attr("OpenIDE-Module-Provides") {
                    c.provides_tokens = split_trim(provides);
                }
                let requires = raw.main_attr("OpenIDE-Module-Requires");
                let needs = raw.main_attr("OpenIDE-Module-Needs");
                if requires.is_some() || needs.is_some() {
                    let mut tokens = Vec::new();
                    if let Some(requires) = requires {
                        tokens.extend(split_trim(requires));
                    }
                    if let Some(needs) = needs {
                        tokens.extend(split_trim(needs));
                    }
                    c.requires_tokens = tokens;
                }
            }
        } else if let Some(symbolic_name) = raw.main_attr("Bundle-SymbolicName") {
            c.osgi_bundle = true;
            c.module = Some(
                SYMBOLIC_NAME_QUALIFIER
                    .replace(symbolic_name, "")
                    .replace('-', "_"),
            );
            c.spec_version = raw.main_attr("Bundle-Version").map(str::to_string);
            c.public_packages = raw.main_attr("Export-Package").is_some();
            if let Some(autoload) = raw.main_attr("Nbm-Maven-Plugin-Autoload") {
                c.bundle_autoload = autoload.eq_ignore_ascii_case("true");
            }

            if populate_dependencies {
                // Require-Bundle is not the major way of declaring OSGi
                // dependencies; Import-Package is collected separately.
                if let Some(deps) = raw.main_attr("Require-Bundle") {
                    c.dependency_tokens = split_outside_quotes(deps)
                        .into_iter()
                        .map(strip_osgi_qualifier)
                        .collect();
                }
                if let Some(imports) = raw.main_attr("Import-Package") {
                    c.osgi_imports = split_outside_quotes(imports)
                        .into_iter()
                        .map(strip_osgi_qualifier)
                        .collect();
                }
                if let Some(exports) = raw.main_attr("Export-Package") {
                    c.osgi_exports = split_outside_quotes(exports)
                        .into_iter()
                        .map(strip_osgi_qualifier)
                        .collect();
                }
            }
        } else {
            // Plain jar: best-effort identity, never a module
            c.spec_version = raw.main_attr("Specification-Version").map(str::to_string);
            c.impl_version = raw.main_attr("Implementation-Version").map(str::to_string);
            c.module = raw
                .main_attr("Package")
                .or_else(|| raw.main_attr("Extension-Name"))
                .map(str::to_string);
        }

        c
    }

    pub fn is_netbeans_module(&self) -> bool {
        self.netbeans_module
    }

    pub fn is_osgi_bundle(&self) -> bool {
        self.osgi_bundle
    }

    /// Code name base of the module, without any release version.
    pub fn code_name_base(&self) -> Option<String> {
        self.module.as_deref().map(strip_release)
    }

    /// Full module name: code name base, optionally `/<release>`.
    pub fn module_with_release(&self) -> Option<&str> {
        self.module.as_deref()
    }

    pub fn is_localized(&self) -> bool {
        self.localized
    }

    pub fn locale_bundle(&self) -> Option<&str> {
        self.locale_bundle.as_deref()
    }

    pub fn spec_version(&self) -> Option<&str> {
        self.spec_version.as_deref()
    }

    pub fn impl_version(&self) -> Option<&str> {
        self.impl_version.as_deref()
    }

    /// Raw Class-Path attribute value, empty when absent.
    pub fn classpath(&self) -> &str {
        &self.classpath
    }

    /// True when public packages are declared with no friend restriction.
    pub fn has_public_packages(&self) -> bool {
        self.public_packages
    }

    /// True when both public packages and a friend list are declared.
    pub fn has_friend_packages(&self) -> bool {
        self.friend_packages
    }

    pub fn friends(&self) -> &[String] {
        &self.friends
    }

    /// Package statements from OpenIDE-Module-Public-Packages.
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// Declared module dependency code names, qualifiers stripped.
    pub fn dependency_tokens(&self) -> &[String] {
        &self.dependency_tokens
    }

    pub fn osgi_imports(&self) -> &BTreeSet<String> {
        &self.osgi_imports
    }

    pub fn osgi_exports(&self) -> &BTreeSet<String> {
        &self.osgi_exports
    }

    /// Union of OpenIDE-Module-Requires and OpenIDE-Module-Needs.
    pub fn requires_tokens(&self) -> &[String] {
        &self.requires_tokens
    }

    pub fn provides_tokens(&self) -> &[String] {
        &self.provides_tokens
    }

    /// Whether an OSGi bundle may be installed as autoload.
    pub fn is_bundle_autoload(&self) -> bool {
        self.bundle_autoload
    }
}
