//! Raw JAR manifest parsing.
//!
//! Only the main attribute section matters here; per-entry sections are
//! skipped. The format quirks that do matter: values wrap at 72 bytes
//! with a leading-space continuation line, line endings may be CR, LF or
//! CRLF, and attribute names are case-insensitive.

use std::collections::HashMap;

use crate::manifest::ManifestError;

/// Parsed main attributes of a MANIFEST.MF.
#[derive(Debug, Clone, Default)]
pub struct RawManifest {
    // keyed by ASCII-lowercased attribute name
    attributes: HashMap<String, String>,
}

impl RawManifest {
    /// An empty manifest (no attributes at all).
    pub fn empty() -> Self {
        RawManifest::default()
    }

    /// Parse manifest bytes.
    ///
    /// Fails on non-UTF-8 input or a line that is neither an attribute
    /// nor a continuation; a manifest that exists but cannot be parsed is
    /// never silently treated as empty.
    pub fn parse(bytes: &[u8]) -> Result<RawManifest, ManifestError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|_| ManifestError::Malformed("manifest is not valid UTF-8".to_string()))?;
        // Normalize CRLF so the split below never sees a phantom blank line
        let text = text.replace("\r\n", "\n");

        let mut attributes: HashMap<String, String> = HashMap::new();
        let mut current: Option<String> = None;

        for line in text.split(['\n', '\r']) {
            if line.is_empty() {
                // Blank line ends the main section; everything after is
                // per-entry sections we do not care about.
                break;
            }
            if let Some(rest) = line.strip_prefix(' ') {
                let key = current.as_ref().ok_or_else(|| {
                    ManifestError::Malformed(format!("continuation line without attribute: `{line}`"))
                })?;
                attributes
                    .get_mut(key)
                    .map(|value| value.push_str(rest))
                    .ok_or_else(|| {
                        ManifestError::Malformed("continuation without value".to_string())
                    })?;
                continue;
            }

            let colon = line.find(':').ok_or_else(|| {
                ManifestError::Malformed(format!("line is not an attribute: `{line}`"))
            })?;
            let name = line[..colon].to_ascii_lowercase();
            if name.is_empty() {
                return Err(ManifestError::Malformed(format!(
                    "attribute with empty name: `{line}`"
                )));
            }
            let value = line[colon + 1..].strip_prefix(' ').unwrap_or(&line[colon + 1..]);
            attributes.insert(name.clone(), value.to_string());
            current = Some(name);
        }

        Ok(RawManifest { attributes })
    }

    /// Look up a main attribute by (case-insensitive) name.
    pub fn main_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Whether the manifest has no attributes at all.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
