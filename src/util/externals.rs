//! Externals list lookups.
//!
//! NetBeans distributions ship some jars as `*.external` stubs pointing
//! at well-known artifacts. The externals list maps a jar's SHA-1 to its
//! repository coordinate, one `SHA1;group:artifact:version` entry per
//! line, `#` starting a comment line.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::artifact::MavenCoordinate;
use crate::util::hash::sha1_file;

/// Parsed externals list, keyed by uppercase SHA-1.
#[derive(Debug, Default)]
pub struct ExternalsList {
    entries: Vec<(String, MavenCoordinate)>,
}

impl ExternalsList {
    /// Parse the list from its text form. Lines that do not parse as a
    /// coordinate are skipped with a warning rather than failing the
    /// whole list.
    pub fn parse(text: &str) -> Self {
        let mut entries = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((sha1, coordinate)) = line.split_once(';') else {
                continue;
            };
            if !coordinate.contains(':') {
                continue;
            }
            match coordinate.parse::<MavenCoordinate>() {
                Ok(coordinate) => entries.push((sha1.to_uppercase(), coordinate)),
                Err(e) => {
                    tracing::warn!("skipping externals entry {line:?}: {e}");
                }
            }
        }
        ExternalsList { entries }
    }

    /// Load the list from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read externals list: {}", path.display()))?;
        Ok(ExternalsList::parse(&text))
    }

    /// Look up a coordinate by the jar's SHA-1, case-insensitively.
    pub fn lookup(&self, sha1: &str) -> Option<&MavenCoordinate> {
        let sha1 = sha1.to_uppercase();
        self.entries
            .iter()
            .find(|(entry_sha1, _)| *entry_sha1 == sha1)
            .map(|(_, coordinate)| coordinate)
    }

    /// Hash a file and look it up in the list.
    pub fn identify_file(&self, file: &Path) -> Result<Option<&MavenCoordinate>> {
        let sha1 = sha1_file(file)?.to_uppercase();
        match self.lookup(&sha1) {
            Some(coordinate) => {
                tracing::info!(
                    "found match {} for {}",
                    coordinate,
                    file.display()
                );
                Ok(Some(coordinate))
            }
            None => {
                tracing::info!(
                    "no repository match for {} with sha {sha1}",
                    file.display()
                );
                Ok(None)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = "\
# NetBeans externals
AAF4C61DDCC5E8A2DABEDE0F3B482CD9AEA9434D;org.example:hello:1.0
0000000000000000000000000000000000000001;org.example:other:2.0:sources@jar
not-a-real-entry
deadbeef;garbage-without-colon
";

    #[test]
    fn parses_entries_and_skips_comments_and_garbage() {
        let list = ExternalsList::parse(LIST);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let list = ExternalsList::parse(LIST);
        let hit = list
            .lookup("aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d")
            .unwrap();
        assert_eq!(hit.to_string(), "org.example:hello:1.0");
        assert!(list.lookup("ffffffffffffffffffffffffffffffffffffffff").is_none());
    }

    #[test]
    fn identify_file_matches_by_content() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = tmp.path().join("hello.jar");
        std::fs::write(&file, b"hello").unwrap();

        let list = ExternalsList::parse(LIST);
        let hit = list.identify_file(&file).unwrap().unwrap();
        assert_eq!(hit.to_string(), "org.example:hello:1.0");

        let miss = tmp.path().join("unknown.jar");
        std::fs::write(&miss, b"something else").unwrap();
        assert!(list.identify_file(&miss).unwrap().is_none());
    }
}
