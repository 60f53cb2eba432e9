//! Maven to NetBeans version adaptation.
//!
//! NetBeans specification versions are dotted integers and implementation
//! versions are free-form strings, so Maven versions need massaging
//! before they can go into a module manifest.

use chrono::NaiveDate;

const SNAPSHOT: &str = "SNAPSHOT";

/// Which manifest attribute the adapted version is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionKind {
    Specification,
    Implementation,
}

/// Convert a Maven version to a NetBeans-friendly one.
///
/// For specification versions, qualifier suffixes (`-RC1`, `_BETA5`,
/// `-SNAPSHOT`) are stripped, non-numeric segments are dropped and the
/// result is truncated to three segments. For implementation versions,
/// `SNAPSHOT` inside a segment is replaced with `date` as `yyyyMMdd`.
/// An empty result becomes `0.0.0`.
pub fn adapt_version(version: &str, kind: VersionKind, date: NaiveDate) -> String {
    if kind == VersionKind::Implementation && version == SNAPSHOT {
        return format!("0.0.0.{}", snapshot_value(date));
    }
    let mut adapted = String::new();
    for segment in version.split('.').filter(|s| !s.is_empty()) {
        let mut segment = segment.to_string();
        if kind == VersionKind::Implementation {
            if let Some(idx) = segment.find(SNAPSHOT) {
                if idx > 0 {
                    segment = if segment.len() > idx + SNAPSHOT.len() {
                        segment[idx + SNAPSHOT.len()..].to_string()
                    } else {
                        format!("{}{}", &segment[..idx], snapshot_value(date))
                    };
                }
            }
        }
        if kind == VersionKind::Specification {
            if let Some(idx) = segment.find('-').filter(|idx| *idx > 0) {
                segment.truncate(idx);
            } else if let Some(idx) = segment.find('_').filter(|idx| *idx > 0) {
                segment.truncate(idx);
            }
            segment = match segment.parse::<i32>() {
                Ok(value) => value.to_string(),
                Err(_) => String::new(),
            };
        }
        if !segment.is_empty() {
            if !adapted.is_empty() {
                adapted.push('.');
            }
            adapted.push_str(&segment);
        }
    }
    if adapted.is_empty() {
        adapted.push_str("0.0.0");
    }
    if kind == VersionKind::Specification {
        truncate_segments(&mut adapted, 3);
    }
    adapted
}

fn snapshot_value(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn truncate_segments(version: &mut String, count: usize) {
    let cut = version.match_indices('.').nth(count - 1).map(|(idx, _)| idx);
    if let Some(idx) = cut {
        version.truncate(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    }

    fn spec(version: &str) -> String {
        adapt_version(version, VersionKind::Specification, date())
    }

    fn impl_(version: &str) -> String {
        adapt_version(version, VersionKind::Implementation, date())
    }

    #[test]
    fn empty_version_falls_back() {
        assert_eq!(impl_(""), "0.0.0");
        assert_eq!(spec(""), "0.0.0");
    }

    #[test]
    fn bare_snapshot() {
        assert_eq!(impl_("SNAPSHOT"), "0.0.0.20240715");
        assert_eq!(spec("SNAPSHOT"), "0.0.0");
    }

    #[test]
    fn plain_implementation_versions_pass_through() {
        assert_eq!(impl_("1"), "1");
        assert_eq!(impl_("1.2"), "1.2");
        assert_eq!(impl_("1.2.3"), "1.2.3");
        assert_eq!(impl_("1.2.3.4"), "1.2.3.4");
    }

    #[test]
    fn implementation_snapshot_qualifier_becomes_a_date() {
        assert_eq!(impl_("1-SNAPSHOT"), "1-20240715");
        assert_eq!(impl_("1.2-SNAPSHOT"), "1.2-20240715");
        assert_eq!(impl_("1.2.3.4-SNAPSHOT"), "1.2.3.4-20240715");
    }

    #[test]
    fn implementation_keeps_other_qualifiers() {
        assert_eq!(impl_("1-BETA1"), "1-BETA1");
        assert_eq!(impl_("1.2.3-BETA1"), "1.2.3-BETA1");
    }

    #[test]
    fn specification_versions_are_numeric_and_three_segments() {
        assert_eq!(spec("1"), "1");
        assert_eq!(spec("1.2"), "1.2");
        assert_eq!(spec("1.2.3"), "1.2.3");
        assert_eq!(spec("1.2.3.4"), "1.2.3");
    }

    #[test]
    fn specification_strips_qualifiers() {
        assert_eq!(spec("1-SNAPSHOT"), "1");
        assert_eq!(spec("1.2.3.4-SNAPSHOT"), "1.2.3");
        assert_eq!(spec("1.2.3-BETA1"), "1.2.3");
        assert_eq!(spec("1.2.3.4_BETA1"), "1.2.3");
    }
}
