use std::fmt;

use crate::KeyPathError::{self, *};

/// The separator between key path segments.
pub const SEPARATOR: char = '.';

/// A parsed dotted key path.
///
/// Segments are split up front, so walking a document never re-tokenizes the
/// source string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    source: String,
    segments: Vec<String>,
}

impl KeyPath {
    /// Split a dotted path into segments.
    ///
    /// Splitting is total: there is no escaping of the separator inside
    /// segment names. An empty path or an empty segment is an error.
    pub fn parse(source: &str) -> Result<Self, KeyPathError> {
        if source.is_empty() {
            return Err(EmptyPath);
        }
        let segments: Vec<String> = source.split(SEPARATOR).map(str::to_string).collect();
        if let Some(index) = segments.iter().position(|segment| segment.is_empty()) {
            return Err(EmptySegment {
                path: source.to_string(),
                index,
            });
        }
        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The segments of the path, in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The original path string.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_dots() {
        let path = KeyPath::parse("a.b.c").unwrap();
        assert_eq!(path.segments(), ["a", "b", "c"]);
        assert_eq!(path.to_string(), "a.b.c");
    }

    #[test]
    fn single_segment() {
        let path = KeyPath::parse("key").unwrap();
        assert_eq!(path.segments(), ["key"]);
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(KeyPath::parse(""), Err(KeyPathError::EmptyPath)));
    }

    #[test]
    fn empty_segments_are_rejected() {
        assert!(KeyPath::parse("a..b").is_err());
        assert!(KeyPath::parse(".a").is_err());
        assert!(KeyPath::parse("a.").is_err());
    }
}
