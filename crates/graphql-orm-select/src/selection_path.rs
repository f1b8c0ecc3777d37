use crate::include::IncludeValue;
use crate::include::ShapeEnvelope;
use thiserror::Error;

/// An ordered list of field names identifying a node of a
/// [`ShapeEnvelope`] tree, e.g. `["user", "posts"]`.
///
/// Converts from a dot-separated string (`"user.posts"`) or from a list of
/// segments. The empty string is the empty path. Deserializes from either
/// form and serializes as a list of segments.
#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(from = "RawSelectionPath", into = "Vec<String>")]
pub struct SelectionPath {
    segments: Vec<String>,
}

impl SelectionPath {
    pub fn new(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn parse(dotted_path: &str) -> Self {
        if dotted_path.is_empty() {
            return Self::default();
        }
        Self::new(dotted_path.split('.'))
    }

    /// Descend from `envelope` one segment at a time, each step indexing the
    /// populated `select`/`include` payload of the current envelope.
    ///
    /// The empty path returns `envelope` itself. Every segment must name a
    /// field that was selected with nested selections.
    pub fn extract<'e>(
        &self,
        envelope: &'e ShapeEnvelope,
    ) -> Result<&'e ShapeEnvelope, SelectionPathError> {
        let mut current = envelope;
        for segment in &self.segments {
            current = match current.tree().get(segment) {
                Some(IncludeValue::Nested(child)) => child,

                Some(IncludeValue::Leaf) =>
                    return Err(SelectionPathError::PathTraversesLeaf {
                        path: self.to_owned(),
                        segment: segment.to_owned(),
                    }),

                None =>
                    return Err(SelectionPathError::PathSegmentNotFound {
                        path: self.to_owned(),
                        segment: segment.to_owned(),
                    }),
            };
        }
        Ok(current)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        self.segments.as_slice()
    }
}

impl std::fmt::Display for SelectionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.segments.join(".").as_str())
    }
}

impl std::convert::From<&str> for SelectionPath {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}
impl std::convert::From<String> for SelectionPath {
    fn from(value: String) -> Self {
        Self::parse(value.as_str())
    }
}
impl std::convert::From<Vec<String>> for SelectionPath {
    fn from(value: Vec<String>) -> Self {
        Self { segments: value }
    }
}
impl std::convert::From<Vec<&str>> for SelectionPath {
    fn from(value: Vec<&str>) -> Self {
        Self::new(value)
    }
}
impl std::convert::From<&[&str]> for SelectionPath {
    fn from(value: &[&str]) -> Self {
        Self::new(value.iter().copied())
    }
}
impl std::convert::From<SelectionPath> for Vec<String> {
    fn from(value: SelectionPath) -> Self {
        value.segments
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawSelectionPath {
    Dotted(String),
    Segments(Vec<String>),
}
impl std::convert::From<RawSelectionPath> for SelectionPath {
    fn from(value: RawSelectionPath) -> Self {
        match value {
            RawSelectionPath::Dotted(dotted_path) => Self::parse(dotted_path.as_str()),
            RawSelectionPath::Segments(segments) => Self::from(segments),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SelectionPathError {
    #[error(
        "The `{segment}` segment of selection path `{path}` was not selected."
    )]
    PathSegmentNotFound {
        path: SelectionPath,
        segment: String,
    },

    #[error(
        "The `{segment}` segment of selection path `{path}` names a field \
        selected without nested fields, so the path cannot descend into it."
    )]
    PathTraversesLeaf {
        path: SelectionPath,
        segment: String,
    },
}
