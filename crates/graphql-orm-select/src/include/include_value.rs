use crate::include::IncludeTree;
use crate::include::ShapeEnvelope;

/// The value stored under a field name in an [`IncludeTree`].
#[derive(Clone, Debug, PartialEq)]
pub enum IncludeValue {
    /// The field was requested without a nested selection. Serializes as
    /// `true`.
    Leaf,

    /// The field was requested with nested selections.
    Nested(ShapeEnvelope),
}

impl IncludeValue {
    /// Classify the transformed children of a field: no children collapses to
    /// [`IncludeValue::Leaf`], anything else is wrapped in the envelope
    /// [`ShapeEnvelope::classify`] picks.
    pub fn classify(children: IncludeTree) -> Self {
        if children.is_empty() {
            Self::Leaf
        } else {
            Self::Nested(ShapeEnvelope::classify(children))
        }
    }

    pub fn as_envelope(&self) -> Option<&ShapeEnvelope> {
        match self {
            Self::Leaf => None,
            Self::Nested(envelope) => Some(envelope),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf)
    }
}

impl serde::Serialize for IncludeValue {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match self {
            Self::Leaf => serializer.serialize_bool(true),
            Self::Nested(envelope) => serde::Serialize::serialize(envelope, serializer),
        }
    }
}
