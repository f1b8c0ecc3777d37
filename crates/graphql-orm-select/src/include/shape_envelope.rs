use crate::include::IncludeTree;

/// Which of the two envelope keys an [`ShapeEnvelope`] populates.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ShapeKind {
    Include,
    Select,
}

/// The externally visible wrapper around one [`IncludeTree`] level.
///
/// Exactly one of `select` or `include` is ever populated, so this is an
/// enum rather than a pair of options. It serializes to `{"select": {..}}`
/// or `{"include": {..}}`, the shape an ORM query-options argument expects.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeEnvelope {
    /// Relations to traverse. Every child of this level is itself nested.
    Include(IncludeTree),

    /// Fields to return. At least one child of this level is a leaf; nested
    /// children are carried along as-is.
    Select(IncludeTree),
}

impl ShapeEnvelope {
    /// Pick the envelope for `tree` by looking at its immediate children:
    /// any leaf makes it a `select`, otherwise (including when `tree` is
    /// empty) it is an `include`.
    pub fn classify(tree: IncludeTree) -> Self {
        if tree.has_leaf() {
            Self::Select(tree)
        } else {
            Self::Include(tree)
        }
    }

    pub fn include(&self) -> Option<&IncludeTree> {
        match self {
            Self::Include(tree) => Some(tree),
            Self::Select(_) => None,
        }
    }

    pub fn into_tree(self) -> IncludeTree {
        match self {
            Self::Include(tree) | Self::Select(tree) => tree,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Include(_) => ShapeKind::Include,
            Self::Select(_) => ShapeKind::Select,
        }
    }

    pub fn select(&self) -> Option<&IncludeTree> {
        match self {
            Self::Include(_) => None,
            Self::Select(tree) => Some(tree),
        }
    }

    /// The payload of whichever envelope key is populated.
    pub fn tree(&self) -> &IncludeTree {
        match self {
            Self::Include(tree) | Self::Select(tree) => tree,
        }
    }
}
