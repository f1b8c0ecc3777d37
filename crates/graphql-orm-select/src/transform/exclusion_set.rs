use indexmap::IndexSet;

/// The introspection meta-field excluded by default.
pub const TYPENAME_META_FIELD: &str = "__typename";

/// Field names dropped wherever they appear in a selection, at any depth.
///
/// Defaults to `{"__typename"}`. An explicitly empty set excludes nothing.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct ExclusionSet {
    field_names: IndexSet<String>,
}

impl ExclusionSet {
    pub fn new(field_names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        field_names.into_iter().collect()
    }

    /// An exclusion set that excludes nothing.
    pub fn none() -> Self {
        Self {
            field_names: IndexSet::new(),
        }
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.field_names.contains(field_name)
    }

    pub fn insert(&mut self, field_name: impl Into<String>) -> bool {
        self.field_names.insert(field_name.into())
    }

    pub fn is_empty(&self) -> bool {
        self.field_names.is_empty()
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, String> {
        self.field_names.iter()
    }

    pub fn len(&self) -> usize {
        self.field_names.len()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new([TYPENAME_META_FIELD])
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            field_names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
