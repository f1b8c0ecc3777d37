use crate::include::IncludeValue;
use indexmap::IndexMap;

/// One level of requested fields, keyed by field name.
///
/// Keys are unique per level. Iteration follows insertion order so that
/// serialized output mirrors the order fields were requested in, but no
/// behavior depends on it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct IncludeTree {
    fields: IndexMap<String, IncludeValue>,
}

impl IncludeTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key(&self, field_name: &str) -> bool {
        self.fields.contains_key(field_name)
    }

    pub fn get(&self, field_name: &str) -> Option<&IncludeValue> {
        self.fields.get(field_name)
    }

    /// Whether any immediate child of this level is a leaf.
    pub fn has_leaf(&self) -> bool {
        self.fields.values().any(IncludeValue::is_leaf)
    }

    /// Insert (or overwrite) the value for `field_name`.
    pub fn insert(
        &mut self,
        field_name: impl Into<String>,
        value: IncludeValue,
    ) -> Option<IncludeValue> {
        self.fields.insert(field_name.into(), value)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, IncludeValue> {
        self.fields.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, IncludeValue> {
        self.fields.keys()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Merge every entry of `other` into this level. Entries from `other`
    /// overwrite same-named entries already present.
    pub fn merge(&mut self, other: IncludeTree) {
        self.fields.extend(other.fields);
    }
}

impl<K: Into<String>> FromIterator<(K, IncludeValue)> for IncludeTree {
    fn from_iter<T: IntoIterator<Item = (K, IncludeValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter()
                .map(|(field_name, value)| (field_name.into(), value))
                .collect(),
        }
    }
}

impl IntoIterator for IncludeTree {
    type Item = (String, IncludeValue);
    type IntoIter = indexmap::map::IntoIter<String, IncludeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a IncludeTree {
    type Item = (&'a String, &'a IncludeValue);
    type IntoIter = indexmap::map::Iter<'a, String, IncludeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
