use crate::SelectionPath;
use crate::transform::ExclusionSet;

/// Construction parameters for [`OrmSelect`](crate::OrmSelect).
///
/// Deserializes from camelCase keys (`excludeFields`, `get`); missing keys
/// take their defaults.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrmSelectOptions {
    /// Field names dropped at every depth. Defaults to `{"__typename"}`.
    pub exclude_fields: ExclusionSet,

    /// Optional path to a sub-node to expose as the "current" envelope.
    pub get: Option<SelectionPath>,
}

impl OrmSelectOptions {
    pub fn with_exclude_fields(
        mut self,
        field_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.exclude_fields = ExclusionSet::new(field_names);
        self
    }

    pub fn with_get(mut self, path: impl Into<SelectionPath>) -> Self {
        self.get = Some(path.into());
        self
    }
}
