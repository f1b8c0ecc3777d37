use crate::operation::FieldSelection;
use crate::operation::FragmentDefinition;
use crate::operation::Selection;
use indexmap::IndexMap;

/// The part of a resolver's execution context that describes what was
/// requested: the field node(s) being resolved and every fragment definition
/// available to the current operation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolveInfo {
    pub(super) field_nodes: Vec<FieldSelection>,
    pub(super) fragments: IndexMap<String, FragmentDefinition>,
}
impl ResolveInfo {
    pub fn new(
        field_nodes: Vec<FieldSelection>,
        fragments: impl IntoIterator<Item = FragmentDefinition>,
    ) -> Self {
        Self {
            field_nodes,
            fragments: fragments.into_iter()
                .map(|fragment| (fragment.name.to_owned(), fragment))
                .collect(),
        }
    }

    pub fn field_nodes(&self) -> &[FieldSelection] {
        self.field_nodes.as_slice()
    }

    pub fn fragments(&self) -> &IndexMap<String, FragmentDefinition> {
        &self.fragments
    }

    pub fn root_field(&self) -> Option<&FieldSelection> {
        self.field_nodes.first()
    }

    /// The selection list of the first field node, or an empty slice if there
    /// is no field node or it has no nested selections.
    pub fn root_selections(&self) -> &[Selection] {
        self.root_field()
            .and_then(|field| field.selections())
            .unwrap_or_default()
    }
}
