use crate::ast;
use crate::loc;
use crate::operation::Selection;
use std::path::Path;

/// An anonymous `... on Type { .. }` (or `... { .. }`) selection.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub(super) def_location: loc::SourceLocation,
    pub(super) selections: Vec<Selection>,
    pub(super) type_condition: Option<String>,
}
impl InlineFragment {
    pub fn new(selections: impl IntoIterator<Item = impl Into<Selection>>) -> Self {
        Self {
            def_location: loc::SourceLocation::default(),
            selections: selections.into_iter().map(Into::into).collect(),
            type_condition: None,
        }
    }

    pub fn from_ast(
        ast: &ast::operation::InlineFragment,
        file_path: Option<&Path>,
    ) -> Self {
        let type_condition = ast.type_condition.as_ref().map(|type_condition| {
            let ast::operation::TypeCondition::On(type_name) = type_condition;
            type_name.to_owned()
        });

        Self {
            def_location: loc::SourceLocation::from_execdoc_ast_position(
                file_path,
                &ast.position,
            ),
            selections: Selection::from_ast_selection_set(
                &ast.selection_set,
                file_path,
            ),
            type_condition,
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }

    pub fn with_type_condition(mut self, type_name: impl Into<String>) -> Self {
        self.type_condition = Some(type_name.into());
        self
    }
}
