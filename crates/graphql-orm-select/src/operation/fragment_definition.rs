use crate::ast;
use crate::loc;
use crate::operation::Selection;
use std::path::Path;

/// A named `fragment Name on Type { .. }` definition from the executable
/// document.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub(super) def_location: loc::SourceLocation,
    pub(super) name: String,
    pub(super) selections: Vec<Selection>,
    pub(super) type_condition: String,
}
impl FragmentDefinition {
    pub fn new(
        name: impl Into<String>,
        type_condition: impl Into<String>,
        selections: impl IntoIterator<Item = impl Into<Selection>>,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::default(),
            name: name.into(),
            selections: selections.into_iter().map(Into::into).collect(),
            type_condition: type_condition.into(),
        }
    }

    pub fn from_ast(
        ast: &ast::operation::FragmentDefinition,
        file_path: Option<&Path>,
    ) -> Self {
        let ast::operation::TypeCondition::On(type_condition) = &ast.type_condition;
        Self {
            def_location: loc::SourceLocation::from_execdoc_ast_position(
                file_path,
                &ast.position,
            ),
            name: ast.name.to_owned(),
            selections: Selection::from_ast_selection_set(
                &ast.selection_set,
                file_path,
            ),
            type_condition: type_condition.to_owned(),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
