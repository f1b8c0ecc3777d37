use crate::ast;
use crate::operation::FieldSelection;
use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;
use crate::operation::SelectionKind;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
impl Selection {
    pub fn from_ast(
        ast: &ast::operation::Selection,
        file_path: Option<&Path>,
    ) -> Self {
        use ast::operation::Selection as AstSelection;
        match ast {
            AstSelection::Field(field) =>
                Self::Field(FieldSelection::from_ast(field, file_path)),

            AstSelection::FragmentSpread(spread) =>
                Self::FragmentSpread(FragmentSpread::from_ast(spread, file_path)),

            AstSelection::InlineFragment(inline) =>
                Self::InlineFragment(InlineFragment::from_ast(inline, file_path)),
        }
    }

    pub(crate) fn from_ast_selection_set(
        ast: &ast::operation::SelectionSet,
        file_path: Option<&Path>,
    ) -> Vec<Self> {
        ast.items.iter()
            .map(|selection| Self::from_ast(selection, file_path))
            .collect()
    }

    pub fn kind(&self) -> SelectionKind {
        match self {
            Self::Field(_) => SelectionKind::Field,
            Self::FragmentSpread(_) => SelectionKind::FragmentSpread,
            Self::InlineFragment(_) => SelectionKind::InlineFragment,
        }
    }
}
impl std::convert::From<FieldSelection> for Selection {
    fn from(value: FieldSelection) -> Self {
        Self::Field(value)
    }
}
impl std::convert::From<FragmentSpread> for Selection {
    fn from(value: FragmentSpread) -> Self {
        Self::FragmentSpread(value)
    }
}
impl std::convert::From<InlineFragment> for Selection {
    fn from(value: InlineFragment) -> Self {
        Self::InlineFragment(value)
    }
}
