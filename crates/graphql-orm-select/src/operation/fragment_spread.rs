use crate::ast;
use crate::loc;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub(super) def_location: loc::SourceLocation,
    pub(super) fragment_name: String,
}
impl FragmentSpread {
    pub fn new(fragment_name: impl Into<String>) -> Self {
        Self {
            def_location: loc::SourceLocation::default(),
            fragment_name: fragment_name.into(),
        }
    }

    pub fn from_ast(
        ast: &ast::operation::FragmentSpread,
        file_path: Option<&Path>,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_execdoc_ast_position(
                file_path,
                &ast.position,
            ),
            fragment_name: ast.fragment_name.to_owned(),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }
}
