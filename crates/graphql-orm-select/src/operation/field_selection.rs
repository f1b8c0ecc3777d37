use crate::ast;
use crate::loc;
use crate::operation::Selection;
use std::path::Path;

/// A single field requested within a selection set.
///
/// `selections` is `None` when the field was requested without a nested
/// selection set (i.e. a scalar or enum field).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(super) alias: Option<String>,
    pub(super) def_location: loc::SourceLocation,
    pub(super) name: String,
    pub(super) selections: Option<Vec<Selection>>,
}
impl FieldSelection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            def_location: loc::SourceLocation::default(),
            name: name.into(),
            selections: None,
        }
    }

    pub fn from_ast(
        ast: &ast::operation::Field,
        file_path: Option<&Path>,
    ) -> Self {
        let selections =
            if ast.selection_set.items.is_empty() {
                None
            } else {
                Some(Selection::from_ast_selection_set(
                    &ast.selection_set,
                    file_path,
                ))
            };

        Self {
            alias: ast.alias.to_owned(),
            def_location: loc::SourceLocation::from_execdoc_ast_position(
                file_path,
                &ast.position,
            ),
            name: ast.name.to_owned(),
            selections,
        }
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /**
     * If an alias was specified for this selection, return the alias.
     * Otherwise return the name of the field.
     */
    pub fn response_key(&self) -> &str {
        self.alias().unwrap_or_else(|| self.name())
    }

    pub fn selections(&self) -> Option<&[Selection]> {
        self.selections.as_deref()
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_def_location(mut self, def_location: loc::SourceLocation) -> Self {
        self.def_location = def_location;
        self
    }

    pub fn with_selections(
        mut self,
        selections: impl IntoIterator<Item = impl Into<Selection>>,
    ) -> Self {
        self.selections = Some(selections.into_iter().map(Into::into).collect());
        self
    }
}
