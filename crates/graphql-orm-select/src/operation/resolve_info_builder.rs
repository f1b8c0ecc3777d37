use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::operation::FieldSelection;
use crate::operation::FragmentDefinition;
use crate::operation::ResolveInfo;
use crate::operation::Selection;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, ResolveInfoBuildError>;

/// Builds a [`ResolveInfo`] from an executable document, standing in for the
/// resolve-info a GraphQL executor would hand to the resolver of one field.
///
/// # Example
///
/// ```
/// use graphql_orm_select::operation::ResolveInfoBuilder;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let info = ResolveInfoBuilder::from_str(
///     r#"
///     query GetUser {
///         user { id ...UserPosts }
///     }
///
///     fragment UserPosts on User { posts { title } }
///     "#,
///     None,
/// )?
/// .set_operation_name("GetUser")
/// .set_field_path("user")
/// .build()?;
///
/// assert_eq!(info.root_field().map(|field| field.name()), Some("user"));
/// assert!(info.fragments().contains_key("UserPosts"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ResolveInfoBuilder {
    document: ast::operation::Document,
    field_path: Option<Vec<String>>,
    file_path: Option<PathBuf>,
    operation_name: Option<String>,
}

impl ResolveInfoBuilder {
    pub fn build(self) -> Result<ResolveInfo> {
        let file_path = self.file_path.as_deref();
        let fragments = self.build_fragments(file_path)?;

        let operation = self.find_operation()?;
        let root_selections = Selection::from_ast_selection_set(
            operation_selection_set(operation),
            file_path,
        );

        let field_path = match &self.field_path {
            Some(field_path) => field_path.to_owned(),
            None => {
                let first_field = first_field(
                    root_selections.as_slice(),
                    &fragments,
                    &mut HashSet::new(),
                ).ok_or(ResolveInfoBuildError::OperationSelectsNoFields)?;
                vec![first_field.response_key().to_string()]
            },
        };

        let field_nodes = collect_field_path(
            root_selections.as_slice(),
            field_path.as_slice(),
            &fragments,
        )?;

        log::debug!(
            "Resolved {} field node(s) for field path `{}` with {} fragment \
            definition(s) available.",
            field_nodes.len(),
            field_path.join("."),
            fragments.len(),
        );

        Ok(ResolveInfo {
            field_nodes,
            fragments,
        })
    }

    fn build_fragments(
        &self,
        file_path: Option<&Path>,
    ) -> Result<IndexMap<String, FragmentDefinition>> {
        let mut fragments = IndexMap::<String, FragmentDefinition>::new();
        for def in &self.document.definitions {
            if let ast::operation::Definition::Fragment(frag_def) = def {
                let fragment = FragmentDefinition::from_ast(frag_def, file_path);
                if let Some(existing) = fragments.get(fragment.name()) {
                    return Err(ResolveInfoBuildError::DuplicateFragmentDefinition {
                        fragment_name: fragment.name().to_string(),
                        first_def_location: existing.def_location().to_owned(),
                        second_def_location: fragment.def_location().to_owned(),
                    });
                }
                fragments.insert(fragment.name().to_string(), fragment);
            }
        }
        Ok(fragments)
    }

    fn find_operation(&self) -> Result<&ast::operation::OperationDefinition> {
        let operations: Vec<&ast::operation::OperationDefinition> =
            self.document.definitions.iter()
                .filter_map(|def| match def {
                    ast::operation::Definition::Operation(op_def) => Some(op_def),
                    ast::operation::Definition::Fragment(_) => None,
                })
                .collect();

        match &self.operation_name {
            Some(operation_name) =>
                operations.into_iter()
                    .find(|op_def| {
                        operation_name_of(op_def) == Some(operation_name.as_str())
                    })
                    .ok_or_else(|| ResolveInfoBuildError::OperationNotFound {
                        operation_name: operation_name.to_owned(),
                    }),

            None => match operations.as_slice() {
                [] => Err(ResolveInfoBuildError::NoOperations),
                [operation] => Ok(*operation),
                _ => Err(ResolveInfoBuildError::OperationNameRequired {
                    num_operations: operations.len(),
                }),
            },
        }
    }

    pub fn from_ast(
        ast: ast::operation::Document,
        file_path: Option<&Path>,
    ) -> Self {
        Self {
            document: ast,
            field_path: None,
            file_path: file_path.map(|path| path.to_path_buf()),
            operation_name: None,
        }
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let file_content = file_reader::read_content(file_path)
            .map_err(|e| ResolveInfoBuildError::ExecutableDocumentFileReadError(
                Box::new(e),
            ))?;
        Self::from_str(file_content, Some(file_path))
    }

    pub fn from_str(
        content: impl AsRef<str>,
        file_path: Option<&Path>,
    ) -> Result<Self> {
        let ast_doc = ast::operation::parse(content.as_ref())?;
        Ok(Self::from_ast(ast_doc, file_path))
    }

    /// Set the dot-separated chain of response keys (aliases or field names)
    /// from the operation root to the field being resolved, e.g.
    /// `"user.posts"`.
    ///
    /// When unset, the first top-level field of the operation is used.
    pub fn set_field_path(mut self, field_path: impl AsRef<str>) -> Self {
        let _ = self.field_path.insert(
            field_path.as_ref()
                .split('.')
                .map(|segment| segment.to_string())
                .collect(),
        );
        self
    }

    /// Set the name of the operation to resolve against. Required when the
    /// document defines more than one operation.
    pub fn set_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        let _ = self.operation_name.insert(operation_name.into());
        self
    }
}

fn operation_name_of(op_def: &ast::operation::OperationDefinition) -> Option<&str> {
    use ast::operation::OperationDefinition as Op;
    match op_def {
        Op::SelectionSet(_) => None,
        Op::Query(query) => query.name.as_deref(),
        Op::Mutation(mutation) => mutation.name.as_deref(),
        Op::Subscription(subscription) => subscription.name.as_deref(),
    }
}

fn operation_selection_set(
    op_def: &ast::operation::OperationDefinition,
) -> &ast::operation::SelectionSet {
    use ast::operation::OperationDefinition as Op;
    match op_def {
        Op::SelectionSet(selection_set) => selection_set,
        Op::Query(query) => &query.selection_set,
        Op::Mutation(mutation) => &mutation.selection_set,
        Op::Subscription(subscription) => &subscription.selection_set,
    }
}

fn first_field<'a>(
    selections: &'a [Selection],
    fragments: &'a IndexMap<String, FragmentDefinition>,
    visited_fragments: &mut HashSet<&'a str>,
) -> Option<&'a FieldSelection> {
    selections.iter().find_map(|selection| match selection {
        Selection::Field(field) => Some(field),

        Selection::InlineFragment(inline) =>
            first_field(inline.selections(), fragments, visited_fragments),

        Selection::FragmentSpread(spread) => {
            if !visited_fragments.insert(spread.fragment_name()) {
                return None;
            }
            fragments.get(spread.fragment_name()).and_then(|fragment| {
                first_field(fragment.selections(), fragments, visited_fragments)
            })
        },
    })
}

/// Collects every field within `selections` whose response key matches
/// `response_key`, looking through inline fragments and fragment spreads the
/// same way a GraphQL executor merges field nodes. Each named fragment is
/// followed at most once.
fn collect_fields<'a>(
    selections: &'a [Selection],
    response_key: &str,
    fragments: &'a IndexMap<String, FragmentDefinition>,
    visited_fragments: &mut HashSet<&'a str>,
    collected: &mut Vec<&'a FieldSelection>,
) {
    for selection in selections {
        match selection {
            Selection::Field(field) => {
                if field.response_key() == response_key {
                    collected.push(field);
                }
            },

            Selection::InlineFragment(inline) => collect_fields(
                inline.selections(),
                response_key,
                fragments,
                visited_fragments,
                collected,
            ),

            Selection::FragmentSpread(spread) => {
                if !visited_fragments.insert(spread.fragment_name()) {
                    continue;
                }
                // Undefined fragments are reported when the selection is
                // transformed.
                if let Some(fragment) = fragments.get(spread.fragment_name()) {
                    collect_fields(
                        fragment.selections(),
                        response_key,
                        fragments,
                        visited_fragments,
                        collected,
                    );
                }
            },
        }
    }
}

fn collect_field_path(
    root_selections: &[Selection],
    field_path: &[String],
    fragments: &IndexMap<String, FragmentDefinition>,
) -> Result<Vec<FieldSelection>> {
    let mut selection_lists: Vec<&[Selection]> = vec![root_selections];
    let mut field_nodes: Vec<&FieldSelection> = vec![];

    for segment in field_path {
        let mut visited_fragments = HashSet::new();
        field_nodes = vec![];
        for &selections in &selection_lists {
            collect_fields(
                selections,
                segment.as_str(),
                fragments,
                &mut visited_fragments,
                &mut field_nodes,
            );
        }

        if field_nodes.is_empty() {
            return Err(ResolveInfoBuildError::FieldNotFound {
                field_path: field_path.join("."),
                segment: segment.to_owned(),
            });
        }

        selection_lists = field_nodes.iter()
            .copied()
            .filter_map(|field| field.selections())
            .collect();
    }

    Ok(field_nodes.into_iter().cloned().collect())
}

#[derive(Debug, Error)]
pub enum ResolveInfoBuildError {
    #[error(
        "Encountered a duplicate definition of the `{fragment_name}` fragment \
        at {second_def_location} (first defined at {first_def_location})."
    )]
    DuplicateFragmentDefinition {
        fragment_name: String,
        first_def_location: loc::SourceLocation,
        second_def_location: loc::SourceLocation,
    },

    #[error(
        "Failure while trying to read an executable document file from disk: \
        {0}"
    )]
    ExecutableDocumentFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "No field with response key `{segment}` was found while resolving the \
        field path `{field_path}`."
    )]
    FieldNotFound {
        field_path: String,
        segment: String,
    },

    #[error("The executable document does not define any operations.")]
    NoOperations,

    #[error(
        "The executable document defines {num_operations} operations, so an \
        operation name must be specified."
    )]
    OperationNameRequired {
        num_operations: usize,
    },

    #[error(
        "No operation named `{operation_name}` is defined in the executable \
        document."
    )]
    OperationNotFound {
        operation_name: String,
    },

    #[error("The selected operation does not select any fields.")]
    OperationSelectsNoFields,

    #[error("Error parsing executable document: {0}")]
    ParseError(Arc<ast::operation::ParseError>),
}
impl std::convert::From<ast::operation::ParseError> for ResolveInfoBuildError {
    fn from(value: ast::operation::ParseError) -> Self {
        Self::ParseError(Arc::new(value))
    }
}
