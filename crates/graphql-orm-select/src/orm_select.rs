use crate::OrmSelectOptions;
use crate::SelectionPathError;
use crate::include::IncludeTree;
use crate::include::ShapeEnvelope;
use crate::operation::ResolveInfo;
use crate::transform::FragmentTable;
use crate::transform::SelectionTransformer;
use crate::transform::TransformError;
use thiserror::Error;

type Result<T> = std::result::Result<T, OrmSelectError>;

/// The `select`/`include` shape requested of one resolver invocation.
///
/// Holds the envelope for the whole root selection (the "original") and the
/// envelope at the optional [`OrmSelectOptions::get`] path (the "current",
/// identical to the original when no path is given).
///
/// ```
/// use graphql_orm_select::OrmSelect;
/// use graphql_orm_select::OrmSelectOptions;
/// use graphql_orm_select::operation::ResolveInfoBuilder;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let info = ResolveInfoBuilder::from_str(
///     "{ viewer { user { id name } } }",
///     None,
/// )?
/// .build()?;
///
/// let orm_select = OrmSelect::new(
///     &info,
///     &OrmSelectOptions::default().with_get("user"),
/// )?;
/// assert!(orm_select.original_include().is_some());
/// assert!(orm_select.select().is_some_and(|tree| tree.contains_key("name")));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct OrmSelect {
    current: ShapeEnvelope,
    fragments: FragmentTable,
    original: ShapeEnvelope,
}

impl OrmSelect {
    pub fn new(info: &ResolveInfo, options: &OrmSelectOptions) -> Result<Self> {
        let exclusions = &options.exclude_fields;
        let fragments = FragmentTable::build(info.fragments(), exclusions)?;

        let root_tree =
            SelectionTransformer::new(exclusions, &fragments)
                .transform(info.root_selections())?;
        let original = ShapeEnvelope::classify(root_tree);

        let current = match &options.get {
            Some(path) => path.extract(&original)?.to_owned(),
            None => original.to_owned(),
        };

        log::debug!(
            "Built a {:?} envelope of {} field(s) for `{}`.",
            current.kind(),
            current.tree().len(),
            info.root_field().map_or("<none>", |field| field.name()),
        );

        Ok(Self {
            current,
            fragments,
            original,
        })
    }

    /// Equivalent to [`OrmSelect::new`] with [`OrmSelectOptions::default`].
    pub fn from_info(info: &ResolveInfo) -> Result<Self> {
        Self::new(info, &OrmSelectOptions::default())
    }

    pub fn current(&self) -> &ShapeEnvelope {
        &self.current
    }

    pub fn fragments(&self) -> &FragmentTable {
        &self.fragments
    }

    pub fn include(&self) -> Option<&IncludeTree> {
        self.current.include()
    }

    pub fn into_current(self) -> ShapeEnvelope {
        self.current
    }

    pub fn original(&self) -> &ShapeEnvelope {
        &self.original
    }

    pub fn original_include(&self) -> Option<&IncludeTree> {
        self.original.include()
    }

    pub fn original_select(&self) -> Option<&IncludeTree> {
        self.original.select()
    }

    pub fn select(&self) -> Option<&IncludeTree> {
        self.current.select()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum OrmSelectError {
    #[error("Failed to extract the requested sub-selection: {0}")]
    SelectionPath(#[from] SelectionPathError),

    #[error("Failed to transform the resolver's selection set: {0}")]
    Transform(#[from] TransformError),
}
