use crate::include::IncludeTree;
use crate::include::IncludeValue;
use crate::operation::FragmentSpread;
use crate::operation::Selection;
use crate::transform::ExclusionSet;
use crate::transform::TransformError;

type Result<T> = std::result::Result<T, TransformError>;

/// Supplies the already-transformed [`IncludeTree`] for a fragment spread.
///
/// [`FragmentTable`](crate::transform::FragmentTable) is the usual
/// implementation; the table builder implements it too so fragments that
/// spread other fragments can be resolved while the table is being built.
pub trait FragmentLookup {
    fn lookup_fragment(&mut self, spread: &FragmentSpread) -> Result<IncludeTree>;
}

/// Recursively walks a selection list, producing a field-name → leaf/envelope
/// mapping.
///
/// Excluded fields are skipped, each field's children are classified before
/// they are stored under the field's name, and fragment spreads and inline
/// fragments merge their fields into the level they appear in. A repeated
/// field name replaces the earlier entry rather than merging with it.
pub struct SelectionTransformer<'a, F> {
    exclusions: &'a ExclusionSet,
    fragments: F,
}

impl<'a, F: FragmentLookup> SelectionTransformer<'a, F> {
    pub fn new(exclusions: &'a ExclusionSet, fragments: F) -> Self {
        Self {
            exclusions,
            fragments,
        }
    }

    pub fn transform(&mut self, selections: &[Selection]) -> Result<IncludeTree> {
        let mut tree = IncludeTree::new();
        for selection in selections {
            match selection {
                Selection::Field(field) => {
                    if self.exclusions.contains(field.name()) {
                        log::trace!(
                            "Excluding `{}` selected at {}.",
                            field.name(),
                            field.def_location(),
                        );
                        continue;
                    }

                    let children = self.transform(
                        field.selections().unwrap_or_default(),
                    )?;
                    tree.insert(field.name(), IncludeValue::classify(children));
                },

                Selection::FragmentSpread(spread) => {
                    let fragment_tree = self.fragments.lookup_fragment(spread)?;
                    log::trace!(
                        "Merging {} field(s) from the `{}` fragment.",
                        fragment_tree.len(),
                        spread.fragment_name(),
                    );
                    tree.merge(fragment_tree);
                },

                Selection::InlineFragment(inline) => {
                    let inline_tree = self.transform(inline.selections())?;
                    tree.merge(inline_tree);
                },
            }
        }
        Ok(tree)
    }
}
