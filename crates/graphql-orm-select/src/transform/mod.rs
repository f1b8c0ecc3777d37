//! The selection-to-include-tree transform: fragment resolution, the
//! recursive selection walk, and the exclusion policy applied during it.

mod exclusion_set;
mod fragment_table;
mod selection_transformer;
mod transform_error;

pub use exclusion_set::ExclusionSet;
pub use exclusion_set::TYPENAME_META_FIELD;
pub use fragment_table::FragmentTable;
pub use selection_transformer::FragmentLookup;
pub use selection_transformer::SelectionTransformer;
pub use transform_error::TransformError;
