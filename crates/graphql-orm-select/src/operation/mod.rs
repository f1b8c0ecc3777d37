//! Owned models of what the GraphQL execution layer hands a resolver: the
//! field nodes being resolved and the fragment definitions available to the
//! operation.

mod field_selection;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod resolve_info;
mod resolve_info_builder;
mod selection;
mod selection_kind;

pub use field_selection::FieldSelection;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use resolve_info::ResolveInfo;
pub use resolve_info_builder::ResolveInfoBuildError;
pub use resolve_info_builder::ResolveInfoBuilder;
pub use selection::Selection;
pub use selection_kind::SelectionKind;
