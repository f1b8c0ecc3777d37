//! The ORM-facing output: trees of requested fields wrapped in `select` or
//! `include` envelopes.

mod include_tree;
mod include_value;
mod shape_envelope;

pub use include_tree::IncludeTree;
pub use include_value::IncludeValue;
pub use shape_envelope::ShapeEnvelope;
pub use shape_envelope::ShapeKind;
