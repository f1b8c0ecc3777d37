use crate::loc;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TransformError {
    #[error(
        "Fragment spreads form a cycle: {}",
        .cycle.join(" -> ")
    )]
    FragmentCycle {
        cycle: Vec<String>,
    },

    #[error(
        "The `{fragment_name}` fragment is spread at {spread_location}, but no \
        fragment with that name is defined for this operation."
    )]
    UndefinedFragment {
        fragment_name: String,
        spread_location: loc::SourceLocation,
    },
}
