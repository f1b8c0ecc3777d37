#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SelectionKind {
    Field,
    FragmentSpread,
    InlineFragment,
}
