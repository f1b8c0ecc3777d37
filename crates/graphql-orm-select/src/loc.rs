use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file the executable document was read from (if
/// any).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceLocation {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl SourceLocation {
    pub(crate) fn from_execdoc_ast_position(
        file: Option<&Path>,
        pos: &graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "{}:{}", self.line, self.col),
        }
    }
}
