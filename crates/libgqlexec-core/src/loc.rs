use crate::ast;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FilePosition {
    pub col: usize,
    pub file: PathBuf,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos<P: AsRef<Path>>(file: P, pos: ast::Pos) -> Self {
        Self {
            col: pos.column,
            file: file.as_ref().to_path_buf(),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.col)
    }
}

/// Where a type-system element was defined.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum SourceLocation {
    GraphQLBuiltIn,
    Schema(FilePosition),
}
impl SourceLocation {
    pub fn file_position(&self) -> Option<&FilePosition> {
        match self {
            Self::GraphQLBuiltIn => None,
            Self::Schema(file_pos) => Some(file_pos),
        }
    }

    /// Produces a location in the same file as `self` but at `pos`.
    pub(crate) fn with_ast_position(&self, pos: &ast::Pos) -> Self {
        match self {
            Self::GraphQLBuiltIn => Self::GraphQLBuiltIn,
            Self::Schema(file_pos) => Self::Schema(FilePosition {
                col: pos.column,
                file: file_pos.file.to_owned(),
                line: pos.line,
            }),
        }
    }
}
impl std::convert::From<FilePosition> for SourceLocation {
    fn from(value: FilePosition) -> Self {
        Self::Schema(value)
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<builtin>"),
            Self::Schema(file_pos) => write!(f, "{file_pos}"),
        }
    }
}

/// A line/column position within an executable document, in the shape
/// GraphQL responses report it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct DocumentPosition {
    pub line: usize,
    pub column: usize,
}
impl std::convert::From<ast::Pos> for DocumentPosition {
    fn from(pos: ast::Pos) -> Self {
        Self {
            line: pos.line,
            column: pos.column,
        }
    }
}
impl std::fmt::Display for DocumentPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
