//! Import errors. Every variant is fatal to the call that raised it.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ObjError {
    /// A field that is not a number, or a coordinate that is not finite.
    #[error("Failed to parse {field} on line {line}: '{content}'")]
    MalformedNumericField {
        line: usize,
        field: &'static str,
        content: String,
    },
    #[error("Malformed '{kind}' record on line {line}: expected {expected} fields, found {found}: '{content}'")]
    MalformedRecordArity {
        line: usize,
        kind: &'static str,
        expected: &'static str,
        found: usize,
        content: String,
    },
    #[error("Face index {index} on line {line} does not resolve (section has {available} vertices)")]
    DanglingIndex {
        line: usize,
        index: i64,
        available: usize,
    },
    #[error("Vertex on line {line} has no partner to form an anchor pair")]
    UnpairedAnchor { line: usize },
    #[error("Too many vertices in section for u32 indices on line {line}")]
    TooManyVertices { line: usize },
}

impl ObjError {
    /// 1-based line the error was raised on.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedNumericField { line, .. }
            | Self::MalformedRecordArity { line, .. }
            | Self::DanglingIndex { line, .. }
            | Self::UnpairedAnchor { line }
            | Self::TooManyVertices { line } => *line,
        }
    }
}

pub type ObjResult<T> = Result<T, ObjError>;
