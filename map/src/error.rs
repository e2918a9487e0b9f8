use std::path::PathBuf;

use crate::parser::FrameKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VertexError {
    #[error("No `( )` group found")]
    MissingGroup,
    #[error("Expected 3 numbers inside `( )`. Have ({found})")]
    FieldCount { found: usize },
    #[error("Cannot parse `{field}` as a number")]
    BadNumber { field: String },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TextureError {
    #[error("Face has no texture fields")]
    Empty,
    #[error("Cannot parse texture fields `{text}`")]
    Malformed { text: String },
}

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Line {line}: malformed vertex in `{text}`: {source}")]
    MalformedVertex {
        line: usize,
        text: String,
        #[source]
        source: VertexError,
    },
    #[error("Unclosed {frame} opened at line {line} (depth {depth})")]
    UnbalancedBraces {
        line: usize,
        frame: FrameKind,
        depth: usize,
    },
    #[error("Line {line}: `}}` without a matching `{{`")]
    SpuriousClose { line: usize },
    #[error("Line {line}: input ends before `{text}` is complete")]
    TruncatedInput { line: usize, text: String },
    #[error("Line {line}: malformed key/value `{text}`")]
    MalformedKeyValue { line: usize, text: String },
    #[error("Line {line}: unexpected `{text}` {state}")]
    UnexpectedLine {
        line: usize,
        text: String,
        state: &'static str,
    },
    #[error("Cannot read file `{path}`: {source}")]
    IOError {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

impl MapError {
    /// 1-based line number the error points at, if it came from parsing.
    pub fn line(&self) -> Option<usize> {
        match self {
            MapError::MalformedVertex { line, .. }
            | MapError::UnbalancedBraces { line, .. }
            | MapError::SpuriousClose { line }
            | MapError::TruncatedInput { line, .. }
            | MapError::MalformedKeyValue { line, .. }
            | MapError::UnexpectedLine { line, .. } => Some(*line),
            MapError::IOError { .. } => None,
        }
    }

    pub fn to_result<T>(self) -> Result<T, Self> {
        Err(self)
    }
}
