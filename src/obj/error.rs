//! # Parse Errors
//!
//! Errors surfaced by [`ObjParser`](super::ObjParser). Every error carries the
//! 1-based line number it was raised on; grammar and reference errors also keep
//! the raw line text so callers can print a useful diagnostic.

use std::fmt;
use std::io;

use super::record::RecordTag;

/// Attribute list a face reference points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Vertex,
    TexCoord,
    Normal,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Vertex => "vertex",
            Channel::TexCoord => "texture coordinate",
            Channel::Normal => "normal",
        };
        f.write_str(name)
    }
}

/// What went wrong on a single line.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("malformed number `{token}` in `{tag}` record")]
    MalformedNumber { tag: RecordTag, token: String },

    #[error("`{tag}` record needs {expected} components, found {found}")]
    MissingField {
        tag: RecordTag,
        expected: usize,
        found: usize,
    },

    #[error("malformed face reference `{token}`")]
    MalformedReference { token: String },

    #[error("{channel} index {index} does not name one of the {available} parsed so far")]
    UnresolvedReference {
        channel: Channel,
        index: i64,
        available: usize,
    },

    #[error("relative face reference `{token}` is not supported")]
    UnsupportedReferenceForm { token: String },

    #[error("face has {count} vertices, at least 3 are required")]
    TooFewVertices { count: usize },

    #[error("face appears before any `o` record")]
    OrphanFace,
}

/// Error returned by a parse or count pass.
#[derive(thiserror::Error, Debug)]
pub enum ObjError {
    #[error("failed to read line {line}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {kind}: `{text}`")]
    Parse {
        line: usize,
        text: String,
        kind: ParseErrorKind,
    },
}

impl ObjError {
    pub(crate) fn parse(line: usize, text: &str, kind: ParseErrorKind) -> Self {
        ObjError::Parse {
            line,
            text: text.to_string(),
            kind,
        }
    }

    /// 1-based line the error was raised on
    pub fn line(&self) -> usize {
        match self {
            ObjError::Io { line, .. } | ObjError::Parse { line, .. } => *line,
        }
    }

    /// The grammar/reference failure, if this is not an I/O error
    pub fn kind(&self) -> Option<&ParseErrorKind> {
        match self {
            ObjError::Parse { kind, .. } => Some(kind),
            ObjError::Io { .. } => None,
        }
    }
}
