use std::path::PathBuf;

use thiserror::Error;

/// What went wrong on a line of the input text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("no header line")]
    Empty,

    #[error("expected {expected} ';'-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("expected {expected} numbers, found {found}")]
    ComponentCount { expected: usize, found: usize },

    #[error("invalid number '{0}'")]
    Number(String),

    #[error("number '{0}' is not finite")]
    NonFinite(String),

    #[error("resolution must be a positive number")]
    NonPositiveResolution,

    #[error("box size components must be positive")]
    NonPositiveSize,
}

/// Malformed input text. `line` is 1-based and counts blank lines.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AtlasError {
    /// Not all footprints fit even into the largest allowed atlas.
    #[error("could not pack {rect_count} footprints into a {max_size}x{max_size} atlas")]
    Exhausted { max_size: u32, rect_count: usize },
}

/// Failure while turning one input file into a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("atlas error: {0}")]
    Atlas(#[from] AtlasError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid input pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("cannot read input path: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("no input files match '{pattern}'")]
    NoInputFiles { pattern: String },

    #[error("cannot derive an output name from {path:?}")]
    InvalidFileName { path: PathBuf },
}

pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_line() {
        let err = ParseError::new(3, ParseErrorKind::ComponentCount { expected: 3, found: 2 });
        assert_eq!(err.to_string(), "line 3: expected 3 numbers, found 2");
    }

    #[test]
    fn mesh_error_wraps_sources() {
        let err: MeshError = AtlasError::Exhausted {
            max_size: 16,
            rect_count: 40,
        }
        .into();
        assert!(err.to_string().contains("16x16"));
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
