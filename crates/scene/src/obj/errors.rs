use std::{
    collections::TryReserveError,
    error::Error,
    fmt::{Debug, Display},
    io,
    num::ParseIntError,
};

/// A failed parse. Line-local failures carry the 0-based index of the failing
/// line and its content, whole-scene failures carry no line.
pub struct ObjParsingError {
    line: Option<(usize, String)>,
    detail: ObjParsingErrorDetail,
}

/// Vertex and normal indices reported in this enum are the 1-based references
/// as written in the file. `face_index` is the 0-based position of the face.
#[derive(Debug, thiserror::Error)]
pub enum ObjParsingErrorDetail {
    #[error("failed to open file: {0}")]
    FailedToOpenFile(#[source] io::Error),
    #[error("failed to read file: {0}")]
    FailedToReadFile(#[source] io::Error),
    #[error("allocation failure: {0}")]
    AllocationFailure(#[source] TryReserveError),

    #[error("expected 3 coordinates, but got {count}")]
    MalformedCoordinate { count: usize },
    #[error("unable to parse coordinate \"{token}\"")]
    InvalidNumber { token: String },

    #[error("face has {count} vertices, at least 3 are required")]
    FaceTooSmall { count: usize },
    #[error("vertex index {index} is out of range [1..{count}]")]
    VertexIndexOutOfRange { index: i64, count: usize },
    #[error("unable to parse vertex index \"{token}\"")]
    InvalidVertexIndex {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("normal index {index} is out of range [1..{count}]")]
    NormalIndexOutOfRange { index: i64, count: usize },
    #[error("unable to parse normal index \"{token}\"")]
    InvalidNormalIndex {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("normal of face {face_index} does not match the normal computed from its vertices")]
    InvalidNormals { face_index: usize },
}

impl ObjParsingError {
    pub(crate) fn at_line(line_count: usize, line: impl Into<String>, detail: ObjParsingErrorDetail) -> Self {
        Self {
            line: Some((line_count, line.into())),
            detail,
        }
    }

    pub(crate) fn without_line(detail: ObjParsingErrorDetail) -> Self {
        Self { line: None, detail }
    }

    /// 0-based index of the line that failed.
    pub fn line_index(&self) -> Option<usize> {
        self.line.as_ref().map(|line| line.0)
    }

    pub fn line_content(&self) -> Option<&str> {
        self.line.as_ref().map(|line| line.1.as_str())
    }

    pub fn detail(&self) -> &ObjParsingErrorDetail {
        &self.detail
    }

    pub fn into_detail(self) -> ObjParsingErrorDetail {
        self.detail
    }
}

impl From<ObjParsingErrorDetail> for ObjParsingError {
    fn from(detail: ObjParsingErrorDetail) -> Self {
        Self::without_line(detail)
    }
}

impl Debug for ObjParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = self.line.as_ref() {
            return write!(
                f,
                "ObjParsingError {{\n\tline: {}\n\tline_content: \"{}\"\n\tdetails: {:?}\n}}",
                line.0, line.1, self.detail,
            );
        }
        write!(f, "ObjParsingError({:?})", self.detail)
    }
}

impl Display for ObjParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line.as_ref() {
            Some((line_count, line)) => {
                write!(f, "parse error at line {line_count} (\"{line}\"): {}", self.detail)
            }
            None => write!(f, "parse error: {}", self.detail),
        }
    }
}

impl Error for ObjParsingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.detail)
    }
}
