use std::fmt;

/// Rejected geometry construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A polygon was given fewer than 3 vertices.
    TooFewVertices { found: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::TooFewVertices { found } => {
                write!(f, "polygon needs at least 3 vertices, got {found}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
