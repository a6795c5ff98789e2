use std::fmt;

use super::types::BufferRole;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A buffer reservation of `elements` 64-bit floats could not be satisfied.
    Allocation { buffer: BufferRole, elements: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Allocation { buffer, elements } => write!(
                f,
                "Failed to reserve {} elements for the {} buffer.",
                elements, buffer
            ),
        }
    }
}

impl std::error::Error for Error {}
