use std::error::Error;
use std::fmt;

/// The library's single failure class.
///
/// Every fallible operation (`Layer::feed`/`train`, `Network::feed`/`train`)
/// validates vector lengths up front and returns this error before touching
/// any weight or bias, so a failed call never leaves a partial update behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MlpError {
    /// A vector handed to `feed` or `train` does not match the width the
    /// receiving component was constructed with. `expected` is the required
    /// length, `found` the length actually supplied.
    DimensionMismatch { expected: usize, found: usize },
}

impl fmt::Display for MlpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlpError::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "dimension mismatch: expected a vector of length {expected}, found {found}"
                )
            }
        }
    }
}

impl Error for MlpError {}

pub type Result<T> = std::result::Result<T, MlpError>;
