use std::error;
use std::fmt;

use crate::quaternion::ZERO_TOLERANCE;

pub type QuatResult<T> = Result<T, QuatError>;

/// Degenerate numeric input, reported by the `try_*` method family.
///
/// The default operations never return these; they substitute a documented
/// fallback constant and keep going.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuatError {
    DivisorNearZero(f64),
    NormNearZero(f64),
    ArrayTooShort(usize),
    NotThreeByThree(usize),
    DegenerateAxis(f64),
    NonFinite(&'static str),
}
impl fmt::Display for QuatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuatError::DivisorNearZero(a) => {
                write!(f, "scalar divisor {a} is within {ZERO_TOLERANCE} of zero")
            }
            QuatError::NormNearZero(l) => {
                write!(f, "quaternion norm {l} is within {ZERO_TOLERANCE} of zero")
            }
            QuatError::ArrayTooShort(len) => {
                write!(f, "component array has {len} elements, need at least 3")
            }
            QuatError::NotThreeByThree(rows) => {
                write!(f, "rotation matrix has {rows} rows, need exactly 3")
            }
            QuatError::DegenerateAxis(l) => {
                write!(f, "rotation axis with magnitude {l} cannot be normalized")
            }
            QuatError::NonFinite(name) => {
                write!(f, "{name} is not a finite number")
            }
        }
    }
}
impl error::Error for QuatError {}
