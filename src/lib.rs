//! Quaternion construction, conversion and algebra over `f64` components.
//!
//! Degenerate numeric input never panics or errors in the default API: near
//! zero denominators substitute documented fallback constants and the
//! operation proceeds. The `try_*` methods report the same situations as
//! [`QuatError`] for callers that want them surfaced.

pub mod error;
pub mod parts;
pub mod quaternion;

pub use crate::error::{QuatError, QuatResult};
pub use crate::parts::{QuatParts, QuatUpdate};
pub use crate::quaternion::{
    Quaternion, DEGENERATE_AXIS_SCALE, SLERP_LINEAR_THRESHOLD, ZERO_TOLERANCE,
};
