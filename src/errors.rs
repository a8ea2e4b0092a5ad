/*
This code is part of the point3d geometry library.
Authors: Dr. John Lindsay
Created: 16/10/2026
Last Modified: 16/10/2026
License: MIT
*/

use thiserror::Error;

/// Reasons a geometric operation can fail to produce a value.
///
/// `MissingOperand` and `ZeroMagnitude` are kept apart so that callers can
/// tell an absent input from a result that is mathematically undefined.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("no second point was supplied to {operation}")]
    MissingOperand { operation: &'static str },

    #[error("cannot normalize a zero-length vector")]
    ZeroMagnitude,

    #[error("could not parse point: {0}")]
    Parse(String),
}

impl GeometryError {
    /// Returns true when the failure was caused by an absent input point.
    pub fn is_missing_operand(&self) -> bool {
        matches!(self, GeometryError::MissingOperand { .. })
    }

    /// Returns true when the result is undefined for the given input.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, GeometryError::ZeroMagnitude)
    }
}
