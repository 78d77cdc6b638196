//! Error types for field access

use thiserror::Error;

use crate::types::{FIELD_HEIGHT, FIELD_WIDTH, MAX_COLOR};

/// Field access errors
///
/// Both variants indicate a programming error in the caller; the field never
/// clamps or wraps a bad coordinate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Coordinate outside `[0, FIELD_WIDTH) x [0, FIELD_HEIGHT)`
    #[error(
        "cell ({x}, {y}) is outside the {width}x{height} field",
        width = FIELD_WIDTH,
        height = FIELD_HEIGHT
    )]
    OutOfBounds { x: i32, y: i32 },

    /// Cell value outside `0..=MAX_COLOR`
    #[error("invalid cell value {0} (expected 0..={max})", max = MAX_COLOR)]
    InvalidCell(u8),
}

/// Result type for field operations
pub type FieldResult<T> = Result<T, FieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FieldError::OutOfBounds { x: -1, y: 20 }.to_string(),
            "cell (-1, 20) is outside the 10x20 field"
        );
        assert_eq!(
            FieldError::InvalidCell(9).to_string(),
            "invalid cell value 9 (expected 0..=7)"
        );
    }
}
