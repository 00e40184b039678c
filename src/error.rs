use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CleanError {
    #[error("Invalid value for parameter '{name}': {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("Array size mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Dimensions do not match vector length: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, CleanError>;

// Bails out of the enclosing function with ShapeMismatch when two
// (width, height) pairs disagree.
#[macro_export]
macro_rules! check_dimensions {
    ($expected:expr, $actual:expr) => {
        if $expected != $actual {
            return Err($crate::error::CleanError::ShapeMismatch {
                expected: $expected,
                actual: $actual,
            });
        }
    };
}
