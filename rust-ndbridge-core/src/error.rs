use std::fmt;

use crate::dtype::ElementType;
use crate::layout::Order;

/// Host error sink categories. Structural mismatches map to `Type`,
/// unsupported memory layouts to `NotImplemented`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Type,
    NotImplemented,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    NotAnArray {
        type_name: String,
    },
    DtypeMismatch {
        expected: ElementType,
        actual: ElementType,
    },
    RankMismatch {
        expected: usize,
        actual: usize,
    },
    OrderMismatch {
        expected: Order,
    },
    StrideAlignment {
        axis: usize,
        byte_stride: i64,
        element_size: usize,
    },
    ScalarConversion {
        expected: &'static str,
        type_name: String,
    },
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::OrderMismatch { .. } | Self::StrideAlignment { .. } => {
                ErrorCategory::NotImplemented
            }
            Self::NotAnArray { .. }
            | Self::DtypeMismatch { .. }
            | Self::RankMismatch { .. }
            | Self::ScalarConversion { .. } => ErrorCategory::Type,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnArray { type_name } => {
                write!(f, "argument must be an ndarray, not {type_name}")
            }
            Self::DtypeMismatch { expected, actual } => {
                write!(
                    f,
                    "argument dtype must be {}, not {}",
                    expected.name(),
                    actual.name()
                )
            }
            Self::RankMismatch { expected, actual } => {
                write!(f, "argument rank must be {expected}, not {actual}")
            }
            Self::OrderMismatch { expected } => {
                write!(
                    f,
                    "argument does not have the expected ordering ({})",
                    expected.label()
                )
            }
            Self::StrideAlignment {
                axis,
                byte_stride,
                element_size,
            } => {
                write!(
                    f,
                    "axis {axis} byte stride {byte_stride} is not a multiple of the element size {element_size}"
                )
            }
            Self::ScalarConversion {
                expected,
                type_name,
            } => {
                write!(f, "expected {expected} scalar, not {type_name}")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
