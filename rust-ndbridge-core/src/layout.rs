use crate::error::{Error, Result};

/// Memory ordering of a multi-dimensional array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Row-major (last axis contiguous).
    C,
    /// Column-major (first axis contiguous).
    F,
}

impl Order {
    /// Single-character label used in diagnostics.
    pub fn label(&self) -> char {
        match self {
            Self::C => 'C',
            Self::F => 'F',
        }
    }
}

/// Product of all axis extents. The empty product is 1, so a rank-0
/// array holds one element; any zero-length axis makes the count 0.
pub fn element_count(shape: &[i64]) -> usize {
    let mut count: usize = 1;
    for dim in shape {
        count *= *dim as usize;
    }
    count
}

/// Convert host byte strides to element strides. Each byte stride must be
/// an exact multiple of the element width; a remainder means the host
/// buffer does not have the layout the element type implies.
pub fn normalize_strides(byte_strides: &[i64], element_size: usize) -> Result<Vec<i64>> {
    let mut strides = Vec::with_capacity(byte_strides.len());
    for (axis, byte_stride) in byte_strides.iter().enumerate() {
        if byte_stride % element_size as i64 != 0 {
            return Err(Error::StrideAlignment {
                axis,
                byte_stride: *byte_stride,
                element_size,
            });
        }
        strides.push(byte_stride / element_size as i64);
    }
    Ok(strides)
}
