use std::marker::PhantomData;

use libc::c_void;

use crate::dtype::ElementType;

/// Fixed-layout description of a host array, decoupled from the host's
/// own representation. Strides are in element units and the shape is
/// copied into fixed-width integers, so generated code never depends on
/// the host's stride unit or platform dimension width.
///
/// The descriptor is a view: `raw_data` points into host-owned memory and
/// is never freed here. The lifetime ties the descriptor to the host
/// object it was converted from.
#[derive(Debug)]
pub struct ArrayDescriptor<'a> {
    rank: usize,
    element_type: ElementType,
    element_size: usize,
    element_count: usize,
    byte_size: usize,
    shape: Vec<i64>,
    strides: Vec<i64>,
    raw_data: *mut c_void,
    is_view: bool,
    _host: PhantomData<&'a ()>,
}

impl<'a> ArrayDescriptor<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        rank: usize,
        element_type: ElementType,
        element_size: usize,
        element_count: usize,
        byte_size: usize,
        shape: Vec<i64>,
        strides: Vec<i64>,
        raw_data: *mut c_void,
    ) -> Self {
        Self {
            rank,
            element_type,
            element_size,
            element_count,
            byte_size,
            shape,
            strides,
            raw_data,
            is_view: true,
            _host: PhantomData,
        }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    pub fn element_size(&self) -> usize {
        self.element_size
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }

    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    pub fn shape(&self) -> &[i64] {
        &self.shape
    }

    /// Per-axis strides in element units.
    pub fn strides(&self) -> &[i64] {
        &self.strides
    }

    pub fn raw_data(&self) -> *mut c_void {
        self.raw_data
    }

    pub fn is_view(&self) -> bool {
        self.is_view
    }

    /// Typed view of the buffer address.
    ///
    /// # Safety
    ///
    /// `T` must match the descriptor's element type and the host object
    /// must still be alive.
    pub unsafe fn data_as<T>(&self) -> *mut T {
        self.raw_data as *mut T
    }
}

/// Partial descriptor for callers that only need raw memory and shape:
/// the shape is borrowed from the host object rather than copied, and no
/// stride normalization is done.
#[derive(Debug)]
pub struct RawArrayRef<'a> {
    raw_data: *mut c_void,
    shape: &'a [i64],
}

impl<'a> RawArrayRef<'a> {
    pub(crate) fn new(raw_data: *mut c_void, shape: &'a [i64]) -> Self {
        Self { raw_data, shape }
    }

    pub fn raw_data(&self) -> *mut c_void {
        self.raw_data
    }

    pub fn shape(&self) -> &'a [i64] {
        self.shape
    }
}
