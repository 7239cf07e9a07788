use libc::c_void;

use crate::dtype::ElementType;

/// An untyped handle owned by the host numeric runtime.
///
/// The trait exposes exactly the query operations the adapter consumes; a
/// real implementation wraps the host's C API, and tests run against the
/// in-memory mock runtime. The array queries are only meaningful once
/// `is_array` has returned true, mirroring the host API's check-then-use
/// contract; calling them on a non-array is undefined by contract.
pub trait HostObject {
    /// Host identity comparison (the same runtime object, not equality).
    fn is(&self, other: &Self) -> bool;

    fn is_array(&self) -> bool;

    fn is_none(&self) -> bool;

    /// Runtime type name of the object, for diagnostics.
    fn type_name(&self) -> &str;

    /// Whether the object is a scalar carrying exactly this storage tag.
    fn has_scalar_tag(&self, ty: ElementType) -> bool;

    fn is_generic_int(&self) -> bool;

    fn is_generic_float(&self) -> bool;

    fn is_generic_complex(&self) -> bool;

    fn is_generic_bool(&self) -> bool;

    /// Signed 64-bit extraction from an integer-like object. `None` means
    /// the host-level conversion failed.
    fn as_i64(&self) -> Option<i64>;

    /// Double extraction from a float-like object.
    fn as_f64(&self) -> Option<f64>;

    /// Real part of a complex-like object, as a double.
    fn complex_real(&self) -> Option<f64>;

    /// Imaginary part of a complex-like object, as a double.
    fn complex_imag(&self) -> Option<f64>;

    // Array queries. Valid only after `is_array` returned true.

    fn element_type(&self) -> ElementType;

    fn rank(&self) -> usize;

    /// Axis extents, in the host's declared axis order.
    fn shape(&self) -> &[i64];

    /// Per-axis strides in bytes, as the host stores them.
    fn byte_strides(&self) -> &[i64];

    /// Byte width of one element, as the host declares it.
    fn element_size(&self) -> usize;

    fn element_count(&self) -> usize;

    fn byte_size(&self) -> usize;

    /// Address of the host-owned buffer. The adapter never frees it.
    fn data_ptr(&self) -> *mut c_void;

    fn is_c_contiguous(&self) -> bool;

    fn is_f_contiguous(&self) -> bool;
}

/// The construction side of the host runtime: building host scalar
/// objects from native values.
pub trait HostRuntime {
    type Object: HostObject;

    fn int_from_i64(&self, value: i64) -> Self::Object;

    fn float_from_f64(&self, value: f64) -> Self::Object;

    fn complex_from_parts(&self, real: f64, imag: f64) -> Self::Object;

    /// One of the two process-wide boolean singletons, never a fresh
    /// allocation.
    fn bool_object(&self, value: bool) -> Self::Object;
}
