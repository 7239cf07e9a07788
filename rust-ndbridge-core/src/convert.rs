use crate::descriptor::{ArrayDescriptor, RawArrayRef};
use crate::dtype::ElementType;
use crate::error::Result;
use crate::host::HostObject;
use crate::layout::{self, Order};
use crate::validate::check_array;

/// Result of [`to_descriptor`]: either a full descriptor or the raw fast
/// path, depending on whether the caller requested a memory order.
#[derive(Debug)]
pub enum Converted<'a> {
    Full(ArrayDescriptor<'a>),
    Raw(RawArrayRef<'a>),
}

/// Build a full descriptor from a host array.
///
/// Precondition: [`check_array`] already succeeded for this object. The
/// only failure left is a host byte stride that is not a multiple of the
/// element width.
pub fn convert_full<'a, O: HostObject>(obj: &'a O) -> Result<ArrayDescriptor<'a>> {
    let rank = obj.rank();
    let element_type = obj.element_type();
    let element_size = obj.element_size();
    let shape = obj.shape().to_vec();
    let strides = layout::normalize_strides(obj.byte_strides(), element_size)?;
    debug_assert_eq!(element_size, element_type.size());
    debug_assert_eq!(obj.element_count(), layout::element_count(&shape));
    Ok(ArrayDescriptor::new(
        rank,
        element_type,
        element_size,
        obj.element_count(),
        obj.byte_size(),
        shape,
        strides,
        obj.data_ptr(),
    ))
}

/// Build the partial descriptor: buffer address plus the host's own shape
/// slice, nothing copied.
///
/// Precondition: [`check_array`] already succeeded for this object.
pub fn convert_raw<'a, O: HostObject>(obj: &'a O) -> RawArrayRef<'a> {
    RawArrayRef::new(obj.data_ptr(), obj.shape())
}

/// Validate a host object and convert it in one call.
///
/// When an order was actually requested the caller only needs raw memory
/// and shape, so the raw fast path is taken; otherwise every descriptor
/// field is populated.
pub fn to_descriptor<'a, O: HostObject>(
    obj: &'a O,
    dtype: Option<ElementType>,
    rank: usize,
    order: Option<Order>,
) -> Result<Converted<'a>> {
    check_array(obj, dtype, rank, order)?;
    if order.is_some() {
        Ok(Converted::Raw(convert_raw(obj)))
    } else {
        Ok(Converted::Full(convert_full(obj)?))
    }
}
