mod test_utils;

use rust_ndbridge_core::convert::{Converted, convert_full, to_descriptor};
use rust_ndbridge_core::dtype::ElementType;
use rust_ndbridge_core::error::{Error, Result};
use rust_ndbridge_core::host::HostObject;
use rust_ndbridge_core::layout::Order;
use rust_ndbridge_mock::{MockArray, MockObject};

use crate::test_utils::f64_matrix;

#[test]
fn test_full_conversion_end_to_end() -> Result<()> {
    let obj = f64_matrix();
    let descriptor = match to_descriptor(&obj, Some(ElementType::Float64), 2, None)? {
        Converted::Full(descriptor) => descriptor,
        Converted::Raw(_) => panic!("expected the full conversion path"),
    };
    assert_eq!(descriptor.rank(), 2);
    assert_eq!(descriptor.element_type(), ElementType::Float64);
    assert_eq!(descriptor.element_size(), 8);
    assert_eq!(descriptor.element_count(), 12);
    assert_eq!(descriptor.byte_size(), 96);
    assert_eq!(descriptor.shape(), &[3, 4]);
    assert_eq!(descriptor.strides(), &[4, 1]);
    assert!(descriptor.is_view());
    assert!(!descriptor.raw_data().is_null());
    Ok(())
}

#[test]
fn test_raw_path_when_order_requested() -> Result<()> {
    let obj = f64_matrix();
    let raw = match to_descriptor(&obj, Some(ElementType::Float64), 2, Some(Order::C))? {
        Converted::Raw(raw) => raw,
        Converted::Full(_) => panic!("expected the raw fast path"),
    };
    assert_eq!(raw.shape(), &[3, 4]);
    // The shape is the host's own slice, not a copy.
    assert_eq!(raw.shape().as_ptr(), obj.shape().as_ptr());
    assert_eq!(raw.raw_data(), obj.data_ptr());
    Ok(())
}

#[test]
fn test_validation_failure_prevents_conversion() {
    let obj = f64_matrix();
    let err = to_descriptor(&obj, Some(ElementType::Int64), 2, None).unwrap_err();
    assert_eq!(
        err,
        Error::DtypeMismatch {
            expected: ElementType::Int64,
            actual: ElementType::Float64,
        }
    );
    assert!(!obj.was_queried("byte_strides"));
}

#[test]
fn test_stride_alignment_error() {
    let data: Vec<f64> = (0..12).map(|v| v as f64).collect();
    let obj = MockObject::array(
        MockArray::from_slice(ElementType::Float64, &data, vec![3, 4])
            .with_byte_strides(vec![12, 8]),
    );
    let err = to_descriptor(&obj, None, 2, None).unwrap_err();
    assert_eq!(
        err,
        Error::StrideAlignment {
            axis: 0,
            byte_stride: 12,
            element_size: 8,
        }
    );
}

#[test]
fn test_negative_strides_are_preserved() -> Result<()> {
    let data: Vec<f64> = (0..12).map(|v| v as f64).collect();
    let obj = MockObject::array(
        MockArray::from_slice(ElementType::Float64, &data, vec![3, 4])
            .with_byte_strides(vec![-32, 8]),
    );
    let descriptor = convert_full(&obj)?;
    assert_eq!(descriptor.strides(), &[-4, 1]);
    Ok(())
}

#[test]
fn test_rank_zero_array() -> Result<()> {
    let obj = MockObject::array(MockArray::zeros(ElementType::Float64, vec![]));
    let descriptor = match to_descriptor(&obj, Some(ElementType::Float64), 0, None)? {
        Converted::Full(descriptor) => descriptor,
        Converted::Raw(_) => panic!("expected the full conversion path"),
    };
    assert_eq!(descriptor.rank(), 0);
    assert_eq!(descriptor.element_count(), 1);
    assert_eq!(descriptor.byte_size(), 8);
    assert!(descriptor.shape().is_empty());
    assert!(descriptor.strides().is_empty());
    Ok(())
}

#[test]
fn test_zero_length_axis() -> Result<()> {
    let obj = MockObject::array(MockArray::zeros(ElementType::Int32, vec![0, 4]));
    let descriptor = convert_full(&obj)?;
    assert_eq!(descriptor.element_count(), 0);
    assert_eq!(descriptor.byte_size(), 0);
    assert_eq!(descriptor.shape(), &[0, 4]);
    Ok(())
}

#[test]
fn test_elements_readable_through_descriptor() -> Result<()> {
    let data = [1i32, 2, 3, 4, 5, 6];
    let obj = MockObject::array(MockArray::from_slice(
        ElementType::Int32,
        &data,
        vec![2, 3],
    ));
    let descriptor = convert_full(&obj)?;
    assert_eq!(descriptor.strides(), &[3, 1]);
    let base = unsafe { descriptor.data_as::<i32>() };
    for row in 0..2i64 {
        for col in 0..3i64 {
            let offset = row * descriptor.strides()[0] + col * descriptor.strides()[1];
            let value = unsafe { *base.offset(offset as isize) };
            assert_eq!(value, data[(row * 3 + col) as usize]);
        }
    }
    Ok(())
}
