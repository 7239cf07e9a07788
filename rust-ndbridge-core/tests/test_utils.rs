use rust_ndbridge_core::dtype::ElementType;
use rust_ndbridge_mock::{MockArray, MockObject};

/// 3x4 C-contiguous Float64 host array with byte strides [32, 8].
pub fn f64_matrix() -> MockObject {
    let data: Vec<f64> = (0..12).map(|v| v as f64).collect();
    MockObject::array(MockArray::from_slice(
        ElementType::Float64,
        &data,
        vec![3, 4],
    ))
}
