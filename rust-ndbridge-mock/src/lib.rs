//! In-memory mock of the host numeric runtime, for testing the adapter
//! core without a real host present. Every query records its name in a
//! per-object call log so tests can observe which checks actually ran.

use std::cell::RefCell;
use std::rc::Rc;

use bytemuck::NoUninit;
use libc::c_void;
use rust_ndbridge_core::dtype::ElementType;
use rust_ndbridge_core::host::{HostObject, HostRuntime};

/// A mock host ndarray: element type, layout and a real backing buffer.
#[derive(Debug)]
pub struct MockArray {
    element_type: ElementType,
    element_size: usize,
    shape: Vec<i64>,
    byte_strides: Vec<i64>,
    buffer: Vec<u8>,
}

impl MockArray {
    /// C-contiguous array over a copy of `data`.
    pub fn from_slice<T: NoUninit>(element_type: ElementType, data: &[T], shape: Vec<i64>) -> Self {
        let element_size = element_type.size();
        assert_eq!(element_size, size_of::<T>());
        assert_eq!(data.len(), count(&shape));
        Self {
            byte_strides: c_strides(&shape, element_size),
            element_type,
            element_size,
            shape,
            buffer: bytemuck::cast_slice(data).to_vec(),
        }
    }

    /// Fortran-contiguous array over a copy of `data` (already in
    /// column-major element order).
    pub fn from_slice_f<T: NoUninit>(
        element_type: ElementType,
        data: &[T],
        shape: Vec<i64>,
    ) -> Self {
        let mut array = Self::from_slice(element_type, data, shape);
        array.byte_strides = f_strides(&array.shape, array.element_size);
        array
    }

    /// Zero-filled C-contiguous array.
    pub fn zeros(element_type: ElementType, shape: Vec<i64>) -> Self {
        let element_size = element_type.size();
        Self {
            byte_strides: c_strides(&shape, element_size),
            buffer: vec![0u8; count(&shape) * element_size],
            element_type,
            element_size,
            shape,
        }
    }

    /// Override the declared byte strides, e.g. to describe a sliced or
    /// reversed view of the buffer.
    pub fn with_byte_strides(mut self, byte_strides: Vec<i64>) -> Self {
        assert_eq!(byte_strides.len(), self.shape.len());
        self.byte_strides = byte_strides;
        self
    }

    fn element_count(&self) -> usize {
        count(&self.shape)
    }

    fn c_contiguous(&self) -> bool {
        let mut acc = self.element_size as i64;
        for i in (0..self.shape.len()).rev() {
            if self.shape[i] > 1 && self.byte_strides[i] != acc {
                return false;
            }
            acc *= self.shape[i].max(1);
        }
        true
    }

    fn f_contiguous(&self) -> bool {
        let mut acc = self.element_size as i64;
        for i in 0..self.shape.len() {
            if self.shape[i] > 1 && self.byte_strides[i] != acc {
                return false;
            }
            acc *= self.shape[i].max(1);
        }
        true
    }
}

fn count(shape: &[i64]) -> usize {
    shape.iter().map(|d| *d as usize).product()
}

fn c_strides(shape: &[i64], element_size: usize) -> Vec<i64> {
    let mut strides = vec![0i64; shape.len()];
    let mut acc = element_size as i64;
    for i in (0..shape.len()).rev() {
        strides[i] = acc;
        acc *= shape[i].max(1);
    }
    strides
}

fn f_strides(shape: &[i64], element_size: usize) -> Vec<i64> {
    let mut strides = vec![0i64; shape.len()];
    let mut acc = element_size as i64;
    for i in 0..shape.len() {
        strides[i] = acc;
        acc *= shape[i].max(1);
    }
    strides
}

#[derive(Debug)]
enum MockValue {
    None,
    Str(String),
    Int(i64),
    Float(f64),
    Complex(f64, f64),
    Bool(bool),
    Array(MockArray),
}

#[derive(Debug)]
struct MockState {
    value: MockValue,
    tag: Option<ElementType>,
    log: RefCell<Vec<&'static str>>,
}

/// An untyped mock host handle. Clones share state, like refcounted host
/// object references, so identity comparison is pointer equality.
#[derive(Debug, Clone)]
pub struct MockObject(Rc<MockState>);

impl MockObject {
    fn build(value: MockValue, tag: Option<ElementType>) -> Self {
        Self(Rc::new(MockState {
            value,
            tag,
            log: RefCell::new(Vec::new()),
        }))
    }

    pub fn none() -> Self {
        Self::build(MockValue::None, None)
    }

    pub fn str_object(s: &str) -> Self {
        Self::build(MockValue::Str(s.to_string()), None)
    }

    /// A generic host integer.
    pub fn int(value: i64) -> Self {
        Self::build(MockValue::Int(value), None)
    }

    /// A host integer scalar carrying an exact storage tag.
    pub fn tagged_int(value: i64, tag: ElementType) -> Self {
        Self::build(MockValue::Int(value), Some(tag))
    }

    pub fn float(value: f64) -> Self {
        Self::build(MockValue::Float(value), None)
    }

    pub fn tagged_float(value: f64, tag: ElementType) -> Self {
        Self::build(MockValue::Float(value), Some(tag))
    }

    pub fn complex(real: f64, imag: f64) -> Self {
        Self::build(MockValue::Complex(real, imag), None)
    }

    pub fn tagged_complex(real: f64, imag: f64, tag: ElementType) -> Self {
        Self::build(MockValue::Complex(real, imag), Some(tag))
    }

    pub fn array(array: MockArray) -> Self {
        Self::build(MockValue::Array(array), None)
    }

    /// Names of every query made against this object, in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.0.log.borrow().clone()
    }

    pub fn was_queried(&self, name: &str) -> bool {
        self.0.log.borrow().iter().any(|q| *q == name)
    }

    fn record(&self, name: &'static str) {
        self.0.log.borrow_mut().push(name);
    }

    fn expect_array(&self) -> &MockArray {
        match &self.0.value {
            MockValue::Array(array) => array,
            other => panic!("array query on a non-array mock object ({other:?})"),
        }
    }
}

impl HostObject for MockObject {
    fn is(&self, other: &Self) -> bool {
        self.record("is");
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn is_array(&self) -> bool {
        self.record("is_array");
        matches!(self.0.value, MockValue::Array(_))
    }

    fn is_none(&self) -> bool {
        self.record("is_none");
        matches!(self.0.value, MockValue::None)
    }

    fn type_name(&self) -> &str {
        self.record("type_name");
        if let Some(tag) = self.0.tag {
            return tag.name();
        }
        match self.0.value {
            MockValue::None => "NoneType",
            MockValue::Str(_) => "str",
            MockValue::Int(_) => "int",
            MockValue::Float(_) => "float",
            MockValue::Complex(..) => "complex",
            MockValue::Bool(_) => "bool",
            MockValue::Array(_) => "ndarray",
        }
    }

    fn has_scalar_tag(&self, ty: ElementType) -> bool {
        self.record("has_scalar_tag");
        self.0.tag == Some(ty)
    }

    fn is_generic_int(&self) -> bool {
        self.record("is_generic_int");
        self.0.tag.is_none() && matches!(self.0.value, MockValue::Int(_))
    }

    fn is_generic_float(&self) -> bool {
        self.record("is_generic_float");
        self.0.tag.is_none() && matches!(self.0.value, MockValue::Float(_))
    }

    fn is_generic_complex(&self) -> bool {
        self.record("is_generic_complex");
        self.0.tag.is_none() && matches!(self.0.value, MockValue::Complex(..))
    }

    fn is_generic_bool(&self) -> bool {
        self.record("is_generic_bool");
        self.0.tag.is_none() && matches!(self.0.value, MockValue::Bool(_))
    }

    fn as_i64(&self) -> Option<i64> {
        self.record("as_i64");
        match self.0.value {
            MockValue::Int(v) => Some(v),
            MockValue::Bool(b) => Some(b as i64),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        self.record("as_f64");
        match self.0.value {
            MockValue::Float(v) => Some(v),
            MockValue::Int(v) => Some(v as f64),
            _ => None,
        }
    }

    fn complex_real(&self) -> Option<f64> {
        self.record("complex_real");
        match self.0.value {
            MockValue::Complex(re, _) => Some(re),
            MockValue::Float(v) => Some(v),
            MockValue::Int(v) => Some(v as f64),
            _ => None,
        }
    }

    fn complex_imag(&self) -> Option<f64> {
        self.record("complex_imag");
        match self.0.value {
            MockValue::Complex(_, im) => Some(im),
            MockValue::Float(_) | MockValue::Int(_) => Some(0.0),
            _ => None,
        }
    }

    fn element_type(&self) -> ElementType {
        self.record("element_type");
        self.expect_array().element_type
    }

    fn rank(&self) -> usize {
        self.record("rank");
        self.expect_array().shape.len()
    }

    fn shape(&self) -> &[i64] {
        self.record("shape");
        &self.expect_array().shape
    }

    fn byte_strides(&self) -> &[i64] {
        self.record("byte_strides");
        &self.expect_array().byte_strides
    }

    fn element_size(&self) -> usize {
        self.record("element_size");
        self.expect_array().element_size
    }

    fn element_count(&self) -> usize {
        self.record("element_count");
        self.expect_array().element_count()
    }

    fn byte_size(&self) -> usize {
        self.record("byte_size");
        let array = self.expect_array();
        array.element_count() * array.element_size
    }

    fn data_ptr(&self) -> *mut c_void {
        self.record("data_ptr");
        self.expect_array().buffer.as_ptr() as *mut c_void
    }

    fn is_c_contiguous(&self) -> bool {
        self.record("is_c_contiguous");
        self.expect_array().c_contiguous()
    }

    fn is_f_contiguous(&self) -> bool {
        self.record("is_f_contiguous");
        self.expect_array().f_contiguous()
    }
}

/// Mock runtime owning the two boolean singletons.
pub struct MockRuntime {
    true_object: MockObject,
    false_object: MockObject,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self {
            true_object: MockObject::build(MockValue::Bool(true), None),
            false_object: MockObject::build(MockValue::Bool(false), None),
        }
    }
}

impl Default for MockRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl HostRuntime for MockRuntime {
    type Object = MockObject;

    fn int_from_i64(&self, value: i64) -> MockObject {
        MockObject::int(value)
    }

    fn float_from_f64(&self, value: f64) -> MockObject {
        MockObject::float(value)
    }

    fn complex_from_parts(&self, real: f64, imag: f64) -> MockObject {
        MockObject::complex(real, imag)
    }

    fn bool_object(&self, value: bool) -> MockObject {
        if value {
            self.true_object.clone()
        } else {
            self.false_object.clone()
        }
    }
}
