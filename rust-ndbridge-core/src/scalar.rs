use num_complex::Complex;

use crate::dtype::ElementType;
use crate::error::{Error, Result};
use crate::host::{HostObject, HostRuntime};

fn conversion_error<O: HostObject>(obj: &O, expected: &'static str) -> Error {
    Error::ScalarConversion {
        expected,
        type_name: obj.type_name().to_string(),
    }
}

/// Extract a signed 64-bit integer from an integer-like host object.
pub fn to_i64<O: HostObject>(obj: &O) -> Result<i64> {
    obj.as_i64().ok_or_else(|| conversion_error(obj, "integer"))
}

/// Narrowing integer coercions go through the 64-bit extraction and then
/// truncate; no bounds validation is performed, so an out-of-range value
/// wraps (coercing 300 to i8 yields 44). Callers are expected to have
/// classified the object first.
pub fn to_i32<O: HostObject>(obj: &O) -> Result<i32> {
    Ok(to_i64(obj)? as i32)
}

pub fn to_i16<O: HostObject>(obj: &O) -> Result<i16> {
    Ok(to_i64(obj)? as i16)
}

pub fn to_i8<O: HostObject>(obj: &O) -> Result<i8> {
    Ok(to_i64(obj)? as i8)
}

/// Extract a double from a float-like host object.
pub fn to_f64<O: HostObject>(obj: &O) -> Result<f64> {
    obj.as_f64().ok_or_else(|| conversion_error(obj, "float"))
}

/// Double extraction narrowed to single precision; no range check.
pub fn to_f32<O: HostObject>(obj: &O) -> Result<f32> {
    Ok(to_f64(obj)? as f32)
}

/// Extract both parts of a complex-like host object as doubles.
pub fn to_complex128<O: HostObject>(obj: &O) -> Result<Complex<f64>> {
    let real = obj
        .complex_real()
        .ok_or_else(|| conversion_error(obj, "complex"))?;
    let imag = obj
        .complex_imag()
        .ok_or_else(|| conversion_error(obj, "complex"))?;
    Ok(Complex::new(real, imag))
}

/// Part-wise extraction narrowed to single precision.
pub fn to_complex64<O: HostObject>(obj: &O) -> Result<Complex<f32>> {
    let real = obj
        .complex_real()
        .ok_or_else(|| conversion_error(obj, "complex"))?;
    let imag = obj
        .complex_imag()
        .ok_or_else(|| conversion_error(obj, "complex"))?;
    Ok(Complex::new(real as f32, imag as f32))
}

/// Identity comparison against the runtime's true singleton. Anything
/// that is not that exact object maps to false; this is not a general
/// truthiness coercion.
pub fn to_bool<R: HostRuntime>(rt: &R, obj: &R::Object) -> bool {
    obj.is(&rt.bool_object(true))
}

pub fn from_i64<R: HostRuntime>(rt: &R, value: i64) -> R::Object {
    rt.int_from_i64(value)
}

pub fn from_f64<R: HostRuntime>(rt: &R, value: f64) -> R::Object {
    rt.float_from_f64(value)
}

pub fn from_complex128<R: HostRuntime>(rt: &R, value: Complex<f64>) -> R::Object {
    rt.complex_from_parts(value.re, value.im)
}

/// Returns one of the two process-wide boolean singletons.
pub fn from_bool<R: HostRuntime>(rt: &R, value: bool) -> R::Object {
    rt.bool_object(value)
}

/// Classify a host scalar against a native element type.
///
/// Strict mode accepts only the exact scalar storage tag, which is how
/// precision-sensitive callers distinguish 32- from 64-bit values.
/// Non-strict mode additionally accepts the host's generic category for
/// the tag (any host integer for an integer tag, and so on). The same
/// rule applies to every tag on every platform, including `Int32` and
/// `Int64`.
pub fn scalar_check<O: HostObject>(obj: &O, ty: ElementType, strict: bool) -> bool {
    if obj.has_scalar_tag(ty) {
        return true;
    }
    if strict {
        return false;
    }
    if ty.is_integer() {
        obj.is_generic_int()
    } else if ty.is_float() {
        obj.is_generic_float()
    } else if ty.is_complex() {
        obj.is_generic_complex()
    } else {
        obj.is_generic_bool()
    }
}
