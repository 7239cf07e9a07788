use std::collections::HashSet;

use rust_ndbridge_core::dtype::ElementType;

#[test]
fn test_tag_table_is_consistent() {
    for (i, ty) in ElementType::ALL.iter().enumerate() {
        assert_eq!(ty.tag(), i);
        assert_eq!(ElementType::from_tag(i), Some(*ty));
    }
    assert_eq!(ElementType::from_tag(ElementType::ALL.len()), None);
}

#[test]
fn test_names_are_unique() {
    let names: HashSet<&str> = ElementType::ALL.iter().map(|ty| ty.name()).collect();
    assert_eq!(names.len(), ElementType::ALL.len());
}

#[test]
fn test_display_names() {
    assert_eq!(ElementType::Bool.name(), "Bool");
    assert_eq!(ElementType::UInt16.name(), "UInt16");
    assert_eq!(ElementType::Float64.name(), "Float64");
    assert_eq!(ElementType::Complex256.name(), "Complex256");
}

#[test]
fn test_element_sizes() {
    assert_eq!(ElementType::Bool.size(), 1);
    assert_eq!(ElementType::Int8.size(), 1);
    assert_eq!(ElementType::UInt16.size(), 2);
    assert_eq!(ElementType::Int32.size(), 4);
    assert_eq!(ElementType::Float32.size(), 4);
    assert_eq!(ElementType::Int64.size(), 8);
    assert_eq!(ElementType::Int128.size(), 16);
    assert_eq!(ElementType::Float128.size(), 16);
    assert_eq!(ElementType::Complex64.size(), 8);
    assert_eq!(ElementType::Complex128.size(), 16);
    assert_eq!(ElementType::Complex256.size(), 32);
}

#[test]
fn test_category_partition() {
    for ty in ElementType::ALL {
        let categories = [
            ty == ElementType::Bool,
            ty.is_integer(),
            ty.is_float(),
            ty.is_complex(),
        ];
        assert_eq!(
            categories.iter().filter(|c| **c).count(),
            1,
            "{} must belong to exactly one category",
            ty.name()
        );
    }
}
