/// Element types of a host ndarray, in the host runtime's declaration
/// order. The integer tag exchanged at the host boundary is the variant's
/// position in this enum, so the order here must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Bool,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Int128,
    UInt128,
    Float32,
    Float64,
    Float128,
    Complex64,
    Complex128,
    Complex256,
}

impl ElementType {
    /// Every element type, indexed by its host tag.
    pub const ALL: [ElementType; 17] = [
        Self::Bool,
        Self::Int8,
        Self::UInt8,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Int128,
        Self::UInt128,
        Self::Float32,
        Self::Float64,
        Self::Float128,
        Self::Complex64,
        Self::Complex128,
        Self::Complex256,
    ];

    pub fn tag(&self) -> usize {
        *self as usize
    }

    pub fn from_tag(tag: usize) -> Option<Self> {
        Self::ALL.get(tag).copied()
    }

    /// Display name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Int8 => "Int8",
            Self::UInt8 => "UInt8",
            Self::Int16 => "Int16",
            Self::UInt16 => "UInt16",
            Self::Int32 => "Int32",
            Self::UInt32 => "UInt32",
            Self::Int64 => "Int64",
            Self::UInt64 => "UInt64",
            Self::Int128 => "Int128",
            Self::UInt128 => "UInt128",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Float128 => "Float128",
            Self::Complex64 => "Complex64",
            Self::Complex128 => "Complex128",
            Self::Complex256 => "Complex256",
        }
    }

    /// Byte width of one element.
    pub fn size(&self) -> usize {
        match self {
            Self::Bool | Self::Int8 | Self::UInt8 => 1,
            Self::Int16 | Self::UInt16 => 2,
            Self::Int32 | Self::UInt32 | Self::Float32 => 4,
            Self::Int64 | Self::UInt64 | Self::Float64 | Self::Complex64 => 8,
            Self::Int128 | Self::UInt128 | Self::Float128 | Self::Complex128 => 16,
            Self::Complex256 => 32,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::UInt8
                | Self::Int16
                | Self::UInt16
                | Self::Int32
                | Self::UInt32
                | Self::Int64
                | Self::UInt64
                | Self::Int128
                | Self::UInt128
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64 | Self::Float128)
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Self::Complex64 | Self::Complex128 | Self::Complex256)
    }
}
