//! Scalar and element kinds
//!
//! Two related vocabularies live here:
//!
//! - [`ElementKind`] / [`Element`]: every primitive numeric lane type. The
//!   promotion predicate is evaluated over these, so it can also speak about
//!   types that have no SIMD resolution (e.g. `u16`).
//! - [`ScalarKind`] / [`SimdScalar`]: the closed set `{i32, i64, f32, f64}` that
//!   the resolution table is total over. `SimdScalar` is sealed.

use bytemuck::Pod;
use num_traits::Num;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

use crate::error::{Error, Result};

/// Tag for any primitive numeric lane type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl ElementKind {
    /// Kinds allowed on the left of a promotion against any right-hand kind
    pub const fn is_promotable(self) -> bool {
        matches!(self, Self::F32 | Self::F64 | Self::I64 | Self::I32)
    }

    /// Promotion validity predicate.
    ///
    /// Only the left operand is checked against the promotable set, so the
    /// relation is not symmetric: `F32.is_compatible(U16)` holds while
    /// `U16.is_compatible(F32)` does not.
    pub const fn is_compatible(self, rhs: Self) -> bool {
        self as u8 == rhs as u8 || self.is_promotable()
    }

    /// The SIMD scalar kind for this element, if it has one
    pub const fn scalar(self) -> Option<ScalarKind> {
        match self {
            Self::I32 => Some(ScalarKind::Int32),
            Self::I64 => Some(ScalarKind::Int64),
            Self::F32 => Some(ScalarKind::Float32),
            Self::F64 => Some(ScalarKind::Float64),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => "int8",
            Self::U8 => "uint8",
            Self::I16 => "int16",
            Self::U16 => "uint16",
            Self::I32 => "int32",
            Self::U32 => "uint32",
            Self::I64 => "int64",
            Self::U64 => "uint64",
            Self::F32 => "float32",
            Self::F64 => "float64",
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The closed set of scalar kinds with a SIMD resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Int32,
    Int64,
    Float32,
    Float64,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 4] = [
        ScalarKind::Int32,
        ScalarKind::Int64,
        ScalarKind::Float32,
        ScalarKind::Float64,
    ];

    pub const fn element(self) -> ElementKind {
        match self {
            Self::Int32 => ElementKind::I32,
            Self::Int64 => ElementKind::I64,
            Self::Float32 => ElementKind::F32,
            Self::Float64 => ElementKind::F64,
        }
    }

    /// Width of one lane in bytes
    pub const fn size_bytes(self) -> usize {
        match self {
            Self::Int32 | Self::Float32 => 4,
            Self::Int64 | Self::Float64 => 8,
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }
}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element().name())
    }
}

impl From<ScalarKind> for ElementKind {
    fn from(kind: ScalarKind) -> Self {
        kind.element()
    }
}

impl TryFrom<ElementKind> for ScalarKind {
    type Error = Error;

    fn try_from(kind: ElementKind) -> Result<Self> {
        kind.scalar().ok_or(Error::UnsupportedScalar(kind))
    }
}

/// Any primitive numeric type usable as a lane
pub trait Element: Copy + Debug + PartialOrd + Send + Sync + 'static {
    const KIND: ElementKind;
}

macro_rules! impl_element {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const KIND: ElementKind = ElementKind::$kind;
            }
        )*
    };
}

impl_element!(
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
);

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Scalar kinds the resolution table is defined over.
///
/// Sealed: implemented for `i32`, `i64`, `f32` and `f64` only. Lane arithmetic
/// wraps for integers so vector and scalar reductions agree bit for bit.
pub trait SimdScalar: Element + Pod + Num + sealed::Sealed {
    const SCALAR: ScalarKind;

    fn lane_add(self, rhs: Self) -> Self;
    fn lane_sub(self, rhs: Self) -> Self;
    fn lane_mul(self, rhs: Self) -> Self;
}

macro_rules! impl_simd_scalar_int {
    ($ty:ty => $kind:ident) => {
        impl SimdScalar for $ty {
            const SCALAR: ScalarKind = ScalarKind::$kind;

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }
        }
    };
}

macro_rules! impl_simd_scalar_float {
    ($ty:ty => $kind:ident) => {
        impl SimdScalar for $ty {
            const SCALAR: ScalarKind = ScalarKind::$kind;

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self * rhs
            }
        }
    };
}

impl_simd_scalar_int!(i32 => Int32);
impl_simd_scalar_int!(i64 => Int64);
impl_simd_scalar_float!(f32 => Float32);
impl_simd_scalar_float!(f64 => Float64);
