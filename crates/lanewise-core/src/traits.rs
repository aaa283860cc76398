//! Scalar ↔ register resolution
//!
//! [`SimdTraits`] maps a scalar kind to the register, mask and lane count an
//! instruction set provides for it; [`RevertSimdTraits`] maps any register
//! back to its lane scalar. Both default to [`NativeIsa`], so generic code can
//! write `SimdType<T>` and get the widest register of the build.
//!
//! ```rust
//! use lanewise_core::{Avx, Batch, BatchBool, NoSimd, SimdBoolType, SimdType, lane_count};
//!
//! let _: SimdType<f32, Avx> = Batch::<f32, 8>::from_array([0.0; 8]);
//! let _: SimdBoolType<i64, Avx> = BatchBool::<i64, 4>::from_array([false; 4]);
//! let _: SimdType<f64, NoSimd> = 1.0f64;
//! assert_eq!(lane_count::<i32, Avx>(), 8);
//! ```
//!
//! Types outside the closed scalar set have no resolution:
//!
//! ```compile_fail
//! use lanewise_core::{Avx, SimdType};
//! let _: SimdType<u16, Avx> = 0u16;
//! ```

use crate::isa::{Isa, NativeIsa};
use crate::register::{Mask, Register};
use crate::scalar::SimdScalar;

/// Forward resolution of a scalar kind under instruction set `I`
pub trait SimdTraits<I: Isa = NativeIsa>: SimdScalar {
    /// Register holding lanes of `Self`, or `Self` in the scalar fallback
    type Type: Register<Scalar = Self, Mask = Self::BoolType>;

    /// Comparison result for [`Self::Type`], `bool` in the scalar fallback
    type BoolType: Mask;

    /// Lane count of [`Self::Type`]
    const SIZE: usize;
}

macro_rules! impl_simd_traits {
    ($($ty:ty => $reg:ident),* $(,)?) => {
        $(
            impl<I: Isa> SimdTraits<I> for $ty {
                type Type = I::$reg;
                type BoolType = <I::$reg as Register>::Mask;
                const SIZE: usize = <I::$reg as Register>::LANES;
            }
        )*
    };
}

impl_simd_traits!(
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
);

/// Register type for `T` under `I`
pub type SimdType<T, I = NativeIsa> = <T as SimdTraits<I>>::Type;

/// Mask type for `T` under `I`
pub type SimdBoolType<T, I = NativeIsa> = <T as SimdTraits<I>>::BoolType;

/// Lane count of `T` under `I`
pub const fn lane_count<T: SimdTraits<I>, I: Isa>() -> usize {
    T::SIZE
}

/// Reverse resolution: the scalar a register was built from.
///
/// `SIZE` is recomputed through [`SimdTraits`], so for every register the
/// forward resolver produces, `SimdType<RevertSimdType<V, I>, I> == V`.
pub trait RevertSimdTraits<I: Isa = NativeIsa>: Register {
    type Type: SimdTraits<I>;

    const SIZE: usize;
}

impl<R, I> RevertSimdTraits<I> for R
where
    R: Register,
    R::Scalar: SimdTraits<I>,
    I: Isa,
{
    type Type = R::Scalar;
    const SIZE: usize = <R::Scalar as SimdTraits<I>>::SIZE;
}

/// Scalar kind behind register `V`
pub type RevertSimdType<V, I = NativeIsa> = <V as RevertSimdTraits<I>>::Type;
