//! Result types of binary operations
//!
//! [`SimdReturnType<L, R>`] names the type a binary operation between `L` and
//! `R` produces. Each operand is a scalar, a [`Batch`] or a [`BatchBool`]:
//!
//! | left | right | result |
//! |---|---|---|
//! | scalar | scalar `R` | `SimdType<R>` |
//! | scalar | `Batch<T2, N2>` | `Batch<T2, N2>` |
//! | scalar | `BatchBool<T2, N2>` | `BatchBool<T2, N2>` |
//! | `Batch<T1, N1>` | `Batch<T2, N2>` | `Batch<T2, N2>` |
//! | `Batch<T1, N1>` | `BatchBool<T2, N2>` | `BatchBool<T2, N2>` |
//! | `BatchBool<T1, N1>` | `BatchBool<T2, N2>` | `BatchBool<T2, N2>` |
//!
//! The right operand always decides. Register operands keep their own lane
//! count even when it differs from what the build would resolve for `T2`.
//!
//! ```rust
//! use lanewise_core::{Avx, Batch, Sse2, SimdReturnType};
//!
//! let _: SimdReturnType<f64, f32, Avx> = Batch::<f32, 8>::from_array([1.0; 8]);
//! let _: SimdReturnType<Batch<f32, 8>, Batch<f32, 4>, Avx> = Batch::<f32, 4>::from_array([1.0; 4]);
//! let _: SimdReturnType<i32, i32, Sse2> = Batch::<i32, 4>::from_array([0; 4]);
//! ```
//!
//! Pairs failing [`is_compatible`], or shapes outside the table, do not compile:
//!
//! ```compile_fail
//! use lanewise_core::{Avx, SimdReturnType};
//! let _: SimdReturnType<u16, f32, Avx> = unimplemented!();
//! ```
//!
//! ```compile_fail
//! use lanewise_core::{Avx, Batch, SimdReturnType};
//! let _: SimdReturnType<Batch<f32, 8>, f32, Avx> = unimplemented!();
//! ```

use crate::batch::{Batch, BatchBool};
use crate::isa::{Isa, NativeIsa};
use crate::scalar::{Element, SimdScalar};
use crate::table::{MaskDescriptor, Participant, RegisterDescriptor};
use crate::traits::SimdType;

/// One side of a binary operation
pub trait Operand: Copy + 'static {
    /// Lane type the compatibility predicate looks at
    type Element: Element;

    /// Runtime description of this operand
    fn participant() -> Participant;
}

macro_rules! impl_scalar_operand {
    ($($ty:ty),*) => {
        $(
            impl Operand for $ty {
                type Element = $ty;

                fn participant() -> Participant {
                    Participant::Scalar(<$ty as Element>::KIND)
                }
            }
        )*
    };
}

impl_scalar_operand!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl<T: SimdScalar, const N: usize> Operand for Batch<T, N> {
    type Element = T;

    fn participant() -> Participant {
        Participant::Vector(RegisterDescriptor::new(T::SCALAR, N))
    }
}

impl<T: SimdScalar, const N: usize> Operand for BatchBool<T, N> {
    type Element = T;

    fn participant() -> Participant {
        Participant::Mask(MaskDescriptor::new(T::SCALAR, N))
    }
}

/// Compatibility predicate over the element types of two operands.
///
/// Holds when the elements are equal or the left element is `f32`, `f64`,
/// `i64` or `i32`. Only the left side is checked against that set, so
/// `is_compatible::<f32, u16>()` is true while `is_compatible::<u16, f32>()`
/// is false.
pub const fn is_compatible<A: Operand, B: Operand>() -> bool {
    <A::Element as Element>::KIND.is_compatible(<B::Element as Element>::KIND)
}

/// Result type of a binary operation between `Self` and `Rhs` under `I`
pub trait SimdReturn<Rhs, I: Isa = NativeIsa> {
    type Output;
}

/// Result type of `L op R` under `I`
pub type SimdReturnType<L, R, I = NativeIsa> = <L as SimdReturn<R, I>>::Output;

/// What a right-hand operand promotes to when the left operand is a scalar:
/// scalars resolve to their register, registers and masks stay as they are.
pub trait PromotionTarget<I: Isa = NativeIsa>: Operand {
    type Promoted;
}

macro_rules! impl_scalar_promotion_target {
    ($($ty:ty),*) => {
        $(
            impl<I: Isa> PromotionTarget<I> for $ty {
                type Promoted = SimdType<$ty, I>;
            }
        )*
    };
}

impl_scalar_promotion_target!(i32, i64, f32, f64);

impl<T: SimdScalar, const N: usize, I: Isa> PromotionTarget<I> for Batch<T, N> {
    type Promoted = Self;
}

impl<T: SimdScalar, const N: usize, I: Isa> PromotionTarget<I> for BatchBool<T, N> {
    type Promoted = Self;
}

// Every SimdScalar is in the promotable left-operand set, so bounding the left
// side on SimdScalar encodes the predicate. Equal non-promotable kinds never
// reach here since they have no resolution to promote to.
impl<L, R, I> SimdReturn<R, I> for L
where
    L: SimdScalar,
    R: PromotionTarget<I>,
    I: Isa,
{
    type Output = R::Promoted;
}

impl<T1, const N1: usize, T2, const N2: usize, I> SimdReturn<Batch<T2, N2>, I> for Batch<T1, N1>
where
    T1: SimdScalar,
    T2: SimdScalar,
    I: Isa,
{
    type Output = Batch<T2, N2>;
}

impl<T1, const N1: usize, T2, const N2: usize, I> SimdReturn<BatchBool<T2, N2>, I>
    for Batch<T1, N1>
where
    T1: SimdScalar,
    T2: SimdScalar,
    I: Isa,
{
    type Output = BatchBool<T2, N2>;
}

impl<T1, const N1: usize, T2, const N2: usize, I> SimdReturn<BatchBool<T2, N2>, I>
    for BatchBool<T1, N1>
where
    T1: SimdScalar,
    T2: SimdScalar,
    I: Isa,
{
    type Output = BatchBool<T2, N2>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::{Avx, NoSimd, Sse2};
    use crate::table::promote;
    use std::any::TypeId;

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    /// Type-level result and runtime mirror must agree
    fn agrees<L, R, I>() -> bool
    where
        L: Operand + SimdReturn<R, I>,
        R: Operand,
        I: Isa,
        SimdReturnType<L, R, I>: Operand,
    {
        let table = crate::table::ResolutionTable::for_set(I::SET);
        promote(&table, L::participant(), R::participant()).ok()
            == Some(<SimdReturnType<L, R, I> as Operand>::participant())
    }

    #[test]
    fn test_scalar_scalar_resolves_right_operand() {
        assert!(same::<SimdReturnType<f64, f32, Avx>, Batch<f32, 8>>());
        assert!(same::<SimdReturnType<i32, i32, Sse2>, Batch<i32, 4>>());
        assert!(same::<SimdReturnType<f32, i64, NoSimd>, i64>());
    }

    #[test]
    fn test_register_operands_keep_right_lane_count() {
        assert!(same::<SimdReturnType<Batch<f32, 8>, Batch<f32, 4>, Avx>, Batch<f32, 4>>());
        assert!(same::<SimdReturnType<Batch<i32, 4>, BatchBool<f64, 2>, Avx>, BatchBool<f64, 2>>());
        assert!(same::<
            SimdReturnType<BatchBool<f32, 8>, BatchBool<i64, 16>, Sse2>,
            BatchBool<i64, 16>,
        >());
        assert!(same::<SimdReturnType<f64, Batch<f32, 2>, Avx>, Batch<f32, 2>>());
    }

    #[test]
    fn test_predicate_asymmetry() {
        assert!(is_compatible::<f32, u16>());
        assert!(!is_compatible::<u16, f32>());
        assert!(is_compatible::<u16, u16>());
        assert!(is_compatible::<Batch<i32, 4>, BatchBool<f64, 2>>());
    }

    #[test]
    fn test_type_level_matches_runtime_mirror() {
        assert!(agrees::<f64, f32, Avx>());
        assert!(agrees::<i32, i32, Sse2>());
        assert!(agrees::<i64, f64, NoSimd>());
        assert!(agrees::<Batch<f32, 8>, Batch<f32, 4>, Avx>());
        assert!(agrees::<Batch<i64, 2>, BatchBool<i32, 4>, Sse2>());
        assert!(agrees::<BatchBool<f32, 4>, BatchBool<f64, 2>, Avx>());
        assert!(agrees::<f32, BatchBool<i32, 8>, Avx>());
    }
}
