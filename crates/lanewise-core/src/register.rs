//! Register and mask abstractions
//!
//! A [`Register`] is whatever the resolution table hands back for a scalar
//! kind: either a [`Batch`](crate::Batch) of lanes or, in the scalar fallback,
//! the scalar itself with a single lane. [`Mask`] is the matching comparison
//! result (`BatchBool` or plain `bool`). Kernels written against these two
//! traits compile unchanged for every instruction-set tier.

use std::fmt::Debug;

use crate::error::{Error, Result};
use crate::scalar::SimdScalar;

/// Boolean-lane counterpart of a [`Register`]
pub trait Mask: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Number of boolean lanes
    const LANES: usize;

    /// Mask with every lane set to `value`
    fn splat(value: bool) -> Self;

    /// Read one lane
    ///
    /// # Panics
    /// Panics if `index >= LANES`.
    fn lane(self, index: usize) -> bool;

    /// Number of lanes that are set
    fn count_true(self) -> usize;

    fn any(self) -> bool {
        self.count_true() > 0
    }

    fn all(self) -> bool {
        self.count_true() == Self::LANES
    }
}

impl Mask for bool {
    const LANES: usize = 1;

    #[inline(always)]
    fn splat(value: bool) -> Self {
        value
    }

    #[inline(always)]
    fn lane(self, index: usize) -> bool {
        assert_eq!(index, 0, "scalar mask has a single lane");
        self
    }

    #[inline(always)]
    fn count_true(self) -> usize {
        self as usize
    }
}

/// A value holding `LANES` scalars of one kind
pub trait Register: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Lane type
    type Scalar: SimdScalar;

    /// Result type of lane-wise comparisons
    type Mask: Mask;

    /// Number of lanes
    const LANES: usize;

    /// Register with every lane set to `value`
    fn splat(value: Self::Scalar) -> Self;

    /// Load the first `LANES` elements of `src`.
    ///
    /// # Panics
    /// Panics if `src` holds fewer than `LANES` elements.
    fn load(src: &[Self::Scalar]) -> Self;

    /// Checked variant of [`Register::load`]
    fn try_load(src: &[Self::Scalar]) -> Result<Self> {
        if src.len() < Self::LANES {
            return Err(Error::short_slice(Self::LANES, src.len()));
        }
        Ok(Self::load(src))
    }

    /// Store all lanes into the front of `dst`.
    ///
    /// # Panics
    /// Panics if `dst` holds fewer than `LANES` elements.
    fn store(self, dst: &mut [Self::Scalar]);

    /// Read one lane
    ///
    /// # Panics
    /// Panics if `lane >= LANES`.
    fn extract(self, lane: usize) -> Self::Scalar;

    fn lanes_add(self, rhs: Self) -> Self;
    fn lanes_sub(self, rhs: Self) -> Self;
    fn lanes_mul(self, rhs: Self) -> Self;

    /// Lane-wise `self < rhs`
    fn lanes_lt(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `self == rhs`
    fn lanes_eq(self, rhs: Self) -> Self::Mask;

    /// Pick lanes from `if_true` where `mask` is set, otherwise from `if_false`
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;

    /// Horizontal sum of all lanes
    fn reduce_add(self) -> Self::Scalar;
}

macro_rules! impl_scalar_register {
    ($($ty:ty),*) => {
        $(
            impl Register for $ty {
                type Scalar = $ty;
                type Mask = bool;
                const LANES: usize = 1;

                #[inline(always)]
                fn splat(value: $ty) -> Self {
                    value
                }

                #[inline(always)]
                fn load(src: &[$ty]) -> Self {
                    src[0]
                }

                #[inline(always)]
                fn store(self, dst: &mut [$ty]) {
                    dst[0] = self;
                }

                #[inline(always)]
                fn extract(self, lane: usize) -> $ty {
                    assert_eq!(lane, 0, "scalar register has a single lane");
                    self
                }

                #[inline(always)]
                fn lanes_add(self, rhs: Self) -> Self {
                    self.lane_add(rhs)
                }

                #[inline(always)]
                fn lanes_sub(self, rhs: Self) -> Self {
                    self.lane_sub(rhs)
                }

                #[inline(always)]
                fn lanes_mul(self, rhs: Self) -> Self {
                    self.lane_mul(rhs)
                }

                #[inline(always)]
                fn lanes_lt(self, rhs: Self) -> bool {
                    self < rhs
                }

                #[inline(always)]
                fn lanes_eq(self, rhs: Self) -> bool {
                    self == rhs
                }

                #[inline(always)]
                fn select(mask: bool, if_true: Self, if_false: Self) -> Self {
                    if mask { if_true } else { if_false }
                }

                #[inline(always)]
                fn reduce_add(self) -> $ty {
                    self
                }
            }
        )*
    };
}

impl_scalar_register!(i32, i64, f32, f64);
