//! Portable vector registers
//!
//! `Batch<T, N>` and `BatchBool<T, N>` are the (scalar kind, lane count)
//! register and mask descriptors the resolution table points at. They are plain
//! arrays, so the compiler's auto-vectoriser does the rest; `Batch` is
//! `repr(transparent)` and `Pod`, which lets slices of scalars be viewed as
//! slices of registers without copying.

use bytemuck::{Pod, Zeroable};
use std::marker::PhantomData;
use std::ops::{Add, BitAnd, BitOr, Index, Mul, Not, Sub};

use crate::error::{Error, Result};
use crate::register::{Mask, Register};
use crate::scalar::SimdScalar;

/// `N` lanes of scalar `T`
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Batch<T, const N: usize>([T; N]);

// Safety: repr(transparent) over [T; N], which is Pod/Zeroable when T is
unsafe impl<T: Zeroable, const N: usize> Zeroable for Batch<T, N> {}
unsafe impl<T: Pod, const N: usize> Pod for Batch<T, N> {}

impl<T: Copy, const N: usize> Batch<T, N> {
    pub const LANES: usize = N;

    #[inline(always)]
    pub const fn from_array(lanes: [T; N]) -> Self {
        Self(lanes)
    }

    #[inline(always)]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self(std::array::from_fn(f))
    }

    #[inline(always)]
    pub const fn to_array(self) -> [T; N] {
        self.0
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T: Pod, const N: usize> Batch<T, N> {
    /// View a slice of registers as the flat slice of their lanes
    pub fn cast_slice(batches: &[Self]) -> &[T] {
        bytemuck::cast_slice(batches)
    }

    /// View a flat slice of scalars as registers.
    ///
    /// Fails if the length is not a multiple of `N`.
    pub fn try_from_scalars(scalars: &[T]) -> Result<&[Self]> {
        bytemuck::try_cast_slice(scalars).map_err(|_| Error::LaneMismatch {
            expected: N * scalars.len().div_ceil(N.max(1)),
            actual: scalars.len(),
        })
    }
}

impl<T, const N: usize> Index<usize> for Batch<T, N> {
    type Output = T;

    fn index(&self, lane: usize) -> &T {
        &self.0[lane]
    }
}

impl<T: SimdScalar, const N: usize> Register for Batch<T, N> {
    type Scalar = T;
    type Mask = BatchBool<T, N>;
    const LANES: usize = N;

    #[inline(always)]
    fn splat(value: T) -> Self {
        Self([value; N])
    }

    #[inline(always)]
    fn load(src: &[T]) -> Self {
        let mut lanes = [T::zero(); N];
        lanes.copy_from_slice(&src[..N]);
        Self(lanes)
    }

    #[inline(always)]
    fn store(self, dst: &mut [T]) {
        dst[..N].copy_from_slice(&self.0);
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> T {
        self.0[lane]
    }

    #[inline(always)]
    fn lanes_add(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.0[i].lane_add(rhs.0[i]))
    }

    #[inline(always)]
    fn lanes_sub(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.0[i].lane_sub(rhs.0[i]))
    }

    #[inline(always)]
    fn lanes_mul(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.0[i].lane_mul(rhs.0[i]))
    }

    #[inline(always)]
    fn lanes_lt(self, rhs: Self) -> BatchBool<T, N> {
        BatchBool::from_fn(|i| self.0[i] < rhs.0[i])
    }

    #[inline(always)]
    fn lanes_eq(self, rhs: Self) -> BatchBool<T, N> {
        BatchBool::from_fn(|i| self.0[i] == rhs.0[i])
    }

    #[inline(always)]
    fn select(mask: BatchBool<T, N>, if_true: Self, if_false: Self) -> Self {
        Self::from_fn(|i| if mask.lanes[i] { if_true.0[i] } else { if_false.0[i] })
    }

    #[inline(always)]
    fn reduce_add(self) -> T {
        self.0.iter().fold(T::zero(), |acc, &x| acc.lane_add(x))
    }
}

impl<T: SimdScalar, const N: usize> Add for Batch<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.lanes_add(rhs)
    }
}

impl<T: SimdScalar, const N: usize> Sub for Batch<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.lanes_sub(rhs)
    }
}

impl<T: SimdScalar, const N: usize> Mul for Batch<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.lanes_mul(rhs)
    }
}

/// Boolean lanes produced by comparing two `Batch<T, N>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchBool<T, const N: usize> {
    lanes: [bool; N],
    _kind: PhantomData<T>,
}

impl<T, const N: usize> BatchBool<T, N> {
    pub const LANES: usize = N;

    #[inline(always)]
    pub const fn from_array(lanes: [bool; N]) -> Self {
        Self {
            lanes,
            _kind: PhantomData,
        }
    }

    #[inline(always)]
    pub fn from_fn(f: impl FnMut(usize) -> bool) -> Self {
        Self::from_array(std::array::from_fn(f))
    }

    #[inline(always)]
    pub const fn to_array(self) -> [bool; N] {
        self.lanes
    }
}

impl<T: SimdScalar, const N: usize> Mask for BatchBool<T, N> {
    const LANES: usize = N;

    #[inline(always)]
    fn splat(value: bool) -> Self {
        Self::from_array([value; N])
    }

    #[inline(always)]
    fn lane(self, index: usize) -> bool {
        self.lanes[index]
    }

    #[inline(always)]
    fn count_true(self) -> usize {
        self.lanes.iter().filter(|&&set| set).count()
    }
}

impl<T, const N: usize> Not for BatchBool<T, N> {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_fn(|i| !self.lanes[i])
    }
}

impl<T, const N: usize> BitAnd for BatchBool<T, N> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.lanes[i] & rhs.lanes[i])
    }
}

impl<T, const N: usize> BitOr for BatchBool<T, N> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.lanes[i] | rhs.lanes[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_store_roundtrip() {
        let data = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        let batch = Batch::<f32, 4>::load(&data);
        assert_eq!(batch.to_array(), [1.0, 2.0, 3.0, 4.0]);

        let mut out = [0.0f32; 6];
        batch.store(&mut out[1..]);
        assert_eq!(out, [0.0, 1.0, 2.0, 3.0, 4.0, 0.0]);
    }

    #[test]
    fn test_try_load_short_slice() {
        let err = Batch::<i64, 4>::try_load(&[1, 2]).unwrap_err();
        assert!(matches!(err, Error::LaneMismatch { expected: 4, actual: 2 }));
    }

    #[test]
    fn test_lane_arithmetic() {
        let a = Batch::<i32, 4>::from_array([1, 2, 3, i32::MAX]);
        let b = Batch::<i32, 4>::splat(1);
        assert_eq!((a + b).to_array(), [2, 3, 4, i32::MIN]);
        assert_eq!((a - b).to_array(), [0, 1, 2, i32::MAX - 1]);
        assert_eq!((a * Batch::splat(2)).extract(2), 6);
        assert_eq!(Batch::<f64, 2>::from_array([1.5, 2.5]).reduce_add(), 4.0);
    }

    #[test]
    fn test_compare_and_select() {
        let a = Batch::<f32, 4>::from_array([1.0, 5.0, f32::NAN, 3.0]);
        let b = Batch::<f32, 4>::splat(3.0);
        let lt = a.lanes_lt(b);
        assert_eq!(lt.to_array(), [true, false, false, false]);
        assert_eq!(lt.count_true(), 1);
        assert!(lt.any());
        assert!(!lt.all());
        assert_eq!(a.lanes_eq(b).to_array(), [false, false, false, true]);

        let picked = Batch::select(lt, a, b);
        assert_eq!(picked.to_array()[..2], [1.0, 3.0]);
    }

    #[test]
    fn test_mask_logic() {
        let m = BatchBool::<i32, 4>::from_array([true, false, true, false]);
        assert_eq!((!m).to_array(), [false, true, false, true]);
        assert_eq!((m & !m).count_true(), 0);
        assert!((m | !m).all());
        assert_eq!(<BatchBool<i32, 4> as Mask>::splat(true).count_true(), 4);
    }

    #[test]
    fn test_zero_copy_views() {
        let scalars = [1i32, 2, 3, 4, 5, 6, 7, 8];
        let batches = Batch::<i32, 4>::try_from_scalars(&scalars).unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[1][0], 5);
        assert_eq!(Batch::cast_slice(batches), &scalars);

        let err = Batch::<i32, 4>::try_from_scalars(&scalars[..6]).unwrap_err();
        assert!(matches!(err, Error::LaneMismatch { expected: 8, actual: 6 }));
    }
}
