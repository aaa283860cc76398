//! Register-wide backend
//!
//! Every primitive is written once against `SimdType<T, I>`. Under `Avx` an
//! `f32` sum walks the data eight lanes at a time, under `Neon` an `f64` sum
//! falls back to one lane, and the code does not change.

use std::marker::PhantomData;

use lanewise_core::{
    InstructionSet, Isa, Mask, NativeIsa, Register, Result, SimdTraits, SimdType,
};

use crate::traits::ComputePrimitives;

/// Backend processing `SimdTraits::<I>::SIZE` lanes per step
#[derive(Clone, Copy, Debug, Default)]
pub struct LaneBackend<I: Isa = NativeIsa> {
    _isa: PhantomData<fn() -> I>,
}

impl<I: Isa> LaneBackend<I> {
    pub fn new() -> Self {
        Self { _isa: PhantomData }
    }

    /// Create a backend after checking the CPU offers `I`'s instruction set
    pub fn checked() -> Result<Self> {
        I::SET.ensure_supported().map_err(|err| {
            tracing::warn!(isa = %I::SET, "lane backend requested on unsupported CPU");
            err
        })?;
        Ok(Self::new())
    }

    pub fn instruction_set(&self) -> InstructionSet {
        I::SET
    }
}

#[inline(always)]
fn load<T: SimdTraits<I>, I: Isa>(chunk: &[T]) -> SimdType<T, I> {
    <SimdType<T, I> as Register>::load(chunk)
}

#[inline(always)]
fn splat<T: SimdTraits<I>, I: Isa>(value: T) -> SimdType<T, I> {
    <SimdType<T, I> as Register>::splat(value)
}

impl<T, I> ComputePrimitives<T> for LaneBackend<I>
where
    T: SimdTraits<I>,
    I: Isa,
{
    fn backend_name(&self) -> &'static str {
        I::SET.name()
    }

    fn simd_width(&self) -> usize {
        <T as SimdTraits<I>>::SIZE
    }

    fn sum(&self, data: &[T]) -> T {
        let chunks = data.chunks_exact(<T as SimdTraits<I>>::SIZE);
        let tail = chunks.remainder();

        let mut acc = splat::<T, I>(T::zero());
        for chunk in chunks {
            acc = acc.lanes_add(load::<T, I>(chunk));
        }

        tail.iter().fold(acc.reduce_add(), |total, &x| total.lane_add(x))
    }

    fn dot_product(&self, a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len(), "Vectors must have same length");
        let len = a.len().min(b.len());
        let lanes = <T as SimdTraits<I>>::SIZE;
        let (a, b) = (&a[..len], &b[..len]);

        let a_chunks = a.chunks_exact(lanes);
        let b_chunks = b.chunks_exact(lanes);
        let (a_tail, b_tail) = (a_chunks.remainder(), b_chunks.remainder());

        let mut acc = splat::<T, I>(T::zero());
        for (ca, cb) in a_chunks.zip(b_chunks) {
            acc = acc.lanes_add(load::<T, I>(ca).lanes_mul(load::<T, I>(cb)));
        }

        a_tail
            .iter()
            .zip(b_tail.iter())
            .fold(acc.reduce_add(), |total, (&x, &y)| total.lane_add(x.lane_mul(y)))
    }

    fn sum_of_squares(&self, data: &[T]) -> T {
        let chunks = data.chunks_exact(<T as SimdTraits<I>>::SIZE);
        let tail = chunks.remainder();

        let mut acc = splat::<T, I>(T::zero());
        for chunk in chunks {
            let v = load::<T, I>(chunk);
            acc = acc.lanes_add(v.lanes_mul(v));
        }

        tail.iter()
            .fold(acc.reduce_add(), |total, &x| total.lane_add(x.lane_mul(x)))
    }

    fn count_less_than(&self, data: &[T], threshold: T) -> usize {
        let chunks = data.chunks_exact(<T as SimdTraits<I>>::SIZE);
        let tail = chunks.remainder();
        let limit = splat::<T, I>(threshold);

        let body: usize = chunks
            .map(|chunk| load::<T, I>(chunk).lanes_lt(limit).count_true())
            .sum();

        body + tail.iter().filter(|&&x| x < threshold).count()
    }

    fn scale_add(&self, a: T, x: &[T], y: &mut [T]) {
        debug_assert_eq!(x.len(), y.len(), "Vectors must have same length");
        let len = x.len().min(y.len());
        let lanes = <T as SimdTraits<I>>::SIZE;
        let (x, y) = (&x[..len], &mut y[..len]);
        let scale = splat::<T, I>(a);

        let mut x_chunks = x.chunks_exact(lanes);
        let mut y_chunks = y.chunks_exact_mut(lanes);
        for (cx, cy) in x_chunks.by_ref().zip(y_chunks.by_ref()) {
            scale
                .lanes_mul(load::<T, I>(cx))
                .lanes_add(load::<T, I>(cy))
                .store(cy);
        }

        for (yi, &xi) in y_chunks.into_remainder().iter_mut().zip(x_chunks.remainder()) {
            *yi = a.lane_mul(xi).lane_add(*yi);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lanewise_core::{Avx, Neon, NoSimd, Sse2};

    #[test]
    fn test_backend_names_and_widths() {
        let avx = LaneBackend::<Avx>::new();
        assert_eq!(ComputePrimitives::<f32>::backend_name(&avx), "avx");
        assert_eq!(ComputePrimitives::<f32>::simd_width(&avx), 8);
        assert_eq!(ComputePrimitives::<i64>::simd_width(&avx), 4);
        assert_eq!(ComputePrimitives::<f64>::simd_width(&LaneBackend::<Neon>::new()), 1);
        assert_eq!(ComputePrimitives::<i32>::simd_width(&LaneBackend::<Sse2>::new()), 4);
    }

    #[test]
    fn test_sum_with_tail() {
        let data: Vec<i32> = (1..=19).collect();
        assert_eq!(LaneBackend::<Avx>::new().sum(&data), 190);
        assert_eq!(LaneBackend::<Sse2>::new().sum(&data), 190);
        assert_eq!(LaneBackend::<NoSimd>::new().sum(&data), 190);
    }

    #[test]
    fn test_integer_sum_wraps() {
        let data = [i32::MAX; 9];
        let expected = data.iter().fold(0i32, |acc, &x| acc.wrapping_add(x));
        assert_eq!(LaneBackend::<Avx>::new().sum(&data), expected);
    }

    #[test]
    fn test_dot_and_squares() {
        let a = [1.0f64, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0f64, 2.0, 2.0, 2.0, 2.0];
        let backend = LaneBackend::<Sse2>::new();
        assert_eq!(backend.dot_product(&a, &b), 30.0);
        assert_eq!(backend.sum_of_squares(&a), 55.0);
    }

    #[test]
    fn test_count_less_than_ignores_nan() {
        let data = [1.0f32, f32::NAN, 3.0, -2.0, 7.0, 0.5, f32::NAN, 2.0, 9.0];
        assert_eq!(LaneBackend::<Avx>::new().count_less_than(&data, 2.5), 4);
    }

    #[test]
    fn test_scale_add() {
        let x: Vec<i64> = (0..7).collect();
        let mut y = vec![1i64; 7];
        LaneBackend::<Avx>::new().scale_add(3, &x, &mut y);
        assert_eq!(y, vec![1, 4, 7, 10, 13, 16, 19]);
    }

    #[test]
    fn test_checked_scalar_backend() {
        assert!(LaneBackend::<NoSimd>::checked().is_ok());
    }
}
