//! Generic compute primitives trait
//!
//! Default methods are plain scalar loops. Backends override them with
//! register-wide versions.

use lanewise_core::SimdScalar;

/// Low-level operations written once for every scalar kind.
///
/// Integer results wrap on overflow, matching lane arithmetic.
pub trait ComputePrimitives<T: SimdScalar>: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Number of elements processed per step
    fn simd_width(&self) -> usize {
        1
    }

    /// Sum all elements in a slice
    fn sum(&self, data: &[T]) -> T {
        data.iter().fold(T::zero(), |acc, &x| acc.lane_add(x))
    }

    /// Dot product over the common prefix of `a` and `b`
    fn dot_product(&self, a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len(), "Vectors must have same length");
        a.iter()
            .zip(b.iter())
            .fold(T::zero(), |acc, (&x, &y)| acc.lane_add(x.lane_mul(y)))
    }

    /// Compute sum of squares
    fn sum_of_squares(&self, data: &[T]) -> T {
        data.iter()
            .fold(T::zero(), |acc, &x| acc.lane_add(x.lane_mul(x)))
    }

    /// Number of elements strictly below `threshold` (NaN never counts)
    fn count_less_than(&self, data: &[T], threshold: T) -> usize {
        data.iter().filter(|&&x| x < threshold).count()
    }

    /// `y[i] = a * x[i] + y[i]` over the common prefix of `x` and `y`
    fn scale_add(&self, a: T, x: &[T], y: &mut [T]) {
        debug_assert_eq!(x.len(), y.len(), "Vectors must have same length");
        for (yi, &xi) in y.iter_mut().zip(x.iter()) {
            *yi = a.lane_mul(xi).lane_add(*yi);
        }
    }
}
