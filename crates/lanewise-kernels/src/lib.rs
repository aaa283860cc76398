//! Generic compute primitives over resolved SIMD registers
//!
//! Each primitive is written once, generically over the scalar kind and the
//! instruction set, using `SimdType<T, I>` from `lanewise-core`. The same code
//! runs eight `f32` lanes under `Avx`, four under `Sse2` or `Neon`, and one
//! under `NoSimd`.
//!
//! # Example
//!
//! ```rust
//! use lanewise_kernels::{native_backend, ComputePrimitives, ScalarBackend};
//!
//! let data: Vec<i64> = (1..=100).collect();
//! let backend = native_backend();
//! assert_eq!(backend.sum(&data), 5050);
//! assert_eq!(backend.sum(&data), ScalarBackend::new().sum(&data));
//! ```

pub mod backends;
pub mod traits;

pub use backends::{native_backend, native_backend_name, LaneBackend, ScalarBackend, SelectBackend};
pub use traits::ComputePrimitives;

/// Create a scalar backend (always available)
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        native_backend, scalar_backend, ComputePrimitives, LaneBackend, ScalarBackend,
        SelectBackend,
    };
}
