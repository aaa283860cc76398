//! Backend implementations
//!
//! Concrete zero-sized backend types with compile-time dispatch. No Box, no
//! dyn.

pub mod lane;
pub mod scalar;

pub use lane::LaneBackend;
pub use scalar::ScalarBackend;

use lanewise_core::{Isa, NativeIsa, SimdTraits};

use crate::traits::ComputePrimitives;

/// Backend selection trait for automatic backend choice
pub trait SelectBackend: SimdTraits {
    /// The backend type to use for this scalar kind
    type Backend: ComputePrimitives<Self>;

    /// Get an instance of the backend
    fn backend() -> Self::Backend;
}

// Every kind resolves through the build's register table; kinds without
// hardware lanes get a one-lane LaneBackend, which is the scalar loop.
impl<T: SimdTraits> SelectBackend for T {
    type Backend = LaneBackend<NativeIsa>;

    fn backend() -> Self::Backend {
        LaneBackend::new()
    }
}

/// Lane backend for the instruction set this build targets
pub fn native_backend() -> LaneBackend<NativeIsa> {
    tracing::debug!(isa = %NativeIsa::SET, "selected native lane backend");
    LaneBackend::new()
}

/// Name of the backend [`native_backend`] returns
pub fn native_backend_name() -> &'static str {
    NativeIsa::SET.name()
}
