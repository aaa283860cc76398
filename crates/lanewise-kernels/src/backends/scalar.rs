//! Scalar backend implementation
//!
//! Uses the default trait methods for every scalar kind, independent of the
//! instruction set the build resolves to. Serves as the reference the lane
//! backend is checked against.

use lanewise_core::SimdScalar;

use crate::traits::ComputePrimitives;

/// Scalar backend - works for all scalar kinds
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

impl<T: SimdScalar> ComputePrimitives<T> for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }
}
