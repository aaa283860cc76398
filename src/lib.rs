//! SIMD register resolution and type promotion for generic vector kernels
//!
//! This crate re-exports the workspace crates:
//!
//! - [`core`]: scalar kinds, instruction-set tiers, register types, the
//!   resolution table (`SimdType`, `SimdBoolType`, `RevertSimdType`) and the
//!   promotion rule (`SimdReturnType`), plus their runtime mirror
//! - [`kernels`]: compute primitives written once against the resolved types
//!
//! # Example
//!
//! ```rust
//! use lanewise::prelude::*;
//!
//! // f32 resolves to eight lanes under Avx, four under Sse2
//! assert_eq!(lane_count::<f32, Avx>(), 8);
//! assert_eq!(lane_count::<f32, Sse2>(), 4);
//!
//! // Mixing a double with a float yields the float register
//! let _: SimdReturnType<f64, f32, Avx> = Batch::<f32, 8>::from_array([0.0; 8]);
//!
//! let data = vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
//! assert_eq!(LaneBackend::<Avx>::new().sum(&data), 45.0);
//! ```

pub use lanewise_core as core;
pub use lanewise_kernels as kernels;

pub use lanewise_core::{
    is_compatible, lane_count, promote, Batch, BatchBool, Element, ElementKind, Error,
    InstructionSet, Isa, Mask, NativeIsa, Participant, Register, RegisterDescriptor,
    ResolutionTable, Result, RevertSimdType, ScalarKind, SimdBoolType, SimdReturnType,
    SimdScalar, SimdTraits, SimdType, TierReport,
};
pub use lanewise_kernels::{native_backend, ComputePrimitives, LaneBackend, ScalarBackend};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use lanewise_core::{
        lane_count, Avx, Batch, BatchBool, Isa, Mask, NativeIsa, Neon, Neon64, NoSimd, Register,
        SimdBoolType, SimdReturnType, SimdScalar, SimdTraits, SimdType, Sse2,
    };

    pub use lanewise_core::Error;
    pub use lanewise_core::Result;

    pub use lanewise_kernels::prelude::*;
}
