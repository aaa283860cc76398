//! Compile-time SIMD register resolution
//!
//! This crate maps the scalar kinds `i32`, `i64`, `f32` and `f64` to the
//! register type, mask type and lane count of the instruction set a build
//! targets, and computes the result type of binary operations mixing scalars,
//! registers and masks.
//!
//! # Architecture Overview
//!
//! 1. **Scalars** ([`scalar`]) - the closed set of resolvable kinds and the wider set of lane elements
//! 2. **Instruction sets** ([`isa`]) - ordered per-family tiers and the type-level [`Isa`] markers
//! 3. **Registers** ([`register`], [`batch`]) - what a kind resolves to
//! 4. **Resolution** ([`traits`], [`promote`]) - `SimdType`, `SimdBoolType`, `RevertSimdType`, `SimdReturnType`
//! 5. **Runtime mirror** ([`table`]) - the same decisions as serialisable data
//!
//! # Example
//!
//! ```rust
//! use lanewise_core::{lane_count, NativeIsa, Register, SimdType};
//!
//! fn sum<T>(data: &[T]) -> T
//! where
//!     T: lanewise_core::SimdTraits,
//! {
//!     let lanes = lane_count::<T, NativeIsa>();
//!     let mut acc = <SimdType<T> as Register>::splat(T::zero());
//!     let chunks = data.chunks_exact(lanes);
//!     let tail = chunks.remainder();
//!     for chunk in chunks {
//!         acc = acc.lanes_add(<SimdType<T> as Register>::load(chunk));
//!     }
//!     tail.iter().fold(acc.reduce_add(), |total, &x| total + x)
//! }
//!
//! assert_eq!(sum(&[1i32, 2, 3, 4, 5, 6, 7, 8, 9]), 45);
//! ```

pub mod batch;
pub mod error;
pub mod isa;
pub mod promote;
pub mod register;
pub mod scalar;
pub mod table;
pub mod traits;

pub use error::{Error, Result};

pub use batch::{Batch, BatchBool};
pub use isa::{
    ArmLevel, Avx, InstructionSet, Isa, IsaFeatures, NativeIsa, Neon, Neon64, NoSimd, Sse2,
    X86Level,
};
pub use promote::{is_compatible, Operand, PromotionTarget, SimdReturn, SimdReturnType};
pub use register::{Mask, Register};
pub use scalar::{Element, ElementKind, ScalarKind, SimdScalar};
pub use table::{
    promote, MaskDescriptor, Participant, RegisterDescriptor, Resolution, ResolutionTable,
    Resolved, ResolvedMask, TierReport,
};
pub use traits::{
    lane_count, RevertSimdTraits, RevertSimdType, SimdBoolType, SimdTraits, SimdType,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
