//! Instruction-set tiers
//!
//! Each architecture family exposes an ordered tier ([`X86Level`],
//! [`ArmLevel`]). The pair is collapsed into the [`InstructionSet`] the build
//! targets, which fixes the lane count of every scalar kind. The same table is
//! available at the type level through the [`Isa`] marker types, and
//! [`NativeIsa`] names the marker for the current build.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

use crate::batch::Batch;
use crate::error::{Error, Result};
use crate::register::Register;
use crate::scalar::ScalarKind;

/// x86 SIMD tier, ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum X86Level {
    None,
    Sse2,
    Avx,
}

impl X86Level {
    /// Tier enabled by the target features of this build
    pub const fn compiled() -> Self {
        if cfg!(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "avx"
        )) {
            Self::Avx
        } else if cfg!(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "sse2"
        )) {
            Self::Sse2
        } else {
            Self::None
        }
    }
}

/// ARM SIMD tier, ordered. `Neon64` adds double-precision lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmLevel {
    None,
    Neon,
    Neon64,
}

impl ArmLevel {
    /// Tier enabled by the target features of this build
    pub const fn compiled() -> Self {
        if cfg!(all(target_arch = "aarch64", target_feature = "neon")) {
            Self::Neon64
        } else if cfg!(all(target_arch = "arm", target_feature = "neon")) {
            Self::Neon
        } else {
            Self::None
        }
    }
}

/// The instruction set a build resolves registers for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstructionSet {
    Scalar,
    Sse2,
    Avx,
    Neon,
    Neon64,
}

impl InstructionSet {
    pub const ALL: [InstructionSet; 5] = [
        InstructionSet::Scalar,
        InstructionSet::Sse2,
        InstructionSet::Avx,
        InstructionSet::Neon,
        InstructionSet::Neon64,
    ];

    /// Collapse per-family tiers into one instruction set.
    ///
    /// x86 wins over ARM; ARM single-precision NEON leaves doubles scalar.
    pub const fn select(x86: X86Level, arm: ArmLevel) -> Self {
        if x86 as u8 >= X86Level::Avx as u8 {
            Self::Avx
        } else if x86 as u8 >= X86Level::Sse2 as u8 {
            Self::Sse2
        } else if arm as u8 >= ArmLevel::Neon64 as u8 {
            Self::Neon64
        } else if arm as u8 >= ArmLevel::Neon as u8 {
            Self::Neon
        } else {
            Self::Scalar
        }
    }

    /// Instruction set of this build
    pub const fn compiled() -> Self {
        if cfg!(feature = "force-scalar") {
            Self::Scalar
        } else {
            Self::select(X86Level::compiled(), ArmLevel::compiled())
        }
    }

    /// Best instruction set supported by the running CPU
    pub fn detect() -> Self {
        IsaFeatures::detect().instruction_set()
    }

    /// Lane count of `kind` under this instruction set; 1 means scalar fallback
    pub const fn lanes(self, kind: ScalarKind) -> usize {
        match (self, kind) {
            (Self::Scalar, _) => 1,
            (Self::Avx, ScalarKind::Int32 | ScalarKind::Float32) => 8,
            (Self::Avx, ScalarKind::Int64 | ScalarKind::Float64) => 4,
            (Self::Sse2 | Self::Neon64, ScalarKind::Int32 | ScalarKind::Float32) => 4,
            (Self::Sse2 | Self::Neon64, ScalarKind::Int64 | ScalarKind::Float64) => 2,
            (Self::Neon, ScalarKind::Int32 | ScalarKind::Float32) => 4,
            (Self::Neon, ScalarKind::Int64) => 2,
            (Self::Neon, ScalarKind::Float64) => 1,
        }
    }

    /// Register width in bits, 0 for the scalar fallback
    pub const fn register_bits(self) -> usize {
        match self {
            Self::Scalar => 0,
            Self::Sse2 | Self::Neon | Self::Neon64 => 128,
            Self::Avx => 256,
        }
    }

    /// CPU features this instruction set needs at runtime
    pub fn required_features(self) -> IsaFeatures {
        match self {
            Self::Scalar => IsaFeatures::empty(),
            Self::Sse2 => IsaFeatures::SSE2,
            Self::Avx => IsaFeatures::SSE2 | IsaFeatures::AVX,
            Self::Neon => IsaFeatures::NEON,
            Self::Neon64 => IsaFeatures::NEON | IsaFeatures::NEON64,
        }
    }

    /// Check that the running CPU can execute code built for this set
    pub fn ensure_supported(self) -> Result<()> {
        let available = IsaFeatures::detect();
        let missing = self.required_features() - available;
        if missing.is_empty() {
            return Ok(());
        }
        log::warn!("Instruction set {self} requested but CPU lacks {missing:?}");
        Err(Error::FeatureNotAvailable(format!(
            "{self} requires {missing:?}"
        )))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Sse2 => "sse2",
            Self::Avx => "avx",
            Self::Neon => "neon",
            Self::Neon64 => "neon64",
        }
    }
}

impl Display for InstructionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// SIMD capabilities of a CPU
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IsaFeatures: u8 {
        const SSE2 = 0b0001;
        const AVX = 0b0010;
        const NEON = 0b0100;
        /// Double-precision NEON lanes
        const NEON64 = 0b1000;
    }
}

impl IsaFeatures {
    /// Query the running CPU
    pub fn detect() -> Self {
        #[allow(unused_mut)]
        let mut features = Self::empty();

        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            if std::arch::is_x86_feature_detected!("sse2") {
                features |= Self::SSE2;
            }
            if std::arch::is_x86_feature_detected!("avx") {
                features |= Self::AVX;
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            if std::arch::is_aarch64_feature_detected!("neon") {
                features |= Self::NEON | Self::NEON64;
            }
        }

        // No stable runtime query on 32-bit ARM
        #[cfg(all(target_arch = "arm", target_feature = "neon"))]
        {
            features |= Self::NEON;
        }

        log::debug!("Detected SIMD features: {features:?}");
        features
    }

    pub fn x86_level(self) -> X86Level {
        if self.contains(Self::SSE2 | Self::AVX) {
            X86Level::Avx
        } else if self.contains(Self::SSE2) {
            X86Level::Sse2
        } else {
            X86Level::None
        }
    }

    pub fn arm_level(self) -> ArmLevel {
        if self.contains(Self::NEON | Self::NEON64) {
            ArmLevel::Neon64
        } else if self.contains(Self::NEON) {
            ArmLevel::Neon
        } else {
            ArmLevel::None
        }
    }

    pub fn instruction_set(self) -> InstructionSet {
        InstructionSet::select(self.x86_level(), self.arm_level())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Type-level register table for one instruction set.
///
/// Sealed; the markers below are the only implementors.
pub trait Isa: Copy + Debug + Default + Send + Sync + 'static + sealed::Sealed {
    const SET: InstructionSet;

    type Int32: Register<Scalar = i32>;
    type Int64: Register<Scalar = i64>;
    type Float32: Register<Scalar = f32>;
    type Float64: Register<Scalar = f64>;
}

macro_rules! isa_marker {
    (
        $(#[$meta:meta])*
        $name:ident => $set:ident {
            i32: $i32:ty, i64: $i64:ty, f32: $f32:ty, f64: $f64:ty $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl Isa for $name {
            const SET: InstructionSet = InstructionSet::$set;

            type Int32 = $i32;
            type Int64 = $i64;
            type Float32 = $f32;
            type Float64 = $f64;
        }
    };
}

isa_marker! {
    /// No SIMD: every kind resolves to itself
    NoSimd => Scalar { i32: i32, i64: i64, f32: f32, f64: f64 }
}

isa_marker! {
    /// 128-bit x86 registers
    Sse2 => Sse2 { i32: Batch<i32, 4>, i64: Batch<i64, 2>, f32: Batch<f32, 4>, f64: Batch<f64, 2> }
}

isa_marker! {
    /// 256-bit x86 registers
    Avx => Avx { i32: Batch<i32, 8>, i64: Batch<i64, 4>, f32: Batch<f32, 8>, f64: Batch<f64, 4> }
}

isa_marker! {
    /// 32-bit ARM NEON; doubles stay scalar
    Neon => Neon { i32: Batch<i32, 4>, i64: Batch<i64, 2>, f32: Batch<f32, 4>, f64: f64 }
}

isa_marker! {
    /// AArch64 NEON with double-precision lanes
    Neon64 => Neon64 { i32: Batch<i32, 4>, i64: Batch<i64, 2>, f32: Batch<f32, 4>, f64: Batch<f64, 2> }
}

/// Marker for the instruction set this build targets
#[cfg(feature = "force-scalar")]
pub type NativeIsa = NoSimd;

#[cfg(all(
    not(feature = "force-scalar"),
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "avx"
))]
pub type NativeIsa = Avx;

#[cfg(all(
    not(feature = "force-scalar"),
    any(target_arch = "x86", target_arch = "x86_64"),
    not(target_feature = "avx"),
    target_feature = "sse2"
))]
pub type NativeIsa = Sse2;

#[cfg(all(
    not(feature = "force-scalar"),
    target_arch = "aarch64",
    target_feature = "neon"
))]
pub type NativeIsa = Neon64;

#[cfg(all(
    not(feature = "force-scalar"),
    target_arch = "arm",
    target_feature = "neon"
))]
pub type NativeIsa = Neon;

#[cfg(all(
    not(feature = "force-scalar"),
    not(any(
        all(
            any(target_arch = "x86", target_arch = "x86_64"),
            any(target_feature = "avx", target_feature = "sse2")
        ),
        all(any(target_arch = "aarch64", target_arch = "arm"), target_feature = "neon")
    ))
))]
pub type NativeIsa = NoSimd;
