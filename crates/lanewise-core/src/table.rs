//! Runtime mirror of the resolution table
//!
//! Everything the type-level layer decides at build time, described as plain
//! data: which register each scalar kind resolves to under an
//! [`InstructionSet`], and what a binary promotion between two operands
//! produces. Useful for diagnostics, reports and code generators that cannot
//! name the types directly. Rejections become [`Error`] values.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::error::{Error, Result};
use crate::isa::InstructionSet;
use crate::scalar::{ElementKind, ScalarKind};

/// A (scalar kind, lane count) register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegisterDescriptor {
    pub kind: ScalarKind,
    pub lanes: usize,
}

impl RegisterDescriptor {
    pub const fn new(kind: ScalarKind, lanes: usize) -> Self {
        Self { kind, lanes }
    }

    /// Mask paired with this register
    pub const fn mask(self) -> MaskDescriptor {
        MaskDescriptor::new(self.kind, self.lanes)
    }

    pub const fn bits(self) -> usize {
        self.kind.size_bytes() * 8 * self.lanes
    }
}

impl Display for RegisterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "batch<{}, {}>", self.kind, self.lanes)
    }
}

/// Boolean-lane counterpart of a [`RegisterDescriptor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaskDescriptor {
    pub kind: ScalarKind,
    pub lanes: usize,
}

impl MaskDescriptor {
    pub const fn new(kind: ScalarKind, lanes: usize) -> Self {
        Self { kind, lanes }
    }
}

impl Display for MaskDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "batch_bool<{}, {}>", self.kind, self.lanes)
    }
}

/// Forward resolution of one scalar kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolved {
    /// No hardware support: the kind maps to itself
    Scalar(ScalarKind),
    Vector(RegisterDescriptor),
}

impl Resolved {
    pub const fn kind(self) -> ScalarKind {
        match self {
            Self::Scalar(kind) => kind,
            Self::Vector(desc) => desc.kind,
        }
    }

    pub const fn lanes(self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Vector(desc) => desc.lanes,
        }
    }

    pub const fn mask(self) -> ResolvedMask {
        match self {
            Self::Scalar(_) => ResolvedMask::Bool,
            Self::Vector(desc) => ResolvedMask::Mask(desc.mask()),
        }
    }

    pub const fn participant(self) -> Participant {
        match self {
            Self::Scalar(kind) => Participant::Scalar(kind.element()),
            Self::Vector(desc) => Participant::Vector(desc),
        }
    }
}

/// Mask side of a [`Resolved`] entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedMask {
    Bool,
    Mask(MaskDescriptor),
}

impl ResolvedMask {
    pub const fn lanes(self) -> usize {
        match self {
            Self::Bool => 1,
            Self::Mask(desc) => desc.lanes,
        }
    }
}

/// One row of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub kind: ScalarKind,
    pub register: Resolved,
    pub mask: ResolvedMask,
    pub lanes: usize,
}

impl Resolution {
    fn new(set: InstructionSet, kind: ScalarKind) -> Self {
        let lanes = set.lanes(kind);
        let register = if lanes == 1 {
            Resolved::Scalar(kind)
        } else {
            Resolved::Vector(RegisterDescriptor::new(kind, lanes))
        };
        Self {
            kind,
            register,
            mask: register.mask(),
            lanes,
        }
    }
}

/// Resolution of every scalar kind under one instruction set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionTable {
    set: InstructionSet,
    entries: [Resolution; 4],
}

impl ResolutionTable {
    pub fn for_set(set: InstructionSet) -> Self {
        Self {
            set,
            entries: ScalarKind::ALL.map(|kind| Resolution::new(set, kind)),
        }
    }

    /// Table of the instruction set this build targets
    pub fn compiled() -> Self {
        Self::for_set(InstructionSet::compiled())
    }

    pub fn set(&self) -> InstructionSet {
        self.set
    }

    pub fn entries(&self) -> &[Resolution] {
        &self.entries
    }

    pub fn entry(&self, kind: ScalarKind) -> &Resolution {
        &self.entries[kind as usize]
    }

    pub fn resolve(&self, kind: ScalarKind) -> Resolved {
        self.entry(kind).register
    }

    /// Resolve any element kind; kinds outside the closed set are rejected
    pub fn resolve_element(&self, kind: ElementKind) -> Result<Resolved> {
        let scalar = ScalarKind::try_from(kind)?;
        Ok(self.resolve(scalar))
    }

    pub fn mask(&self, kind: ScalarKind) -> ResolvedMask {
        self.entry(kind).mask
    }

    pub fn lanes(&self, kind: ScalarKind) -> usize {
        self.entry(kind).lanes
    }

    /// Scalar kind a register was built from
    pub fn scalar_of(&self, desc: RegisterDescriptor) -> ScalarKind {
        desc.kind
    }

    /// Whether `desc` is exactly what this table resolves its kind to
    pub fn is_native(&self, desc: RegisterDescriptor) -> bool {
        self.resolve(desc.kind) == Resolved::Vector(desc)
    }
}

/// Runtime tag of one operand of a binary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Participant {
    Scalar(ElementKind),
    Vector(RegisterDescriptor),
    Mask(MaskDescriptor),
}

impl Participant {
    /// Lane type the compatibility predicate looks at
    pub const fn element(self) -> ElementKind {
        match self {
            Self::Scalar(kind) => kind,
            Self::Vector(desc) => desc.kind.element(),
            Self::Mask(desc) => desc.kind.element(),
        }
    }
}

impl Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => Display::fmt(kind, f),
            Self::Vector(desc) => Display::fmt(desc, f),
            Self::Mask(desc) => Display::fmt(desc, f),
        }
    }
}

/// Result of `lhs op rhs` under `table`.
///
/// Same rules as [`SimdReturnType`](crate::SimdReturnType): the right operand
/// decides, scalars on the right resolve through the table, registers and
/// masks on the right keep their lane count.
pub fn promote(table: &ResolutionTable, lhs: Participant, rhs: Participant) -> Result<Participant> {
    if !lhs.element().is_compatible(rhs.element()) {
        return Err(Error::incompatible(lhs, rhs));
    }

    match (lhs, rhs) {
        (Participant::Scalar(_), Participant::Scalar(kind)) => {
            table.resolve_element(kind).map(Resolved::participant)
        }
        (Participant::Scalar(_), Participant::Vector(desc))
        | (Participant::Vector(_), Participant::Vector(desc)) => Ok(Participant::Vector(desc)),
        (Participant::Scalar(_), Participant::Mask(desc))
        | (Participant::Vector(_), Participant::Mask(desc))
        | (Participant::Mask(_), Participant::Mask(desc)) => Ok(Participant::Mask(desc)),
        _ => Err(Error::incompatible(lhs, rhs)),
    }
}

/// What the build targets versus what the CPU offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierReport {
    pub compiled: InstructionSet,
    pub detected: InstructionSet,
    pub table: ResolutionTable,
}

impl TierReport {
    pub fn collect() -> Self {
        let report = Self {
            compiled: InstructionSet::compiled(),
            detected: InstructionSet::detect(),
            table: ResolutionTable::compiled(),
        };
        if report.is_underutilized() {
            log::info!(
                "Built for {} but CPU supports {}; some kinds are left with fewer lanes",
                report.compiled,
                report.detected
            );
        }
        report
    }

    /// Some scalar kind would get more lanes from the CPU than from the build
    pub fn is_underutilized(&self) -> bool {
        ScalarKind::ALL
            .iter()
            .any(|&kind| self.detected.lanes(kind) > self.compiled.lanes(kind))
    }
}
