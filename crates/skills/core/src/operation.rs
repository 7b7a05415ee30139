//! Two-valued operation results.
//!
//! An [`OperationResult`] is either a success or a failure, tagged with the
//! system that produced it and a reason code local to that system. Callers
//! branch on results by value, so two results with the same kind, system and
//! reason are interchangeable no matter where they were built.

use core::fmt;

/// Identifies the subsystem that produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemId(pub u16);

/// Reason code, meaningful only together with its [`SystemId`] and [`ResultKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReasonCode(pub u16);

/// Whether an operation went through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ResultKind {
    Success,
    Failure,
}

/// Outcome of every public engine operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationResult {
    pub kind: ResultKind,
    pub system: SystemId,
    pub reason: ReasonCode,
}

impl OperationResult {
    /// Generic "allowed" code shared by every system.
    pub const SUCCESS_PERMITTED: ReasonCode = ReasonCode(0x0000);

    /// Generic "not allowed" code shared by every system.
    pub const ERROR_DENIED: ReasonCode = ReasonCode(0x0000);

    pub const fn success(system: SystemId, reason: ReasonCode) -> Self {
        Self {
            kind: ResultKind::Success,
            system,
            reason,
        }
    }

    pub const fn failure(system: SystemId, reason: ReasonCode) -> Self {
        Self {
            kind: ResultKind::Failure,
            system,
            reason,
        }
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.kind, ResultKind::Success)
    }

    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self.kind, ResultKind::Failure)
    }

    /// Returns true when both results carry the same kind, system and reason.
    ///
    /// Reason codes overlap between successes and failures (a cast-started
    /// success and an on-cooldown failure share code `0x0001`), so the kind
    /// takes part in the comparison.
    #[inline]
    pub fn is_similar(&self, other: &Self) -> bool {
        self == other
    }
}

impl From<OperationResult> for bool {
    fn from(result: OperationResult) -> Self {
        result.is_success()
    }
}

impl fmt::Display for OperationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(0x{:04x}:0x{:04x})",
            self.kind, self.system.0, self.reason.0
        )
    }
}
