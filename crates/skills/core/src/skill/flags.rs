use bitflags::bitflags;

bitflags! {
    /// Overrides applied to the cast pipeline.
    ///
    /// Each `IGNORE_*` flag lets the matching check fail without stopping the
    /// cast. Resource consumption is controlled separately by
    /// `DO_NOT_CONSUME_RESOURCES`: ignoring the cost check still consumes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CastFlags: u8 {
        const IGNORE_AVAILABILITY     = 1 << 0;
        const IGNORE_COSTS            = 1 << 1;
        const IGNORE_COOLDOWN         = 1 << 2;
        const IGNORE_REQUIREMENTS     = 1 << 3;
        const DO_NOT_CONSUME_RESOURCES = 1 << 4;
    }
}

bitflags! {
    /// Overrides applied to interrupt and cancel requests.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct InterruptFlags: u8 {
        const IGNORE_REQUIREMENTS = 1 << 1;
    }
}

/// Who asked for an operation.
///
/// External requests come from players (or anything that expects feedback)
/// and fire failure hooks. Internal requests are programmatic probes and
/// retries; they only get the returned result.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionSource {
    #[default]
    External,
    Internal,
}

impl ActionSource {
    #[inline]
    pub const fn is_internal(self) -> bool {
        matches!(self, ActionSource::Internal)
    }
}
