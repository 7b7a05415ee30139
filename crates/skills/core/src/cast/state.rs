/// Lifecycle state of a cast.
///
/// The declaration order is the lifecycle order and the engine relies on it:
/// `state > Charging` means "charging finished", and everything from
/// `Complete` through `Cancelled` is a completion state waiting to enter
/// cooldown.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum CastState {
    Charging = 1,
    Channeling = 2,
    Complete = 3,
    Interrupted = 4,
    Cancelled = 5,
    Cooldown = 6,
}

impl CastState {
    #[inline]
    pub fn is_charging_complete(self) -> bool {
        self > CastState::Charging
    }

    /// Finished one way or another, but not cooling down yet.
    #[inline]
    pub fn is_cast_complete(self) -> bool {
        matches!(
            self,
            CastState::Complete | CastState::Interrupted | CastState::Cancelled
        )
    }

    #[inline]
    pub fn is_on_cooldown(self) -> bool {
        self == CastState::Cooldown
    }
}
