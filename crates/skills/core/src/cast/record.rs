use core::fmt;
use std::sync::Arc;

use super::snapshot::CastSnapshot;
use super::state::CastState;
use crate::skill::{CastFlags, SkillDescriptor, SkillId};

/// Caster-local handle of a cast record.
///
/// Handles are never reused by a caster, so a handle taken before a hook runs
/// either still names the same cast afterwards or names nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastHandle(pub u64);

impl fmt::Display for CastHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cast#{}", self.0)
    }
}

/// Mutable state of one in-flight cast, owned by its caster.
///
/// Timers only grow while the record lives. Records are mutated in place in
/// the caster's store; callers only ever see `&CastRecord` or a
/// [`CastSnapshot`] copy.
pub struct CastRecord<E = ()> {
    pub(crate) handle: CastHandle,
    pub(crate) skill: Arc<SkillDescriptor<E>>,
    pub(crate) flags: CastFlags,
    pub(crate) charging_timer: f32,
    pub(crate) channeling_timer: f32,
    pub(crate) cooldown_timer: f32,
    pub(crate) state: CastState,
}

impl<E> CastRecord<E> {
    pub(crate) fn new(handle: CastHandle, skill: Arc<SkillDescriptor<E>>, flags: CastFlags) -> Self {
        Self {
            handle,
            skill,
            flags,
            charging_timer: 0.0,
            channeling_timer: 0.0,
            cooldown_timer: 0.0,
            state: CastState::Charging,
        }
    }

    pub fn handle(&self) -> CastHandle {
        self.handle
    }

    pub fn skill(&self) -> &Arc<SkillDescriptor<E>> {
        &self.skill
    }

    pub fn skill_id(&self) -> SkillId {
        self.skill.id()
    }

    /// Flags the cast was accepted with.
    pub fn flags(&self) -> CastFlags {
        self.flags
    }

    pub fn state(&self) -> CastState {
        self.state
    }

    pub fn charging_timer(&self) -> f32 {
        self.charging_timer
    }

    pub fn channeling_timer(&self) -> f32 {
        self.channeling_timer
    }

    pub fn cooldown_timer(&self) -> f32 {
        self.cooldown_timer
    }

    pub fn is_charging_complete(&self) -> bool {
        self.state.is_charging_complete()
    }

    pub fn is_cast_complete(&self) -> bool {
        self.state.is_cast_complete()
    }

    pub fn is_on_cooldown(&self) -> bool {
        self.state.is_on_cooldown()
    }

    /// Normalized charging progress in `0..=1`; `1` for skills without charging.
    pub fn charging_progress(&self) -> f32 {
        let total = self.skill.charging_time();
        if total <= 0.0 {
            return 1.0;
        }
        (self.charging_timer / total).clamp(0.0, 1.0)
    }

    /// Normalized channeling progress in `0..=1`.
    ///
    /// `1` for skills that do not channel, `-1` for infinite channels.
    pub fn channeling_progress(&self) -> f32 {
        match self.skill.channel_duration() {
            None => 1.0,
            Some(duration) if duration <= 0.0 => -1.0,
            Some(duration) => (self.channeling_timer / duration).clamp(0.0, 1.0),
        }
    }

    /// Normalized cooldown progress in `0..=1`; `1` for skills without cooldown.
    pub fn cooldown_progress(&self) -> f32 {
        let total = self.skill.cooldown_time();
        if total <= 0.0 {
            return 1.0;
        }
        (self.cooldown_timer / total).clamp(0.0, 1.0)
    }

    /// Copies the HUD-facing view of this record.
    pub fn snapshot(&self) -> CastSnapshot {
        CastSnapshot::of(self)
    }
}

impl<E> fmt::Debug for CastRecord<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CastRecord")
            .field("handle", &self.handle)
            .field("skill", &self.skill.id())
            .field("flags", &self.flags)
            .field("state", &self.state)
            .field("charging_timer", &self.charging_timer)
            .field("channeling_timer", &self.channeling_timer)
            .field("cooldown_timer", &self.cooldown_timer)
            .finish()
    }
}
