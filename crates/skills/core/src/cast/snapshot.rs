//! Copied, HUD-facing view of a cast.
//!
//! Sentinel conventions (consumed by UI code, keep them stable):
//! - a phase the skill does not have reports `-1` for its time values
//! - progress of a phase the skill does not have reports `1`
//! - progress of an infinite channel reports `-1`

use super::record::{CastHandle, CastRecord};
use super::state::CastState;
use crate::skill::{CastFlags, SkillId};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastSnapshot {
    pub handle: CastHandle,
    pub skill: SkillId,
    pub flags: CastFlags,
    pub state: CastState,

    pub charging_timer: f32,
    pub channeling_timer: f32,
    pub cooldown_timer: f32,

    pub charging_progress: f32,
    pub channeling_progress: f32,
    pub cooldown_progress: f32,

    /// Total charging time, or `-1` without charging.
    pub charging_time: f32,
    /// Charging time left, or `-1` without charging.
    pub charging_time_left: f32,
    /// Time spent channeling so far, or `-1` for skills that do not channel.
    pub channeling_time: f32,
    /// Channel time left, or `-1` for skills that do not channel.
    /// Infinite channels report a non-positive value.
    pub channeling_time_left: f32,
    /// Total cooldown time, or `-1` without cooldown.
    pub cooldown_time: f32,
    /// Cooldown time left, or `-1` without cooldown.
    pub cooldown_time_left: f32,
}

impl CastSnapshot {
    pub(crate) fn of<E>(record: &CastRecord<E>) -> Self {
        let skill = record.skill();
        let charging = skill.charging_time();
        let cooldown = skill.cooldown_time();
        let channel = skill.channel_duration();

        Self {
            handle: record.handle(),
            skill: skill.id(),
            flags: record.flags(),
            state: record.state(),

            charging_timer: record.charging_timer(),
            channeling_timer: record.channeling_timer(),
            cooldown_timer: record.cooldown_timer(),

            charging_progress: record.charging_progress(),
            channeling_progress: record.channeling_progress(),
            cooldown_progress: record.cooldown_progress(),

            charging_time: if charging > 0.0 { charging } else { -1.0 },
            charging_time_left: if charging > 0.0 {
                charging - record.charging_timer()
            } else {
                -1.0
            },
            channeling_time: channel.map_or(-1.0, |_| record.channeling_timer()),
            channeling_time_left: channel
                .map_or(-1.0, |duration| duration - record.channeling_timer()),
            cooldown_time: if cooldown > 0.0 { cooldown } else { -1.0 },
            cooldown_time_left: if cooldown > 0.0 {
                cooldown - record.cooldown_timer()
            } else {
                -1.0
            },
        }
    }
}
