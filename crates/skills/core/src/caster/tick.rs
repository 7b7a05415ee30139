//! Per-frame advancement of active casts.
//!
//! Four phases run in order over the whole record store, and each sees the
//! transitions made by the earlier ones in the same tick:
//! 1. charging: accumulate, then start the cast once charging time is reached
//! 2. channeling: accumulate, then complete finite channels
//! 3. completion: report natural completions, then enter cooldown (or drop
//!    the record when the skill has no cooldown)
//! 4. cooldown: accumulate, then drop records whose cooldown finished
//!
//! A record that enters cooldown during phase 3 starts accumulating cooldown
//! time on the next tick.

use std::sync::Arc;

use super::Caster;
use crate::cast::{CastHandle, CastState};

impl<E> Caster<E> {
    /// Advances every active cast by `delta_time` seconds.
    ///
    /// # Panics
    ///
    /// Panics if `delta_time` is negative or NaN.
    pub fn tick(&mut self, delta_time: f32) {
        assert!(
            delta_time >= 0.0,
            "{}: tick delta must be a non-negative number of seconds (got {delta_time})",
            self.id
        );

        self.tick_charging(delta_time);
        self.tick_channeling(delta_time);
        let entered_cooldown = self.tick_completion();
        self.tick_cooldown(delta_time, &entered_cooldown);
    }

    fn tick_charging(&mut self, delta_time: f32) {
        for handle in self.handles_where(|record| record.state == CastState::Charging) {
            let Some(record) = self.record_mut(handle) else {
                continue;
            };
            if record.state != CastState::Charging {
                continue;
            }
            record.charging_timer += delta_time;
            let (skill, flags, elapsed) =
                (Arc::clone(&record.skill), record.flags, record.charging_timer);
            tracing::trace!(caster = %self.id, skill = skill.name(), elapsed, "charging");

            self.notify(&skill, flags, |behavior, ctx| behavior.on_tick_charging(ctx));

            let Some(record) = self.record_mut(handle) else {
                tracing::warn!(caster = %self.id, skill = skill.name(), %handle, "record removed while charging");
                continue;
            };
            if record.state != CastState::Charging || record.charging_timer < skill.charging_time()
            {
                continue;
            }
            let next = if skill.is_channeling() {
                CastState::Channeling
            } else {
                CastState::Complete
            };
            record.state = next;
            tracing::debug!(caster = %self.id, skill = skill.name(), to = %next, "cast started");

            self.notify(&skill, flags, |behavior, ctx| behavior.on_cast_started(ctx));
        }
    }

    fn tick_channeling(&mut self, delta_time: f32) {
        let channeling = self.handles_where(|record| {
            record.state == CastState::Channeling && record.skill.is_channeling()
        });
        for handle in channeling {
            let Some(record) = self.record_mut(handle) else {
                continue;
            };
            if record.state != CastState::Channeling {
                continue;
            }
            record.channeling_timer += delta_time;
            let (skill, flags) = (Arc::clone(&record.skill), record.flags);

            self.notify(&skill, flags, |behavior, ctx| behavior.on_tick_channeling(ctx));

            let Some(record) = self.record_mut(handle) else {
                tracing::warn!(caster = %self.id, skill = skill.name(), %handle, "record removed while channeling");
                continue;
            };
            let finished = match skill.channel_duration() {
                Some(duration) if duration > 0.0 => record.channeling_timer >= duration,
                _ => false,
            };
            if record.state == CastState::Channeling && finished {
                record.state = CastState::Complete;
                tracing::debug!(caster = %self.id, skill = skill.name(), "channel finished");
            }
        }
    }

    /// Returns the handles that entered cooldown during this phase.
    fn tick_completion(&mut self) -> Vec<CastHandle> {
        let mut entered_cooldown = Vec::new();

        for handle in self.handles_where(|record| record.state.is_cast_complete()) {
            let Some(index) = self.position(handle) else {
                continue;
            };
            let record = &self.casts[index];
            if !record.state.is_cast_complete() {
                continue;
            }
            let (skill, flags, state) = (Arc::clone(&record.skill), record.flags, record.state);

            if state == CastState::Complete {
                self.notify(&skill, flags, |behavior, ctx| behavior.on_cast_ended(ctx));
            }

            let Some(index) = self.position(handle) else {
                tracing::warn!(caster = %self.id, skill = skill.name(), %handle, "record removed while completing");
                continue;
            };
            if skill.has_cooldown() {
                self.casts[index].state = CastState::Cooldown;
                entered_cooldown.push(handle);
                tracing::debug!(caster = %self.id, skill = skill.name(), from = %state, "cooldown started");
            } else {
                self.casts.remove(index);
                tracing::debug!(caster = %self.id, skill = skill.name(), from = %state, "cast removed, no cooldown");
            }
        }

        entered_cooldown
    }

    /// Walks the store back to front so removals keep earlier indices valid.
    fn tick_cooldown(&mut self, delta_time: f32, entered_cooldown: &[CastHandle]) {
        for index in (0..self.casts.len()).rev() {
            let record = &mut self.casts[index];
            if record.state != CastState::Cooldown || entered_cooldown.contains(&record.handle) {
                continue;
            }
            record.cooldown_timer += delta_time;
            if record.cooldown_timer >= record.skill.cooldown_time() {
                let record = self.casts.remove(index);
                tracing::debug!(caster = %self.id, skill = record.skill.name(), "cooldown finished");
            }
        }
    }
}
