//! Interrupt and cancel requests.
//!
//! Cancelling is interrupting with the caster itself as the source. Either
//! way the record is only marked (`Interrupted` / `Cancelled`); the next tick
//! moves it into cooldown like a natural completion, minus `on_cast_ended`.

use std::sync::Arc;

use super::Caster;
use crate::cast::{CastState, InterruptContext, InterruptSource};
use crate::operation::OperationResult;
use crate::skill::{
    ActionSource, InterruptFlags, SkillBehavior, SkillCatalog, SkillDescriptor, SkillId, ops,
};

impl<E> Caster<E> {
    /// Attempts to end the active cast of `skill` early.
    ///
    /// Fails with [`ops::skill_not_casted`] when the skill has no active cast
    /// (no record, or one that already ended) and with
    /// [`ops::cooldown_not_finished`] when it is already cooling down.
    /// Otherwise the skill decides through `can_be_interrupted`, which
    /// `IGNORE_REQUIREMENTS` overrides.
    pub fn try_interrupt(
        &mut self,
        skill: &Arc<SkillDescriptor<E>>,
        source: InterruptSource,
        flags: InterruptFlags,
        action_source: ActionSource,
    ) -> OperationResult {
        let behavior = Arc::clone(skill.behavior());
        let state = self.cast_for(skill.id()).map(|record| record.state());
        let mut ctx = InterruptContext::new(self, source, Arc::clone(skill), flags);

        let Some(state) = state.filter(|state| !state.is_cast_complete()) else {
            return reject_interrupt(
                behavior.as_ref(),
                &mut ctx,
                ops::skill_not_casted(),
                action_source,
            );
        };
        if state.is_on_cooldown() {
            return reject_interrupt(
                behavior.as_ref(),
                &mut ctx,
                ops::cooldown_not_finished(),
                action_source,
            );
        }

        let permission = behavior.can_be_interrupted(&ctx);
        if permission.is_failure() && !flags.contains(InterruptFlags::IGNORE_REQUIREMENTS) {
            return reject_interrupt(behavior.as_ref(), &mut ctx, permission, action_source);
        }
        // Forced through the flag: report the interruption as permitted.
        let reason = if permission.is_success() {
            permission
        } else {
            ops::permitted()
        };

        let cancellation = ctx.is_cancellation();
        let next = if cancellation {
            CastState::Cancelled
        } else {
            CastState::Interrupted
        };
        if let Some(index) = ctx.caster.position_of(skill.id()) {
            ctx.caster.casts[index].state = next;
        }
        tracing::debug!(
            caster = %ctx.caster.id(),
            skill = skill.name(),
            ?source,
            from = %state,
            to = %next,
            "cast ended early"
        );

        if cancellation {
            behavior.on_cast_cancelled(&mut ctx, reason);
        } else {
            behavior.on_cast_interrupted(&mut ctx, reason);
        }
        reason
    }

    /// Cancels the caster's own cast of `skill`.
    pub fn try_cancel(
        &mut self,
        skill: &Arc<SkillDescriptor<E>>,
        flags: InterruptFlags,
        action_source: ActionSource,
    ) -> OperationResult {
        let source = InterruptSource::Entity(self.id);
        self.try_interrupt(skill, source, flags, action_source)
    }

    /// # Panics
    ///
    /// Panics if the catalog has no such skill.
    pub fn try_interrupt_by_id(
        &mut self,
        catalog: &SkillCatalog<E>,
        skill: SkillId,
        source: InterruptSource,
        flags: InterruptFlags,
        action_source: ActionSource,
    ) -> OperationResult {
        let descriptor = catalog
            .resolve(skill)
            .unwrap_or_else(|err| panic!("{} cannot interrupt: {err}", self.id));
        self.try_interrupt(&descriptor, source, flags, action_source)
    }

    /// # Panics
    ///
    /// Panics if the catalog has no such skill.
    pub fn try_cancel_by_id(
        &mut self,
        catalog: &SkillCatalog<E>,
        skill: SkillId,
        flags: InterruptFlags,
        action_source: ActionSource,
    ) -> OperationResult {
        let descriptor = catalog
            .resolve(skill)
            .unwrap_or_else(|err| panic!("{} cannot cancel: {err}", self.id));
        self.try_cancel(&descriptor, flags, action_source)
    }

    /// Probe used by hosts: would an interrupt from `source` be allowed now?
    ///
    /// Runs the same checks as [`try_interrupt`](Self::try_interrupt) without
    /// touching the record or firing any hook.
    pub fn can_interrupt(
        &mut self,
        skill: &Arc<SkillDescriptor<E>>,
        source: InterruptSource,
        flags: InterruptFlags,
    ) -> OperationResult {
        match self.cast_for(skill.id()).map(|record| record.state()) {
            None => return ops::skill_not_casted(),
            Some(state) if state.is_cast_complete() => return ops::skill_not_casted(),
            Some(state) if state.is_on_cooldown() => return ops::cooldown_not_finished(),
            Some(_) => {}
        }
        if flags.contains(InterruptFlags::IGNORE_REQUIREMENTS) {
            return ops::permitted();
        }
        let behavior = Arc::clone(skill.behavior());
        let ctx = InterruptContext::new(self, source, Arc::clone(skill), flags);
        behavior.can_be_interrupted(&ctx)
    }
}

fn reject_interrupt<E>(
    behavior: &dyn SkillBehavior<E>,
    ctx: &mut InterruptContext<'_, E>,
    reason: OperationResult,
    action_source: ActionSource,
) -> OperationResult {
    tracing::debug!(
        caster = %ctx.caster.id(),
        skill = ctx.skill.name(),
        cancellation = ctx.is_cancellation(),
        %reason,
        "interrupt rejected"
    );
    if action_source.is_internal() {
        return reason;
    }
    if ctx.is_cancellation() {
        behavior.on_cast_cancel_failed(ctx, reason);
    } else {
        behavior.on_cast_interrupt_failed(ctx, reason);
    }
    reason
}
