//! Cast precondition pipeline.
//!
//! Checks run in a fixed order and the first failure stops the attempt,
//! unless the matching ignore flag is set:
//! 1. availability (`IGNORE_AVAILABILITY`)
//! 2. cooldown (`IGNORE_COOLDOWN`)
//! 3. one active cast per skill (never ignored)
//! 4. resources (`IGNORE_COSTS`)
//! 5. resource consumption, skipped only with `DO_NOT_CONSUME_RESOURCES`
//! 6. attempt success (`IGNORE_REQUIREMENTS`)
//!
//! Accepting a cast does not fire `on_cast_started`; that happens when
//! charging finishes during [`Caster::tick`].

use std::sync::Arc;

use super::Caster;
use crate::cast::CastContext;
use crate::operation::OperationResult;
use crate::skill::{
    ActionSource, CastFlags, SkillBehavior, SkillCatalog, SkillDescriptor, SkillId, ops,
};

impl<E> Caster<E> {
    /// Attempts to start casting `skill`.
    ///
    /// Returns [`ops::casted`] when a new record was stored, otherwise the
    /// result of the first failing check. External attempts also report the
    /// failure through `on_cast_failed`.
    pub fn try_cast(
        &mut self,
        skill: &Arc<SkillDescriptor<E>>,
        flags: CastFlags,
        source: ActionSource,
    ) -> OperationResult {
        let behavior = Arc::clone(skill.behavior());
        let mut ctx = CastContext::new(self, Arc::clone(skill), flags);

        let available = behavior.is_available(&ctx);
        if available.is_failure() && !flags.contains(CastFlags::IGNORE_AVAILABILITY) {
            return reject_cast(behavior.as_ref(), &mut ctx, available, source);
        }

        let cooldown = ctx.caster.is_on_cooldown(skill);
        if cooldown.is_failure() && !flags.contains(CastFlags::IGNORE_COOLDOWN) {
            return reject_cast(behavior.as_ref(), &mut ctx, cooldown, source);
        }

        // A cooling record may be replaced (IGNORE_COOLDOWN), a running one may not.
        let running = ctx
            .caster
            .cast_for(skill.id())
            .is_some_and(|record| !record.is_on_cooldown());
        if running {
            return reject_cast(
                behavior.as_ref(),
                &mut ctx,
                ops::skill_already_active(),
                source,
            );
        }

        let resources = behavior.has_enough_resources(&ctx);
        if resources.is_failure() && !flags.contains(CastFlags::IGNORE_COSTS) {
            return reject_cast(behavior.as_ref(), &mut ctx, resources, source);
        }

        if !flags.contains(CastFlags::DO_NOT_CONSUME_RESOURCES) {
            behavior.consume_resources(&mut ctx);
        }

        let attempt = behavior.check_attempt_success(&ctx);
        if attempt.is_failure() && !flags.contains(CastFlags::IGNORE_REQUIREMENTS) {
            return reject_cast(behavior.as_ref(), &mut ctx, attempt, source);
        }
        drop(ctx);

        let handle = self.register(Arc::clone(skill), flags);
        tracing::debug!(
            caster = %self.id,
            skill = skill.name(),
            %handle,
            ?flags,
            "cast accepted"
        );
        ops::casted()
    }

    /// Resolves `skill` in `catalog` and casts it.
    ///
    /// # Panics
    ///
    /// Panics if the catalog has no such skill; ids handed to casters are
    /// expected to come from the same catalog.
    pub fn try_cast_by_id(
        &mut self,
        catalog: &SkillCatalog<E>,
        skill: SkillId,
        flags: CastFlags,
        source: ActionSource,
    ) -> OperationResult {
        let descriptor = catalog
            .resolve(skill)
            .unwrap_or_else(|err| panic!("{} cannot cast: {err}", self.id));
        self.try_cast(&descriptor, flags, source)
    }
}

fn reject_cast<E>(
    behavior: &dyn SkillBehavior<E>,
    ctx: &mut CastContext<'_, E>,
    reason: OperationResult,
    source: ActionSource,
) -> OperationResult {
    tracing::debug!(
        caster = %ctx.caster.id(),
        skill = ctx.skill.name(),
        %reason,
        %source,
        "cast rejected"
    );
    if !source.is_internal() {
        behavior.on_cast_failed(ctx, reason);
    }
    reason
}
