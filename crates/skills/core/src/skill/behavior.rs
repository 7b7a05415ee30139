//! Capability surface of a skill.
//!
//! The caster never decides on its own whether a skill is available, can be
//! paid for, or may be interrupted: it asks the skill's [`SkillBehavior`].
//! Every method has a default, so concrete skills override only what they
//! care about.

use crate::cast::{CastContext, InterruptContext};
use crate::operation::OperationResult;
use crate::skill::ops;

/// Per-skill checks and lifecycle callbacks.
///
/// Checks take a shared context and must not mutate anything. Callbacks take
/// a mutable context and may call back into the caster (cast another skill,
/// cancel one, spend resources on the caster's entity).
///
/// # Defaults
///
/// - availability, resources and attempt success: permitted
/// - interruption: denied, unless the request is a cancellation, which is
///   delegated to [`can_be_cancelled`](Self::can_be_cancelled)
/// - cancellation: denied
/// - every callback: no-op
pub trait SkillBehavior<E>: Send + Sync {
    fn is_available(&self, _ctx: &CastContext<'_, E>) -> OperationResult {
        ops::permitted()
    }

    /// Cost check. The engine never looks at resource quantities itself.
    fn has_enough_resources(&self, _ctx: &CastContext<'_, E>) -> OperationResult {
        ops::permitted()
    }

    /// Final gate, evaluated after resources were consumed so chance-based
    /// skills pay even when the roll fails.
    fn check_attempt_success(&self, _ctx: &CastContext<'_, E>) -> OperationResult {
        ops::permitted()
    }

    fn can_be_interrupted(&self, ctx: &InterruptContext<'_, E>) -> OperationResult {
        if ctx.is_cancellation() {
            self.can_be_cancelled(ctx)
        } else {
            ops::denied()
        }
    }

    fn can_be_cancelled(&self, _ctx: &InterruptContext<'_, E>) -> OperationResult {
        ops::denied()
    }

    fn consume_resources(&self, _ctx: &mut CastContext<'_, E>) {}

    /// Fired when charging finishes, not when the cast is accepted.
    fn on_cast_started(&self, _ctx: &mut CastContext<'_, E>) {}

    fn on_tick_charging(&self, _ctx: &mut CastContext<'_, E>) {}

    /// Only called for channeling skills.
    fn on_tick_channeling(&self, _ctx: &mut CastContext<'_, E>) {}

    /// Fired only for casts that completed naturally.
    fn on_cast_ended(&self, _ctx: &mut CastContext<'_, E>) {}

    fn on_cast_failed(&self, _ctx: &mut CastContext<'_, E>, _reason: OperationResult) {}

    fn on_cast_interrupted(&self, _ctx: &mut InterruptContext<'_, E>, _reason: OperationResult) {}

    fn on_cast_interrupt_failed(
        &self,
        _ctx: &mut InterruptContext<'_, E>,
        _reason: OperationResult,
    ) {
    }

    fn on_cast_cancelled(&self, _ctx: &mut InterruptContext<'_, E>, _reason: OperationResult) {}

    fn on_cast_cancel_failed(&self, _ctx: &mut InterruptContext<'_, E>, _reason: OperationResult) {
    }
}

/// Behavior used when a descriptor is built without one.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct DefaultBehavior;

impl<E> SkillBehavior<E> for DefaultBehavior {}
