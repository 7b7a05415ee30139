//! Shared fixtures: a scripted skill behavior that records every hook call.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use skill_core::{
    CastContext, InterruptContext, OperationResult, SkillBehavior, SkillDescriptor, SkillId, ops,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hook {
    Consumed,
    Started,
    TickCharging,
    TickChanneling,
    Ended,
    Failed(OperationResult),
    Interrupted(OperationResult),
    InterruptFailed(OperationResult),
    Cancelled(OperationResult),
    CancelFailed(OperationResult),
}

/// Hook calls in the order they happened.
#[derive(Default)]
pub struct HookLog(Mutex<Vec<Hook>>);

impl HookLog {
    pub fn push(&self, hook: Hook) {
        self.0.lock().unwrap().push(hook);
    }

    pub fn all(&self) -> Vec<Hook> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, matches: impl Fn(&Hook) -> bool) -> usize {
        self.0.lock().unwrap().iter().filter(|hook| matches(hook)).count()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

/// Behavior whose checks answer with fixed results.
pub struct Scripted {
    pub log: Arc<HookLog>,
    pub available: OperationResult,
    pub resources: OperationResult,
    pub attempt: OperationResult,
    pub interruptible: bool,
    pub cancellable: bool,
}

impl Scripted {
    pub fn new(log: &Arc<HookLog>) -> Self {
        Self {
            log: Arc::clone(log),
            available: ops::permitted(),
            resources: ops::permitted(),
            attempt: ops::permitted(),
            interruptible: false,
            cancellable: false,
        }
    }
}

impl<E> SkillBehavior<E> for Scripted {
    fn is_available(&self, _ctx: &CastContext<'_, E>) -> OperationResult {
        self.available
    }

    fn has_enough_resources(&self, _ctx: &CastContext<'_, E>) -> OperationResult {
        self.resources
    }

    fn check_attempt_success(&self, _ctx: &CastContext<'_, E>) -> OperationResult {
        self.attempt
    }

    fn can_be_interrupted(&self, ctx: &InterruptContext<'_, E>) -> OperationResult {
        if ctx.is_cancellation() {
            return self.can_be_cancelled(ctx);
        }
        if self.interruptible {
            ops::permitted()
        } else {
            ops::denied()
        }
    }

    fn can_be_cancelled(&self, _ctx: &InterruptContext<'_, E>) -> OperationResult {
        if self.cancellable {
            ops::permitted()
        } else {
            ops::denied()
        }
    }

    fn consume_resources(&self, _ctx: &mut CastContext<'_, E>) {
        self.log.push(Hook::Consumed);
    }

    fn on_cast_started(&self, _ctx: &mut CastContext<'_, E>) {
        self.log.push(Hook::Started);
    }

    fn on_tick_charging(&self, _ctx: &mut CastContext<'_, E>) {
        self.log.push(Hook::TickCharging);
    }

    fn on_tick_channeling(&self, _ctx: &mut CastContext<'_, E>) {
        self.log.push(Hook::TickChanneling);
    }

    fn on_cast_ended(&self, _ctx: &mut CastContext<'_, E>) {
        self.log.push(Hook::Ended);
    }

    fn on_cast_failed(&self, _ctx: &mut CastContext<'_, E>, reason: OperationResult) {
        self.log.push(Hook::Failed(reason));
    }

    fn on_cast_interrupted(&self, _ctx: &mut InterruptContext<'_, E>, reason: OperationResult) {
        self.log.push(Hook::Interrupted(reason));
    }

    fn on_cast_interrupt_failed(
        &self,
        _ctx: &mut InterruptContext<'_, E>,
        reason: OperationResult,
    ) {
        self.log.push(Hook::InterruptFailed(reason));
    }

    fn on_cast_cancelled(&self, _ctx: &mut InterruptContext<'_, E>, reason: OperationResult) {
        self.log.push(Hook::Cancelled(reason));
    }

    fn on_cast_cancel_failed(&self, _ctx: &mut InterruptContext<'_, E>, reason: OperationResult) {
        self.log.push(Hook::CancelFailed(reason));
    }
}

/// Plain skill: 1s charge, 5s cooldown.
pub fn one_time_skill(behavior: Scripted) -> Arc<SkillDescriptor> {
    Arc::new(
        SkillDescriptor::builder(SkillId(1), "one-time")
            .charging_time(1.0)
            .cooldown_time(5.0)
            .behavior(behavior)
            .build(),
    )
}

/// Channeling skill: instant charge, 2s channel, 1s cooldown.
pub fn channeling_skill(behavior: Scripted) -> Arc<SkillDescriptor> {
    Arc::new(
        SkillDescriptor::builder(SkillId(2), "channeling")
            .channeling(2.0)
            .cooldown_time(1.0)
            .behavior(behavior)
            .build(),
    )
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}
