mod support;

use std::sync::Arc;

use skill_core::{
    ActionSource, CastContext, CastFlags, CastState, Caster, CasterId, InterruptContext,
    InterruptFlags, InterruptSource, OperationResult, SkillBehavior, SkillDescriptor, SkillId,
    ops,
};
use support::{Hook, HookLog, Scripted, channeling_skill, one_time_skill};

fn caster() -> Caster {
    Caster::with_id(CasterId(7))
}

fn channeling_after_one_tick(behavior: Scripted) -> (Caster, Arc<SkillDescriptor>) {
    let skill = channeling_skill(behavior);
    let mut caster = caster();
    caster.try_cast(&skill, CastFlags::empty(), ActionSource::External);
    caster.tick(0.5);
    assert_eq!(
        caster.cast_for(SkillId(2)).unwrap().state(),
        CastState::Channeling
    );
    (caster, skill)
}

#[test]
fn interrupted_channel_cools_down_without_ending() {
    let log = Arc::new(HookLog::default());
    let mut behavior = Scripted::new(&log);
    behavior.interruptible = true;
    let (mut caster, skill) = channeling_after_one_tick(behavior);

    let result = caster.try_interrupt(
        &skill,
        InterruptSource::World,
        InterruptFlags::empty(),
        ActionSource::External,
    );
    assert_eq!(result, ops::permitted());
    assert_eq!(
        caster.cast_for(SkillId(2)).unwrap().state(),
        CastState::Interrupted
    );
    assert_eq!(log.count(|h| *h == Hook::Interrupted(result)), 1);

    caster.tick(0.5);
    let record = caster.cast_for(SkillId(2)).unwrap();
    assert_eq!(record.state(), CastState::Cooldown);
    // Interrupted casts stop channeling immediately.
    assert_eq!(record.channeling_timer(), 0.5);
    assert_eq!(log.count(|h| *h == Hook::Ended), 0);
}

#[test]
fn cancel_uses_cancel_hooks() {
    let log = Arc::new(HookLog::default());
    let mut behavior = Scripted::new(&log);
    behavior.cancellable = true;
    let (mut caster, skill) = channeling_after_one_tick(behavior);

    let result = caster.try_cancel(&skill, InterruptFlags::empty(), ActionSource::External);

    assert_eq!(result, ops::permitted());
    assert_eq!(
        caster.cast_for(SkillId(2)).unwrap().state(),
        CastState::Cancelled
    );
    assert_eq!(log.count(|h| *h == Hook::Cancelled(result)), 1);
    assert_eq!(log.count(|h| matches!(h, Hook::Interrupted(_))), 0);
}

#[test]
fn interrupt_from_another_entity_is_not_a_cancellation() {
    let log = Arc::new(HookLog::default());
    let mut behavior = Scripted::new(&log);
    behavior.cancellable = true;
    let (mut caster, skill) = channeling_after_one_tick(behavior);

    let result = caster.try_interrupt(
        &skill,
        InterruptSource::Entity(CasterId(99)),
        InterruptFlags::empty(),
        ActionSource::External,
    );

    assert_eq!(result, ops::denied());
    assert_eq!(log.count(|h| *h == Hook::InterruptFailed(ops::denied())), 1);
    assert_eq!(log.count(|h| matches!(h, Hook::CancelFailed(_))), 0);
    assert_eq!(
        caster.cast_for(SkillId(2)).unwrap().state(),
        CastState::Channeling
    );
}

#[test]
fn interrupting_missing_cast_reports_not_casted() {
    let log = Arc::new(HookLog::default());
    let skill = one_time_skill(Scripted::new(&log));
    let mut caster = caster();

    let result = caster.try_interrupt(
        &skill,
        InterruptSource::World,
        InterruptFlags::IGNORE_REQUIREMENTS,
        ActionSource::External,
    );

    assert_eq!(result, ops::skill_not_casted());
    assert_eq!(log.all(), vec![Hook::InterruptFailed(ops::skill_not_casted())]);
}

#[test]
fn interrupting_cooldown_reports_cooldown_not_finished() {
    let log = Arc::new(HookLog::default());
    let mut behavior = Scripted::new(&log);
    behavior.cancellable = true;
    let skill = one_time_skill(behavior);
    let mut caster = caster();
    caster.try_cast(&skill, CastFlags::empty(), ActionSource::External);
    caster.tick(1.0);
    log.clear();

    let result = caster.try_cancel(
        &skill,
        InterruptFlags::IGNORE_REQUIREMENTS,
        ActionSource::External,
    );

    assert_eq!(result, ops::cooldown_not_finished());
    assert_eq!(log.all(), vec![Hook::CancelFailed(ops::cooldown_not_finished())]);
    assert_eq!(
        caster.cast_for(SkillId(1)).unwrap().state(),
        CastState::Cooldown
    );
}

#[test]
fn ignore_requirements_forces_the_interrupt() {
    let log = Arc::new(HookLog::default());
    let (mut caster, skill) = channeling_after_one_tick(Scripted::new(&log));

    assert_eq!(
        caster.try_interrupt(
            &skill,
            InterruptSource::World,
            InterruptFlags::empty(),
            ActionSource::Internal,
        ),
        ops::denied()
    );
    let result = caster.try_interrupt(
        &skill,
        InterruptSource::World,
        InterruptFlags::IGNORE_REQUIREMENTS,
        ActionSource::External,
    );

    assert_eq!(result, ops::permitted());
    assert_eq!(
        caster.cast_for(SkillId(2)).unwrap().state(),
        CastState::Interrupted
    );
}

#[test]
fn internal_interrupt_failures_are_silent() {
    let log = Arc::new(HookLog::default());
    let (mut caster, skill) = channeling_after_one_tick(Scripted::new(&log));
    log.clear();

    let internal = caster.try_cancel(&skill, InterruptFlags::empty(), ActionSource::Internal);
    assert!(log.all().is_empty());

    let external = caster.try_cancel(&skill, InterruptFlags::empty(), ActionSource::External);
    assert_eq!(internal, external);
    assert_eq!(log.all(), vec![Hook::CancelFailed(external)]);
}

#[test]
fn can_interrupt_fires_no_hooks() {
    let log = Arc::new(HookLog::default());
    let mut behavior = Scripted::new(&log);
    behavior.interruptible = true;
    let (mut caster, skill) = channeling_after_one_tick(behavior);
    log.clear();

    assert_eq!(
        caster.can_interrupt(&skill, InterruptSource::World, InterruptFlags::empty()),
        ops::permitted()
    );
    assert_eq!(
        caster.can_interrupt(
            &skill,
            InterruptSource::Entity(CasterId(7)),
            InterruptFlags::empty()
        ),
        ops::denied()
    );
    assert!(log.all().is_empty());
    assert_eq!(
        caster.cast_for(SkillId(2)).unwrap().state(),
        CastState::Channeling
    );
}

/// Cancels another skill as soon as its own cast starts.
struct Interrupter {
    victim: Arc<SkillDescriptor>,
    log: Arc<HookLog>,
}

impl SkillBehavior<()> for Interrupter {
    fn on_cast_started(&self, ctx: &mut CastContext<'_, ()>) {
        let result = ctx.caster.try_cancel(
            &self.victim,
            InterruptFlags::IGNORE_REQUIREMENTS,
            ActionSource::Internal,
        );
        self.log.push(Hook::Cancelled(result));
    }
}

#[test]
fn hooks_may_reenter_the_caster() {
    let log = Arc::new(HookLog::default());
    let victim = channeling_skill(Scripted::new(&log));
    let interrupter = Arc::new(
        SkillDescriptor::builder(SkillId(10), "silence")
            .charging_time(1.0)
            .cooldown_time(3.0)
            .behavior(Interrupter {
                victim: Arc::clone(&victim),
                log: Arc::clone(&log),
            })
            .build(),
    );
    let mut caster = caster();

    caster.try_cast(&victim, CastFlags::empty(), ActionSource::External);
    caster.tick(0.5);
    caster.try_cast(&interrupter, CastFlags::empty(), ActionSource::External);
    caster.tick(0.5);
    caster.tick(0.5);

    assert!(log.all().contains(&Hook::Cancelled(ops::permitted())));
    assert_eq!(
        caster.cast_for(SkillId(2)).unwrap().state(),
        CastState::Cooldown
    );
    assert_eq!(log.count(|h| *h == Hook::Ended), 0);
    assert_eq!(
        caster.cast_for(SkillId(10)).unwrap().state(),
        CastState::Cooldown
    );
}

#[test]
fn recast_from_tick_hook_is_rejected() {
    struct Recaster {
        skill: std::sync::OnceLock<Arc<SkillDescriptor>>,
    }

    impl SkillBehavior<()> for Recaster {
        fn on_tick_charging(&self, ctx: &mut CastContext<'_, ()>) {
            // Attempts to replace the record currently being advanced.
            if let Some(skill) = self.skill.get() {
                ctx.caster
                    .try_cast(skill, CastFlags::IGNORE_COOLDOWN, ActionSource::Internal);
            }
        }
    }

    let behavior = Arc::new(Recaster {
        skill: std::sync::OnceLock::new(),
    });
    let skill = Arc::new(
        SkillDescriptor::builder(SkillId(11), "echo")
            .charging_time(1.0)
            .cooldown_time(1.0)
            .shared_behavior(behavior.clone())
            .build(),
    );
    let _ = behavior.skill.set(Arc::clone(&skill));
    let mut caster = caster();

    caster.try_cast(&skill, CastFlags::empty(), ActionSource::External);
    caster.tick(0.5);

    // The running record refuses replacement, so the tick continues normally.
    let record = caster.cast_for(SkillId(11)).unwrap();
    assert_eq!(record.state(), CastState::Charging);
    assert_eq!(record.charging_timer(), 0.5);
    assert_eq!(caster.casts().len(), 1);
}

#[test]
fn ended_cast_cannot_be_ended_again() {
    let log = Arc::new(HookLog::default());
    let mut behavior = Scripted::new(&log);
    behavior.interruptible = true;
    behavior.cancellable = true;
    let (mut caster, skill) = channeling_after_one_tick(behavior);
    log.clear();

    let cancelled = caster.try_cancel(&skill, InterruptFlags::empty(), ActionSource::External);
    let first = caster.try_interrupt(
        &skill,
        InterruptSource::World,
        InterruptFlags::empty(),
        ActionSource::External,
    );
    let second = caster.try_interrupt(
        &skill,
        InterruptSource::World,
        InterruptFlags::IGNORE_REQUIREMENTS,
        ActionSource::External,
    );

    assert_eq!(cancelled, ops::permitted());
    assert_eq!(first, ops::skill_not_casted());
    assert_eq!(second, ops::skill_not_casted());
    assert_eq!(
        log.all(),
        vec![
            Hook::Cancelled(ops::permitted()),
            Hook::InterruptFailed(ops::skill_not_casted()),
            Hook::InterruptFailed(ops::skill_not_casted()),
        ]
    );
    assert_eq!(
        caster.cast_for(SkillId(2)).unwrap().state(),
        CastState::Cancelled
    );
    assert_eq!(
        caster.can_interrupt(&skill, InterruptSource::World, InterruptFlags::empty()),
        ops::skill_not_casted()
    );

    caster.tick(0.5);
    assert_eq!(
        caster.cast_for(SkillId(2)).unwrap().state(),
        CastState::Cooldown
    );
    assert_eq!(log.count(|h| matches!(h, Hook::Cancelled(_))), 1);
}

#[test]
fn end_hook_cannot_cancel_its_own_cast() {
    struct CancelOnEnd {
        skill: std::sync::OnceLock<Arc<SkillDescriptor>>,
        log: Arc<HookLog>,
    }

    impl SkillBehavior<()> for CancelOnEnd {
        fn can_be_cancelled(&self, _ctx: &InterruptContext<'_, ()>) -> OperationResult {
            ops::permitted()
        }

        fn on_cast_ended(&self, ctx: &mut CastContext<'_, ()>) {
            self.log.push(Hook::Ended);
            if let Some(skill) = self.skill.get() {
                ctx.caster
                    .try_cancel(skill, InterruptFlags::empty(), ActionSource::External);
            }
        }

        fn on_cast_cancelled(&self, _ctx: &mut InterruptContext<'_, ()>, reason: OperationResult) {
            self.log.push(Hook::Cancelled(reason));
        }

        fn on_cast_cancel_failed(
            &self,
            _ctx: &mut InterruptContext<'_, ()>,
            reason: OperationResult,
        ) {
            self.log.push(Hook::CancelFailed(reason));
        }
    }

    let log = Arc::new(HookLog::default());
    let behavior = Arc::new(CancelOnEnd {
        skill: std::sync::OnceLock::new(),
        log: Arc::clone(&log),
    });
    let skill = Arc::new(
        SkillDescriptor::builder(SkillId(12), "parting_shot")
            .charging_time(1.0)
            .cooldown_time(1.0)
            .shared_behavior(behavior.clone())
            .build(),
    );
    let _ = behavior.skill.set(Arc::clone(&skill));
    let mut caster = caster();

    caster.try_cast(&skill, CastFlags::empty(), ActionSource::External);
    caster.tick(1.0);

    assert_eq!(
        log.all(),
        vec![Hook::Ended, Hook::CancelFailed(ops::skill_not_casted())]
    );
    assert_eq!(
        caster.cast_for(SkillId(12)).unwrap().state(),
        CastState::Cooldown
    );
}
