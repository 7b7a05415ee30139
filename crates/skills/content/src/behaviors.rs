//! Named skill behaviors.

use std::collections::BTreeMap;
use std::sync::Arc;

use skill_core::{CastContext, InterruptContext, OperationResult, SkillBehavior, ops};

/// Behavior with every check permitted and no side effects.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passive;

impl<E> SkillBehavior<E> for Passive {}

/// Behavior that accepts every interrupt and cancel request.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interruptible;

impl<E> SkillBehavior<E> for Interruptible {
    fn can_be_interrupted(&self, _ctx: &InterruptContext<'_, E>) -> OperationResult {
        ops::permitted()
    }

    fn can_be_cancelled(&self, _ctx: &InterruptContext<'_, E>) -> OperationResult {
        ops::permitted()
    }
}

/// Behavior that logs cast rejections, calling out the ones caused by an
/// unfinished cooldown.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reporting;

impl<E> SkillBehavior<E> for Reporting {
    fn on_cast_failed(&self, ctx: &mut CastContext<'_, E>, reason: OperationResult) {
        report_failure(ctx, reason);
    }
}

/// Behavior the caster may cancel but nothing else may interrupt.
///
/// Rejected casts are logged like [`Reporting`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Cancellable;

impl<E> SkillBehavior<E> for Cancellable {
    fn can_be_cancelled(&self, _ctx: &InterruptContext<'_, E>) -> OperationResult {
        ops::permitted()
    }

    fn on_cast_failed(&self, ctx: &mut CastContext<'_, E>, reason: OperationResult) {
        report_failure(ctx, reason);
    }
}

fn report_failure<E>(ctx: &CastContext<'_, E>, reason: OperationResult) {
    if reason.is_similar(&ops::cooldown_not_finished()) {
        tracing::info!(
            caster = %ctx.caster.id(),
            skill = %ctx.skill_id(),
            "skill is still on cooldown"
        );
    } else {
        tracing::debug!(
            caster = %ctx.caster.id(),
            skill = %ctx.skill_id(),
            %reason,
            "cast failed"
        );
    }
}

/// Registry mapping behavior names used in data files to implementations.
///
/// Implementations are shared: every skill naming the same behavior holds
/// the same `Arc`.
pub struct BehaviorRegistry<E = ()> {
    behaviors: BTreeMap<String, Arc<dyn SkillBehavior<E>>>,
}

impl<E> BehaviorRegistry<E> {
    /// Names of the behaviors registered by [`with_builtins`](Self::with_builtins).
    pub const PASSIVE: &'static str = "passive";
    pub const INTERRUPTIBLE: &'static str = "interruptible";
    pub const CANCELLABLE: &'static str = "cancellable";
    pub const REPORTING: &'static str = "reporting";

    pub fn new() -> Self {
        Self {
            behaviors: BTreeMap::new(),
        }
    }

    /// Registry preloaded with the built-in behaviors.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.insert(Self::PASSIVE, Passive);
        registry.insert(Self::INTERRUPTIBLE, Interruptible);
        registry.insert(Self::CANCELLABLE, Cancellable);
        registry.insert(Self::REPORTING, Reporting);
        registry
    }

    /// Registers `behavior` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, behavior: impl SkillBehavior<E> + 'static) {
        self.insert_shared(name, Arc::new(behavior));
    }

    pub fn insert_shared(&mut self, name: impl Into<String>, behavior: Arc<dyn SkillBehavior<E>>) {
        let name = name.into();
        if self.behaviors.insert(name.clone(), behavior).is_some() {
            tracing::debug!(behavior = %name, "behavior replaced");
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn SkillBehavior<E>>> {
        self.behaviors.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.behaviors.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.behaviors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }
}

impl<E> Default for BehaviorRegistry<E> {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl<E> std::fmt::Debug for BehaviorRegistry<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BehaviorRegistry")
            .field("names", &self.behaviors.keys().collect::<Vec<_>>())
            .finish()
    }
}
