//! Casters and their active casts.
//!
//! A [`Caster`] owns every cast it has in flight, at most one per skill, in
//! insertion order. Three entry points change that set:
//! - [`Caster::try_cast`] runs the precondition pipeline and adds a record
//! - [`Caster::try_interrupt`] / [`Caster::try_cancel`] end a cast early
//! - [`Caster::tick`] advances every record and drops finished cooldowns
//!
//! Hooks receive the caster mutably and may call any of these re-entrantly;
//! the caster addresses records by [`CastHandle`] so that stays sound.

mod interrupt;
mod pipeline;
mod tick;

use core::fmt;
use std::sync::Arc;

use crate::cast::{CastContext, CastHandle, CastRecord, CastSnapshot};
use crate::config::SkillConfig;
use crate::operation::OperationResult;
use crate::skill::{CastFlags, SkillBehavior, SkillDescriptor, SkillId, ops};

/// Identifier of a caster, also used as an interrupt source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CasterId(pub u32);

impl fmt::Display for CasterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "caster#{}", self.0)
    }
}

/// An entity that casts skills.
///
/// `E` is the host's entity data (resource pools, stats, ...). The engine
/// never reads it; skill hooks reach it through their context.
pub struct Caster<E = ()> {
    id: CasterId,
    entity: E,
    casts: Vec<CastRecord<E>>,
    next_handle: u64,
}

impl<E> Caster<E> {
    pub fn new(id: CasterId, entity: E) -> Self {
        Self::with_capacity(id, entity, 0)
    }

    pub fn with_capacity(id: CasterId, entity: E, capacity: usize) -> Self {
        Self {
            id,
            entity,
            casts: Vec::with_capacity(capacity),
            next_handle: 0,
        }
    }

    pub fn from_config(id: CasterId, entity: E, config: &SkillConfig) -> Self {
        Self::with_capacity(id, entity, config.max_active_casts)
    }

    #[inline]
    pub fn id(&self) -> CasterId {
        self.id
    }

    pub fn entity(&self) -> &E {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut E {
        &mut self.entity
    }

    /// Active casts in the order they were accepted.
    pub fn casts(&self) -> &[CastRecord<E>] {
        &self.casts
    }

    pub fn cast_for(&self, skill: SkillId) -> Option<&CastRecord<E>> {
        self.casts.iter().find(|record| record.skill_id() == skill)
    }

    /// Returns true while the skill has a record, cooldown included.
    pub fn is_casting(&self, skill: SkillId) -> bool {
        self.cast_for(skill).is_some()
    }

    /// Copies the HUD-facing view of the skill's active cast, if any.
    pub fn try_get_cast_data(&self, skill: SkillId) -> Option<CastSnapshot> {
        self.cast_for(skill).map(CastRecord::snapshot)
    }

    pub fn snapshots(&self) -> impl Iterator<Item = CastSnapshot> + '_ {
        self.casts.iter().map(CastRecord::snapshot)
    }

    /// Cooldown check of the cast pipeline.
    ///
    /// Permitted when the skill has no cooldown, has no record on this
    /// caster, or its record is not cooling down yet.
    pub fn is_on_cooldown(&self, skill: &SkillDescriptor<E>) -> OperationResult {
        if !skill.has_cooldown() {
            return ops::permitted();
        }
        match self.cast_for(skill.id()) {
            Some(record) if record.is_on_cooldown() => ops::cooldown_not_finished(),
            _ => ops::permitted(),
        }
    }

    // ------------------------------------------------------------------------
    // Record store
    // ------------------------------------------------------------------------

    fn position(&self, handle: CastHandle) -> Option<usize> {
        self.casts.iter().position(|record| record.handle == handle)
    }

    fn position_of(&self, skill: SkillId) -> Option<usize> {
        self.casts
            .iter()
            .position(|record| record.skill_id() == skill)
    }

    fn record_mut(&mut self, handle: CastHandle) -> Option<&mut CastRecord<E>> {
        self.casts.iter_mut().find(|record| record.handle == handle)
    }

    /// Handles of the records matching `predicate`, taken before a phase runs.
    fn handles_where(&self, predicate: impl Fn(&CastRecord<E>) -> bool) -> Vec<CastHandle> {
        self.casts
            .iter()
            .filter(|record| predicate(record))
            .map(|record| record.handle)
            .collect()
    }

    /// Stores a fresh record, replacing a leftover record of the same skill.
    fn register(&mut self, skill: Arc<SkillDescriptor<E>>, flags: CastFlags) -> CastHandle {
        if let Some(index) = self.position_of(skill.id()) {
            let replaced = self.casts.remove(index);
            tracing::debug!(
                caster = %self.id,
                skill = skill.name(),
                handle = %replaced.handle,
                state = %replaced.state,
                "record replaced"
            );
        }

        let handle = CastHandle(self.next_handle);
        self.next_handle += 1;
        self.casts.push(CastRecord::new(handle, skill, flags));
        handle
    }

    /// Runs one hook with a fresh [`CastContext`].
    fn notify(
        &mut self,
        skill: &Arc<SkillDescriptor<E>>,
        flags: CastFlags,
        hook: impl FnOnce(&dyn SkillBehavior<E>, &mut CastContext<'_, E>),
    ) {
        let behavior = Arc::clone(skill.behavior());
        let mut ctx = CastContext::new(self, Arc::clone(skill), flags);
        hook(behavior.as_ref(), &mut ctx);
    }
}

impl<E: Default> Caster<E> {
    pub fn with_id(id: CasterId) -> Self {
        Self::new(id, E::default())
    }
}

impl<E> fmt::Debug for Caster<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Caster")
            .field("id", &self.id)
            .field("casts", &self.casts)
            .finish_non_exhaustive()
    }
}
