//! Contexts handed to skill hooks.
//!
//! Contexts live for exactly one hook call. They borrow the caster mutably so
//! callbacks can react on the spot: spend resources on the caster's entity,
//! cast a follow-up skill, cancel another cast.

use std::sync::Arc;

use crate::caster::{Caster, CasterId};
use crate::skill::{CastFlags, InterruptFlags, SkillDescriptor, SkillId};

/// Context of a cast attempt or of a tick callback for an active cast.
pub struct CastContext<'a, E> {
    /// The caster that owns (or is about to own) the cast.
    pub caster: &'a mut Caster<E>,

    /// Skill being cast.
    pub skill: Arc<SkillDescriptor<E>>,

    /// Flags of the attempt; for tick callbacks, the flags the cast was
    /// accepted with.
    pub flags: CastFlags,
}

impl<'a, E> CastContext<'a, E> {
    pub fn new(caster: &'a mut Caster<E>, skill: Arc<SkillDescriptor<E>>, flags: CastFlags) -> Self {
        Self {
            caster,
            skill,
            flags,
        }
    }

    pub fn skill_id(&self) -> SkillId {
        self.skill.id()
    }

    /// Host data of the caster (stats, resource pools, ...).
    pub fn entity(&self) -> &E {
        self.caster.entity()
    }

    pub fn entity_mut(&mut self) -> &mut E {
        self.caster.entity_mut()
    }
}

/// Origin of an interrupt request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterruptSource {
    /// The world itself (stun fields, scripted events).
    World,

    /// Another caster, or the casting caster itself for a cancellation.
    Entity(CasterId),
}

/// Context of an interrupt or cancel request.
pub struct InterruptContext<'a, E> {
    pub caster: &'a mut Caster<E>,

    /// Who asked for the interruption.
    pub source: InterruptSource,

    pub skill: Arc<SkillDescriptor<E>>,

    pub flags: InterruptFlags,
}

impl<'a, E> InterruptContext<'a, E> {
    pub fn new(
        caster: &'a mut Caster<E>,
        source: InterruptSource,
        skill: Arc<SkillDescriptor<E>>,
        flags: InterruptFlags,
    ) -> Self {
        Self {
            caster,
            source,
            skill,
            flags,
        }
    }

    /// A request sourced by the casting caster itself is a cancellation.
    pub fn is_cancellation(&self) -> bool {
        self.source == InterruptSource::Entity(self.caster.id())
    }

    pub fn skill_id(&self) -> SkillId {
        self.skill.id()
    }

    pub fn entity(&self) -> &E {
        self.caster.entity()
    }

    pub fn entity_mut(&mut self) -> &mut E {
        self.caster.entity_mut()
    }
}
