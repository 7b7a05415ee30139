//! Skill casting rules shared across hosts.
//!
//! `skill-core` decides whether a cast may begin, tracks every cast a
//! [`Caster`] has in flight through charging, channeling, completion and
//! cooldown, and resolves interrupt/cancel requests. All progression is driven
//! by [`Caster::tick`], called once per frame by an external loop.
//!
//! Every public operation answers with an [`OperationResult`]; the standard
//! values live in [`skill::ops`]. Per-skill behavior (availability, costs,
//! lifecycle callbacks) plugs in through [`SkillBehavior`].
pub mod cast;
pub mod caster;
pub mod config;
pub mod error;
pub mod operation;
pub mod skill;

pub use cast::{
    CastContext, CastHandle, CastRecord, CastSnapshot, CastState, InterruptContext,
    InterruptSource,
};
pub use caster::{Caster, CasterId};
pub use config::{ConfigError, SkillConfig};
pub use error::{ErrorSeverity, SkillError};
pub use operation::{OperationResult, ReasonCode, ResultKind, SystemId};
pub use skill::{
    ActionSource, CastFlags, CatalogError, InterruptFlags, SkillBehavior, SkillCatalog,
    SkillDescriptor, SkillDescriptorBuilder, SkillId, SkillKind, ops,
};
