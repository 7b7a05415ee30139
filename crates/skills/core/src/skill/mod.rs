//! Static skill data and per-skill behavior.
//!
//! - [`SkillDescriptor`]: immutable timing parameters plus the behavior hooks
//! - [`SkillBehavior`]: capability surface consulted by the caster
//! - [`SkillCatalog`]: id-keyed lookup of shared descriptors
//! - [`ops`]: the standard result vocabulary of the skill system
mod behavior;
mod catalog;
mod descriptor;
mod flags;
pub mod ops;

pub use behavior::SkillBehavior;
pub use catalog::{CatalogError, SkillCatalog};
pub use descriptor::{SkillDescriptor, SkillDescriptorBuilder, SkillId, SkillKind};
pub use flags::{ActionSource, CastFlags, InterruptFlags};
