//! Data-driven skill definitions and loaders.
//!
//! Skill timings live in RON files and engine tuning in TOML. Behavior is code,
//! so data files refer to it by name and a [`BehaviorRegistry`] supplies the
//! implementation when the catalog is built:
//! - skill definitions (`skills.ron`)
//! - engine configuration (`config.toml`)
//! - named behaviors, including a few generic built-ins

pub mod behaviors;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use behaviors::{BehaviorRegistry, Cancellable, Interruptible, Passive, Reporting};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, SkillFile, SkillLoader, SkillSpec};
