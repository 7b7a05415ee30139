//! Skill definition loader.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::ensure;
use serde::{Deserialize, Serialize};
use skill_core::{SkillBehavior, SkillDescriptor, SkillId};

use crate::loaders::{LoadResult, read_file};

/// One skill as written in a RON data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSpec {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub charging_time: f32,
    #[serde(default)]
    pub cooldown_time: f32,
    /// `None` for a plain skill; `Some(0.0)` (or less) for an infinite channel.
    #[serde(default)]
    pub channel_duration: Option<f32>,
    /// Name looked up in a [`BehaviorRegistry`](crate::BehaviorRegistry).
    pub behavior: String,
}

impl SkillSpec {
    pub fn skill_id(&self) -> SkillId {
        SkillId(self.id)
    }

    /// Rejects timings the descriptor builder would refuse.
    pub fn validate(&self) -> LoadResult<()> {
        ensure!(
            self.charging_time.is_finite() && self.charging_time >= 0.0,
            "skill '{}' ({}): charging_time must be finite and non-negative, got {}",
            self.name,
            self.id,
            self.charging_time
        );
        ensure!(
            self.cooldown_time.is_finite() && self.cooldown_time >= 0.0,
            "skill '{}' ({}): cooldown_time must be finite and non-negative, got {}",
            self.name,
            self.id,
            self.cooldown_time
        );
        if let Some(duration) = self.channel_duration {
            ensure!(
                duration.is_finite(),
                "skill '{}' ({}): channel_duration must be finite, got {}",
                self.name,
                self.id,
                duration
            );
        }
        Ok(())
    }

    /// Builds the descriptor for this spec around `behavior`.
    pub fn to_descriptor<E>(
        &self,
        behavior: Arc<dyn SkillBehavior<E>>,
    ) -> LoadResult<SkillDescriptor<E>> {
        self.validate()?;

        let mut builder = SkillDescriptor::builder(self.skill_id(), self.name.clone())
            .charging_time(self.charging_time)
            .cooldown_time(self.cooldown_time)
            .shared_behavior(behavior);
        if let Some(duration) = self.channel_duration {
            builder = builder.channeling(duration);
        }
        Ok(builder.build())
    }
}

/// Skill file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillFile {
    pub skills: Vec<SkillSpec>,
}

/// Loader for skill definitions from RON files.
pub struct SkillLoader;

impl SkillLoader {
    /// Load skill definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<SkillSpec>> {
        let content = read_file(path)?;
        Self::from_str(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse skill definitions from RON text.
    ///
    /// Every spec is validated and ids must be unique within the file.
    pub fn from_str(content: &str) -> LoadResult<Vec<SkillSpec>> {
        let file: SkillFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for spec in &file.skills {
            spec.validate()?;
            ensure!(
                seen.insert(spec.id),
                "duplicate skill id {} ('{}')",
                spec.id,
                spec.name
            );
        }

        Ok(file.skills)
    }

    /// Skill definitions shipped with the crate in `data/skills.ron`.
    pub fn embedded() -> LoadResult<Vec<SkillSpec>> {
        Self::from_str(include_str!("../../data/skills.ron"))
    }
}
