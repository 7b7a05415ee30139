//! Content factory for building skill catalogs from data files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use skill_core::{SkillCatalog, SkillConfig};

use crate::behaviors::BehaviorRegistry;
use crate::loaders::{ConfigLoader, LoadResult, SkillLoader, SkillSpec};

/// Content factory that loads all skill content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── skills.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
    }

    /// Load engine configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<SkillConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load skill definitions from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<Vec<SkillSpec>> {
        SkillLoader::load(&self.data_dir.join("skills.ron"))
    }

    /// Load `skills.ron` and bind every spec to its named behavior.
    pub fn load_catalog<E>(&self, behaviors: &BehaviorRegistry<E>) -> LoadResult<SkillCatalog<E>> {
        let specs = self.load_skills()?;
        Self::build_catalog(&specs, behaviors)
    }

    /// Builds a catalog from already-parsed specs.
    ///
    /// Fails on the first spec naming an unregistered behavior or reusing an id.
    pub fn build_catalog<E>(
        specs: &[SkillSpec],
        behaviors: &BehaviorRegistry<E>,
    ) -> LoadResult<SkillCatalog<E>> {
        let mut catalog = SkillCatalog::new();

        for spec in specs {
            let behavior = behaviors.get(&spec.behavior).with_context(|| {
                format!(
                    "skill '{}' ({}) uses unknown behavior '{}'",
                    spec.name, spec.id, spec.behavior
                )
            })?;
            let descriptor = spec.to_descriptor(Arc::clone(behavior))?;
            catalog
                .register(descriptor)
                .with_context(|| format!("failed to register skill '{}'", spec.name))?;
        }

        tracing::debug!(skills = catalog.len(), "built skill catalog");
        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
