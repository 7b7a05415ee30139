//! Engine configuration loader.

use std::path::Path;

use skill_core::SkillConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a [`SkillConfig`] from a TOML file.
    ///
    /// Missing keys fall back to the defaults.
    pub fn load(path: &Path) -> LoadResult<SkillConfig> {
        let content = read_file(path)?;
        Self::from_str(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_str(content: &str) -> LoadResult<SkillConfig> {
        let config: SkillConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;

        Ok(config)
    }

    /// Configuration shipped with the crate in `data/config.toml`.
    pub fn embedded() -> LoadResult<SkillConfig> {
        Self::from_str(include_str!("../../data/config.toml"))
    }
}
