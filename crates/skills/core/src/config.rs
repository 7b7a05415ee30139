use crate::error::{ErrorSeverity, SkillError};

/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkillConfig {
    /// Simulation step in seconds used by fixed-step drivers.
    pub fixed_step: f32,

    /// Upper bound on simulation steps consumed from a single frame.
    /// Frame time beyond this is dropped instead of spiraling.
    pub max_steps_per_frame: u32,

    /// Expected number of simultaneous casts per caster, used to size the
    /// record store up front.
    pub max_active_casts: usize,
}

impl SkillConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FIXED_STEP: f32 = 1.0 / 60.0;
    pub const DEFAULT_MAX_STEPS_PER_FRAME: u32 = 8;
    pub const DEFAULT_MAX_ACTIVE_CASTS: usize = 16;

    pub fn new() -> Self {
        Self {
            fixed_step: Self::DEFAULT_FIXED_STEP,
            max_steps_per_frame: Self::DEFAULT_MAX_STEPS_PER_FRAME,
            max_active_casts: Self::DEFAULT_MAX_ACTIVE_CASTS,
        }
    }

    pub fn with_fixed_step(fixed_step: f32) -> Self {
        Self {
            fixed_step,
            ..Self::new()
        }
    }

    /// Checks that the configuration can drive a simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.fixed_step.is_finite() || self.fixed_step <= 0.0 {
            return Err(ConfigError::InvalidFixedStep(self.fixed_step));
        }
        if self.max_steps_per_frame == 0 {
            return Err(ConfigError::ZeroStepsPerFrame);
        }
        Ok(())
    }
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors raised by [`SkillConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("fixed step must be a positive finite number of seconds (got {0})")]
    InvalidFixedStep(f32),

    #[error("max_steps_per_frame must be at least 1")]
    ZeroStepsPerFrame,
}

impl SkillError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidFixedStep(_) => "CONFIG_INVALID_FIXED_STEP",
            ConfigError::ZeroStepsPerFrame => "CONFIG_ZERO_STEPS_PER_FRAME",
        }
    }
}
