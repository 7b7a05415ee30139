//! Fixed-step time accumulation.

use skill_core::SkillConfig;

/// Converts variable frame durations into whole simulation steps.
///
/// Leftover time below one step carries over to the next frame. A frame that
/// would need more than `max_steps` steps runs `max_steps` and drops the rest,
/// so a long stall cannot snowball into ever longer frames.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedStepClock {
    step: f32,
    max_steps: u32,
    accumulator: f32,
}

impl FixedStepClock {
    /// # Panics
    ///
    /// Panics unless `step` is positive and finite and `max_steps` is non-zero.
    pub fn new(step: f32, max_steps: u32) -> Self {
        assert!(
            step.is_finite() && step > 0.0,
            "fixed step must be positive (got {step})"
        );
        assert!(max_steps > 0, "max_steps must be at least 1");
        Self {
            step,
            max_steps,
            accumulator: 0.0,
        }
    }

    pub fn from_config(config: &SkillConfig) -> Self {
        Self::new(config.fixed_step, config.max_steps_per_frame)
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// Time carried over to the next frame, always below one step.
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// How far the carried-over time is into the next step, in `[0, 1)`.
    /// Useful for interpolating presentation between simulation states.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    /// Adds `frame_dt` seconds and returns how many steps to simulate.
    ///
    /// # Panics
    ///
    /// Panics if `frame_dt` is negative, NaN or infinite.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        assert!(
            frame_dt.is_finite() && frame_dt >= 0.0,
            "frame delta must be a non-negative number of seconds (got {frame_dt})"
        );
        self.accumulator += frame_dt;

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }

        if self.accumulator >= self.step {
            let kept = self.accumulator % self.step;
            tracing::warn!(
                dropped = self.accumulator - kept,
                steps,
                "frame exceeded step budget, dropping simulation time"
            );
            self.accumulator = kept;
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::from_config(&SkillConfig::default())
    }
}
