//! Fixed-step driver owning many casters.
//!
//! The runtime is the outer game loop: it hands out caster ids, routes cast
//! requests to the right caster, and turns frame time into ticks so every
//! caster advances by the same fixed step.

use std::collections::BTreeMap;
use std::sync::Arc;

use skill_content::{BehaviorRegistry, ContentFactory};
use skill_core::{
    ActionSource, CastFlags, CastSnapshot, Caster, CasterId, InterruptFlags, InterruptSource,
    OperationResult, SkillCatalog, SkillConfig, SkillDescriptor, SkillId,
};

use crate::api::{Result, RuntimeError};
use crate::clock::FixedStepClock;

/// Drives casters with a shared catalog and a fixed simulation step.
pub struct SkillRuntime<E = ()> {
    config: SkillConfig,
    catalog: Arc<SkillCatalog<E>>,
    casters: BTreeMap<CasterId, Caster<E>>,
    clock: FixedStepClock,
    next_caster: u32,
    steps: u64,
}

impl<E> SkillRuntime<E> {
    pub fn builder() -> SkillRuntimeBuilder<E> {
        SkillRuntimeBuilder::new()
    }

    pub fn config(&self) -> &SkillConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<SkillCatalog<E>> {
        &self.catalog
    }

    pub fn clock(&self) -> &FixedStepClock {
        &self.clock
    }

    /// Adds a caster owning `entity` and returns its id.
    pub fn spawn(&mut self, entity: E) -> CasterId {
        let id = CasterId(self.next_caster);
        self.next_caster += 1;
        self.casters
            .insert(id, Caster::from_config(id, entity, &self.config));
        tracing::debug!(caster = %id, "spawned");
        id
    }

    /// Removes a caster, dropping its active casts without firing hooks.
    pub fn despawn(&mut self, id: CasterId) -> Result<Caster<E>> {
        let caster = self
            .casters
            .remove(&id)
            .ok_or(RuntimeError::CasterNotFound(id))?;
        tracing::debug!(caster = %id, active = caster.casts().len(), "despawned");
        Ok(caster)
    }

    pub fn caster(&self, id: CasterId) -> Result<&Caster<E>> {
        self.casters.get(&id).ok_or(RuntimeError::CasterNotFound(id))
    }

    pub fn caster_mut(&mut self, id: CasterId) -> Result<&mut Caster<E>> {
        self.casters
            .get_mut(&id)
            .ok_or(RuntimeError::CasterNotFound(id))
    }

    pub fn casters(&self) -> impl Iterator<Item = &Caster<E>> + '_ {
        self.casters.values()
    }

    pub fn len(&self) -> usize {
        self.casters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.casters.is_empty()
    }

    /// Requests a cast on behalf of the host (an external action).
    pub fn cast(
        &mut self,
        caster: CasterId,
        skill: SkillId,
        flags: CastFlags,
    ) -> Result<OperationResult> {
        let descriptor = self.resolve(skill)?;
        let caster = self.caster_mut(caster)?;
        Ok(caster.try_cast(&descriptor, flags, ActionSource::External))
    }

    /// Cancels the caster's own cast of `skill`.
    pub fn cancel(
        &mut self,
        caster: CasterId,
        skill: SkillId,
        flags: InterruptFlags,
    ) -> Result<OperationResult> {
        let descriptor = self.resolve(skill)?;
        let caster = self.caster_mut(caster)?;
        Ok(caster.try_cancel(&descriptor, flags, ActionSource::External))
    }

    /// Interrupts `caster`'s cast of `skill` on behalf of `source`.
    ///
    /// An entity source must be a live caster; the world always may.
    pub fn interrupt(
        &mut self,
        caster: CasterId,
        skill: SkillId,
        source: InterruptSource,
        flags: InterruptFlags,
    ) -> Result<OperationResult> {
        if let InterruptSource::Entity(interrupter) = source {
            self.caster(interrupter)?;
        }
        let descriptor = self.resolve(skill)?;
        let caster = self.caster_mut(caster)?;
        Ok(caster.try_interrupt(&descriptor, source, flags, ActionSource::External))
    }

    pub fn snapshot(&self, caster: CasterId, skill: SkillId) -> Result<Option<CastSnapshot>> {
        Ok(self.caster(caster)?.try_get_cast_data(skill))
    }

    /// Feeds one frame of wall time and runs the resulting fixed steps.
    ///
    /// Returns the number of steps simulated.
    ///
    /// # Panics
    ///
    /// Panics if `frame_dt` is negative, NaN or infinite.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let steps = self.clock.advance(frame_dt);
        for _ in 0..steps {
            self.step();
        }
        steps
    }

    /// Runs exactly one fixed step, ticking casters in id order.
    pub fn step(&mut self) {
        let dt = self.clock.step();
        for caster in self.casters.values_mut() {
            caster.tick(dt);
        }
        self.steps += 1;
        tracing::trace!(step = self.steps, casters = self.casters.len(), "stepped");
    }

    /// Number of fixed steps simulated so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * f64::from(self.clock.step())
    }

    fn resolve(&self, skill: SkillId) -> Result<Arc<SkillDescriptor<E>>> {
        Ok(self.catalog.resolve(skill)?)
    }
}

impl<E> std::fmt::Debug for SkillRuntime<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillRuntime")
            .field("config", &self.config)
            .field("skills", &self.catalog.len())
            .field("casters", &self.casters.keys().collect::<Vec<_>>())
            .field("steps", &self.steps)
            .finish()
    }
}

/// Builder for [`SkillRuntime`].
pub struct SkillRuntimeBuilder<E = ()> {
    config: SkillConfig,
    catalog: Option<Arc<SkillCatalog<E>>>,
}

impl<E> SkillRuntimeBuilder<E> {
    fn new() -> Self {
        Self {
            config: SkillConfig::default(),
            catalog: None,
        }
    }

    /// Override engine configuration.
    pub fn config(mut self, config: SkillConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the required skill catalog.
    pub fn catalog(mut self, catalog: impl Into<Arc<SkillCatalog<E>>>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    /// Load configuration and catalog from a content directory.
    pub fn content(
        self,
        factory: &ContentFactory,
        behaviors: &BehaviorRegistry<E>,
    ) -> Result<Self> {
        let config = factory.load_config().map_err(RuntimeError::Content)?;
        let catalog = factory
            .load_catalog(behaviors)
            .map_err(RuntimeError::Content)?;
        tracing::info!(
            skills = catalog.len(),
            dir = %factory.data_dir().display(),
            "loaded skill content"
        );
        Ok(self.config(config).catalog(catalog))
    }

    pub fn build(self) -> Result<SkillRuntime<E>> {
        self.config.validate()?;
        let catalog = self.catalog.ok_or(RuntimeError::MissingCatalog)?;

        Ok(SkillRuntime {
            clock: FixedStepClock::from_config(&self.config),
            config: self.config,
            catalog,
            casters: BTreeMap::new(),
            next_caster: 0,
            steps: 0,
        })
    }
}

impl<E> std::fmt::Debug for SkillRuntimeBuilder<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillRuntimeBuilder")
            .field("config", &self.config)
            .field("catalog", &self.catalog.as_ref().map(|catalog| catalog.len()))
            .finish()
    }
}
