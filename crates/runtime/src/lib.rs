//! Reference driver for the skill engine.
//!
//! Hosts that already run their own game loop can tick
//! [`Caster`](skill_core::Caster)s directly. This crate is the loop for
//! everyone else: [`SkillRuntime`] owns casters and a shared catalog and
//! converts frame time into fixed steps.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the driver and its builder
//! - [`api`] exposes the error types hosts handle
//! - [`clock`] turns variable frame time into fixed steps
//! - [`logging`] installs a default `tracing` subscriber
pub mod api;
pub mod clock;
pub mod logging;
pub mod runtime;

pub use api::{Result, RuntimeError};
pub use clock::FixedStepClock;
pub use logging::init_tracing;
pub use runtime::{SkillRuntime, SkillRuntimeBuilder};
